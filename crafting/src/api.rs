use crate::data::DataError;
use crate::inventory::InventoryError;
use crate::math::Pos;
use crate::recipes::RecipeKey;
use crate::spirits::{SpiritError, SpiritId, SpiritReference};
use crate::tiles::TileError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Command sent by player client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "commandName", rename_all = "camelCase")]
pub enum Command {
    WalkPlayer {
        offset: Pos,
    },
    MineTile {
        pos: Pos,
    },
    PlaceWorldTile {
        pos: Pos,
        #[serde(rename = "spiritReference")]
        spirit_reference: SpiritReference,
    },
    MineCircuitTile {
        pos: Pos,
    },
    PlaceCircuitTile {
        pos: Pos,
        #[serde(rename = "spiritReference")]
        spirit_reference: SpiritReference,
    },
    CraftRecipe {
        #[serde(rename = "recipeId")]
        recipe_id: RecipeKey,
    },
    RecycleItem {
        #[serde(rename = "spiritReference")]
        spirit_reference: SpiritReference,
    },
    TransferItem {
        #[serde(rename = "sourceParentSpiritId")]
        source_parent_spirit_id: SpiritId,
        #[serde(rename = "destinationParentSpiritId")]
        destination_parent_spirit_id: SpiritId,
        #[serde(rename = "spiritReference")]
        spirit_reference: SpiritReference,
        count: u32,
    },
    InspectSpirit {
        #[serde(rename = "spiritReference")]
        spirit_reference: SpiritReference,
    },
    StopInspecting {
        #[serde(rename = "spiritId")]
        spirit_id: SpiritId,
    },
    GetTiles,
}

/// Command sent to player client.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "commandName", rename_all = "camelCase")]
pub enum ClientCommand {
    SetWorldTileGrid {
        #[serde(rename = "tileGrid")]
        tile_grid: Value,
    },
    SetCircuitTileGrid {
        #[serde(rename = "spiritId")]
        spirit_id: SpiritId,
        #[serde(rename = "tileGrid")]
        tile_grid: Value,
    },
    UpdateInventoryItem {
        #[serde(rename = "inventoryUpdate")]
        inventory_update: Value,
    },
    StartInspecting {
        spirit: Value,
    },
    StopInspecting {
        #[serde(rename = "spiritId")]
        spirit_id: SpiritId,
    },
}

#[derive(Debug)]
pub enum ActionError {
    PlayerNotFound { username: String },
    PlayerNotPlaced { player: SpiritId },
    SpiritNotFound { reference: SpiritReference },
    RecipeNotFound { id: RecipeKey },
    ItemNotFound { reference: SpiritReference },
    TargetUnreachable { pos: Pos },
    TileNotEmpty { pos: Pos },
    TileNotMineable { pos: Pos },
    MineBudgetExceeded { required: f32, budget: f32 },
    NotPlaceable { kind: String },
    NotRecyclable { kind: String },
    NotInspectable { reference: SpiritReference },
    InspectionOutOfRange { spirit: SpiritId },
    NotInspectingCircuit,
    InventoryNotAccessible { id: SpiritId },
    PocketUniverse { spirit: SpiritId, container: SpiritId },
    SpawnNotFound,
    Spirit(SpiritError),
    Inventory(InventoryError),
    Tile(TileError),
    Data(DataError),
}

impl From<SpiritError> for ActionError {
    fn from(error: SpiritError) -> Self {
        Self::Spirit(error)
    }
}

impl From<InventoryError> for ActionError {
    fn from(error: InventoryError) -> Self {
        Self::Inventory(error)
    }
}

impl From<TileError> for ActionError {
    fn from(error: TileError) -> Self {
        Self::Tile(error)
    }
}

impl From<DataError> for ActionError {
    fn from(error: DataError) -> Self {
        Self::Data(error)
    }
}
