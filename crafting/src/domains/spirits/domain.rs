use crate::collections::{Sequence, Shared};
use crate::inventory::{Inventory, InventoryUpdate};
use crate::model::Knowledge;
use crate::spirits::{ComplexClass, SerialInteger, SpiritType};
use crate::tiles::{TileAddress, TileError, TileGrid};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpiritId(pub usize);

/// Handle to a live spirit: simple spirits are values, complex ones live in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spirit {
    Simple(SerialInteger),
    Complex(SpiritId),
}

impl Spirit {
    pub fn complex_id(&self) -> Option<SpiritId> {
        match self {
            Spirit::Simple(_) => None,
            Spirit::Complex(id) => Some(*id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SpiritReference {
    Simple {
        #[serde(rename = "serialInteger")]
        serial_integer: SerialInteger,
    },
    Complex {
        id: SpiritId,
    },
}

pub trait Identifiable {
    fn reference(&self) -> SpiritReference;
}

impl Identifiable for Spirit {
    fn reference(&self) -> SpiritReference {
        match *self {
            Spirit::Simple(serial_integer) => SpiritReference::Simple { serial_integer },
            Spirit::Complex(id) => SpiritReference::Complex { id },
        }
    }
}

impl Identifiable for ComplexSpirit {
    fn reference(&self) -> SpiritReference {
        SpiritReference::Complex { id: self.id }
    }
}

pub struct ComplexSpirit {
    pub id: SpiritId,
    pub kind: Shared<SpiritType>,
    pub parent: Option<SpiritId>,
    pub parent_tile: Option<TileAddress>,
    pub has_db_row: bool,
    pub destroyed: bool,
    pub body: SpiritBody,
}

impl ComplexSpirit {
    #[inline]
    pub fn class(&self) -> ComplexClass {
        self.body.class()
    }
}

pub enum SpiritBody {
    World(WorldSpirit),
    Player(PlayerSpirit),
    Machine(MachineSpirit),
    Circuit(CircuitSpirit),
}

pub struct WorldSpirit {
    pub grid: TileGrid,
    pub players: Vec<SpiritId>,
}

pub struct PlayerSpirit {
    pub username: String,
    pub inventory: Inventory,
    pub inspected_machine: Option<SpiritId>,
    pub inspected_circuit: Option<SpiritId>,
    pub mine_budget: f32,
    pub inventory_updates: Vec<InventoryUpdate>,
    pub notices: Vec<InspectionNotice>,
}

impl PlayerSpirit {
    pub fn new(id: SpiritId, username: &str) -> Self {
        let mut inventory = Inventory::new(id);
        inventory.add_observer(id);
        Self {
            username: username.to_string(),
            inventory,
            inspected_machine: None,
            inspected_circuit: None,
            mine_budget: 0.0,
            inventory_updates: vec![],
            notices: vec![],
        }
    }
}

pub struct MachineSpirit {
    pub inventory: Inventory,
}

pub struct CircuitSpirit {
    pub grid: TileGrid,
}

impl CircuitSpirit {
    pub const COLUMNS: i32 = 8;
    pub const ROWS: i32 = 8;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectionNotice {
    Started(SpiritId),
    Stopped(SpiritId),
}

pub trait HasInventory {
    fn inventory(&self) -> Option<&Inventory>;
    fn inventory_mut(&mut self) -> Option<&mut Inventory>;
}

pub trait HasTileGrid {
    fn tile_grid(&self) -> Option<&TileGrid>;
    fn tile_grid_mut(&mut self) -> Option<&mut TileGrid>;
}

pub trait Persistable {
    fn class_id(&self) -> &'static str;
    fn attribute_data(&self) -> Value;
}

impl SpiritBody {
    pub fn class(&self) -> ComplexClass {
        match self {
            SpiritBody::World(_) => ComplexClass::World,
            SpiritBody::Player(_) => ComplexClass::Player,
            SpiritBody::Machine(_) => ComplexClass::Machine,
            SpiritBody::Circuit(_) => ComplexClass::Circuit,
        }
    }

    pub fn as_player(&self) -> Option<&PlayerSpirit> {
        match self {
            SpiritBody::Player(player) => Some(player),
            _ => None,
        }
    }

    pub fn as_player_mut(&mut self) -> Option<&mut PlayerSpirit> {
        match self {
            SpiritBody::Player(player) => Some(player),
            _ => None,
        }
    }

    pub fn as_world_mut(&mut self) -> Option<&mut WorldSpirit> {
        match self {
            SpiritBody::World(world) => Some(world),
            _ => None,
        }
    }

    /// Complex spirits directly owned by this body through its containers.
    pub fn children(&self) -> Vec<SpiritId> {
        let mut children = vec![];
        if let Some(inventory) = self.inventory() {
            children.extend(inventory.items.iter().filter_map(|item| item.spirit.complex_id()));
        }
        if let Some(grid) = self.tile_grid() {
            children.extend(grid.occupants());
        }
        children
    }
}

impl HasInventory for SpiritBody {
    fn inventory(&self) -> Option<&Inventory> {
        match self {
            SpiritBody::Player(player) => Some(&player.inventory),
            SpiritBody::Machine(machine) => Some(&machine.inventory),
            _ => None,
        }
    }

    fn inventory_mut(&mut self) -> Option<&mut Inventory> {
        match self {
            SpiritBody::Player(player) => Some(&mut player.inventory),
            SpiritBody::Machine(machine) => Some(&mut machine.inventory),
            _ => None,
        }
    }
}

impl HasTileGrid for SpiritBody {
    fn tile_grid(&self) -> Option<&TileGrid> {
        match self {
            SpiritBody::World(world) => Some(&world.grid),
            SpiritBody::Circuit(circuit) => Some(&circuit.grid),
            _ => None,
        }
    }

    fn tile_grid_mut(&mut self) -> Option<&mut TileGrid> {
        match self {
            SpiritBody::World(world) => Some(&mut world.grid),
            SpiritBody::Circuit(circuit) => Some(&mut circuit.grid),
            _ => None,
        }
    }
}

impl Persistable for SpiritBody {
    fn class_id(&self) -> &'static str {
        self.class().class_id()
    }

    fn attribute_data(&self) -> Value {
        match self {
            SpiritBody::World(world) => json!({
                "width": world.grid.width,
                "height": world.grid.height,
            }),
            SpiritBody::Player(player) => json!({ "username": player.username }),
            SpiritBody::Machine(_) | SpiritBody::Circuit(_) => json!({}),
        }
    }
}

/// Registry of every live complex spirit with its dirty tracking.
pub struct SpiritDomain {
    pub known: Shared<Knowledge>,
    pub spirits: HashMap<SpiritId, ComplexSpirit>,
    pub spirits_sequence: Sequence,
    pub dirty: BTreeSet<SpiritId>,
    pub destroyed: HashMap<SpiritId, ComplexSpirit>,
    pub world: Option<SpiritId>,
}

impl SpiritDomain {
    pub fn new(known: Shared<Knowledge>) -> Self {
        Self {
            known,
            spirits: HashMap::default(),
            spirits_sequence: Sequence::default(),
            dirty: BTreeSet::default(),
            destroyed: HashMap::default(),
            world: None,
        }
    }
}

#[derive(Debug)]
pub enum SpiritError {
    SpiritNotFound { id: SpiritId },
    SerialIntegerNotFound { serial_integer: SerialInteger },
    NotCraftable { kind: String },
    NotInventorySpirit { id: SpiritId },
    NotTileGridSpirit { id: SpiritId },
    NotPlayerSpirit { id: SpiritId },
    WorldNotFound,
    Tile(TileError),
}

impl From<TileError> for SpiritError {
    fn from(error: TileError) -> Self {
        Self::Tile(error)
    }
}
