use datamap::Storage;
pub use domains::*;
use log::debug;

use crate::api::{ActionError, ClientCommand, Command};
use crate::collections::Shared;
use crate::math::Pos;
use crate::model::Knowledge;
use crate::spirits::{SpiritDomain, SpiritId};
use serde::{Deserialize, Serialize};

mod actions;
pub mod api;
pub mod collections;
pub mod data;
mod domains;
mod generation;
mod inspection;
pub mod math;
pub mod model;
mod rules;
mod update;
mod view;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub world_width: i32,
    pub world_height: i32,
    pub world_seed: u64,
    pub resource_density: f64,
    pub spawn: Pos,
    pub view_width: i32,
    pub view_height: i32,
    pub max_mine_budget: f32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            world_width: 100,
            world_height: 100,
            world_seed: 42,
            resource_density: 0.1,
            spawn: Pos::new(50, 50),
            view_width: 21,
            view_height: 15,
            max_mine_budget: 4.0,
        }
    }
}

pub struct Game {
    pub known: Shared<Knowledge>,
    pub spirits: SpiritDomain,
    pub settings: GameSettings,
    storage: Storage,
}

impl Game {
    pub fn new(storage: Storage, settings: GameSettings) -> Self {
        let known = Shared::new(Knowledge::standard());
        Self {
            spirits: SpiritDomain::new(known.clone()),
            known,
            settings,
            storage,
        }
    }

    #[inline]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn into_storage(self) -> Storage {
        self.storage
    }

    /// Invalid commands are dropped, client reconciles from next updates.
    pub fn perform_command(&mut self, username: &str, command: Command) -> Vec<ClientCommand> {
        match self.try_perform_command(username, command) {
            Ok(commands) => commands,
            Err(error) => {
                debug!("Ignore command of {}, {:?}", username, error);
                vec![]
            }
        }
    }

    pub fn try_perform_command(
        &mut self,
        username: &str,
        command: Command,
    ) -> Result<Vec<ClientCommand>, ActionError> {
        let player = self.get_online_player(username)?;
        let mut commands = vec![];
        match command {
            Command::WalkPlayer { offset } => self.walk_player(player, offset)?,
            Command::MineTile { pos } => self.mine_tile(player, pos)?,
            Command::PlaceWorldTile {
                pos,
                spirit_reference,
            } => self.place_world_tile(player, pos, spirit_reference)?,
            Command::MineCircuitTile { pos } => self.mine_circuit_tile(player, pos)?,
            Command::PlaceCircuitTile {
                pos,
                spirit_reference,
            } => self.place_circuit_tile(player, pos, spirit_reference)?,
            Command::CraftRecipe { recipe_id } => self.craft_recipe(player, recipe_id)?,
            Command::RecycleItem { spirit_reference } => {
                self.recycle_item(player, spirit_reference)?
            }
            Command::TransferItem {
                source_parent_spirit_id,
                destination_parent_spirit_id,
                spirit_reference,
                count,
            } => self.transfer_item(
                player,
                source_parent_spirit_id,
                destination_parent_spirit_id,
                spirit_reference,
                count,
            )?,
            Command::InspectSpirit { spirit_reference } => {
                self.inspect_spirit(player, spirit_reference)?
            }
            Command::StopInspecting { spirit_id } => self.stop_inspecting(player, spirit_id)?,
            Command::GetTiles => commands.extend(self.get_tiles(player)?),
        }
        commands.extend(self.take_notifications(player)?);
        Ok(commands)
    }

    pub fn get_online_player(&self, username: &str) -> Result<SpiritId, ActionError> {
        self.spirits
            .find_online_player(username)
            .ok_or(ActionError::PlayerNotFound {
                username: username.to_string(),
            })
    }
}
