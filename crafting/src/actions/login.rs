use crate::api::ActionError;
use crate::inventory::{push_inventory_update, InventoryUpdate};
use crate::math::Pos;
use crate::spirits::{Spirit, SpiritId};
use crate::tiles::Tile;
use crate::Game;
use log::info;

impl Game {
    /// Finds or creates player spirit and places it into the world.
    pub fn login(&mut self, username: &str) -> Result<SpiritId, ActionError> {
        let world = self.spirits.world()?;
        let player = match self.spirits.find_player(username) {
            Some(player) => player,
            None => {
                let player = self.spirits.create_player(username);
                info!("Create player {} as {:?}", username, player);
                player
            }
        };
        if self.spirits.get_spirit(player)?.parent_tile.is_none() {
            let pos = self.find_spawn_pos()?;
            let kind = self.known.player.clone();
            self.spirits
                .set_tile(world, pos, Tile::new(Spirit::Complex(player), kind))?;
            info!("Player {} enters world at {:?}", username, pos);
        }
        let state = self.spirits.get_player_mut(player)?;
        state.inventory.add_observer(player);
        let updates: Vec<InventoryUpdate> = state
            .inventory
            .items
            .iter()
            .map(|item| InventoryUpdate {
                inventory: player,
                spirit: item.spirit,
                count: item.count,
            })
            .collect();
        for update in updates {
            push_inventory_update(&mut state.inventory_updates, update);
        }
        Ok(player)
    }

    pub fn logout(&mut self, username: &str) -> Result<(), ActionError> {
        let player = self.get_online_player(username)?;
        let state = self.spirits.get_player(player)?;
        let targets: Vec<SpiritId> = [state.inspected_machine, state.inspected_circuit]
            .into_iter()
            .flatten()
            .collect();
        for target in targets {
            self.stop_inspecting(player, target)?;
        }
        let state = self.spirits.get_player_mut(player)?;
        state.notices.clear();
        state.inventory_updates.clear();
        if let Some(address) = self.spirits.get_spirit(player)?.parent_tile {
            let fill = self.spirits.get_grid(address.grid)?.fill.clone();
            self.spirits.set_tile(address.grid, address.pos, fill)?;
        }
        info!("Player {} leaves world", username);
        Ok(())
    }

    /// Walks cells from configured spawn point row by row until empty one.
    pub fn find_spawn_pos(&self) -> Result<Pos, ActionError> {
        let world = self.spirits.world()?;
        let grid = self.spirits.get_grid(world)?;
        if grid.width <= 0 || grid.height <= 0 {
            return Err(ActionError::SpawnNotFound);
        }
        let spawn = self.settings.spawn;
        let mut pos = Pos::new(
            spawn.x.clamp(0, grid.width - 1),
            spawn.y.clamp(0, grid.height - 1),
        );
        for _ in 0..grid.width * grid.height {
            if grid.is_fill(pos) {
                return Ok(pos);
            }
            pos.x += 1;
            if pos.x >= grid.width {
                pos.x = 0;
                pos.y = (pos.y + 1) % grid.height;
            }
        }
        Err(ActionError::SpawnNotFound)
    }
}
