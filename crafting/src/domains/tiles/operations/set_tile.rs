use crate::math::Pos;
use crate::spirits::{ComplexClass, Spirit, SpiritDomain, SpiritError, SpiritId};
use crate::tiles::{Tile, TileAddress};

impl SpiritDomain {
    /// Out of range positions are ignored.
    pub fn set_tile(&mut self, grid: SpiritId, pos: Pos, tile: Tile) -> Result<(), SpiritError> {
        let tile_grid = self.get_grid_mut(grid)?;
        let previous = match tile_grid.replace_tile(pos, tile.clone()) {
            Some(previous) => previous,
            None => return Ok(()),
        };
        self.remove_from_grid_event(&previous, grid);
        self.add_to_grid_event(&tile, TileAddress { grid, pos });
        self.mark_as_dirty(grid);
        Ok(())
    }

    pub(crate) fn add_to_grid_event(&mut self, tile: &Tile, address: TileAddress) {
        let id = match tile.spirit {
            Spirit::Complex(id) => id,
            Spirit::Simple(_) => return,
        };
        let is_player = match self.spirits.get_mut(&id) {
            Some(spirit) => {
                spirit.parent_tile = Some(address);
                spirit.class() == ComplexClass::Player
            }
            None => return,
        };
        self.change_parent_spirit(id, Some(address.grid));
        if is_player {
            if let Some(world) = self.get_world_spirit_mut(address.grid) {
                if !world.players.contains(&id) {
                    world.players.push(id);
                }
            }
        }
    }

    pub(crate) fn remove_from_grid_event(&mut self, tile: &Tile, grid: SpiritId) {
        let id = match tile.spirit {
            Spirit::Complex(id) => id,
            Spirit::Simple(_) => return,
        };
        if let Some(world) = self.get_world_spirit_mut(grid) {
            world.players.retain(|player| *player != id);
        }
        let placed_here = match self.spirits.get_mut(&id) {
            Some(spirit) if spirit.parent_tile.map(|address| address.grid) == Some(grid) => {
                spirit.parent_tile = None;
                true
            }
            _ => false,
        };
        if placed_here {
            self.change_parent_spirit(id, None);
        }
    }

    pub(crate) fn move_event(&mut self, tile: &Tile, address: TileAddress) {
        if let Spirit::Complex(id) = tile.spirit {
            if let Some(spirit) = self.spirits.get_mut(&id) {
                spirit.parent_tile = Some(address);
            }
        }
    }
}
