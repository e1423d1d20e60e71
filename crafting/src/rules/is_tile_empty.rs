use crate::api::ActionError;
use crate::math::Pos;
use crate::spirits::SpiritId;
use crate::Game;

impl Game {
    pub fn ensure_tile_empty(&self, grid: SpiritId, pos: Pos) -> Result<(), ActionError> {
        if self.is_tile_empty(grid, pos)? {
            Ok(())
        } else {
            Err(ActionError::TileNotEmpty { pos })
        }
    }

    /// Cells outside of the grid are never empty.
    pub fn is_tile_empty(&self, grid: SpiritId, pos: Pos) -> Result<bool, ActionError> {
        let grid = self.spirits.get_grid(grid)?;
        Ok(grid.is_fill(pos))
    }
}
