use crate::math::Pos;
use crate::spirits::{SpiritDomain, SpiritError, SpiritId};
use crate::tiles::TileAddress;

impl SpiritDomain {
    /// Exchanges two cells keeping parentage of both occupants.
    pub fn swap_tiles(
        &mut self,
        grid: SpiritId,
        first: Pos,
        second: Pos,
    ) -> Result<(), SpiritError> {
        let tile_grid = self.get_grid_mut(grid)?;
        tile_grid.swap(first, second)?;
        let a = tile_grid.get_tile(first).clone();
        let b = tile_grid.get_tile(second).clone();
        self.move_event(&a, TileAddress { grid, pos: first });
        self.move_event(&b, TileAddress { grid, pos: second });
        self.mark_as_dirty(grid);
        Ok(())
    }
}
