use crate::math::Pos;
use crate::spirits::{SpiritDomain, SpiritError, SpiritId};
use serde_json::{json, Value};

impl SpiritDomain {
    /// Window cells outside of the grid are sent as outside tile.
    pub fn window_client_json(
        &self,
        grid: SpiritId,
        pos: Pos,
        width: i32,
        height: i32,
    ) -> Result<Value, SpiritError> {
        let tile_grid = self.get_grid(grid)?;
        let mut tiles = Vec::with_capacity((width.max(0) * height.max(0)) as usize);
        for y in 0..height {
            for x in 0..width {
                let tile = tile_grid.get_tile(pos + Pos::new(x, y));
                tiles.push(self.spirit_client_json(tile.spirit));
            }
        }
        Ok(json!({
            "pos": pos,
            "tiles": tiles,
            "width": width,
            "height": height,
        }))
    }

    pub fn grid_client_json(&self, grid: SpiritId) -> Result<Value, SpiritError> {
        let tile_grid = self.get_grid(grid)?;
        let (width, height) = (tile_grid.width, tile_grid.height);
        self.window_client_json(grid, Pos::default(), width, height)
    }
}
