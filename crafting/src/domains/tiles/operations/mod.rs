pub use set_tile::*;
pub use swap_tiles::*;

mod set_tile;
mod swap_tiles;
