use crate::collections::Shared;
use crate::math::Pos;
use crate::spirits::{Spirit, SpiritId, SpiritType};

#[derive(Debug, Clone)]
pub struct Tile {
    pub spirit: Spirit,
    pub kind: Shared<SpiritType>,
}

impl Tile {
    pub fn new(spirit: Spirit, kind: Shared<SpiritType>) -> Self {
        Self { spirit, kind }
    }

    #[inline]
    pub fn is(&self, kind: &SpiritType) -> bool {
        self.kind.is(kind)
    }
}

/// Place of a complex spirit inside the grid of another spirit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileAddress {
    pub grid: SpiritId,
    pub pos: Pos,
}

/// Fixed size grid, always fully populated.
pub struct TileGrid {
    pub width: i32,
    pub height: i32,
    tiles: Vec<Tile>,
    pub fill: Tile,
    pub outside: Tile,
}

#[derive(Debug)]
pub enum TileError {
    PositionOutOfRange { pos: Pos },
}

impl TileGrid {
    pub fn new(width: i32, height: i32, fill: Tile, outside: Tile) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let tiles = vec![fill.clone(); (width * height) as usize];
        Self {
            width,
            height,
            tiles,
            fill,
            outside,
        }
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    #[inline]
    fn index(&self, pos: Pos) -> Option<usize> {
        if self.contains(pos) {
            Some((pos.y * self.width + pos.x) as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn pos_of(&self, index: usize) -> Pos {
        let index = index as i32;
        Pos::new(index % self.width, index / self.width)
    }

    pub fn get_tile(&self, pos: Pos) -> &Tile {
        match self.index(pos) {
            Some(index) => &self.tiles[index],
            None => &self.outside,
        }
    }

    pub fn is_fill(&self, pos: Pos) -> bool {
        self.index(pos)
            .map(|index| self.tiles[index].is(&self.fill.kind))
            .unwrap_or(false)
    }

    /// Writes tile without lifecycle hooks, returns previous one.
    pub fn replace_tile(&mut self, pos: Pos, tile: Tile) -> Option<Tile> {
        let index = self.index(pos)?;
        Some(std::mem::replace(&mut self.tiles[index], tile))
    }

    pub fn swap(&mut self, first: Pos, second: Pos) -> Result<(), TileError> {
        let a = self
            .index(first)
            .ok_or(TileError::PositionOutOfRange { pos: first })?;
        let b = self
            .index(second)
            .ok_or(TileError::PositionOutOfRange { pos: second })?;
        self.tiles.swap(a, b);
        Ok(())
    }

    /// Iterates every cell in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = (Pos, &Tile)> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| (self.pos_of(index), tile))
    }

    pub fn occupants(&self) -> Vec<SpiritId> {
        self.tiles
            .iter()
            .filter_map(|tile| tile.spirit.complex_id())
            .collect()
    }
}
