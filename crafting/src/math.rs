use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance(&self, other: Pos) -> u32 {
        self.x
            .abs_diff(other.x)
            .saturating_add(self.y.abs_diff(other.y))
    }

    /// None when any coordinate leaves the i32 range.
    pub fn checked_add(&self, offset: Pos) -> Option<Pos> {
        Some(Pos::new(
            self.x.checked_add(offset.x)?,
            self.y.checked_add(offset.y)?,
        ))
    }

    /// Manhattan distance of at most one, the position itself included.
    #[inline]
    pub fn is_adjacent_to(&self, other: Pos) -> bool {
        self.distance(other) <= 1
    }
}

impl Add for Pos {
    type Output = Pos;

    fn add(self, other: Pos) -> Pos {
        Pos::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Pos {
    type Output = Pos;

    fn sub(self, other: Pos) -> Pos {
        Pos::new(self.x - other.x, self.y - other.y)
    }
}
