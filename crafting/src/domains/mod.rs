pub mod inventory;
pub mod recipes;
pub mod spirits;
pub mod tiles;
