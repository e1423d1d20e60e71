pub use craft_recipe::*;
pub use set_item_count::*;
pub use transfer_item::*;

mod craft_recipe;
mod set_item_count;
mod transfer_item;
