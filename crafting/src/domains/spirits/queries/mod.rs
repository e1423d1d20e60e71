pub use ancestry::*;
pub use get_spirit::*;
pub use recycle_products::*;

mod ancestry;
mod get_spirit;
mod recycle_products;
