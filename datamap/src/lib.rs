pub use configuration::*;
pub use json::*;
pub use storage::*;

mod configuration;
mod json;
mod storage;
