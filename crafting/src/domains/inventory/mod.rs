pub use domain::*;
pub use operations::*;

mod domain;
mod operations;
