pub use domain::*;
pub use kinds::*;
pub use loading::*;
pub use operations::*;
pub use persistence::*;
pub use queries::*;

mod domain;
mod json;
mod kinds;
mod loading;
mod operations;
mod persistence;
mod queries;
