pub use change_parent::*;
pub use create_spirit::*;
pub use destroy_spirit::*;
pub use mark_dirty::*;

mod change_parent;
mod create_spirit;
mod destroy_spirit;
mod mark_dirty;
