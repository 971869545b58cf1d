//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod inspect;
mod resolve;
mod validate;

pub use inspect::Inspect;
pub use resolve::Resolve;
pub use validate::Validate;
