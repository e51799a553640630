//! Process configuration loaded from the environment.

mod loader;
pub mod types;

pub use types::*;
