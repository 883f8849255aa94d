mod config;
pub mod engine;
mod error;

/// Deepest fixed search depth the engine accepts as an option.
pub const MAX_DEPTH: u8 = 8;

pub use config::{ConfigParam, EngineConfig};
pub use engine::{Engine, SearchReport};
pub use error::SearchError;
