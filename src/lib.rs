pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod memory;

pub use config::AppConfig;
pub use error::{ReplaykitError, Result};
pub use memory::{Experience, ReplayBuffer, SplitOutcome};
