//! Command Entry Points
//!
//! One module per CLI subcommand.

mod generate;
mod info;
mod split;

pub use generate::run_generate;
pub use info::run_info;
pub use split::run_split;
