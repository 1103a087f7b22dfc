use clap::{Parser, Subcommand};

/// CLI for replay buffer maintenance.
#[derive(Parser, Debug)]
#[command(name = "replaykit")]
#[command(version = "0.1.0")]
#[command(
    about = "Experience replay buffer maintenance for DQN training runs",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config directory path
    #[arg(short, long, default_value = "config")]
    pub config_dir: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split experiences off a persisted buffer into a second buffer
    Split {
        /// Buffer file to split (overrides config)
        #[arg(short, long)]
        source: Option<String>,
        /// Destination file for the split-off experiences (overrides config)
        #[arg(short, long)]
        target: Option<String>,
        /// Number of experiences to move (overrides config)
        #[arg(short = 'n', long)]
        experiences: Option<usize>,
        /// Buffer capacity (overrides config)
        #[arg(long)]
        capacity: Option<usize>,
    },
    /// Inspect a persisted buffer file
    Info {
        /// Buffer file to inspect
        path: String,
        /// Load the full payload instead of just the header
        #[arg(long)]
        full: bool,
        /// Capacity used for the fill ratio report (overrides config)
        #[arg(long)]
        capacity: Option<usize>,
    },
    /// Generate a synthetic buffer for drills and testing
    Generate {
        /// Output buffer file
        path: String,
        /// Number of experiences to generate
        #[arg(short = 'n', long, default_value = "10000")]
        experiences: usize,
        /// State vector dimension
        #[arg(long, default_value = "8")]
        state_dim: usize,
        /// Number of discrete actions
        #[arg(long, default_value = "4")]
        actions: u32,
        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Buffer capacity (overrides config)
        #[arg(long)]
        capacity: Option<usize>,
        /// Print a random sample of N generated experiences
        #[arg(long)]
        preview: Option<usize>,
    },
}
