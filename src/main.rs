use clap::Parser;
use replaykit::cli::{Cli, Commands};
use replaykit::commands;
use replaykit::config::AppConfig;
use replaykit::error::Result;
use replaykit::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load_from(&cli.config_dir)?;

    match &cli.command {
        Commands::Split {
            source,
            target,
            experiences,
            capacity,
        } => {
            logging::init_logging(&config.logging);
            commands::run_split(
                &config,
                source.as_deref(),
                target.as_deref(),
                *experiences,
                *capacity,
            )?;
        }
        Commands::Info {
            path,
            full,
            capacity,
        } => {
            logging::init_logging_simple();
            commands::run_info(&config, path, *full, *capacity)?;
        }
        Commands::Generate {
            path,
            experiences,
            state_dim,
            actions,
            seed,
            capacity,
            preview,
        } => {
            logging::init_logging(&config.logging);
            commands::run_generate(
                &config,
                path,
                *experiences,
                *state_dim,
                *actions,
                *seed,
                *capacity,
                *preview,
            )?;
        }
    }

    Ok(())
}
