//! Buffer Split Command
//!
//! Loads a persisted buffer, reports load time and size, splits a fixed
//! number of experiences into a second buffer, then reloads the source
//! file to verify the persisted result.

use std::time::Instant;

use tracing::info;

use crate::config::AppConfig;
use crate::error::{ReplaykitError, Result};
use crate::memory::ReplayBuffer;

pub fn run_split(
    config: &AppConfig,
    source: Option<&str>,
    target: Option<&str>,
    experiences: Option<usize>,
    capacity: Option<usize>,
) -> Result<()> {
    let source_path = source.unwrap_or(&config.split.source_path);
    let target_path = target.unwrap_or(&config.split.target_path);
    let count = experiences.unwrap_or(config.split.experiences);
    let capacity = capacity.unwrap_or(config.buffer.capacity);

    info!(
        source = source_path,
        target = target_path,
        count,
        capacity,
        "Starting buffer split"
    );

    let mut source_buffer = ReplayBuffer::new(capacity);
    let mut target_buffer = ReplayBuffer::new(capacity);

    let timer = Instant::now();
    let loaded = source_buffer.load(source_path)?;
    let elapsed = timer.elapsed();

    println!("Load time: {:.3} seconds", elapsed.as_secs_f64());
    println!("Load time: {:.3} minutes", elapsed.as_secs_f64() / 60.0);
    println!("Source size: {}", loaded);
    println!();

    println!("Starting splitting...");
    let outcome = source_buffer.split(source_path, &mut target_buffer, target_path, count)?;
    println!("Splitting completed: moved {} experiences", outcome.moved);

    // The persisted state is authoritative: reload and compare.
    let mut verify_buffer = ReplayBuffer::new(capacity);
    let persisted = verify_buffer.load(source_path)?;
    if persisted != outcome.source_len {
        return Err(ReplaykitError::Validation(format!(
            "post-split source size mismatch: split reported {}, reload found {}",
            outcome.source_len, persisted
        )));
    }

    println!("Source size: {}", outcome.source_len);
    println!("Target size: {}", outcome.target_len);

    Ok(())
}
