//! Buffer Info Command

use std::path::Path;

use chrono::{TimeZone, Utc};

use crate::config::AppConfig;
use crate::error::Result;
use crate::memory::{store, ReplayBuffer};

pub fn run_info(config: &AppConfig, path: &str, full: bool, capacity: Option<usize>) -> Result<()> {
    let info = store::read_info(Path::new(path))?;

    println!("File:           {}", path);
    println!("Format version: {}", info.version);
    match Utc.timestamp_millis_opt(info.saved_at_ms as i64).single() {
        Some(saved_at) => println!("Saved at:       {}", saved_at.format("%Y-%m-%d %H:%M:%S UTC")),
        None => println!("Saved at:       (invalid timestamp)"),
    }
    println!("Experiences:    {}", info.count);

    if full {
        let capacity = capacity.unwrap_or(config.buffer.capacity);
        let mut buffer = ReplayBuffer::new(capacity);
        let loaded = buffer.load(path)?;
        println!("Loaded:         {} (capacity {})", loaded, capacity);
        println!("Fill ratio:     {:.2}%", buffer.fill_ratio() * 100.0);
    }

    Ok(())
}
