//! Log rotation example
//!
//! Writes a few lines, rotates the file, and keeps logging into the fresh
//! file. The archive lands next to the original as
//! `logs/rotation-YYYYMMDD-HHMMSS.log`.
//!
//! Run with: cargo run --example rotation

use leveled_logger::prelude::*;
use leveled_logger::{info, warn};

fn main() -> Result<()> {
    let logger = Logger::builder()
        .min_level(LogLevel::Info)
        .log_file("logs/rotation.log")
        .colors(true)
        .build()?;

    for i in 1..=3 {
        info!(logger, "Processing item {}/3", i);
    }
    warn!(logger; "queue depth", 17, "exceeds soft limit", 10);

    match logger.rotate()? {
        Some(archive) => println!("Previous log archived at {}", archive.display()),
        None => println!("No log file was open"),
    }

    logger.info("Continuing in a fresh file");
    logger.print("unleveled line through the default channel");
    logger.flush()?;

    let metrics = logger.metrics();
    println!(
        "logged={} filtered={} rotations={}",
        metrics.total_logged(),
        metrics.filtered(),
        metrics.rotations()
    );

    Ok(())
}
