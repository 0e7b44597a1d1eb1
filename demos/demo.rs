//! Leveled logging demo
//!
//! Logs one message per level to the console and `logs/demo.log`, then
//! exits with status 1 through the fatal level.
//!
//! Run with: cargo run --example demo

use leveled_logger::prelude::*;
use std::process::ExitCode;

fn main() -> ExitCode {
    let logger = Logger::new();
    if let Err(e) = logger.initialize(LogLevel::Debug, true, "logs/demo.log") {
        eprintln!("Failed to initialize logger: {}", e);
        return ExitCode::FAILURE;
    }

    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");
    let fatal = logger.fatal("This is a fatal message");

    logger.close();
    fatal.exit()
}
