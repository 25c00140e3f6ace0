//! Prints raw glove readings to the console every 500 ms until Ctrl-C.
//!
//! Usage: `raw_readings [--config <path>] [port]`
//!
//! With no config file the 18-sensor defaults are used; a positional port
//! argument overrides the configured one.

use glove_io::{Error, GloveConfig, GloveSession, Result};
use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Parse command line arguments into a session configuration.
///
/// Supports:
/// - `raw_readings <port>` (positional)
/// - `raw_readings --config <path>` (flag-based)
/// - `raw_readings -c <path> <port>` (both; port wins over the file's)
fn build_config() -> Result<GloveConfig> {
    let args: Vec<String> = env::args().collect();
    let mut config: Option<GloveConfig> = None;
    let mut port: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        if (args[i] == "--config" || args[i] == "-c") && i + 1 < args.len() {
            config = Some(GloveConfig::from_file(&args[i + 1])?);
            i += 2;
        } else if !args[i].starts_with('-') {
            port = Some(args[i].clone());
            i += 1;
        } else {
            i += 1;
        }
    }

    let mut config = config.unwrap_or_default();
    if let Some(port) = port {
        config.port = port;
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = build_config()?;
    let mut session = GloveSession::new(config)?;
    session.start()?;

    let running = Arc::new(AtomicBool::new(true));
    let r = Arc::clone(&running);
    ctrlc::set_handler(move || {
        log::info!("Received shutdown signal");
        r.store(false, Ordering::Relaxed);
    })
    .map_err(|e| Error::Other(format!("Error setting Ctrl-C handler: {}", e)))?;

    // Fixed 500 ms schedule so the cadence does not drift with read latency
    let interval = Duration::from_millis(500);
    let mut next = Instant::now() + interval;

    while running.load(Ordering::Relaxed) {
        for frame in session.read()? {
            println!("raw readings: {:?}", frame.values());
        }

        let now = Instant::now();
        if next > now {
            thread::sleep(next - now);
        }
        next += interval;
    }

    session.stop()?;
    Ok(())
}
