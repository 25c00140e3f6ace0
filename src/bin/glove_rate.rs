//! Displays the effective glove sampling rate on the console.
//!
//! Usage: `glove_rate [--config <path>] [port]`
//!
//! Reads continuously and estimates the rate from the most recent 200
//! read intervals.

use glove_io::{Error, GloveConfig, GloveSession, Result};
use std::collections::VecDeque;
use std::env;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Number of recent read intervals the estimate averages over
const RATE_WINDOW: usize = 200;

/// Parse command line arguments into a session configuration.
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

/// Mean-interval rate estimate in Hz; 0.0 until two reads have completed
fn rate(intervals: &VecDeque<f64>) -> f64 {
    if intervals.is_empty() {
        return 0.0;
    }
    let mean = intervals.iter().sum::<f64>() / intervals.len() as f64;
    if mean > 0.0 {
        1.0 / mean
    } else {
        0.0
    }
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

    let mut intervals: VecDeque<f64> = VecDeque::with_capacity(RATE_WINDOW);
    let mut last: Option<Instant> = None;

    while running.load(Ordering::Relaxed) {
        session.read()?;

        let now = Instant::now();
        if let Some(prev) = last {
            if intervals.len() == RATE_WINDOW {
                intervals.pop_front();
            }
            intervals.push_back(now.duration_since(prev).as_secs_f64());
        }
        last = Some(now);

        print!("\rSampling rate: {:6.1} Hz", rate(&intervals));
        std::io::stdout().flush()?;
    }
    println!();

    session.stop()?;
    Ok(())
}
