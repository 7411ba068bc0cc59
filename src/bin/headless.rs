//! Runs a scenario without a window, printing simulated time as it goes.
//!
//! `GRAVSIM_CONFIG` selects a scenario file (the Earth–Moon scenario is used
//! otherwise) and `GRAVSIM_TICKS` bounds the run.

use std::io;

use gravsim::{Config, Headless, StatusLine, config};
use tracing::info;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Logs go to stderr so the status line on stdout stays on one line.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn main() -> gravsim::Result<()> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    info!("starting physics simulation with real-world values");

    let mut sim = Config::from_env()?.build()?;
    let mut frontend = Headless::new(config::tick_limit());
    let mut status = StatusLine::new(io::stdout().lock());

    gravsim::run(&mut sim, &mut frontend, &mut status)?;
    println!();

    for (index, body) in sim.bodies().iter().enumerate() {
        info!(
            index,
            x = body.pos.x,
            y = body.pos.y,
            vx = body.vel.x,
            vy = body.vel.y,
            "final state"
        );
    }

    Ok(())
}
