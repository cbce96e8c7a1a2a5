mod app;

use anyhow::{Context, Result};
use std::{
    fs::{self, OpenOptions},
    io,
    path::Path,
};

use crossterm::tty::IsTty;
use tracing_subscriber::{prelude::*, EnvFilter};
use railbook_core::{
    config::{self, AppConfig},
    BookingRegistry,
};

fn main() -> Result<()> {
    config::ensure_default_config()?;
    let config = AppConfig::load()?;
    init_logging(&config.log_dir)?;
    tracing::info!(?config, "starting booking shell");

    let registry = BookingRegistry::with_capacity(config.seat_capacity);
    let theme = app::Theme::new(config.color && io::stdout().is_tty());
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = app::Shell::new(
        registry,
        config.bookings_dir,
        theme,
        stdin.lock(),
        stdout.lock(),
    );
    shell.run()
}

fn init_logging(log_dir: &Path) -> Result<()> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;
    let log_path = log_dir.join("railbook.log");

    let env_filter = EnvFilter::from_default_env();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(io::stderr);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .compact()
        .with_writer(move || {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)
                .expect("failed to open log file")
        });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(())
}
