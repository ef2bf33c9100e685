mod app;
mod config;
mod error;
mod ui;

use std::{fs::OpenOptions, sync::Mutex};

use crate::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "finagent_tui={level},dashboard={level}",
            level = config.level
        ))
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let mut app = app::App::new(config)?;
    app.run().await?;
    Ok(())
}
