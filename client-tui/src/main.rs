use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use chessduel_tui::config::{ensure_log_dir, Cli, Config, LOG_FILE_PREFIX};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Invalid flags and positions are reported before the terminal goes raw.
    let config = Config::resolve(Cli::parse())?;

    ensure_log_dir(&config.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_PREFIX);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!(
        theme = ?config.theme,
        glyphs = ?config.glyphs,
        fen = config.fen.as_deref().unwrap_or("startpos"),
        "ChessDuel starting up"
    );

    chessduel_tui::ui::run_app(config)
        .await
        .context("UI loop failed")?;

    tracing::info!("ChessDuel shutting down");
    Ok(())
}
