// src/main.rs
mod cli;

use clap::Parser;
use cli::{Args, is_config_mode};
use loadline::config::Config;
use loadline::error::AppError;
use loadline::logging::setup_logging;
use loadline::runner::AnimationRunner;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Config mode may mirror logs to stdout; a demo run owns the output
    // line and logs to file only.
    let config_mode = is_config_mode(&args);
    let (log_file_path, _guard) = setup_logging(args.log_file.as_deref(), config_mode).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    // Handle configuration operations first
    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    if args.new_log_file_path.is_some() || args.clear_log_file_path {
        let mut config = Config::load().await.unwrap_or_default();

        if let Some(new_log_path) = &args.new_log_file_path {
            config.log_file_path = Some(new_log_path.clone());
        } else if args.clear_log_file_path {
            config.log_file_path = None;
            println!("Custom log file path cleared. Using default location.");
        }

        config.save().await?;
        println!("Config updated successfully!");
        return Ok(());
    }

    // Demo run: animate for the requested duration, then finalize the line
    let config = Config::load().await.unwrap_or_default();
    let delay_ms = args.delay_ms.unwrap_or(config.frame_delay_ms);
    if delay_ms == 0 {
        return Err(AppError::config_error(
            "frame delay must be at least 1 millisecond",
        ));
    }

    let spec = args
        .animation
        .spec()
        .with_frame_delay(Duration::from_millis(delay_ms));

    let mut runner = AnimationRunner::new();
    runner
        .start(&spec, &args.annotation, !args.no_newline)
        .await?;

    tokio::time::sleep(Duration::from_secs(args.duration)).await;

    runner.stop(args.message.as_deref().unwrap_or("")).await?;

    Ok(())
}
