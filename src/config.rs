use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Hold time for each animation frame in milliseconds. Defaults to 100.
    #[serde(default = "default_frame_delay_ms")]
    pub frame_delay_ms: u64,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

/// Default frame delay in milliseconds
fn default_frame_delay_ms() -> u64 {
    crate::constants::DEFAULT_FRAME_DELAY_MS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            frame_delay_ms: default_frame_delay_ms(),
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Missing file yields the defaults. Environment variables can
    /// override config file values.
    ///
    /// # Environment Variables
    /// - `LOADLINE_LOG_FILE` - Override log file path
    pub async fn load() -> Result<Self, AppError> {
        Self::load_from_path(&Config::get_config_path()).await
    }

    /// Loads configuration from a specific path.
    pub async fn load_from_path(config_path: &str) -> Result<Self, AppError> {
        let mut config = if Path::new(config_path).exists() {
            let content = fs::read_to_string(config_path).await?;
            toml::from_str::<Config>(&content)?
        } else {
            Config::default()
        };

        if let Ok(log_file) = std::env::var(crate::constants::env_vars::LOG_FILE) {
            if !log_file.is_empty() {
                config.log_file_path = Some(log_file);
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        self.save_to_path(&Config::get_config_path()).await
    }

    /// Saves configuration to a specific path.
    pub async fn save_to_path(&self, config_path: &str) -> Result<(), AppError> {
        self.validate()?;

        if let Some(config_dir) = Path::new(config_path).parent() {
            if !config_dir.exists() {
                fs::create_dir_all(config_dir).await?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(config_path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }

    /// Rejects values the animation loop cannot work with.
    fn validate(&self) -> Result<(), AppError> {
        if self.frame_delay_ms == 0 {
            return Err(AppError::config_error(
                "frame_delay_ms must be at least 1 millisecond",
            ));
        }
        Ok(())
    }

    /// Path to the config file under the platform config directory.
    pub fn get_config_path() -> String {
        dirs::config_dir()
            .unwrap_or_else(|| Path::new(".").to_path_buf())
            .join("loadline")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }

    /// Default directory for log files.
    pub fn get_log_dir_path() -> String {
        dirs::state_dir()
            .or_else(dirs::data_local_dir)
            .unwrap_or_else(|| Path::new(".").to_path_buf())
            .join("loadline")
            .join("logs")
            .to_string_lossy()
            .to_string()
    }

    /// Prints the current configuration to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = Config::get_config_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("Frame Delay (ms):");
            println!("{}", config.frame_delay_ms);
            println!("────────────────────────────────────");
            println!("Log File:");
            match config.log_file_path {
                Some(path) => println!("{path}"),
                None => println!("(default location)"),
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("Using defaults.");
        }

        Ok(())
    }
}
