//! Single-Line Terminal Loading Animation Library
//!
//! This library renders a repeating character sequence (spinner, dot-line,
//! bar) on the current console line while a long-running task executes
//! elsewhere, then clears or finalizes the line when told to stop.
//!
//! # Examples
//!
//! ```rust,no_run
//! use loadline::animation::SPINNER;
//! use loadline::error::AppError;
//! use loadline::runner::AnimationRunner;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let mut runner = AnimationRunner::new();
//!
//!     // Animate while the real work happens elsewhere
//!     runner.start(&SPINNER, "Loading ", false).await?;
//!     tokio::time::sleep(Duration::from_secs(2)).await;
//!
//!     // Blocks until the loop has exited, then finalizes the line
//!     runner.stop("done").await?;
//!
//!     Ok(())
//! }
//! ```

pub mod animation;
pub mod config;
pub mod console;
pub mod constants;
pub mod error;
pub mod logging;
pub mod runner;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use animation::{AnimationSpec, DOT_LINE, EQUALS_BAR, RenderRule, SPINNER};
pub use config::Config;
pub use console::{ConsoleSink, TerminalGeometry};
pub use error::AppError;
pub use runner::AnimationRunner;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
