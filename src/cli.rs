use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, ValueEnum};
use loadline::animation::{AnimationSpec, DOT_LINE, EQUALS_BAR, SPINNER};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the invocation only manages configuration and never
/// animates the terminal. Config mode may log to stdout; a demo run must
/// not, since the animation owns the output line.
pub fn is_config_mode(args: &Args) -> bool {
    args.new_log_file_path.is_some() || args.clear_log_file_path || args.list_config
}

/// Built-in animation presets selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Rotating glyph
    Spinner,
    /// Line of dots filling in left to right
    DotLine,
    /// Bar of '=' characters filling in left to right
    EqualsBar,
}

impl Preset {
    /// Resolves the preset to its animation spec.
    pub fn spec(self) -> AnimationSpec {
        match self {
            Preset::Spinner => SPINNER.clone(),
            Preset::DotLine => DOT_LINE.clone(),
            Preset::EqualsBar => EQUALS_BAR.clone(),
        }
    }
}

/// Single-Line Terminal Loading Animations
///
/// Renders a spinner, dot-line or bar animation on the current console line
/// for a fixed duration, then finalizes the line. Useful for trying out the
/// presets and for shell scripts that want a loading line around a slow step.
#[derive(Parser, Debug)]
#[command(author = "Weston Berg", version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Animation preset to run.
    #[arg(short = 'a', long = "animation", value_enum, default_value = "spinner", help_heading = "Animation")]
    pub animation: Preset,

    /// Text displayed to the left of the animation, e.g. "Loading ".
    #[arg(short = 'n', long = "annotation", default_value = "", help_heading = "Animation")]
    pub annotation: String,

    /// How long to run the animation, in seconds.
    #[arg(short = 't', long = "duration", default_value_t = 5, help_heading = "Animation")]
    pub duration: u64,

    /// Message written on the finalized line after the animation stops.
    #[arg(short = 'm', long = "message", help_heading = "Animation")]
    pub message: Option<String>,

    /// Override the frame delay in milliseconds.
    #[arg(long = "delay-ms", help_heading = "Animation")]
    pub delay_ms: Option<u64>,

    /// Leave the cursor at column 0 of the animation line instead of moving
    /// to the next line when the animation stops.
    #[arg(long = "no-newline", help_heading = "Animation")]
    pub no_newline: bool,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
