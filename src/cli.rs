//! Contains the Cli implementation of pointcall.
use std::{fmt::Display, path::PathBuf};

use clap::{crate_name, Parser, ValueEnum};
use tracing::level_filters::LevelFilter;

pub const LOG_FILE: &str = "log.log";

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// The x coordinate. Falls back to the config file, then to `1`.
    #[arg(allow_negative_numbers = true)]
    pub x: Option<String>,

    /// The y coordinate. Falls back to the config file, then to `2`.
    #[arg(allow_negative_numbers = true)]
    pub y: Option<String>,

    /// Only accept integer coordinates.
    #[arg(long)]
    pub strict: bool,

    /// Path to the config file. Defaults to `config.toml` in the XDG config directory.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, default_value_t = LogLevel::Error,  help = "",
        long_help = concat!(
        "*Note*: You can also set the log level through the `RUST_LOG` environment variable and filter the logs.\n",
        "See https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html#directives\n",
        "\n",
        "Example: `RUST_LOG=", crate_name!(), "::config=debug ", crate_name!(), "` - This will enable logs only related to the config in debug mode."
    ))]
    pub log_level: LogLevel,

    #[arg(long, default_value = get_default_log_path().into_os_string())]
    pub log_path: PathBuf,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl From<&LogLevel> for LevelFilter {
    fn from(level: &LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::ERROR,
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
            LogLevel::Off => Self::OFF,
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", LevelFilter::from(self))
    }
}

// no XDG state directory (e.g. `HOME` unset) => log next to the other temporary files
fn get_default_log_path() -> PathBuf {
    xdg::BaseDirectories::with_prefix(crate_name!())
        .ok()
        .and_then(|xdg| xdg.place_state_file(LOG_FILE).ok())
        .unwrap_or_else(|| std::env::temp_dir().join(LOG_FILE))
}
