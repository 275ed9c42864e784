//! Welcome to the code-documentation of pointcall!
//!
//! The interesting part lives in [`point`]: a coordinate pair which prints itself once
//! it gets invoked. Everything else turns command line arguments and the config file into
//! such a point.

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::crate_name;
use cli::{Cli, LogLevel};
use config::Config;
use point::{Axis, Coordinate, Point};
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod config;
pub mod point;

/// An enum error which contains all possible error sources while executing pointcall.
///
/// # Convention
/// Just click on the `Error` value of each error-enum-value to get more information about them.
///
/// ## Example
/// If you want to understand what [`Error::Config`] catches, then just click
/// on its `Error` type and you should get to [`config::Error`] where a more detailed
/// description waits for you!
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Point(#[from] point::Error),

    #[error(transparent)]
    Config(#[from] config::Error),
}

/// Sets up logging into the file at `path`.
///
/// A log file which can't be created isn't fatal: a warning goes to stderr and pointcall
/// keeps running without logs.
pub fn init_logging(level: &LogLevel, path: &Path) {
    let Some(log_file) = open_log_file(path) else {
        return;
    };

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_max_level(LevelFilter::from(level))
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .with_file(true);

    if std::env::var_os("RUST_LOG").is_some() {
        subscriber_builder
            .with_env_filter(EnvFilter::from_default_env())
            .init();
    } else {
        subscriber_builder.init();
    }

    debug!("Logger initialised");
}

// there's no subscriber yet, so stderr is the only place left for the warning
fn open_log_file(path: &Path) -> Option<File> {
    match File::create(path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!(
                "Warning: Couldn't create and open log path '{}': {}. Continuing without logs.",
                path.to_string_lossy(),
                e
            );
            None
        }
    }
}

/// Returns the config file in the XDG config directories, if there's one.
pub fn find_config_file() -> Option<PathBuf> {
    xdg::BaseDirectories::with_prefix(crate_name!())
        .ok()?
        .find_config_file(config::CONFIG_FILENAME)
}

/// Loads the config given on the command line or, if there's none, the one from the XDG
/// config directories.
///
/// An explicitly given path has to exist, a missing default config just means "use the
/// defaults".
pub fn load_config(cli: &Cli) -> Result<Config, Error> {
    let path = match cli.config.clone().or_else(find_config_file) {
        Some(path) => path,
        None => {
            debug!("No config file found, using defaults");
            return Ok(Config::default());
        }
    };

    debug!("Loading config from '{}'", path.to_string_lossy());
    Ok(Config::load(path)?)
}

/// Picks each coordinate from the command line first and from the config second.
pub fn resolve_point(cli: &Cli, config: &Config) -> Result<Point, Error> {
    let strict = cli.strict || config.strict;

    let resolve = |axis: Axis, raw: Option<&String>, fallback: &Coordinate| {
        let coordinate = match raw {
            Some(raw) if strict => return Coordinate::strict(axis, raw),
            Some(raw) => raw.parse::<Coordinate>().unwrap_or_else(|never| match never {}),
            None => fallback.clone(),
        };

        if strict {
            coordinate.require_int(axis)
        } else {
            Ok(coordinate)
        }
    };

    let point = Point::new(
        resolve(Axis::X, cli.x.as_ref(), &config.point.x)?,
        resolve(Axis::Y, cli.y.as_ref(), &config.point.y)?,
    );
    debug!(?point, strict, "Point constructed");

    Ok(point)
}

/// Builds the point and invokes it into `out`.
pub fn run_with<W: Write>(cli: &Cli, config: &Config, out: &mut W) -> anyhow::Result<()> {
    let point = resolve_point(cli, config)?;

    point
        .invoke_into(out)
        .context("Couldn't write the point")?;
    out.flush().context("Couldn't flush the output")?;

    Ok(())
}

pub fn start(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli)?;

    let stdout = std::io::stdout();
    run_with(cli, &config, &mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pointcall").chain(args.iter().copied())).unwrap()
    }

    fn output(cli: &Cli, config: &Config) -> anyhow::Result<String> {
        let mut out = Vec::new();
        run_with(cli, config, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn defaults_print_the_example_point() {
        let out = output(&cli(&[]), &Config::default()).unwrap();
        assert_eq!(out, "Point { 1, 2 }\n");
    }

    #[test]
    fn command_line_coordinates() {
        let config = Config::default();

        assert_eq!(output(&cli(&["0", "0"]), &config).unwrap(), "Point { 0, 0 }\n");
        assert_eq!(
            output(&cli(&["-5", "100"]), &config).unwrap(),
            "Point { -5, 100 }\n"
        );
    }

    #[test]
    fn text_coordinates_are_accepted() {
        let out = output(&cli(&["a", "b"]), &Config::default()).unwrap();
        assert_eq!(out, "Point { a, b }\n");
    }

    #[test]
    fn missing_coordinate_falls_back_to_config() {
        let mut config = Config::default();
        config.point.y = Coordinate::Int(-1);

        let out = output(&cli(&["7"]), &config).unwrap();
        assert_eq!(out, "Point { 7, -1 }\n");
    }

    #[test]
    fn strict_rejects_text_on_command_line() {
        let err = resolve_point(&cli(&["a", "2", "--strict"]), &Config::default()).unwrap_err();

        assert!(matches!(
            err,
            Error::Point(point::Error::NotAnInteger { axis: Axis::X, .. })
        ));
    }

    #[test]
    fn strict_rejects_text_from_config() {
        let config = Config {
            strict: true,
            point: config::PointConfig {
                x: Coordinate::Int(1),
                y: Coordinate::from("b"),
            },
        };

        let err = resolve_point(&cli(&[]), &config).unwrap_err();
        assert!(matches!(
            err,
            Error::Point(point::Error::NotAnInteger { axis: Axis::Y, .. })
        ));
    }

    #[test]
    fn strict_accepts_integers() {
        let point = resolve_point(&cli(&["3", "4", "--strict"]), &Config::default()).unwrap();
        assert_eq!(point, Point::new(Coordinate::Int(3), Coordinate::Int(4)));
    }

    #[test]
    fn unwritable_log_path_is_not_fatal() {
        let path = Path::new("/this/path/does/not/exist/log.log");
        assert!(open_log_file(path).is_none());

        // no subscriber got installed, the point still gets printed
        init_logging(&LogLevel::Debug, path);
        let out = output(&cli(&["1", "2"]), &Config::default()).unwrap();
        assert_eq!(out, "Point { 1, 2 }\n");
    }

    #[test]
    fn writable_log_path() {
        let path = std::env::temp_dir().join(format!("pointcall-{}.log", std::process::id()));

        assert!(open_log_file(&path).is_some());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let cli = cli(&["--config", "/this/path/does/not/exist/config.toml"]);
        assert!(matches!(load_config(&cli), Err(Error::Config(_))));
    }

    #[test]
    fn explicit_config_is_loaded() {
        let path = std::env::temp_dir().join(format!("pointcall-{}.toml", std::process::id()));
        std::fs::write(&path, "[point]\nx = 9\ny = \"z\"\n").unwrap();

        let cli = cli(&["--config", path.to_str().unwrap()]);
        let config = load_config(&cli);
        std::fs::remove_file(&path).unwrap();

        let out = output(&cli, &config.unwrap()).unwrap();
        assert_eq!(out, "Point { 9, z }\n");
    }
}
