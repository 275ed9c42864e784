use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::point::Coordinate;

pub const CONFIG_FILENAME: &str = "config.toml";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Couldn't read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Reject coordinates which aren't integers.
    pub strict: bool,
    pub point: PointConfig,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();

        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(path, &content),
            Err(e) => {
                warn!("Couldn't read config file: {}", e);
                Err(Error::Read {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        }
    }

    fn parse(path: &Path, content: &str) -> Result<Self, Error> {
        toml::from_str(content).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Fallback coordinates for when none are given on the command line.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointConfig {
    pub x: Coordinate,
    pub y: Coordinate,
}

impl Default for PointConfig {
    fn default() -> Self {
        Self {
            x: Coordinate::Int(1),
            y: Coordinate::Int(2),
        }
    }
}
