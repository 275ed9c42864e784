//! The [`Point`] value object and the [`Coordinate`]s it is usually built from.
use std::{
    convert::Infallible,
    fmt::{self, Display},
    io::{self, Write},
    num::IntErrorKind,
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("The {axis} coordinate has to be an integer, got '{value}'")]
    NotAnInteger { axis: Axis, value: String },

    #[error("The {axis} coordinate '{value}' doesn't fit into a 64 bit integer")]
    OutOfRange { axis: Axis, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// A coordinate pair which prints itself when invoked.
///
/// No validation happens on construction: any `T` is stored as is and the fields stay
/// public. The only requirement shows up once the point is formatted, where `T` has to be
/// [`Display`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Point<T = Coordinate> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Display> Point<T> {
    /// Prints the point to stdout, followed by a newline.
    ///
    /// Behaves like `println!`, so it panics if stdout is gone. Use
    /// [`Point::invoke_into`] if you want to handle that case.
    pub fn invoke(&self) {
        println!("{}", self);
    }

    /// Writes exactly one line, `Point { <x>, <y> }\n`, into `out`.
    pub fn invoke_into<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self)
    }
}

impl<T: Display> Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point {{ {}, {} }}", self.x, self.y)
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> From<Point<T>> for (T, T) {
    fn from(point: Point<T>) -> Self {
        (point.x, point.y)
    }
}

/// A single coordinate value.
///
/// Integers are the expected case, anything else is kept verbatim as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Coordinate {
    Int(i64),
    Text(String),
}

impl Coordinate {
    /// Parses `raw` and rejects everything which isn't an integer.
    pub fn strict(axis: Axis, raw: &str) -> Result<Self, Error> {
        match raw.parse::<i64>() {
            Ok(value) => Ok(Self::Int(value)),
            Err(e) => {
                debug!("Rejecting {} coordinate '{}': {}", axis, raw, e);
                let value = raw.to_string();

                match e.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        Err(Error::OutOfRange { axis, value })
                    }
                    _ => Err(Error::NotAnInteger { axis, value }),
                }
            }
        }
    }

    /// Turns an already parsed coordinate into an integer one, if possible.
    pub fn require_int(self, axis: Axis) -> Result<Self, Error> {
        match self {
            Self::Int(_) => Ok(self),
            Self::Text(text) => Self::strict(axis, &text),
        }
    }
}

// Any TOML value is accepted: integers stay integers, everything else is kept as written.
impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match toml::Value::deserialize(deserializer)? {
            toml::Value::Integer(value) => Self::Int(value),
            toml::Value::String(text) => Self::Text(text),
            other => Self::Text(other.to_string()),
        })
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{}", value),
            Self::Text(text) => write!(f, "{}", text),
        }
    }
}

impl FromStr for Coordinate {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<i64>() {
            Ok(value) => Self::Int(value),
            Err(_) => Self::Text(s.to_string()),
        })
    }
}

impl From<i64> for Coordinate {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Coordinate {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}
