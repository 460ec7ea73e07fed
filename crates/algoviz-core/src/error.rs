//! Configuration errors shared by every algoviz crate.

use std::fmt;

use crate::geom::Point;

/// Errors raised when a grid or run parameter is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The grid layout is unusable (bad dimensions, endpoints out of
    /// bounds or on top of each other).
    InvalidConfiguration(String),
    /// A numeric option fell outside its accepted interval.
    OutOfRange {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

impl ConfigError {
    pub(crate) fn endpoint(what: &str, p: Point, detail: &str) -> Self {
        Self::InvalidConfiguration(format!("{what} {p} {detail}"))
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(s) => write!(f, "invalid configuration: {s}"),
            Self::OutOfRange {
                name,
                value,
                min,
                max,
            } => write!(f, "{name} = {value} is outside [{min}, {max}]"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = ConfigError::endpoint("start", Point::new(1, 2), "is out of bounds");
        assert_eq!(e.to_string(), "invalid configuration: start (1, 2) is out of bounds");
        let e = ConfigError::OutOfRange {
            name: "speed_percent",
            value: 0,
            min: 1,
            max: 100,
        };
        assert_eq!(e.to_string(), "speed_percent = 0 is outside [1, 100]");
    }
}
