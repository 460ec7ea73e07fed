//! Run parameters handed over by the UI collaborator.

use crate::error::ConfigError;
use crate::geom::Point;
use crate::grid::Grid;

/// Slowest accepted playback speed.
pub const SPEED_MIN: u8 = 1;
/// Fastest accepted playback speed.
pub const SPEED_MAX: u8 = 100;
/// Smallest array the sorting view generates.
pub const ARRAY_SIZE_MIN: usize = 10;
/// Largest array the sorting view generates.
pub const ARRAY_SIZE_MAX: usize = 100;

/// Configuration for a visualizer session.
///
/// Defaults match the stock layout: a 12×20 board with the endpoints on the
/// middle row, 50-element arrays and half speed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VisualizerConfig {
    pub speed_percent: u8,
    pub grid_rows: i32,
    pub grid_cols: i32,
    pub start: Point,
    pub end: Point,
    pub array_size: usize,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            speed_percent: 50,
            grid_rows: 12,
            grid_cols: 20,
            start: Point::new(6, 4),
            end: Point::new(6, 15),
            array_size: 50,
        }
    }
}

impl VisualizerConfig {
    /// Check every option against its accepted interval and the grid layout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range(
            "speed_percent",
            self.speed_percent as i64,
            SPEED_MIN as i64,
            SPEED_MAX as i64,
        )?;
        check_range(
            "array_size",
            self.array_size as i64,
            ARRAY_SIZE_MIN as i64,
            ARRAY_SIZE_MAX as i64,
        )?;
        self.build_grid().map(|_| ())
    }

    /// Build an empty grid with the configured size and endpoints.
    pub fn build_grid(&self) -> Result<Grid, ConfigError> {
        Grid::new(self.grid_rows, self.grid_cols, self.start, self.end)
    }
}

fn check_range(name: &'static str, value: i64, min: i64, max: i64) -> Result<(), ConfigError> {
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = VisualizerConfig::default();
        cfg.validate().unwrap();
        let g = cfg.build_grid().unwrap();
        assert_eq!((g.rows(), g.cols()), (12, 20));
        assert_eq!(g.start(), Point::new(6, 4));
        assert_eq!(g.end(), Point::new(6, 15));
    }

    #[test]
    fn speed_bounds() {
        let mut cfg = VisualizerConfig {
            speed_percent: 0,
            ..VisualizerConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::OutOfRange {
                name: "speed_percent",
                ..
            })
        ));
        cfg.speed_percent = 101;
        assert!(cfg.validate().is_err());
        cfg.speed_percent = 100;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn array_size_bounds() {
        let cfg = VisualizerConfig {
            array_size: 9,
            ..VisualizerConfig::default()
        };
        assert!(cfg.validate().is_err());
        let cfg = VisualizerConfig {
            array_size: 100,
            ..VisualizerConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn bad_layout_is_rejected() {
        let cfg = VisualizerConfig {
            end: Point::new(6, 4),
            ..VisualizerConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidConfiguration(_))
        ));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn partial_config_fills_defaults() {
        let cfg: VisualizerConfig = serde_json::from_str(r#"{"speed_percent": 80}"#).unwrap();
        assert_eq!(cfg.speed_percent, 80);
        assert_eq!(cfg.grid_rows, 12);
        assert_eq!(cfg.start, Point::new(6, 4));
    }
}
