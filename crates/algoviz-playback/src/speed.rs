use std::fmt;
use std::time::Duration;

use algoviz_core::ConfigError;
use algoviz_core::config::{SPEED_MAX, SPEED_MIN};

/// Playback speed as a percentage in `[1, 100]`.
///
/// Higher is faster: the delay between events is `101 - percent`
/// milliseconds, so 1% waits 100 ms and 100% waits 1 ms.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Speed(u8);

impl Speed {
    pub const MIN: Speed = Speed(SPEED_MIN);
    pub const MAX: Speed = Speed(SPEED_MAX);

    /// Validate a percentage.
    pub fn new(percent: u8) -> Result<Self, ConfigError> {
        if !(SPEED_MIN..=SPEED_MAX).contains(&percent) {
            return Err(ConfigError::OutOfRange {
                name: "speed_percent",
                value: percent as i64,
                min: SPEED_MIN as i64,
                max: SPEED_MAX as i64,
            });
        }
        Ok(Self(percent))
    }

    /// Clamp an arbitrary value into range.
    pub fn saturating(percent: i32) -> Self {
        Self(percent.clamp(SPEED_MIN as i32, SPEED_MAX as i32) as u8)
    }

    #[inline]
    pub fn percent(self) -> u8 {
        self.0
    }

    /// Delay before the next event.
    #[inline]
    pub fn delay(self) -> Duration {
        Duration::from_millis(101 - self.0 as u64)
    }

    /// `step` percent faster, saturating at [`Speed::MAX`].
    pub fn faster(self, step: u8) -> Self {
        Self::saturating(self.0 as i32 + step as i32)
    }

    /// `step` percent slower, saturating at [`Speed::MIN`].
    pub fn slower(self, step: u8) -> Self {
        Self::saturating(self.0 as i32 - step as i32)
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(50)
    }
}

impl TryFrom<u8> for Speed {
    type Error = ConfigError;
    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        Self::new(percent)
    }
}

impl From<Speed> for u8 {
    fn from(s: Speed) -> u8 {
        s.0
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn speed_is_a_bare_number() {
        assert_eq!(serde_json::to_string(&Speed::MAX).unwrap(), "100");
        let s: Speed = serde_json::from_str("42").unwrap();
        assert_eq!(s.percent(), 42);
        assert!(serde_json::from_str::<Speed>("0").is_err());
    }
}
