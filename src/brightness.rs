//! Perceptual brightness levels
//!
//! The user picks one of ten levels (or off). Each level maps to a linear
//! scale factor applied to the duty-cycle table.

use core::fmt;

use crate::bounds::OutOfRange;

/// Number of brightness levels
pub const BRIGHTNESS_LEVELS: usize = 10;

/// Perceptual brightness-to-linear scale, one entry per level
pub const BRIGHTNESS_CURVE: [f64; BRIGHTNESS_LEVELS] = [
    0.121, 0.153, 0.193, 0.244, 0.309, 0.391, 0.494, 0.625, 0.791, 1.0,
];

const RAW_OFF: i8 = -1;
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const RAW_MAX: i8 = BRIGHTNESS_LEVELS as i8 - 1;

/// Brightness level `0..=9`, or off
///
/// Stored as the raw signed value used by the encoder accumulator, where
/// `-1` means off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Intensity(i8);

impl Intensity {
    pub const OFF: Self = Self(RAW_OFF);
    pub const MIN: Self = Self::OFF;
    pub const MAX: Self = Self(RAW_MAX);

    /// Create a level, saturating at the brightest one
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub const fn level(level: u8) -> Self {
        if level > RAW_MAX as u8 {
            Self::MAX
        } else {
            Self(level as i8)
        }
    }

    pub const fn from_raw(raw: i8) -> Result<Self, OutOfRange> {
        if raw < RAW_OFF || raw > RAW_MAX {
            return Err(OutOfRange {
                value: raw as i16,
                min: RAW_OFF as i16,
                max: RAW_MAX as i16,
            });
        }
        Ok(Self(raw))
    }

    pub const fn raw(self) -> i8 {
        self.0
    }

    pub const fn is_off(self) -> bool {
        self.0 == RAW_OFF
    }

    /// Level index, or `None` when off
    #[allow(clippy::cast_sign_loss)]
    pub const fn index(self) -> Option<usize> {
        if self.is_off() {
            None
        } else {
            Some(self.0 as usize)
        }
    }

    /// Linear scale for this level, 0.0 when off
    pub fn scale(self) -> f64 {
        self.index()
            .and_then(|index| BRIGHTNESS_CURVE.get(index).copied())
            .unwrap_or(0.0)
    }

    /// Next level for the brightness key: 0..9 then off, then 0 again
    #[must_use]
    pub const fn cycle(self) -> Self {
        if self.0 < RAW_MAX {
            Self(self.0 + 1)
        } else {
            Self::OFF
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index() {
            Some(level) => write!(f, "{level}"),
            None => f.write_str("off"),
        }
    }
}
