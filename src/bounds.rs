use core::fmt;

/// Color temperature in hundreds of Kelvin (40 = 4000K)
pub type ColorTemperature = u8;

/// Error returned by validated table accessors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    pub value: i16,
    pub min: i16,
    pub max: i16,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value {} is outside of [{}, {}]",
            self.value, self.min, self.max
        )
    }
}

/// Inclusive range of supported color temperatures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorBounds {
    pub min: ColorTemperature,
    pub max: ColorTemperature,
}

impl ColorBounds {
    pub const fn new(min: ColorTemperature, max: ColorTemperature) -> Self {
        Self { min, max }
    }

    /// Number of temperatures in the range
    pub const fn count(self) -> usize {
        (self.max - self.min) as usize + 1
    }

    pub const fn contains(self, value: ColorTemperature) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(self, value: ColorTemperature) -> ColorTemperature {
        value.clamp(self.min, self.max)
    }

    /// Offset of `value` from the start of the range
    pub fn offset_of(self, value: ColorTemperature) -> Result<usize, OutOfRange> {
        if self.contains(value) {
            Ok((value - self.min) as usize)
        } else {
            Err(self.out_of_range(value))
        }
    }

    /// Returns true for temperatures strictly between the endpoints
    pub const fn is_intermediate(self, value: ColorTemperature) -> bool {
        value > self.min && value < self.max
    }

    pub(crate) fn out_of_range(self, value: ColorTemperature) -> OutOfRange {
        OutOfRange {
            value: i16::from(value),
            min: i16::from(self.min),
            max: i16::from(self.max),
        }
    }
}
