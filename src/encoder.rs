//! Rotary encoder decoding
//!
//! [`QuadratureDecoder`] turns successive 2-bit (A, B) readings into
//! rotation steps. [`StepAccumulator`] collects those steps and only emits a
//! new value once a full group of microsteps has been counted, which keeps
//! coarse encoders from changing the setting on every detent edge.

/// Direction of a single decoded encoder transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Signed step value (+1 clockwise)
    pub const fn step(self) -> i16 {
        match self {
            Self::Clockwise => 1,
            Self::CounterClockwise => -1,
        }
    }

    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

/// Classify a `current << 2 | previous` transition code
pub const fn decode_transition(code: u8) -> Option<Direction> {
    match code & 0x0f {
        0x1 | 0x7 | 0xe | 0x8 => Some(Direction::Clockwise),
        0xd | 0x4 | 0x2 | 0xb => Some(Direction::CounterClockwise),
        _ => None,
    }
}

/// Full-quadrature Gray-code decoder
///
/// Works with interrupts on either edge of either line: every valid
/// single-bit change yields a step, repeats and double-bit jumps yield none.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuadratureDecoder {
    previous: u8,
}

impl QuadratureDecoder {
    pub const fn new() -> Self {
        Self { previous: 0 }
    }

    /// Start from a known reading instead of `00`
    pub const fn with_reading(reading: u8) -> Self {
        Self {
            previous: reading & 0b11,
        }
    }

    /// Feed the current `(A << 1) | B` reading
    pub fn update(&mut self, reading: u8) -> Option<Direction> {
        let current = reading & 0b11;
        let code = (current << 2) | self.previous;
        self.previous = current;
        decode_transition(code)
    }

    pub const fn previous(&self) -> u8 {
        self.previous
    }
}

/// Microstep counter for one adjustable value
///
/// The raw counter lives in `[divisor * min, divisor * max]`; the value is
/// `raw / divisor` whenever `raw` is an exact multiple of the divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepAccumulator {
    raw: i16,
    divisor: i16,
    min: i16,
    max: i16,
}

impl StepAccumulator {
    /// Create an accumulator positioned at `value`
    ///
    /// A zero divisor is treated as 1.
    pub fn new(value: i16, min: i16, max: i16, divisor: u8) -> Self {
        let divisor = i16::from(divisor.max(1));
        let mut accumulator = Self {
            raw: 0,
            divisor,
            min: min.saturating_mul(divisor),
            max: max.saturating_mul(divisor),
        };
        accumulator.reset_to(value);
        accumulator
    }

    /// Apply one step, returning the new value if a full group was reached
    ///
    /// Steps past either end are absorbed; at the limit every further step
    /// emits the limit value again.
    pub fn apply(&mut self, direction: Direction) -> Option<i16> {
        self.raw = self
            .raw
            .saturating_add(direction.step())
            .clamp(self.min, self.max);
        if self.raw % self.divisor == 0 {
            Some(self.raw / self.divisor)
        } else {
            None
        }
    }

    /// Move the counter onto `value` without emitting anything
    pub fn reset_to(&mut self, value: i16) {
        self.raw = value.saturating_mul(self.divisor).clamp(self.min, self.max);
    }

    pub const fn raw(&self) -> i16 {
        self.raw
    }

    pub const fn divisor(&self) -> i16 {
        self.divisor
    }

    /// Range of the raw counter
    pub const fn raw_bounds(&self) -> (i16, i16) {
        (self.min, self.max)
    }
}
