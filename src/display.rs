//! Two-digit seven-segment display
//!
//! Both digits share the segment lines, so only one digit is lit at a time.
//! [`DisplayScanner::refresh`] lights the next digit on every timer tick,
//! fast enough that both appear lit.

use core::cell::Cell;

use critical_section::Mutex;

use crate::SegmentSink;

// Segment patterns, bit 0 = A ... bit 6 = G, bit 7 = DP
const DIGIT_SEGMENTS: [u8; 10] = [0x3f, 0x06, 0x5b, 0x4f, 0x66, 0x6d, 0x7d, 0x07, 0x7f, 0x6f];
const SEGMENTS_DECIMAL_POINT: u8 = 0x80;
const SEGMENTS_BLANK: u8 = 0x00;
const SEGMENTS_HYPHEN: u8 = 0x40;

/// Content of one digit slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Glyph {
    Digit(u8),
    DecimalPoint,
    #[default]
    Blank,
    Hyphen,
}

impl Glyph {
    /// Segment pattern for this glyph
    ///
    /// Digits above 9 render blank.
    pub fn segments(self) -> u8 {
        match self {
            Self::Digit(digit) => DIGIT_SEGMENTS
                .get(usize::from(digit))
                .copied()
                .unwrap_or(SEGMENTS_BLANK),
            Self::DecimalPoint => SEGMENTS_DECIMAL_POINT,
            Self::Blank => SEGMENTS_BLANK,
            Self::Hyphen => SEGMENTS_HYPHEN,
        }
    }
}

/// Which zero digits are blanked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Suppress {
    None,
    /// Blank a zero tens digit
    #[default]
    Leading,
    /// Blank any zero digit
    All,
}

/// Digit position, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DigitPosition {
    Left = 0,
    Right = 1,
}

impl DigitPosition {
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// The two glyphs currently shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayBuffer {
    pub glyphs: [Glyph; 2],
}

impl DisplayBuffer {
    pub const BLANK: Self = Self {
        glyphs: [Glyph::Blank, Glyph::Blank],
    };

    /// Render a value into two digits
    ///
    /// Negative values show a lone hyphen on the right, values above 99
    /// show `00`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_value(value: i16, suppress: Suppress) -> Self {
        if value < 0 {
            return Self {
                glyphs: [Glyph::Blank, Glyph::Hyphen],
            };
        }
        if value > 99 {
            return Self {
                glyphs: [Glyph::Digit(0), Glyph::Digit(0)],
            };
        }
        let tens = (value / 10) as u8;
        let units = (value % 10) as u8;
        let blank_zero = |digit: u8| {
            if digit == 0 {
                Glyph::Blank
            } else {
                Glyph::Digit(digit)
            }
        };
        let glyphs = match suppress {
            Suppress::None => [Glyph::Digit(tens), Glyph::Digit(units)],
            Suppress::Leading => [blank_zero(tens), Glyph::Digit(units)],
            Suppress::All => [blank_zero(tens), blank_zero(units)],
        };
        Self { glyphs }
    }

    pub const fn glyph(&self, position: DigitPosition) -> Glyph {
        self.glyphs[position.index()]
    }
}

/// Display buffer shared between the controller and the scan interrupt
pub struct SharedDisplay {
    inner: Mutex<Cell<DisplayBuffer>>,
}

impl SharedDisplay {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(DisplayBuffer::BLANK)),
        }
    }

    /// Replace the displayed value
    pub fn set_value(&self, value: i16, suppress: Suppress) {
        self.set(DisplayBuffer::from_value(value, suppress));
    }

    pub fn set(&self, buffer: DisplayBuffer) {
        critical_section::with(|cs| self.inner.borrow(cs).set(buffer));
    }

    pub fn get(&self) -> DisplayBuffer {
        critical_section::with(|cs| self.inner.borrow(cs).get())
    }
}

impl Default for SharedDisplay {
    fn default() -> Self {
        Self::new()
    }
}

/// Multiplexing digit scanner
///
/// Reads the shared buffer and never writes it.
#[derive(Debug, Clone, Copy)]
pub struct DisplayScanner {
    position: DigitPosition,
}

impl DisplayScanner {
    pub const fn new() -> Self {
        Self {
            position: DigitPosition::Left,
        }
    }

    /// Light the next digit
    ///
    /// Both digits are switched off before the segment lines change, so the
    /// previous digit never shows the new pattern.
    pub fn refresh<S: SegmentSink>(&mut self, display: &SharedDisplay, sink: &mut S) {
        let buffer = display.get();
        let position = self.position;
        sink.deselect_all();
        sink.write_segments(buffer.glyph(position).segments());
        sink.select(position);
        self.position = position.next();
    }

    /// Digit that the next refresh lights
    pub const fn position(&self) -> DigitPosition {
        self.position
    }
}

impl Default for DisplayScanner {
    fn default() -> Self {
        Self::new()
    }
}
