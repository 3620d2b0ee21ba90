//! Approximate on-screen colors for the fixture output
//!
//! Only used for previews and diagnostics; the fixture itself is driven from
//! the chromaticity-based duty table.

mod kelvin;
mod mix;

pub use kelvin::temperature_to_rgb;
pub use mix::{mix_rgb, preview_color};
use smart_leds::RGB8;

pub type Rgb = RGB8;
