#![no_std]

pub mod bounds;
pub mod brightness;
pub mod button;
pub mod channel;
pub mod chromaticity;
pub mod color;
pub mod config;
pub mod controller;
pub mod diagnostics;
pub mod display;
pub mod duty_table;
pub mod encoder;
pub mod input;
pub mod keypress;
pub mod output;
pub mod scan_scheduler;

pub use bounds::{ColorBounds, ColorTemperature, OutOfRange};
pub use brightness::{BRIGHTNESS_CURVE, Intensity};
pub use button::{ButtonLevel, ButtonState, Mode};
pub use config::{FixtureConfig, LedSpec, MicrostepConfig, TimingConfig};
pub use controller::{Controller, KeyResponse, LightingState};
pub use display::{DigitPosition, DisplayBuffer, Glyph, SharedDisplay, Suppress};
pub use duty_table::{DutyCycleTable, DutyPair, TableError};
pub use encoder::Direction;
pub use input::{InputChannel, InputEvent, InputFrontend, InputReceiver, InputSender};
pub use keypress::KeyCommand;
pub use output::{LedChannel, Module};
pub use scan_scheduler::ScanScheduler;

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract PWM output
///
/// Implement this trait to support different hardware platforms.
/// The output driver is generic over this trait.
pub trait PwmSink {
    /// Set the duty value of one channel, already clamped to the PWM range
    fn set_duty(&mut self, module: Module, channel: LedChannel, duty: u16);
}

/// Abstract segment and digit-select lines of the display
pub trait SegmentSink {
    /// Switch both digit selects off
    fn deselect_all(&mut self);

    /// Drive the segment lines, bit 0 = A ... bit 6 = G, bit 7 = DP
    fn write_segments(&mut self, pattern: u8);

    /// Switch on the select line of one digit
    fn select(&mut self, position: DigitPosition);
}
