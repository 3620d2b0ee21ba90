//! Fixture configuration
//!
//! Everything a board needs to describe its LEDs, PWM resolution and input
//! tuning. [`FixtureConfig::DEFAULT`] matches the reference hardware.

use embassy_time::Duration;

use crate::bounds::ColorTemperature;
use crate::brightness::Intensity;

/// Photometric description of one LED type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedSpec {
    /// Reference color temperature in hundreds of Kelvin
    pub temperature: ColorTemperature,
    /// Maximum relative illumination (0.0-1.0)
    pub max_illumination: f64,
}

/// Input and display timing
#[derive(Debug, Clone, Copy)]
pub struct TimingConfig {
    /// Period of the multiplexed digit scan
    pub display_refresh: Duration,
    /// Period of the main loop (debounce tick)
    pub debounce_tick: Duration,
    /// Number of debounce ticks before the button level is checked
    pub debounce_ticks: u8,
}

/// Encoder microsteps per emitted value change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MicrostepConfig {
    pub intensity: u8,
    pub color: u8,
}

/// Configuration for the fixture controller
#[derive(Debug, Clone)]
pub struct FixtureConfig {
    pub warm: LedSpec,
    pub cold: LedSpec,
    /// PWM counter wrap value
    pub pwm_max: u16,
    pub microsteps: MicrostepConfig,
    pub timings: TimingConfig,
    /// Initial color temperature
    pub color: ColorTemperature,
    /// Initial brightness level
    pub intensity: Intensity,
}

impl FixtureConfig {
    pub const DEFAULT: Self = Self {
        warm: LedSpec {
            temperature: 27,
            max_illumination: 1.0,
        },
        cold: LedSpec {
            temperature: 71,
            max_illumination: 0.85,
        },
        pwm_max: 3048,
        microsteps: MicrostepConfig {
            intensity: 5,
            color: 2,
        },
        timings: TimingConfig {
            display_refresh: Duration::from_millis(3),
            debounce_tick: Duration::from_millis(40),
            debounce_ticks: 5,
        },
        color: 40,
        intensity: Intensity::level(5),
    };

    /// Duty value for one percent, rounded up
    pub const fn pwm_one_percent(&self) -> u16 {
        self.pwm_max.div_ceil(100)
    }
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
