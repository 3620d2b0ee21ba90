//! Output driver
//!
//! Turns (module, color temperature, brightness) into duty values and writes
//! them to the PWM sink. Also keeps the per-channel percentages used for
//! direct channel control from the keypress interface.

#[cfg(feature = "log")]
use esp_println::println;

use crate::PwmSink;
use crate::bounds::{ColorTemperature, OutOfRange};
use crate::brightness::Intensity;
use crate::duty_table::{DutyCycleTable, DutyPair};

/// Number of independent output modules
pub const MODULE_COUNT: usize = 2;

/// Step used by the percentage keys
pub const PERCENT_STEP: i8 = 5;

/// Physical lighting module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Module {
    Primary = 0,
    Secondary = 1,
}

impl Module {
    pub const ALL: [Self; MODULE_COUNT] = [Self::Primary, Self::Secondary];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// LED channel within a module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LedChannel {
    Cold = 0,
    Warm = 1,
}

impl LedChannel {
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cold => "COLD",
            Self::Warm => "WARM",
        }
    }
}

/// Drives the PWM channels of both modules
pub struct Output<P: PwmSink> {
    sink: P,
    table: DutyCycleTable,
    one_percent: u16,
    percent: [[u8; 2]; MODULE_COUNT],
}

impl<P: PwmSink> Output<P> {
    pub const fn new(sink: P, table: DutyCycleTable, one_percent: u16) -> Self {
        Self {
            sink,
            table,
            one_percent,
            percent: [[0; 2]; MODULE_COUNT],
        }
    }

    /// Duty values for a color temperature at a brightness level
    ///
    /// Off never consults the table, so it succeeds for any temperature.
    pub fn duty_for(
        &self,
        color: ColorTemperature,
        intensity: Intensity,
    ) -> Result<DutyPair, OutOfRange> {
        if intensity.is_off() {
            return Ok(DutyPair::OFF);
        }
        let scale = intensity.scale();
        let base = self.table.get(color)?;
        Ok(DutyPair {
            warm: self.scaled(base.warm, scale),
            cold: self.scaled(base.cold, scale),
        })
    }

    /// Set both channels of `module` for a color temperature and brightness
    ///
    /// Nothing is written when `color` is outside the table.
    pub fn set_lighting(
        &mut self,
        module: Module,
        color: ColorTemperature,
        intensity: Intensity,
    ) -> Result<DutyPair, OutOfRange> {
        let duty = self.duty_for(color, intensity)?;
        self.set_level(module, LedChannel::Warm, duty.warm);
        self.set_level(module, LedChannel::Cold, duty.cold);
        #[cfg(feature = "log")]
        {
            if intensity.is_off() {
                println!("[Output] module {} off", module.index());
            } else {
                println!("pwm (cold,warm) ({},{})", duty.cold, duty.warm);
            }
        }
        Ok(duty)
    }

    /// Write a raw duty value, clamped to the PWM range
    pub fn set_level(&mut self, module: Module, channel: LedChannel, level: u16) {
        let level = level.min(self.table.pwm_max());
        self.sink.set_duty(module, channel, level);
    }

    /// Write a duty value given in percent of the PWM range
    pub fn set_percent(&mut self, module: Module, channel: LedChannel, percent: u8) {
        let level = u16::from(percent).saturating_mul(self.one_percent);
        self.set_level(module, channel, level);
    }

    /// Step the stored percentage of one channel and write it
    ///
    /// Returns the new percentage, clamped to `0..=100`.
    pub fn adjust_percent(&mut self, module: Module, channel: LedChannel, delta: i8) -> u8 {
        let stored = &mut self.percent[module.index()][channel.index()];
        let next = stored.saturating_add_signed(delta).min(100);
        *stored = next;
        #[cfg(feature = "log")]
        println!(
            "[{}][{}] = {} percent",
            module.index(),
            channel.as_str(),
            next
        );
        self.set_percent(module, channel, next);
        next
    }

    /// Stored percentage of one channel
    pub const fn percent(&self, module: Module, channel: LedChannel) -> u8 {
        self.percent[module.index()][channel.index()]
    }

    pub const fn table(&self) -> &DutyCycleTable {
        &self.table
    }

    pub const fn sink(&self) -> &P {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut P {
        &mut self.sink
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn scaled(&self, duty: u16, scale: f64) -> u16 {
        let level = (scale * f64::from(duty)) as u32;
        u16::try_from(level).map_or(self.table.pwm_max(), |level| level.min(self.table.pwm_max()))
    }
}
