//! Warm/cold duty-cycle table
//!
//! For every color temperature between the two LEDs' own temperatures, the
//! table holds the pair of duty cycles that mixes the LEDs onto the black-body
//! locus at the highest achievable combined illumination.
//!
//! The table is built once before any output is driven and is read-only
//! afterwards.

use core::fmt;

use crate::bounds::{ColorBounds, ColorTemperature, OutOfRange};
use crate::chromaticity::{CHROMATICITY_BOUNDS, CHROMATICITY_LEN, chromaticity};
use crate::config::LedSpec;

/// Duty values for the two channels of one module
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DutyPair {
    pub warm: u16,
    pub cold: u16,
}

impl DutyPair {
    pub const OFF: Self = Self { warm: 0, cold: 0 };

    pub const fn is_off(self) -> bool {
        self.warm == 0 && self.cold == 0
    }
}

/// Reasons the table cannot be built from a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// An LED temperature has no chromaticity reference point
    UnknownTemperature(OutOfRange),
    /// The warm LED must be at least two steps below the cold LED
    NoIntermediateRange {
        warm: ColorTemperature,
        cold: ColorTemperature,
    },
    /// Maximum illumination must be positive and finite
    InvalidIllumination,
    /// Every intermediate duty came out as zero
    ZeroOutput,
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTemperature(err) => write!(f, "unknown LED temperature: {err}"),
            Self::NoIntermediateRange { warm, cold } => write!(
                f,
                "no temperatures between warm {}00K and cold {}00K",
                warm, cold
            ),
            Self::InvalidIllumination => f.write_str("invalid LED max illumination"),
            Self::ZeroOutput => f.write_str("mixing produced no output"),
        }
    }
}

/// Per-temperature duty cycles, normalized to the PWM range
#[derive(Debug, Clone)]
pub struct DutyCycleTable {
    bounds: ColorBounds,
    pwm_max: u16,
    entries: [DutyPair; CHROMATICITY_LEN],
}

/// Unnormalized duty values, before conversion to the PWM range
#[derive(Clone, Copy, Default)]
struct RawDuty {
    warm: u32,
    cold: u32,
}

impl DutyCycleTable {
    /// Build the table for a warm/cold LED pair
    ///
    /// The scale factor is taken from the intermediate temperatures only, so
    /// the two single-LED endpoints may end up above `pwm_max` after
    /// rescaling; those are clamped afterwards.
    pub fn build(warm: &LedSpec, cold: &LedSpec, pwm_max: u16) -> Result<Self, TableError> {
        let bounds = validate(warm, cold)?;
        let warm_point = chromaticity(warm.temperature).map_err(TableError::UnknownTemperature)?;
        let cold_point = chromaticity(cold.temperature).map_err(TableError::UnknownTemperature)?;

        let (xw, yw) = (warm_point.x, warm_point.y);
        let (xc, yc) = (cold_point.x, cold_point.y);
        let ew = warm.max_illumination;
        let ec = cold.max_illumination;
        // Target illuminance: both LEDs at full output
        let et = ew + ec;
        let ry = yc / yw;
        let pwm = f64::from(pwm_max);

        let mut raw = [RawDuty::default(); CHROMATICITY_LEN];
        for temperature in bounds.min..=bounds.max {
            let target = chromaticity(temperature).map_err(TableError::UnknownTemperature)?;
            let a = xw - target.x;
            let b = target.x - xc;
            let dc_w = et * b / (ew * (b + a * ry));
            let dc_c = a * ry * et / (ec * (b + a * ry));
            raw[offset(bounds, temperature)] = RawDuty {
                warm: to_duty(dc_w * pwm),
                cold: to_duty(dc_c * pwm),
            };
        }

        let max = (bounds.min..=bounds.max)
            .filter(|t| bounds.is_intermediate(*t))
            .map(|t| raw[offset(bounds, t)])
            .fold(0, |acc, duty| acc.max(duty.warm).max(duty.cold));
        if max == 0 {
            return Err(TableError::ZeroOutput);
        }

        let scale = pwm / f64::from(max);
        for duty in &mut raw[..bounds.count()] {
            duty.warm = to_duty(f64::from(duty.warm) * scale);
            duty.cold = to_duty(f64::from(duty.cold) * scale);
        }

        let limit = u32::from(pwm_max);
        let warm_end = &mut raw[offset(bounds, bounds.min)];
        warm_end.warm = warm_end.warm.min(limit);
        let cold_end = &mut raw[offset(bounds, bounds.max)];
        cold_end.cold = cold_end.cold.min(limit);

        let mut entries = [DutyPair::OFF; CHROMATICITY_LEN];
        for (entry, duty) in entries.iter_mut().zip(raw.iter()) {
            *entry = DutyPair {
                warm: saturate(duty.warm, pwm_max),
                cold: saturate(duty.cold, pwm_max),
            };
        }

        Ok(Self {
            bounds,
            pwm_max,
            entries,
        })
    }

    /// Duty values at `temperature`
    pub fn get(&self, temperature: ColorTemperature) -> Result<DutyPair, OutOfRange> {
        let index = self.bounds.offset_of(temperature)?;
        self.entries
            .get(index)
            .copied()
            .ok_or_else(|| self.bounds.out_of_range(temperature))
    }

    /// Temperatures covered by the table
    pub const fn bounds(&self) -> ColorBounds {
        self.bounds
    }

    pub const fn pwm_max(&self) -> u16 {
        self.pwm_max
    }

    /// Iterate over `(temperature, duty)` from warmest to coldest
    pub fn iter(&self) -> impl Iterator<Item = (ColorTemperature, DutyPair)> + '_ {
        (self.bounds.min..=self.bounds.max).zip(self.entries.iter().copied())
    }
}

fn validate(warm: &LedSpec, cold: &LedSpec) -> Result<ColorBounds, TableError> {
    for led in [warm, cold] {
        CHROMATICITY_BOUNDS
            .offset_of(led.temperature)
            .map_err(TableError::UnknownTemperature)?;
        if !(led.max_illumination.is_finite() && led.max_illumination > 0.0) {
            return Err(TableError::InvalidIllumination);
        }
    }
    if warm.temperature.saturating_add(1) >= cold.temperature {
        return Err(TableError::NoIntermediateRange {
            warm: warm.temperature,
            cold: cold.temperature,
        });
    }
    Ok(ColorBounds::new(warm.temperature, cold.temperature))
}

fn offset(bounds: ColorBounds, temperature: ColorTemperature) -> usize {
    (temperature - bounds.min) as usize
}

/// Truncate toward zero; negative or NaN inputs become 0
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_duty(value: f64) -> u32 {
    value as u32
}

fn saturate(value: u32, max: u16) -> u16 {
    u16::try_from(value).map_or(max, |value| value.min(max))
}
