use super::kelvin::to_channel;
use super::{Rgb, temperature_to_rgb};
use crate::config::FixtureConfig;
use crate::duty_table::DutyPair;

/// Additively mix the two LED colors by their duty fractions
///
/// Each LED contributes `color * duty / pwm_max * max_illumination`.
#[allow(clippy::cast_possible_truncation)]
pub fn mix_rgb(
    warm: Rgb,
    cold: Rgb,
    duty: DutyPair,
    pwm_max: u16,
    illumination: (f64, f64),
) -> Rgb {
    if pwm_max == 0 {
        return Rgb::default();
    }
    let max = f32::from(pwm_max);
    let warm_weight = f32::from(duty.warm) / max * illumination.0 as f32;
    let cold_weight = f32::from(duty.cold) / max * illumination.1 as f32;
    let channel = |w: u8, c: u8| {
        to_channel(libm::roundf(
            f32::from(w) * warm_weight + f32::from(c) * cold_weight,
        ))
    };
    Rgb {
        r: channel(warm.r, cold.r),
        g: channel(warm.g, cold.g),
        b: channel(warm.b, cold.b),
    }
}

/// Approximate color of a module driven at `duty`
pub fn preview_color(config: &FixtureConfig, duty: DutyPair) -> Rgb {
    mix_rgb(
        temperature_to_rgb(config.warm.temperature),
        temperature_to_rgb(config.cold.temperature),
        duty,
        config.pwm_max,
        (config.warm.max_illumination, config.cold.max_illumination),
    )
}
