use super::Rgb;
use crate::bounds::ColorTemperature;

/// Approximate sRGB color of a black body
///
/// `temperature` is in hundreds of Kelvin and is clamped to 1000K-40000K.
pub fn temperature_to_rgb(temperature: ColorTemperature) -> Rgb {
    let temp = f32::from(temperature).clamp(10.0, 400.0);

    let red = if temp <= 66.0 {
        255.0
    } else {
        329.698_73 * libm::powf(temp - 60.0, -0.133_204_76)
    };

    let green = if temp <= 66.0 {
        99.470_8 * libm::logf(temp) - 161.119_57
    } else {
        288.122_17 * libm::powf(temp - 60.0, -0.075_514_85)
    };

    let blue = if temp >= 66.0 {
        255.0
    } else if temp <= 19.0 {
        0.0
    } else {
        138.517_73 * libm::logf(temp - 10.0) - 305.044_8
    };

    Rgb {
        r: to_channel(red),
        g: to_channel(green),
        b: to_channel(blue),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(super) fn to_channel(value: f32) -> u8 {
    value.clamp(0.0, 255.0) as u8
}
