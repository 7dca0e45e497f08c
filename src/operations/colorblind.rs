use image::RgbImage;

use crate::colorspace::{self, Condition, LMS_TO_RGB, RGB_TO_LMS};
use crate::error::WandError;
use crate::fw_err;
use crate::kernel::quantize;

/// Rewrites every pixel through the cone-response simulation for
/// `condition`, at the given intensity.
///
/// Pixels are normalized to [0, 1], pushed through RGB -> LMS, the
/// condition matrix, and LMS -> RGB, then quantized back with an explicit
/// clamp. The clamp matters: full tritanopia drives saturated reds to a
/// blue value of roughly -3, which a bare integer cast would wrap.
pub fn simulate(image: &mut RgbImage, condition: Condition, degree: f32) -> Result<(), WandError> {
    if !(0.0..=1.0).contains(&degree) {
        return Err(fw_err!(
            InvalidParameter,
            "simulation degree must be within [0, 1], got {degree}"
        ));
    }

    // Fuse the three stages into a single matrix up front.
    let matrix = colorspace::concat(
        &LMS_TO_RGB,
        &colorspace::concat(&condition.simulation_matrix(degree), &RGB_TO_LMS),
    );

    for pixel in image.pixels_mut() {
        let rgb = [
            f32::from(pixel[0]) / 255.0,
            f32::from(pixel[1]) / 255.0,
            f32::from(pixel[2]) / 255.0,
        ];
        let simulated = colorspace::transform(&matrix, rgb);
        for channel in 0..3 {
            pixel[channel] = quantize(simulated[channel] * 255.0);
        }
    }
    Ok(())
}
