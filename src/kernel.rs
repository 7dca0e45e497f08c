//! Convolution kernels and the convolution primitives themselves.
//!
//! Everything in this module works on `f32` weights and quantizes back to
//! 8 bits exactly once, through [`quantize`], so intermediate values can
//! never wrap. Borders are handled by replicating edge pixels.

use image::{Rgb, RgbImage};

use crate::{error::WandError, fw_err};

/// A square convolution kernel whose weights sum to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    data: Vec<f32>,
    size: u32,
}

impl Kernel {
    /// Builds a motion-blur kernel: a one-pixel-wide line segment of length
    /// `size` through the kernel center, at `angle` degrees counter-clockwise
    /// from horizontal. The angle is interpreted modulo 360.
    ///
    /// Cell weights are the bilinear coverage of the segment, so the streak
    /// stays smooth at any angle; at 0 degrees all mass sits on the central
    /// row, and `size == 1` yields the identity kernel `[[1.0]]`.
    pub fn line(size: u32, angle: f32) -> Result<Self, WandError> {
        if size == 0 {
            return Err(fw_err!(
                InvalidParameter,
                "kernel size must be a positive integer, got 0"
            ));
        }
        let n = size as usize;
        let center = (size - 1) as f32 / 2.0;
        let theta = angle.rem_euclid(360.0).to_radians();
        let (sin, cos) = theta.sin_cos();
        let mut data = vec![0.0f32; n * n];
        for y in 0..n {
            for x in 0..n {
                let dx = x as f32 - center;
                let dy = y as f32 - center;
                // Cell position in the segment's frame: `along` runs down the
                // streak, `across` is the perpendicular distance to it. Image
                // y grows downwards, so positive angles turn counter-clockwise
                // on screen.
                let along = dx * cos - dy * sin;
                let across = dx * sin + dy * cos;
                if along.abs() <= center + 0.5 {
                    data[y * n + x] = (1.0 - across.abs()).max(0.0);
                }
            }
        }
        Self::normalized(data, size)
    }

    /// Renormalizes raw weights to sum 1. A zero sum means the caller built a
    /// degenerate kernel; refuse it instead of dividing by zero.
    fn normalized(mut data: Vec<f32>, size: u32) -> Result<Self, WandError> {
        let sum: f32 = data.iter().sum();
        if sum <= f32::EPSILON {
            return Err(fw_err!(
                InvalidParameter,
                "degenerate kernel: weights sum to zero"
            ));
        }
        for weight in &mut data {
            *weight /= sum;
        }
        Ok(Self { data, size })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }

    /// The weight at kernel position (`x`, `y`), row-major.
    #[inline]
    pub fn at(&self, x: u32, y: u32) -> f32 {
        self.data[(y * self.size + x) as usize]
    }
}

/// Builds a normalized 1-D Gaussian kernel of the given size, which must be
/// a positive odd integer.
///
/// Sigma derives from the size with the usual convention for blur radii,
/// `0.3 * ((size - 1) * 0.5 - 1) + 0.8`, the same rule OpenCV applies when
/// no explicit sigma is given.
pub fn gaussian_kernel_1d(size: u32) -> Result<Vec<f32>, WandError> {
    if size == 0 || size % 2 == 0 {
        return Err(fw_err!(
            InvalidParameter,
            "Gaussian kernel size must be a positive odd integer, got {size}"
        ));
    }
    let sigma = 0.3 * ((size - 1) as f32 * 0.5 - 1.0) + 0.8;
    let center = (size / 2) as f32;
    let mut weights: Vec<f32> = (0..size)
        .map(|i| {
            let distance = i as f32 - center;
            (-distance * distance / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    let sum: f32 = weights.iter().sum();
    for weight in &mut weights {
        *weight /= sum;
    }
    Ok(weights)
}

/// Convolves every channel with `kernel`. The output has the same dimensions
/// as the input; where the kernel extends past the image, edge pixels are
/// replicated.
pub fn convolve(image: &RgbImage, kernel: &Kernel) -> RgbImage {
    let (width, height) = image.dimensions();
    let half = (kernel.size() / 2) as i64;
    let mut output = RgbImage::new(width, height);
    for (x, y, pixel) in output.enumerate_pixels_mut() {
        let mut acc = [0.0f32; 3];
        for ky in 0..kernel.size() {
            for kx in 0..kernel.size() {
                let sx = clamp_index(x as i64 + kx as i64 - half, width);
                let sy = clamp_index(y as i64 + ky as i64 - half, height);
                let weight = kernel.at(kx, ky);
                let source = image.get_pixel(sx, sy);
                for channel in 0..3 {
                    acc[channel] += weight * f32::from(source[channel]);
                }
            }
        }
        *pixel = Rgb(acc.map(quantize));
    }
    output
}

/// Applies a separable filter: `horizontal` across rows, then `vertical`
/// down columns. The intermediate plane stays in `f32`; quantization
/// happens once at the end.
pub fn separable_filter(image: &RgbImage, horizontal: &[f32], vertical: &[f32]) -> RgbImage {
    let (width, height) = image.dimensions();
    let row_len = width as usize * 3;
    let mut plane = vec![0.0f32; height as usize * row_len];

    let h_half = (horizontal.len() / 2) as i64;
    for y in 0..height {
        for x in 0..width {
            let mut acc = [0.0f32; 3];
            for (i, weight) in horizontal.iter().enumerate() {
                let sx = clamp_index(x as i64 + i as i64 - h_half, width);
                let source = image.get_pixel(sx, y);
                for channel in 0..3 {
                    acc[channel] += weight * f32::from(source[channel]);
                }
            }
            let base = y as usize * row_len + x as usize * 3;
            plane[base..base + 3].copy_from_slice(&acc);
        }
    }

    let v_half = (vertical.len() / 2) as i64;
    let mut output = RgbImage::new(width, height);
    for (x, y, pixel) in output.enumerate_pixels_mut() {
        let mut acc = [0.0f32; 3];
        for (i, weight) in vertical.iter().enumerate() {
            let sy = clamp_index(y as i64 + i as i64 - v_half, height);
            let base = sy as usize * row_len + x as usize * 3;
            for channel in 0..3 {
                acc[channel] += weight * plane[base + channel];
            }
        }
        *pixel = Rgb(acc.map(quantize));
    }
    output
}

/// Replicate-edge addressing: out-of-range indices snap to the nearest edge.
#[inline]
fn clamp_index(index: i64, len: u32) -> u32 {
    index.clamp(0, i64::from(len) - 1) as u32
}

/// The one quantization step back to 8 bits: clamp to [0, 255], then round.
/// Out-of-range values saturate instead of wrapping.
#[inline]
pub(crate) fn quantize(value: f32) -> u8 {
    value.clamp(0.0, 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn line_kernel_sums_to_one(size: u8, angle: f32) -> bool {
        let size = u32::from(size % 64) + 1;
        let angle = if angle.is_finite() { angle } else { 0.0 };
        let kernel = Kernel::line(size, angle).unwrap();
        (kernel.sum() - 1.0).abs() < 1e-3
    }

    #[test]
    fn line_kernel_at_zero_degrees_is_a_horizontal_streak() {
        let kernel = Kernel::line(5, 0.0).unwrap();
        for y in 0..5 {
            for x in 0..5 {
                let expected = if y == 2 { 0.2 } else { 0.0 };
                assert!((kernel.at(x, y) - expected).abs() < 1e-6, "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn line_kernel_of_size_one_is_identity() {
        let kernel = Kernel::line(1, 30.0).unwrap();
        assert_eq!(kernel.size(), 1);
        assert_eq!(kernel.at(0, 0), 1.0);
    }

    #[test]
    fn line_kernel_angle_wraps_modulo_360() {
        assert_eq!(
            Kernel::line(7, 45.0).unwrap(),
            Kernel::line(7, 405.0).unwrap()
        );
    }

    #[test]
    fn line_kernel_rejects_zero_size() {
        assert!(matches!(
            Kernel::line(0, 45.0),
            Err(crate::error::WandError::InvalidParameter(_))
        ));
    }

    #[test]
    fn gaussian_kernel_is_normalized_and_symmetric() {
        let weights = gaussian_kernel_1d(9).unwrap();
        let sum: f32 = weights.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
        for i in 0..weights.len() {
            assert_eq!(weights[i], weights[weights.len() - 1 - i]);
        }
    }

    #[test]
    fn gaussian_kernel_of_size_one_is_identity() {
        assert_eq!(gaussian_kernel_1d(1).unwrap(), vec![1.0]);
    }

    #[test]
    fn gaussian_kernel_rejects_even_and_zero_sizes() {
        for size in [0, 2, 8] {
            assert!(matches!(
                gaussian_kernel_1d(size),
                Err(crate::error::WandError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn convolve_keeps_uniform_images_unchanged() {
        let input = RgbImage::from_pixel(20, 15, Rgb([128, 64, 200]));
        let kernel = Kernel::line(7, 30.0).unwrap();
        assert_eq!(convolve(&input, &kernel), input);
    }

    #[test]
    fn convolve_preserves_dimensions() {
        let input = RgbImage::from_fn(33, 17, |x, y| Rgb([x as u8, y as u8, 7]));
        let kernel = Kernel::line(9, 120.0).unwrap();
        assert_eq!(convolve(&input, &kernel).dimensions(), (33, 17));
    }

    #[test]
    fn separable_filter_preserves_dimensions() {
        let input = RgbImage::from_fn(31, 12, |x, y| Rgb([x as u8, y as u8, 90]));
        let horizontal = gaussian_kernel_1d(9).unwrap();
        let vertical = gaussian_kernel_1d(3).unwrap();
        assert_eq!(
            separable_filter(&input, &horizontal, &vertical).dimensions(),
            (31, 12)
        );
    }

    #[test]
    fn quantize_saturates_instead_of_wrapping() {
        assert_eq!(quantize(-5.0), 0);
        assert_eq!(quantize(300.0), 255);
        assert_eq!(quantize(127.6), 128);
        assert_eq!(quantize(0.4), 0);
    }
}
