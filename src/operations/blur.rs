use image::RgbImage;

use crate::arg_parsers::KernelSize;
use crate::error::WandError;
use crate::kernel::{self, Kernel};

/// Isotropic Gaussian smoothing with separate horizontal and vertical kernel
/// sizes. `size` is odd in both axes by construction.
pub fn gaussian_blur(image: &mut RgbImage, size: KernelSize) -> Result<(), WandError> {
    let horizontal = kernel::gaussian_kernel_1d(size.width)?;
    let vertical = kernel::gaussian_kernel_1d(size.height)?;
    *image = kernel::separable_filter(image, &horizontal, &vertical);
    Ok(())
}

/// Motion-style blur along a line at `angle` degrees. Larger `size` makes a
/// longer, more visible streak.
pub fn directional_blur(image: &mut RgbImage, size: u32, angle: f32) -> Result<(), WandError> {
    let kernel = Kernel::line(size, angle)?;
    *image = kernel::convolve(image, &kernel);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn gaussian_blur_leaves_solid_gray_unchanged() {
        let original = RgbImage::from_pixel(100, 100, Rgb([128, 128, 128]));
        let mut image = original.clone();
        gaussian_blur(&mut image, KernelSize::new(5, 5).unwrap()).unwrap();
        assert_eq!(image, original);
    }

    #[test]
    fn gaussian_blur_preserves_dimensions() {
        let mut image = RgbImage::from_fn(40, 25, |x, y| Rgb([x as u8, y as u8, 33]));
        gaussian_blur(&mut image, KernelSize::new(9, 3).unwrap()).unwrap();
        assert_eq!(image.dimensions(), (40, 25));
    }

    #[test]
    fn directional_blur_with_size_one_is_the_identity() {
        let original = RgbImage::from_fn(16, 16, |x, y| Rgb([(x * 16) as u8, (y * 16) as u8, 5]));
        let mut image = original.clone();
        directional_blur(&mut image, 1, 45.0).unwrap();
        assert_eq!(image, original);
    }

    #[test]
    fn directional_blur_rejects_zero_size() {
        let mut image = RgbImage::from_pixel(4, 4, Rgb([1, 2, 3]));
        assert!(matches!(
            directional_blur(&mut image, 0, 45.0),
            Err(WandError::InvalidParameter(_))
        ));
    }

    #[test]
    fn directional_blur_smears_along_the_streak_only() {
        // A single bright column, blurred horizontally, must bleed into
        // neighboring columns but leave each row uniform in itself.
        let mut image = RgbImage::from_fn(15, 15, |x, _| {
            if x == 7 {
                Rgb([255, 255, 255])
            } else {
                Rgb([0, 0, 0])
            }
        });
        directional_blur(&mut image, 5, 0.0).unwrap();
        assert!(image.get_pixel(6, 7)[0] > 0);
        assert!(image.get_pixel(8, 7)[0] > 0);
        for y in 0..15 {
            assert_eq!(image.get_pixel(7, y), image.get_pixel(7, 0));
        }
    }
}
