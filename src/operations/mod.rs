mod blur;
mod colorblind;

use image::RgbImage;

use crate::{arg_parsers::KernelSize, colorspace::Condition, error::WandError};

/// One pixel transform, fully parameterized. An invocation applies exactly
/// one of these to one image.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Operation {
    GaussianBlur(KernelSize),
    DirectionalBlur { size: u32, angle: f32 },
    SimulateDeficiency { condition: Condition, degree: f32 },
}

impl Operation {
    pub fn execute(&self, image: &mut RgbImage) -> Result<(), WandError> {
        match self {
            Operation::GaussianBlur(size) => blur::gaussian_blur(image, *size),
            Operation::DirectionalBlur { size, angle } => {
                blur::directional_blur(image, *size, *angle)
            }
            Operation::SimulateDeficiency { condition, degree } => {
                colorblind::simulate(image, *condition, *degree)
            }
        }
    }
}
