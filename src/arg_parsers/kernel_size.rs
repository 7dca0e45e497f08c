use crate::{error::WandError, fw_err};

/// Width and height of a Gaussian blur kernel. Both axes must be positive
/// odd integers; the constructor enforces it, so a `KernelSize` that exists
/// is always usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelSize {
    pub width: u32,
    pub height: u32,
}

impl KernelSize {
    pub fn new(width: u32, height: u32) -> Result<Self, WandError> {
        for (axis, value) in [("width", width), ("height", height)] {
            if value == 0 || value % 2 == 0 {
                return Err(fw_err!(
                    InvalidParameter,
                    "kernel {axis} must be a positive odd integer, got {value}"
                ));
            }
        }
        Ok(Self { width, height })
    }
}

impl Default for KernelSize {
    fn default() -> Self {
        Self {
            width: 21,
            height: 21,
        }
    }
}
