use std::path::PathBuf;

use crate::{decode::decode, encode::encode, error::WandError, operations::Operation};

/// Everything one invocation does: read one image, apply one transform,
/// write one image.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterPlan {
    pub input: PathBuf,
    pub output: PathBuf,
    pub operation: Operation,
}

impl FilterPlan {
    /// Decode, transform, encode. Fails before writing anything if decoding
    /// or the transform's parameter validation fails.
    pub fn execute(&self) -> Result<(), WandError> {
        let mut image = decode(&self.input)?;
        self.operation.execute(&mut image)?;
        encode(&image, &self.output)
    }
}
