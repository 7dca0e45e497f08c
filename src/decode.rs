use std::path::Path;

use image::{ImageReader, RgbImage};

use crate::{error::WandError, fw_err};

/// Reads and decodes one image, guessing the format from file contents.
///
/// Every input is standardized to 8-bit RGB here, at the codec boundary:
/// extra channels such as alpha are dropped and wider sample types are
/// narrowed, so the transforms only ever see one pixel layout.
pub fn decode(path: &Path) -> Result<RgbImage, WandError> {
    let reader = ImageReader::open(path)
        .map_err(|e| fw_err!(Decode, "unable to open image `{}': {e}", path.display()))?
        .with_guessed_format()
        .map_err(|e| fw_err!(Decode, "unable to read image `{}': {e}", path.display()))?;
    let image = reader
        .decode()
        .map_err(|e| fw_err!(Decode, "unable to decode image `{}': {e}", path.display()))?;
    Ok(image.to_rgb8())
}
