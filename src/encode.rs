use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use image::{ImageFormat, RgbImage};

use crate::{error::WandError, fw_err, fw_try};

/// Encodes the image to `path`, with the format inferred from the file
/// extension. Missing directories on the output path are created.
pub fn encode(image: &RgbImage, path: &Path) -> Result<(), WandError> {
    let format = ImageFormat::from_path(path).map_err(|_| {
        fw_err!(
            Write,
            "no encode delegate for output path `{}'",
            path.display()
        )
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                fw_err!(
                    Write,
                    "unable to create directory `{}': {e}",
                    parent.display()
                )
            })?;
        }
    }

    // `File::create` automatically truncates (overwrites) the file if it exists.
    let file = File::create(path)
        .map_err(|e| fw_err!(Write, "unable to open image `{}': {e}", path.display()))?;
    let mut writer = BufWriter::new(file);
    image
        .write_to(&mut writer, format)
        .map_err(|e| fw_err!(Write, "unable to write image `{}': {e}", path.display()))?;

    // The buffers would also be flushed when the writer goes out of scope,
    // but that would not report errors. This does.
    fw_try!(Write, writer.flush());

    Ok(())
}
