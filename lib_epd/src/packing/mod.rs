pub mod nibble;
pub mod palette;

use log::{debug, error};
use thiserror::Error;

pub use nibble::{pack_indices, row_bytes};
pub use palette::{classify, classify_rgba, EpdColor};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PackError {
    #[error("Invalid pixel data length: expected {expected} bytes for {width}x{height} RGBA, got {actual}")]
    InvalidPixelDataLength {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Converts an RGBA buffer into the controller's 4bpp layout.
///
/// # Parameters
/// - `width`, `height`: image dimensions in pixels.
/// - `rgba`: row-major pixel data, 4 bytes per pixel.
///
/// # Returns
/// `height * ceil(width / 2)` bytes, two pixels per byte.
///
/// # Errors
/// - Returns `PackError::InvalidPixelDataLength` if `rgba` is not exactly
///   `width * height * 4` bytes long.
pub fn pack(width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>, PackError> {
    let expected = width as usize * height as usize * 4;
    if rgba.len() != expected {
        error!(
            "Pixel buffer holds {} bytes, {}x{} needs {}",
            rgba.len(),
            width,
            height,
            expected
        );
        return Err(PackError::InvalidPixelDataLength {
            width,
            height,
            expected,
            actual: rgba.len(),
        });
    }

    let indices = classify_rgba(rgba);
    let packed = pack_indices(width as usize, &indices);
    debug!(
        "Packed {}x{} pixels into {} bytes",
        width,
        height,
        packed.len()
    );

    Ok(packed)
}
