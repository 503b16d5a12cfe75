pub mod canvas;
pub mod catalog;
pub mod shapes;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::{ImageError, RgbaImage};
use log::debug;
use thiserror::Error;

pub use canvas::{Canvas, Ink};
pub use catalog::IconKind;

use crate::constants::ICON_SIZES;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Cannot create a {0}x{0} canvas")]
    InvalidSize(u32),
    #[error("Canvas pixels do not fit the image buffer")]
    BufferMismatch,
    #[error("Failed to create output directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
}

/// Draws one icon of `size` x `size` pixels.
pub fn render(kind: IconKind, size: u32) -> Result<RgbaImage, RenderError> {
    let mut canvas = Canvas::new(size)?;
    kind.draw(&mut canvas);
    debug!("Rendered {} at {}px", kind, size);
    canvas.into_image()
}

/// Writes every catalog icon at every size into `out_dir`.
///
/// The directory is created if needed. Files come out kind by kind, each
/// kind at all sizes, and are named `{kind}_{size}x{size}.png`.
///
/// # Returns
/// The paths written, in generation order.
pub fn render_all(out_dir: &Path) -> Result<Vec<PathBuf>, RenderError> {
    render_all_with(out_dir, |_| {})
}

/// Same as [`render_all`], calling `on_written` with each path right after
/// its file is saved.
pub fn render_all_with(
    out_dir: &Path,
    mut on_written: impl FnMut(&Path),
) -> Result<Vec<PathBuf>, RenderError> {
    fs::create_dir_all(out_dir).map_err(|source| RenderError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(IconKind::ALL.len() * ICON_SIZES.len());
    for kind in IconKind::ALL {
        for size in ICON_SIZES {
            let path = out_dir.join(kind.file_name(size));
            render(kind, size)?
                .save(&path)
                .map_err(|source| RenderError::Write {
                    path: path.clone(),
                    source,
                })?;
            debug!("Wrote {}", path.display());
            on_written(&path);
            written.push(path);
        }
    }

    Ok(written)
}
