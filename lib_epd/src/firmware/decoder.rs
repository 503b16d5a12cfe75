use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::ImageError;
use log::{debug, error, warn};
use thiserror::Error;

use super::format::PackedIcon;
use super::naming::resolve;
use crate::constants::FILE_EXT;
use crate::packing::{pack, PackError};

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("'{0}' is not a directory.")]
    NotADirectory(PathBuf),
    #[error("no PNG files found in '{0}'.")]
    NoPngFiles(PathBuf),
    #[error("no valid icons were processed.")]
    NoValidIcons,
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to decode '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
    #[error("Failed to pack image data")]
    PackFailed(#[from] PackError),
}

/// Lists the PNG files directly inside `dir`, sorted by file name.
///
/// Hidden files (leading `.`) are left out.
pub fn list_png_files(dir: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    let io_err = |source| ConvertError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let hidden = path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().starts_with('.'));
        let is_png = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(FILE_EXT));
        if is_png && !hidden && path.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Reads one PNG and packs it under the array name its file name implies.
///
/// # Returns
/// `Ok(None)` if the file name does not follow `<base>_<W>x<H>.png`.
///
/// # Errors
/// - `ConvertError::Decode` if the file cannot be read as an image
/// - `ConvertError::PackFailed` if the decoded buffer is inconsistent
pub fn decode(path: &Path) -> Result<Option<PackedIcon>, ConvertError> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let Some(name) = resolve(&file_name) else {
        return Ok(None);
    };

    let img = image::open(path).map_err(|source| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = img.into_rgba8();
    let (width, height) = rgba.dimensions();
    debug!("Decoded {}: {}x{}", file_name, width, height);

    if (width, height) != (name.width, name.height) {
        warn!(
            "'{}' is {}x{} but filename says {}x{}. Using actual dimensions.",
            file_name, width, height, name.width, name.height
        );
    }

    let data = pack(width, height, rgba.as_raw())?;
    Ok(Some(PackedIcon::new(name.array_name, width, height, data)))
}

/// Packs every conforming PNG in `input_dir`, in file name order.
///
/// Files with an unexpected name or that fail to decode are skipped with
/// a warning.
///
/// # Errors
/// - `ConvertError::NotADirectory` if `input_dir` is not a directory
/// - `ConvertError::NoPngFiles` if it holds no `.png` files
/// - `ConvertError::NoValidIcons` if none of them could be packed
pub fn convert_dir(input_dir: &Path) -> Result<Vec<PackedIcon>, ConvertError> {
    convert_dir_with(input_dir, |_| {})
}

/// Same as [`convert_dir`], calling `on_packed` with each icon as soon as it
/// is packed.
pub fn convert_dir_with(
    input_dir: &Path,
    mut on_packed: impl FnMut(&PackedIcon),
) -> Result<Vec<PackedIcon>, ConvertError> {
    if !input_dir.is_dir() {
        error!("'{}' is not a directory", input_dir.display());
        return Err(ConvertError::NotADirectory(input_dir.to_path_buf()));
    }

    let files = list_png_files(input_dir)?;
    if files.is_empty() {
        error!("No PNG files found in '{}'", input_dir.display());
        return Err(ConvertError::NoPngFiles(input_dir.to_path_buf()));
    }
    debug!("Found {} PNG file(s)", files.len());

    let mut icons = Vec::with_capacity(files.len());
    for path in &files {
        let display_name = path.file_name().unwrap_or_default().to_string_lossy();

        match decode(path) {
            Ok(Some(icon)) => {
                debug!("Packed {}", icon);
                on_packed(&icon);
                icons.push(icon);
            }
            Ok(None) => {
                warn!(
                    "skipping '{}' (unexpected filename format).",
                    display_name
                );
            }
            Err(ConvertError::Decode { source, .. }) => {
                warn!("skipping '{}' ({}).", display_name, source);
            }
            Err(e) => return Err(e),
        }
    }

    if icons.is_empty() {
        error!("No valid icons in '{}'", input_dir.display());
        return Err(ConvertError::NoValidIcons);
    }

    Ok(icons)
}
