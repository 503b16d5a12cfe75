use crate::constants::FILE_EXT;

/// Friendly suffixes for the sizes the icon generator produces.
const SIZE_SUFFIX: [((u32, u32), &str); 2] = [((120, 120), "large"), ((40, 40), "small")];

/// Array name and declared size parsed from a `<base>_<W>x<H>.png` file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconName {
    pub array_name: String,
    pub width: u32,
    pub height: u32,
}

/// Suffix used in the array name for a `width` x `height` image.
///
/// Unknown sizes fall back to `WxH` so no icon is silently dropped.
pub fn size_suffix(width: u32, height: u32) -> String {
    SIZE_SUFFIX
        .iter()
        .find(|(dims, _)| *dims == (width, height))
        .map(|(_, suffix)| suffix.to_string())
        .unwrap_or_else(|| format!("{}x{}", width, height))
}

/// Parses a file name like `partly_cloudy_120x120.png`.
///
/// The last underscore separates the base from the dimensions. The `x`
/// and the extension match case-insensitively.
///
/// # Returns
/// `None` when the name does not follow the convention.
pub fn resolve(file_name: &str) -> Option<IconName> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if !ext.eq_ignore_ascii_case(FILE_EXT) {
        return None;
    }

    let (base, dims) = stem.rsplit_once('_')?;
    if base.is_empty() {
        return None;
    }

    let (w, h) = dims.split_once(|c: char| c == 'x' || c == 'X')?;
    let width = parse_dimension(w)?;
    let height = parse_dimension(h)?;

    Some(IconName {
        array_name: format!("icon_{}_{}", base, size_suffix(width, height)),
        width,
        height,
    })
}

fn parse_dimension(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
