use super::palette::EpdColor;

/// Fills the low nibble of the last byte in an odd-width row.
pub const ROW_FILLER: EpdColor = EpdColor::White;

/// Number of packed bytes needed for one row of `width` pixels.
pub fn row_bytes(width: usize) -> usize {
    width.div_ceil(2)
}

/// Packs palette indices two per byte, high nibble first.
///
/// `indices` is row-major and must hold `width * height` entries. Every row
/// is packed on its own, so an odd-width row ends with a byte whose low
/// nibble is [`ROW_FILLER`].
pub fn pack_indices(width: usize, indices: &[EpdColor]) -> Vec<u8> {
    if width == 0 {
        return Vec::new();
    }

    let height = indices.len() / width;
    let mut packed = Vec::with_capacity(height * row_bytes(width));

    for row in indices.chunks_exact(width) {
        for pair in row.chunks(2) {
            let hi = pair[0];
            let lo = pair.get(1).copied().unwrap_or(ROW_FILLER);
            packed.push((hi.nibble() << 4) | lo.nibble());
        }
    }

    packed
}
