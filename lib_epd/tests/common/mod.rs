#![allow(dead_code)]

use std::path::Path;

use image::{Rgba, RgbaImage};

pub const BLACK: [u8; 4] = [0, 0, 0, 255];
pub const WHITE: [u8; 4] = [255, 255, 255, 255];
pub const RED: [u8; 4] = [255, 0, 0, 255];
pub const DARK_RED: [u8; 4] = [160, 20, 20, 255];
pub const CLEAR: [u8; 4] = [0, 0, 0, 0];

/// Three-pixel row used for the odd-width packing case.
pub const BWR_ROW: [[u8; 4]; 3] = [BLACK, WHITE, RED];

/// Writes a PNG whose rows all repeat `row`.
pub fn write_png(dir: &Path, file_name: &str, row: &[[u8; 4]], height: u32) {
    let width = row.len() as u32;
    let img = RgbaImage::from_fn(width, height, |x, _| Rgba(row[x as usize]));
    img.save(dir.join(file_name)).unwrap();
}

/// Writes a solid `size` x `size` PNG.
pub fn write_solid_png(dir: &Path, file_name: &str, size: u32, color: [u8; 4]) {
    let row = vec![color; size as usize];
    write_png(dir, file_name, &row, size);
}
