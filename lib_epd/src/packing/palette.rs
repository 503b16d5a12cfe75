use std::fmt;

use crate::constants::{BLACK_BRIGHTNESS, RED_MAX_BLUE, RED_MAX_GREEN, RED_MIN};

/// Palette index understood by the 7-color e-ink controller.
///
/// Only `Black`, `White` and `Red` are produced by [`classify`]; the rest
/// exist so the generated header can document the full controller palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EpdColor {
    Black = 0,
    White = 1,
    Green = 2,
    Blue = 3,
    Red = 4,
    Yellow = 5,
    Orange = 6,
}

impl EpdColor {
    pub const ALL: [EpdColor; 7] = [
        EpdColor::Black,
        EpdColor::White,
        EpdColor::Green,
        EpdColor::Blue,
        EpdColor::Red,
        EpdColor::Yellow,
        EpdColor::Orange,
    ];

    /// 4-bit value written into the packed byte stream.
    pub fn nibble(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            EpdColor::Black => "BLACK",
            EpdColor::White => "WHITE",
            EpdColor::Green => "GREEN",
            EpdColor::Blue => "BLUE",
            EpdColor::Red => "RED",
            EpdColor::Yellow => "YELLOW",
            EpdColor::Orange => "ORANGE",
        }
    }
}

impl fmt::Display for EpdColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name(), self.nibble())
    }
}

/// Maps an RGBA pixel to a palette index.
///
/// The rules are evaluated in order and the first match wins:
/// 1. fully transparent pixels are background (`White`)
/// 2. strong red with weak green and blue is `Red`
/// 3. an average brightness below 128 is `Black`
/// 4. everything else is `White`
///
/// Red has to be tested before brightness, otherwise dark reds end up black.
pub fn classify(r: u8, g: u8, b: u8, a: u8) -> EpdColor {
    if a == 0 {
        return EpdColor::White;
    }

    if r > RED_MIN && g < RED_MAX_GREEN && b < RED_MAX_BLUE {
        return EpdColor::Red;
    }

    let brightness = (r as f32 + g as f32 + b as f32) / 3.0;
    if brightness < BLACK_BRIGHTNESS {
        return EpdColor::Black;
    }

    EpdColor::White
}

/// Classifies a raw RGBA buffer, one index per pixel.
///
/// Trailing bytes that do not form a whole pixel are ignored; callers that
/// care validate the length beforehand.
pub fn classify_rgba(rgba: &[u8]) -> Vec<EpdColor> {
    rgba.chunks_exact(4)
        .map(|px| classify(px[0], px[1], px[2], px[3]))
        .collect()
}
