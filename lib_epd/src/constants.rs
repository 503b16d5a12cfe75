pub const FILE_EXT: &str = "png";

/// Width every icon geometry is tuned against.
pub const REFERENCE_SIZE: u32 = 120;

/// Square edge lengths the icon generator renders, in output order.
pub const ICON_SIZES: [u32; 2] = [120, 40];

/// Default output directory of the icon generator.
pub const ICON_DIR: &str = "icons";

/// Hex literals emitted per line in the generated header.
pub const BYTES_PER_LINE: usize = 16;

pub const HEADER_GUARD: &str = "WEATHER_ICONS_H";
pub const HEADER_INCLUDE: &str = "<Arduino.h>";

// Classifier thresholds
pub const RED_MIN: u8 = 150;
pub const RED_MAX_GREEN: u8 = 100;
pub const RED_MAX_BLUE: u8 = 100;
pub const BLACK_BRIGHTNESS: f32 = 128.0;
