use std::fmt;

/// One icon as it is emitted into the firmware header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedIcon {
    pub array_name: String,
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl PackedIcon {
    pub fn new(array_name: impl Into<String>, width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            array_name: array_name.into(),
            width,
            height,
            data,
        }
    }

    /// Prefix of the `_WIDTH` / `_HEIGHT` constants.
    pub fn constant_prefix(&self) -> String {
        self.array_name.to_uppercase()
    }
}

/// Progress line printed for each packed icon.
impl fmt::Display for PackedIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}x{} -> {} bytes",
            self.array_name,
            self.width,
            self.height,
            self.data.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packing::row_bytes;

    #[test]
    fn test_constant_prefix() {
        let icon = PackedIcon::new("icon_partly_cloudy_small", 40, 40, vec![0x11; 800]);
        assert_eq!(icon.constant_prefix(), "ICON_PARTLY_CLOUDY_SMALL");
    }

    #[test]
    fn test_report_line() {
        let data = vec![0x11; 17 * row_bytes(33)];
        let icon = PackedIcon::new("icon_foo_33x17", 33, 17, data);
        assert_eq!(icon.to_string(), "icon_foo_33x17: 33x17 -> 289 bytes");
    }
}
