use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info};

use super::format::PackedIcon;
use crate::constants::{BYTES_PER_LINE, HEADER_GUARD, HEADER_INCLUDE};
use crate::packing::EpdColor;

/// Formats bytes as indented hex literals, [`BYTES_PER_LINE`] per line.
///
/// Every line but the last ends with a comma, so the final value of the
/// array has none.
pub fn format_byte_array(data: &[u8]) -> String {
    let lines: Vec<String> = data
        .chunks(BYTES_PER_LINE)
        .map(|chunk| {
            let values: Vec<String> = chunk.iter().map(|b| format!("0x{:02x}", b)).collect();
            format!("  {}", values.join(", "))
        })
        .collect();

    lines.join(",\n")
}

/// Renders the complete C header for `icons`, in the given order.
pub fn encode(icons: &[PackedIcon]) -> String {
    info!("Starting header generation for {} icon(s)", icons.len());

    let palette: Vec<String> = EpdColor::ALL.iter().map(|c| c.to_string()).collect();

    let mut parts: Vec<String> = vec![
        "// Auto-generated weather icon data for e-ink display".to_string(),
        format!("// 7-color e-ink palette: {}", palette.join(", ")),
        String::new(),
        format!("#ifndef {}", HEADER_GUARD),
        format!("#define {}", HEADER_GUARD),
        String::new(),
        format!("#include {}", HEADER_INCLUDE),
    ];

    for icon in icons {
        let prefix = icon.constant_prefix();

        parts.push(String::new());
        parts.push(format!(
            "// {} - {}x{} pixels, 4bpp (2 pixels per byte)",
            icon.array_name, icon.width, icon.height
        ));
        parts.push(format!("const uint16_t {}_WIDTH = {};", prefix, icon.width));
        parts.push(format!("const uint16_t {}_HEIGHT = {};", prefix, icon.height));
        parts.push(format!(
            "const uint8_t {}[{}] PROGMEM = {{",
            icon.array_name,
            icon.data.len()
        ));
        parts.push(format_byte_array(&icon.data));
        parts.push("};".to_string());
        debug!("Emitted {} ({} bytes)", icon.array_name, icon.data.len());
    }

    parts.push(String::new());
    parts.push(format!("#endif // {}", HEADER_GUARD));
    parts.push(String::new());

    parts.join("\n")
}

/// Writes `contents` to `path` in one step.
///
/// The document goes to a sibling temporary file first and is then renamed
/// over `path`, so readers never see a half-written header. Missing parent
/// directories are created.
pub fn write_header(path: &Path, contents: &str) -> io::Result<u64> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, contents)?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    let size = fs::metadata(path)?.len();
    debug!("Header written to {} ({} bytes)", path.display(), size);
    Ok(size)
}
