mod common;

use std::fs;

use common::{write_png, write_solid_png, BLACK, BWR_ROW, CLEAR, DARK_RED, RED, WHITE};
use lib_epd::{convert_dir, convert_dir_with, encode, write_header, ConvertError};
use tempfile::tempdir;

#[test]
fn test_convert_odd_width_icon() {
    let dir = tempdir().unwrap();
    write_png(dir.path(), "bolt_3x2.png", &BWR_ROW, 2);

    let icons = convert_dir(dir.path()).unwrap();
    assert_eq!(icons.len(), 1);

    let icon = &icons[0];
    assert_eq!(icon.array_name, "icon_bolt_3x2");
    assert_eq!((icon.width, icon.height), (3, 2));
    assert_eq!(icon.data, vec![0x01, 0x41, 0x01, 0x41]);
}

#[test]
fn test_convert_sorted_by_file_name() {
    let dir = tempdir().unwrap();
    write_solid_png(dir.path(), "snow_40x40.png", 40, WHITE);
    write_solid_png(dir.path(), "clear_120x120.png", 120, RED);
    write_solid_png(dir.path(), "rain_40x40.png", 40, BLACK);

    let icons = convert_dir(dir.path()).unwrap();
    let names: Vec<&str> = icons.iter().map(|i| i.array_name.as_str()).collect();
    assert_eq!(
        names,
        vec!["icon_clear_large", "icon_rain_small", "icon_snow_small"]
    );

    assert_eq!(icons[0].data.len(), 120 * 60);
    assert!(icons[0].data.iter().all(|&b| b == 0x44));
    assert!(icons[1].data.iter().all(|&b| b == 0x00));
    assert!(icons[2].data.iter().all(|&b| b == 0x11));
}

#[test]
fn test_convert_classifies_special_pixels() {
    let dir = tempdir().unwrap();
    write_png(dir.path(), "mix_4x1.png", &[CLEAR, DARK_RED, [60, 60, 60, 255], WHITE], 1);

    let icons = convert_dir(dir.path()).unwrap();
    assert_eq!(icons[0].data, vec![0x14, 0x01]);
}

#[test]
fn test_convert_skips_bad_names() {
    let dir = tempdir().unwrap();
    write_solid_png(dir.path(), "notes.png", 4, BLACK);
    write_solid_png(dir.path(), "fog_40x40.png", 40, WHITE);
    fs::write(dir.path().join("readme.txt"), "not an icon").unwrap();

    let icons = convert_dir(dir.path()).unwrap();
    assert_eq!(icons.len(), 1);
    assert_eq!(icons[0].array_name, "icon_fog_small");
}

#[test]
fn test_convert_ignores_hidden_files() {
    let dir = tempdir().unwrap();
    write_solid_png(dir.path(), ".foo_1x1.png", 1, BLACK);
    write_solid_png(dir.path(), "fog_40x40.png", 40, WHITE);

    let icons = convert_dir(dir.path()).unwrap();
    assert_eq!(icons.len(), 1);
    assert_eq!(icons[0].array_name, "icon_fog_small");
}

#[test]
fn test_convert_only_hidden_files() {
    let dir = tempdir().unwrap();
    write_solid_png(dir.path(), ".foo_1x1.png", 1, BLACK);
    assert!(matches!(
        convert_dir(dir.path()),
        Err(ConvertError::NoPngFiles(_))
    ));
}

#[test]
fn test_convert_reports_each_packed_icon() {
    let dir = tempdir().unwrap();
    write_png(dir.path(), "bolt_3x2.png", &BWR_ROW, 2);
    write_solid_png(dir.path(), "notes.png", 4, BLACK);
    write_solid_png(dir.path(), "rain_40x40.png", 40, BLACK);

    let mut lines = Vec::new();
    let icons = convert_dir_with(dir.path(), |icon| lines.push(icon.to_string())).unwrap();
    assert_eq!(icons.len(), 2);
    assert_eq!(
        lines,
        vec![
            "icon_bolt_3x2: 3x2 -> 4 bytes",
            "icon_rain_small: 40x40 -> 800 bytes"
        ]
    );
}

#[test]
fn test_convert_skips_undecodable_png() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("broken_40x40.png"), b"definitely not a png").unwrap();
    write_solid_png(dir.path(), "fog_40x40.png", 40, WHITE);

    let icons = convert_dir(dir.path()).unwrap();
    assert_eq!(icons.len(), 1);
    assert_eq!(icons[0].array_name, "icon_fog_small");
}

#[test]
fn test_convert_dimension_mismatch_uses_actual_size() {
    let dir = tempdir().unwrap();
    write_solid_png(dir.path(), "clear_120x120.png", 10, BLACK);

    let icons = convert_dir(dir.path()).unwrap();
    assert_eq!(icons[0].array_name, "icon_clear_large");
    assert_eq!((icons[0].width, icons[0].height), (10, 10));
    assert_eq!(icons[0].data.len(), 50);
}

#[test]
fn test_convert_uppercase_extension() {
    let dir = tempdir().unwrap();
    write_solid_png(dir.path(), "tmp_2x2.png", 2, RED);
    fs::rename(dir.path().join("tmp_2x2.png"), dir.path().join("hot_2x2.PNG")).unwrap();

    let icons = convert_dir(dir.path()).unwrap();
    assert_eq!(icons[0].array_name, "icon_hot_2x2");
    assert_eq!(icons[0].data, vec![0x44, 0x44]);
}

#[test]
fn test_convert_missing_directory() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");
    assert!(matches!(
        convert_dir(&missing),
        Err(ConvertError::NotADirectory(_))
    ));
}

#[test]
fn test_convert_file_is_not_a_directory() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("icons");
    fs::write(&file, "").unwrap();
    assert!(matches!(
        convert_dir(&file),
        Err(ConvertError::NotADirectory(_))
    ));
}

#[test]
fn test_convert_empty_directory() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("clear_120x120.bmp"), "").unwrap();
    assert!(matches!(
        convert_dir(dir.path()),
        Err(ConvertError::NoPngFiles(_))
    ));
}

#[test]
fn test_convert_no_valid_icons() {
    let dir = tempdir().unwrap();
    write_solid_png(dir.path(), "logo.png", 4, BLACK);
    assert!(matches!(
        convert_dir(dir.path()),
        Err(ConvertError::NoValidIcons)
    ));
}

#[test]
fn test_header_is_deterministic() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("icons");
    fs::create_dir(&input).unwrap();
    write_png(&input, "bolt_3x2.png", &BWR_ROW, 2);
    write_solid_png(&input, "rain_40x40.png", 40, BLACK);

    let out_a = dir.path().join("a").join("weather_icons.h");
    let out_b = dir.path().join("b").join("weather_icons.h");

    let size = write_header(&out_a, &encode(&convert_dir(&input).unwrap())).unwrap();
    write_header(&out_b, &encode(&convert_dir(&input).unwrap())).unwrap();

    let a = fs::read(&out_a).unwrap();
    let b = fs::read(&out_b).unwrap();
    assert_eq!(a, b);
    assert_eq!(size, a.len() as u64);

    let text = String::from_utf8(a).unwrap();
    let bolt = text.find("icon_bolt_3x2[4]").unwrap();
    let rain = text.find("icon_rain_small[800]").unwrap();
    assert!(bolt < rain);
    assert!(text.contains("const uint16_t ICON_RAIN_SMALL_WIDTH = 40;"));
    assert!(text.contains("  0x01, 0x41, 0x01, 0x41\n};"));
    assert!(!dir.path().join("a").join("weather_icons.h.tmp").exists());
}

#[test]
fn test_write_header_replaces_existing_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("weather_icons.h");
    fs::write(&out, "stale").unwrap();

    write_header(&out, "fresh\n").unwrap();
    assert_eq!(fs::read_to_string(&out).unwrap(), "fresh\n");
}
