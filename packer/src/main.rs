use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lib_epd::{convert_dir_with, encode, write_header};
use log::debug;

/// Convert PNG icons to a 4bpp PROGMEM C header for e-ink displays.
#[derive(Parser, Debug)]
#[command(name = "packer", version)]
struct Args {
    /// Directory containing PNG files (e.g. icons/)
    input_dir: PathBuf,

    /// Path for the generated C header (e.g. firmware/weather_icons.h)
    output_header: PathBuf,
}

// Report lines go straight to stderr; RUST_LOG only filters diagnostics.
fn main() -> ExitCode {
    lib_epd::init_logging();
    let args = Args::parse();
    debug!("{:?}", args);

    let icons = match convert_dir_with(&args.input_dir, |icon| eprintln!("  {}", icon)) {
        Ok(icons) => icons,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let header = encode(&icons);
    match write_header(&args.output_header, &header) {
        Ok(size) => {
            eprintln!(
                "\nWrote {} icon(s) to '{}' ({} bytes).",
                icons.len(),
                args.output_header.display(),
                size
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!(
                "Error: failed to write '{}': {}",
                args.output_header.display(),
                e
            );
            ExitCode::FAILURE
        }
    }
}
