use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lib_epd::constants::ICON_DIR;
use lib_epd::render_all_with;
use log::debug;

/// Generate the weather icon PNGs for the 3-color e-paper display.
#[derive(Parser, Debug)]
#[command(name = "icon-gen", version)]
struct Args {
    /// Directory the PNG files are written to
    #[arg(long, default_value = ICON_DIR)]
    out_dir: PathBuf,
}

fn main() -> ExitCode {
    lib_epd::init_logging();
    let args = Args::parse();
    debug!("{:?}", args);

    let written = match render_all_with(&args.out_dir, |path| {
        if let Some(name) = path.file_name() {
            println!("  created {}", name.to_string_lossy());
        }
    }) {
        Ok(written) => written,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!(
        "\n  {} icons written to {}/",
        written.len(),
        args.out_dir.display()
    );

    ExitCode::SUCCESS
}
