pub mod constants;
pub mod firmware;
pub mod icons;
pub mod packing;

use log::*;
use std::io::Write;

pub use crate::firmware::{
    convert_dir, convert_dir_with, encode, write_header, ConvertError, PackedIcon,
};
pub use crate::icons::{render, render_all, render_all_with, IconKind, RenderError};
pub use crate::packing::{classify, pack, EpdColor, PackError};

/// Sends log records to stderr, `info` and up unless `RUST_LOG` says otherwise.
///
/// Debug and trace records carry their source location.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            if record.level() >= Level::Debug {
                writeln!(
                    buf,
                    "[{} {}:{}] {}",
                    record.level(),
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0),
                    record.args()
                )
            } else {
                writeln!(buf, "[{}] {}", record.level(), record.args())
            }
        })
        .init();
}
