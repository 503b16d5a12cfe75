pub mod decoder;
pub mod encoder;
pub mod format;
pub mod naming;

pub use decoder::{convert_dir, convert_dir_with, decode, ConvertError};
pub use encoder::{encode, write_header};
pub use format::PackedIcon;
pub use naming::{resolve, IconName};
