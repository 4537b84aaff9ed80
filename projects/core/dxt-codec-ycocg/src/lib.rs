#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]
#![warn(missing_docs)]

pub mod convert;
pub mod encode;
pub mod util;

pub use convert::rgb_to_ycocg;
pub use encode::{compress_ycocg_block, encode_ycocg_block, ChromaScale, UnknownChromaScaleError};
pub use util::decode_ycocg_block;
