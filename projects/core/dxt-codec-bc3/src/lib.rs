#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]
#![warn(missing_docs)]

pub mod encode;
pub mod util;

pub use encode::encode_bc3_block;
pub use util::decode_bc3_block;
