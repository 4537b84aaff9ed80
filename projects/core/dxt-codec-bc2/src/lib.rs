#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]
#![warn(missing_docs)]

pub mod encode;
pub mod util;

pub use encode::{encode_bc2_block, encode_explicit_alpha};
pub use util::{decode_bc2_block, decode_explicit_alpha};
