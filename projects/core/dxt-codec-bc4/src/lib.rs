#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]
#![warn(missing_docs)]

pub mod encode;
pub mod util;

pub use encode::{encode_bc4_block, encode_bc5_block, encode_interpolated_alpha};
pub use util::{decode_bc4_block, decode_bc5_block, decode_interpolated_alpha};

#[cfg(test)]
pub(crate) mod test_prelude;
