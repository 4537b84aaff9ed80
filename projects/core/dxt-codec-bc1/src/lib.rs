#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]
#![warn(missing_docs)]

pub mod encode;
pub mod settings;
pub mod util;

pub use encode::encode_color_block;
pub use settings::{ColorEncodeSettings, EndpointStrategy, UnknownStrategyError};
pub use util::{decode_bc1_block, decode_bc1_color_block};

#[cfg(test)]
pub(crate) mod test_prelude;
