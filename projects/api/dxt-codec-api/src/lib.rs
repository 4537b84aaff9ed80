#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]
#![warn(missing_docs)]

pub mod block;
pub mod decode;
pub mod encode;
pub mod error;
pub mod settings;
mod surface;
pub mod texture;

pub use block::{compress_block, decode_block, encode_block, reconstruct_normal_z, EncodedBlock};
pub use decode::{decode, TextureDecoder};
pub use encode::{encode, encode_volume, TextureEncoder};
pub use error::CodecError;
pub use settings::{DecodeSettings, EncodeSettings};
pub use texture::{EncodedTexture, LevelDimensions};

#[cfg(test)]
pub(crate) mod test_prelude;
