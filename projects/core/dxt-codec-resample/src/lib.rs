#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]
#![warn(missing_docs)]

extern crate alloc;

pub mod filter;
pub mod gamma;
pub mod mip;
pub mod scale;

pub use filter::{FilterKind, UnknownFilterError};
pub use gamma::GammaCurve;
pub use mip::{
    generate_mip_chain, generate_mip_chain_levels, generate_volume_mip_chain,
    generate_volume_mip_chain_levels, mip_level_count, next_level_size, volume_mip_level_count,
    MipChain,
};
pub use scale::{scale_image, scale_volume};
