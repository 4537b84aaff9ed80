#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]
#![warn(missing_docs)]

pub mod block_4x4;
pub mod color_565;
pub mod color_8888;
pub mod error;
pub mod extract;
pub mod format;
pub mod image;
pub mod packing;
pub mod volume;

/// Re-exports of the types almost every consumer of this crate needs.
pub mod prelude {
    pub use crate::block_4x4::Rgba4x4Block;
    pub use crate::color_565::Color565;
    pub use crate::color_8888::Color8888;
    pub use crate::error::{FormatError, ImageError};
    pub use crate::extract::{block_span, extract_block, extract_channel_block};
    pub use crate::format::{Format, FormatDescriptor, FormatRegistry, Swizzle};
    pub use crate::image::Image;
    pub use crate::packing::{join_halves, split_halves};
    pub use crate::volume::Volume;
}
