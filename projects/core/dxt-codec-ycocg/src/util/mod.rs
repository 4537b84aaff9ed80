//! Block decoding.

mod ycocg_decode;

pub use ycocg_decode::*;
