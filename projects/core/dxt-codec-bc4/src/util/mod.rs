//! Block decoding.

mod bc4_decode;

pub use bc4_decode::*;
