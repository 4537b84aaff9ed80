#![no_main]

// Compares our BC3 decoder (interpolated alpha + colour) against rgbcx-sys.

use core::mem;
use dxt_codec_bc3::decode_bc3_block;
use dxt_codec_common::block_4x4::Rgba4x4Block;
use dxt_codec_common::{color_565::Color565, color_8888::Color8888};
use libfuzzer_sys::{arbitrary, fuzz_target};
use rgbcx_sys::root::rgbcx;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Bc3Block {
    pub bytes: [u8; 16],
}

fuzz_target!(|block: Bc3Block| {
    let c0 = Color565::from_le_bytes([block.bytes[8], block.bytes[9]]);
    let c1 = Color565::from_le_bytes([block.bytes[10], block.bytes[11]]);
    if !c0.greater_than(&c1) {
        return;
    }

    let ours = decode_bc3_block(&block.bytes);
    let reference = rgbcx_decode_bc3(&block.bytes);
    assert_eq!(ours, reference, "Decoded blocks don't match");
});

fn rgbcx_decode_bc3(bc3_block: &[u8; 16]) -> Rgba4x4Block {
    let mut rgba_buffer = [0u8; 4 * 16];

    unsafe {
        rgbcx::unpack_bc3(
            bc3_block.as_ptr() as *const core::ffi::c_void,
            rgba_buffer.as_mut_ptr() as *mut core::ffi::c_void,
            rgbcx::bc1_approx_mode::cBC1Ideal,
        );

        let pixels: [Color8888; 16] = mem::transmute(rgba_buffer);
        Rgba4x4Block { pixels }
    }
}
