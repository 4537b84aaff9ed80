#![no_main]

// Compares our BC1 decoder against rgbcx-sys using the Ideal method.
// Extra reading: https://fgiesen.wordpress.com/2021/10/04/gpu-bcn-decoding/

use core::mem;
use dxt_codec_bc1::decode_bc1_block;
use dxt_codec_common::block_4x4::Rgba4x4Block;
use dxt_codec_common::color_8888::Color8888;
use libfuzzer_sys::{arbitrary, fuzz_target};
use rgbcx_sys::root::rgbcx;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Bc1Block {
    pub bytes: [u8; 8],
}

fuzz_target!(|block: Bc1Block| {
    let ours = decode_bc1_block(&block.bytes);
    let reference = rgbcx_decode_bc1(&block.bytes);
    assert_eq!(ours, reference, "Decoded blocks don't match");
});

fn rgbcx_decode_bc1(bc1_block: &[u8; 8]) -> Rgba4x4Block {
    let mut rgba_buffer = [0u8; 4 * 16];

    unsafe {
        rgbcx::unpack_bc1(
            bc1_block.as_ptr() as *const core::ffi::c_void,
            rgba_buffer.as_mut_ptr() as *mut core::ffi::c_void,
            true, // set_alpha
            rgbcx::bc1_approx_mode::cBC1Ideal,
        );

        // RGBA byte order matches the Color8888 layout.
        let pixels: [Color8888; 16] = mem::transmute(rgba_buffer);
        Rgba4x4Block { pixels }
    }
}
