#![no_main]

// Compares our BC2 decoder against rgbcx-sys for colours and bcdec_rs for alpha.

use core::mem;
use dxt_codec_bc2::decode_bc2_block;
use dxt_codec_common::block_4x4::Rgba4x4Block;
use dxt_codec_common::{color_565::Color565, color_8888::Color8888};
use libfuzzer_sys::{arbitrary, fuzz_target};
use rgbcx_sys::root::rgbcx;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Bc2Block {
    pub bytes: [u8; 16],
}

fuzz_target!(|block: Bc2Block| {
    // c0 <= c1 is decoded differently across GPUs for BC2/BC3 colour halves.
    let c0 = Color565::from_le_bytes([block.bytes[8], block.bytes[9]]);
    let c1 = Color565::from_le_bytes([block.bytes[10], block.bytes[11]]);
    if !c0.greater_than(&c1) {
        return;
    }

    let ours = decode_bc2_block(&block.bytes);
    let reference = hybrid_decode_bc2(&block.bytes);
    assert_eq!(ours, reference, "Decoded blocks don't match");
});

fn hybrid_decode_bc2(bc2_block: &[u8; 16]) -> Rgba4x4Block {
    let mut rgba_buffer = [0u8; 4 * 16];
    let mut bcdec_buffer = [0u8; 4 * 16];

    unsafe {
        rgbcx::unpack_bc1(
            bc2_block.as_ptr().add(8) as *const core::ffi::c_void,
            rgba_buffer.as_mut_ptr() as *mut core::ffi::c_void,
            true, // set_alpha
            rgbcx::bc1_approx_mode::cBC1Ideal,
        );
    }
    bcdec_rs::bc2(bc2_block, &mut bcdec_buffer, 4 * 4);

    let mut pixels: [Color8888; 16] = unsafe { mem::transmute(rgba_buffer) };
    for (pixel, alpha) in pixels.iter_mut().zip(bcdec_buffer.chunks_exact(4)) {
        pixel.a = alpha[3];
    }
    Rgba4x4Block { pixels }
}
