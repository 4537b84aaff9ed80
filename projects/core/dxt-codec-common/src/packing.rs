//! Little-endian packing helpers for block payloads.

/// Splits a 16-byte block into its two 8-byte halves.
#[inline]
pub fn split_halves(src: &[u8; 16]) -> ([u8; 8], [u8; 8]) {
    (
        core::array::from_fn(|i| src[i]),
        core::array::from_fn(|i| src[8 + i]),
    )
}

/// Joins two 8-byte halves into one 16-byte block.
#[inline]
pub fn join_halves(first: &[u8; 8], second: &[u8; 8]) -> [u8; 16] {
    let mut out = [0u8; 16];
    out[0..8].copy_from_slice(first);
    out[8..16].copy_from_slice(second);
    out
}

/// Reads the 48-bit little-endian index field stored in bytes 2..8 of an alpha block.
#[inline]
pub fn read_u48_le(src: &[u8; 8]) -> u64 {
    let mut bytes = [0u8; 8];
    bytes[0..6].copy_from_slice(&src[2..8]);
    u64::from_le_bytes(bytes)
}

/// Writes the low 48 bits of `bits` to bytes 2..8 of an alpha block.
#[inline]
pub fn write_u48_le(dst: &mut [u8; 8], bits: u64) {
    dst[2..8].copy_from_slice(&bits.to_le_bytes()[0..6]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves_split_and_join() {
        let block: [u8; 16] = core::array::from_fn(|i| i as u8);
        let (a, b) = split_halves(&block);
        assert_eq!(a, [0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(b[0], 8);
        assert_eq!(join_halves(&a, &b), block);
    }

    #[test]
    fn u48_field_is_little_endian() {
        let mut block = [0xAA, 0xBB, 0, 0, 0, 0, 0, 0];
        write_u48_le(&mut block, 0x0000_0605_0403_0201);
        assert_eq!(block, [0xAA, 0xBB, 1, 2, 3, 4, 5, 6]);
        assert_eq!(read_u48_le(&block), 0x0605_0403_0201);
    }
}
