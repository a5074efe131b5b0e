//! Pixel format conversion helpers for presentation adapters.

use crate::core::data::packed_pixel::PackedPixel;

/// Inverse of the fixed-point BT.601 full-range conversion used when composing frames.
#[must_use]
pub fn ycbcr_to_rgb(y: u8, cb: u8, cr: u8) -> [u8; 3] {
    let y = i32::from(y);
    let cb = i32::from(cb) - 128;
    let cr = i32::from(cr) - 128;

    let r = y + (1402 * cr) / 1000;
    let g = y - (344_136 * cb + 714_136 * cr) / 1_000_000;
    let b = y + (1772 * cb) / 1000;

    [r.clamp(0, 255) as u8, g.clamp(0, 255) as u8, b.clamp(0, 255) as u8]
}

/// Expands packed 4:2:2 pixels into RGBA, two output pixels per packed pixel, alpha 255.
///
/// # Panics
/// Panics if `dst.len()` is not `src.len() * 8`.
pub fn expand_packed_to_rgba(src: &[PackedPixel], dst: &mut [u8]) {
    let expected_dst_len = src.len() * 8;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (&packed, dst_pair) in src.iter().zip(dst.chunks_exact_mut(8)) {
        let (left, right) = dst_pair.split_at_mut(4);

        write_rgba(left, ycbcr_to_rgb(packed.y1(), packed.cb(), packed.cr()));
        write_rgba(right, ycbcr_to_rgb(packed.y2(), packed.cb(), packed.cr()));
    }
}

fn write_rgba(dst_pixel: &mut [u8], rgb: [u8; 3]) {
    dst_pixel[..3].copy_from_slice(&rgb);
    dst_pixel[3] = 255;
}
