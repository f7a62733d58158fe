//! Puts font glyphs into the frame buffer.

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

use crate::{
    font::{self, Glyph},
    frame_buffer::{FrameBuffer, ROWS},
};

/// Converts a font row to the matrix's column order.
///
/// The font stores the leftmost pixel in bit 0, but the matrix's column 0 is
/// on the right when the backpack pins face left. Reversing the bits of the
/// whole 32-bit word and then its bytes mirrors the low byte, and leaves the
/// red plane and everything above it clear.
pub fn orient_row(row: u8) -> u32 {
    u32::from(row).reverse_bits().swap_bytes()
}

/// All rows of `glyph`, oriented for the matrix.
pub fn oriented_rows(glyph: &Glyph) -> [u32; ROWS] {
    glyph.map(orient_row)
}

/// Glyph rows for `c`, or a blank cell if `c` has no glyph.
pub fn oriented_char(c: char) -> [u32; ROWS] {
    match font::glyph(c) {
        Some(glyph) => oriented_rows(glyph),
        None => {
            warn!("No glyph for {:?}, showing a blank", c);
            [0u32; ROWS]
        }
    }
}

/// Overwrites every row of `buffer` with the glyph for `c`, drawn in green.
pub fn render_glyph(buffer: &mut FrameBuffer, c: char) {
    for (row, value) in oriented_char(c).into_iter().enumerate() {
        // Only the green plane is ever set
        buffer.set_row(row, value as u16);
    }
}
