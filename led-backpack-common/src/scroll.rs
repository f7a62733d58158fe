//! Frames for scrolling text right to left across the 8 column window.
//!
//! Scrolling works on adjacent pairs of characters. For a shift of `col`, the
//! window shows the current glyph moved `col` columns out and the next glyph
//! moved `col` columns in. Text is padded with a space at both ends so that it
//! scrolls in from, and out to, a blank display.

use core::iter;

use crate::{
    frame_buffer::{COLUMNS, ROWS},
    glyph,
};

/// Number of sub-column steps between one character and the next.
pub const STEPS_PER_CHAR: u32 = COLUMNS as u32;

const WINDOW_MASK: u32 = 0xFF;

/// Combines one oriented row of the current and next glyph at shift `col`
/// (0-7). Only the 8 visible columns are kept.
pub fn combine_rows(current: u32, next: u32, col: u32) -> u16 {
    let combined = (current >> col) | (next << (STEPS_PER_CHAR - col));
    (combined & WINDOW_MASK) as u16
}

/// The full 8x8 window between `current` and `next` at shift `col`.
pub fn window(current: &[u32; ROWS], next: &[u32; ROWS], col: u32) -> [u16; ROWS] {
    let mut rows = [0u16; ROWS];

    for (row, (c, n)) in rows.iter_mut().zip(current.iter().zip(next.iter())) {
        *row = combine_rows(*c, *n, col);
    }

    rows
}

/// Adjacent character pairs of `text` once padded with a space on each side.
/// Text of n characters yields n + 1 pairs.
pub fn char_pairs(text: &str) -> impl Iterator<Item = (char, char)> + '_ {
    let padded = move || iter::once(' ').chain(text.chars()).chain(iter::once(' '));
    padded().zip(padded().skip(1))
}

/// Every window shown while scrolling from `current` to `next`, in order.
pub fn transition(current: char, next: char) -> impl Iterator<Item = [u16; ROWS]> {
    let current = glyph::oriented_char(current);
    let next = glyph::oriented_char(next);

    (0..STEPS_PER_CHAR).map(move |col| window(&current, &next, col))
}
