#![cfg_attr(not(test), no_std)]

pub mod backpack;
pub mod common;
pub mod font;
pub mod frame_buffer;
pub mod glyph;
pub mod ht16k33;
pub mod matrix;
pub mod scroll;
pub mod sink;

#[cfg(test)]
pub(crate) mod mocks;
