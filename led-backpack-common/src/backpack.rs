//! Capabilities of an LED backpack, split so that code which only needs to
//! manage the device (brightness, blinking, clearing) does not depend on the
//! pixel and text operations of a particular matrix.

use crate::{common::time::Duration, frame_buffer::Color};

/// How the whole display blinks. `DisplayOff` blanks the LEDs without
/// touching the display data.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlinkRate {
    DisplayOff,
    Off,
    TwoHz,
    OneHz,
    HalfHz,
}

pub trait Backpack {
    /// Sets the blink rate of the display.
    fn set_blink_rate(&mut self, rate: BlinkRate);

    /// Sets the brightness, 0-15. Values above 15 are clamped to 15.
    fn set_brightness(&mut self, brightness: u8);

    /// Turns every LED off in the buffer, and on the device if `flush` is true.
    fn clear(&mut self, flush: bool);

    /// Writes the buffer to the device.
    fn write_display(&mut self);
}

pub trait Matrix: Backpack {
    /// Sets one pixel in the buffer without writing it to the device.
    ///
    /// A `row` or `column` outside 0-7, or a `None` color, is silently ignored.
    fn set_pixel<C>(&mut self, row: usize, column: usize, color: C)
    where
        C: Into<Option<Color>>;

    /// Shows `text` one character at a time, either flashing each character
    /// for `duration_per_char` or scrolling it right to left at that pace.
    /// Blocks until the text has been shown and leaves the display cleared.
    ///
    /// Only printable ASCII is supported; anything else shows as a blank.
    fn write_string(&mut self, text: &str, duration_per_char: Duration, scroll: bool);
}
