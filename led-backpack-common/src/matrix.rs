//! Driver for the [Adafruit bicolor 8x8 LED matrix backpack](https://learn.adafruit.com/adafruit-led-backpack/bi-color-8x8-matrix).
//!
//! The matrix keeps its own frame buffer and only talks to the device when the
//! buffer is flushed to its sink. Text animations block the caller, holding
//! each frame with the matrix's delay.

use core::cmp::min;
use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::{delay::DelayNs, i2c::I2c};
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

use crate::{
    backpack::{Backpack, BlinkRate, Matrix},
    common::time::{self, Duration},
    frame_buffer::{Color, FrameBuffer},
    glyph,
    ht16k33::{Ht16k33Error, MAX_DIMMING},
    scroll::{self, STEPS_PER_CHAR},
    sink::{DisplaySink, FallbackSink, Ht16k33Sink},
};

/// Blank time between two characters when not scrolling, so that repeated
/// characters can be told apart.
pub const CHAR_GAP: Duration = Duration::millis(50);

/// How a text animation ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextOutcome {
    Completed,
    Cancelled,
}

pub struct LedMatrix<S, D> {
    sink: S,
    delay: D,
    buffer: FrameBuffer,
}

impl<S, D> LedMatrix<S, D>
where
    S: DisplaySink,
    D: DelayNs,
{
    /// Creates a matrix that flushes to `sink` and times animations with
    /// `delay`. This function does not communicate with the device.
    pub fn new(sink: S, delay: D) -> Self {
        Self {
            sink,
            delay,
            buffer: FrameBuffer::new(),
        }
    }

    /// Turns the display on without blinking, at full brightness, and clears it
    /// since it will show whatever was last stored.
    pub fn initialize(&mut self) {
        self.set_blink_rate(BlinkRate::Off);
        self.set_brightness(MAX_DIMMING);
        self.clear(true);
    }

    /// The current buffer, which might not be displayed yet.
    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Overwrites a whole row of the buffer, writing it to the device if
    /// `flush` is true. Out of range rows are ignored.
    pub fn set_row(&mut self, row: usize, value: u16, flush: bool) {
        self.buffer.set_row(row, value);

        if flush {
            self.write_display();
        }
    }

    /// Clears the display and consumes `self`, returning the sink so it can be
    /// reused.
    pub fn release(mut self) -> S {
        self.clear(true);
        self.sink
    }

    /// Same as `Matrix::write_string`, but gives up as soon as `cancel` is set.
    /// The display is cleared either way.
    pub fn write_string_cancellable(
        &mut self,
        text: &str,
        duration_per_char: Duration,
        scroll: bool,
        cancel: &AtomicBool,
    ) -> TextOutcome {
        self.clear(true);

        let completed = if scroll {
            self.scroll_text(text, duration_per_char, cancel)
        } else {
            self.flash_text(text, duration_per_char, cancel)
        };

        self.clear(true);

        if completed {
            TextOutcome::Completed
        } else {
            debug!("Text animation cancelled");
            TextOutcome::Cancelled
        }
    }

    /// Shows each character on its own, with a short blank between them.
    fn flash_text(&mut self, text: &str, duration_per_char: Duration, cancel: &AtomicBool) -> bool {
        for c in text.chars() {
            self.clear(false);
            glyph::render_glyph(&mut self.buffer, c);
            self.write_display();

            if !time::hold(&mut self.delay, duration_per_char, cancel) {
                return false;
            }

            self.clear(true);

            if !time::hold(&mut self.delay, CHAR_GAP, cancel) {
                return false;
            }
        }

        true
    }

    /// Scrolls the text right to left, flushing after every row so the window
    /// sweeps across the display.
    fn scroll_text(&mut self, text: &str, duration_per_char: Duration, cancel: &AtomicBool) -> bool {
        // Truncated, not rounded
        let step_duration = Duration::millis(duration_per_char.to_millis() / STEPS_PER_CHAR);

        for (current, next) in scroll::char_pairs(text) {
            for window in scroll::transition(current, next) {
                if cancel.load(Ordering::Relaxed) {
                    return false;
                }

                for (row, value) in window.into_iter().enumerate() {
                    self.set_row(row, value, true);
                }

                if !time::hold(&mut self.delay, step_duration, cancel) {
                    return false;
                }
            }
        }

        true
    }
}

impl<S, D> Backpack for LedMatrix<S, D>
where
    S: DisplaySink,
    D: DelayNs,
{
    fn set_blink_rate(&mut self, rate: BlinkRate) {
        self.sink.set_blink_rate(rate);
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.sink.set_brightness(min(brightness, MAX_DIMMING));
    }

    fn clear(&mut self, flush: bool) {
        self.buffer.clear();

        if flush {
            self.write_display();
        }
    }

    fn write_display(&mut self) {
        self.sink.write_frame(&self.buffer.to_bytes());
    }
}

impl<S, D> Matrix for LedMatrix<S, D>
where
    S: DisplaySink,
    D: DelayNs,
{
    fn set_pixel<C>(&mut self, row: usize, column: usize, color: C)
    where
        C: Into<Option<Color>>,
    {
        self.buffer.set_pixel(row, column, color.into());
    }

    fn write_string(&mut self, text: &str, duration_per_char: Duration, scroll: bool) {
        let never = AtomicBool::new(false);
        self.write_string_cancellable(text, duration_per_char, scroll, &never);
    }
}

/// A matrix whose sink is a real backpack if one could be set up, and
/// `F` otherwise.
pub type FallbackMatrix<I2C, F, D> = LedMatrix<FallbackSink<Ht16k33Sink<I2C>, F>, D>;

/// Why `create_matrix` did not use the backpack.
#[derive(Debug)]
pub enum FallbackReason<B, E> {
    BusUnavailable(B),
    Device(Ht16k33Error<E>),
}

/// Creates a matrix for the backpack at `address` on the bus returned by
/// `open_bus`. If the bus cannot be opened, the address is invalid, or the
/// device does not respond, `fallback` is used as the sink instead. Either way
/// the matrix is initialized and ready to use; no error reaches the caller.
pub fn create_matrix<I2C, E, B, O, F, D>(
    open_bus: O,
    address: u8,
    fallback: F,
    delay: D,
) -> FallbackMatrix<I2C, F, D>
where
    I2C: I2c<Error = E>,
    E: core::fmt::Debug,
    B: core::fmt::Debug,
    O: FnOnce() -> Result<I2C, B>,
    F: DisplaySink,
    D: DelayNs,
{
    let sink = match open_backpack(open_bus, address) {
        Ok(backpack) => {
            info!("Using LED backpack at {:#04x}", address);
            FallbackSink::Primary(backpack)
        }
        Err(reason) => {
            warn!("No LED backpack at {:#04x} ({:?}), using fallback display", address, reason);
            FallbackSink::Fallback(fallback)
        }
    };

    let mut matrix = LedMatrix::new(sink, delay);
    matrix.initialize();
    matrix
}

fn open_backpack<I2C, E, B, O>(open_bus: O, address: u8) -> Result<Ht16k33Sink<I2C>, FallbackReason<B, E>>
where
    I2C: I2c<Error = E>,
    O: FnOnce() -> Result<I2C, B>,
{
    let i2c = open_bus().map_err(FallbackReason::BusUnavailable)?;
    let mut backpack = Ht16k33Sink::new(i2c, address).map_err(FallbackReason::Device)?;
    backpack.initialize().map_err(FallbackReason::Device)?;
    Ok(backpack)
}
