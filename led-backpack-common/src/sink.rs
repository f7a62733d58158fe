//! Where frames go once they leave the frame buffer.
//!
//! A sink never reports errors back to the matrix. The display is best-effort,
//! and a failed write must not stop an animation halfway through.

use embedded_hal::i2c::I2c;
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

use crate::{
    backpack::BlinkRate,
    frame_buffer::FRAME_LENGTH,
    ht16k33::{Ht16k33Error, HT16K33},
};

pub trait DisplaySink {
    /// Shows a full serialized frame.
    fn write_frame(&mut self, frame: &[u8; FRAME_LENGTH]);

    /// `brightness` is already clamped to 0-15.
    fn set_brightness(&mut self, brightness: u8);

    fn set_blink_rate(&mut self, rate: BlinkRate);
}

/// Sink for a real backpack on an I2C bus.
pub struct Ht16k33Sink<I2C> {
    device: HT16K33<I2C>,
}

impl<I2C, E> Ht16k33Sink<I2C>
where
    I2C: I2c<Error = E>,
{
    /// Creates a sink for the backpack at `address` on `i2c`. This function
    /// does not communicate with the device.
    pub fn new(i2c: I2C, address: u8) -> Result<Self, Ht16k33Error<E>> {
        Ok(Self {
            device: HT16K33::new(i2c, address)?,
        })
    }

    /// Turns on the device's oscillator. Unlike every other write, a failure
    /// here is reported, since it means there is no usable device.
    pub fn initialize(&mut self) -> Result<(), Ht16k33Error<E>> {
        self.device.initialize()
    }

    pub fn address(&self) -> u8 {
        self.device.address()
    }

    /// Consumes `self` and returns the `i2c` that it owned so it can be reused.
    pub fn release(self) -> I2C {
        self.device.destroy()
    }
}

impl<I2C, E> DisplaySink for Ht16k33Sink<I2C>
where
    I2C: I2c<Error = E>,
    E: core::fmt::Debug,
{
    fn write_frame(&mut self, frame: &[u8; FRAME_LENGTH]) {
        if let Err(err) = self.device.set_display_data(frame) {
            error!("Error writing frame to HT16K33 at {:#04x}: {:?}", self.address(), err);
        }
    }

    fn set_brightness(&mut self, brightness: u8) {
        if let Err(err) = self.device.set_dimming(brightness) {
            error!("Error setting HT16K33 brightness to {}: {:?}", brightness, err);
        }
    }

    fn set_blink_rate(&mut self, rate: BlinkRate) {
        if let Err(err) = self.device.set_blink_rate(rate) {
            error!("Error setting HT16K33 blink rate to {:?}: {:?}", rate, err);
        }
    }
}

/// Either the sink that was asked for, or the one used in its place.
pub enum FallbackSink<P, F> {
    Primary(P),
    Fallback(F),
}

impl<P, F> FallbackSink<P, F> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

impl<P, F> DisplaySink for FallbackSink<P, F>
where
    P: DisplaySink,
    F: DisplaySink,
{
    fn write_frame(&mut self, frame: &[u8; FRAME_LENGTH]) {
        match self {
            Self::Primary(sink) => sink.write_frame(frame),
            Self::Fallback(sink) => sink.write_frame(frame),
        }
    }

    fn set_brightness(&mut self, brightness: u8) {
        match self {
            Self::Primary(sink) => sink.set_brightness(brightness),
            Self::Fallback(sink) => sink.set_brightness(brightness),
        }
    }

    fn set_blink_rate(&mut self, rate: BlinkRate) {
        match self {
            Self::Primary(sink) => sink.set_blink_rate(rate),
            Self::Fallback(sink) => sink.set_blink_rate(rate),
        }
    }
}
