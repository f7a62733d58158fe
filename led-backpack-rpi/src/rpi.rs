//! Matrix construction on a Raspberry Pi.

use std::io::Stdout;

use led_backpack_common::matrix::{self, FallbackMatrix};
use rppal::{hal::Delay, i2c::I2c};

use crate::console_sink::ConsoleSink;

/// Bus 1 on every current Pi revision, 0 on the very first boards.
pub const DEFAULT_BUS: u8 = 1;
/// Address of a backpack with no address jumpers soldered.
pub const DEFAULT_ADDRESS: u8 = 0x70;

pub type RpiMatrix = FallbackMatrix<I2c, ConsoleSink<Stdout>, Delay>;

/// Opens the backpack at `address` on I2C `bus`. When that fails, for example
/// when not running on a Pi, frames are printed to stdout instead.
pub fn create_matrix(bus: u8, address: u8) -> RpiMatrix {
    matrix::create_matrix(
        || I2c::with_bus(bus),
        address,
        ConsoleSink::stdout(),
        Delay::new(),
    )
}
