//! The HT16K33 is an LED driver IC that communicates over I2C. It supports 16x8
//! multiplexed LEDs and can perform input key scanning, although that feature
//! is not implemented here.
//!
//! It works by having 16 bytes of display memory that correspond to the LEDs,
//! each LED having 1 bit determining if it is on or off. On the Adafruit 8x8
//! bicolor backpack, each common is one matrix row, ROW0-7 drive the green
//! LEDs and ROW8-15 drive the red LEDs.
//!
//! The HT16K33 will hold LEDs according to how the display memory is set so
//! that it does not need to be continually refreshed by the controller.
//!
//! [HT16K33 datasheet](https://cdn-shop.adafruit.com/datasheets/ht16K33v110.pdf)

use embedded_hal::i2c::I2c;

use crate::backpack::BlinkRate;

/// The number of addressable commons supported by the device.
pub const N_COMS: usize = 8;
/// The number of bytes in the display data used by the device.
pub const DISPLAY_DATA_LENGTH: usize = N_COMS * 2;
/// Highest dimming level, which is also the brightest.
pub const MAX_DIMMING: u8 = 15;

const DISPLAY_DATA_START_REGISTER: u8 = 0x00;
const SYSTEM_SETUP_REGISTER: u8 = 0b0010_0000;
const SYSTEM_SETUP_ENABLE_OSCILLATOR: u8 = 0b0000_0001;
// Display setup register: 1000XBBD
// BB = blinking, D = display on
const DISPLAY_REGISTER: u8 = 0b1000_0000;
const DISPLAY_OFF: u8 = 0b0000_0000;
const DISPLAY_ON_BLINK_OFF: u8 = 0b0000_0001;
const DISPLAY_ON_BLINK_2HZ: u8 = 0b0000_0011;
const DISPLAY_ON_BLINK_1HZ: u8 = 0b0000_0101;
const DISPLAY_ON_BLINK_HALF_HZ: u8 = 0b0000_0111;
const DIMMING_REGISTER: u8 = 0b1110_0000;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Ht16k33Error<I2C> {
    I2c(I2C),
    /// Valid addresses are 0x70 - 0x77.
    InvalidAddress(u8),
}

impl<I2C> From<I2C> for Ht16k33Error<I2C> {
    fn from(value: I2C) -> Self {
        Self::I2c(value)
    }
}

/// Driver for the HT16K33.
pub struct HT16K33<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C, E> HT16K33<I2C>
where
    I2C: I2c<Error = E>,
{
    /// Creates a new driver that will communicate using `i2c` as the I2C bus
    /// to the device at `address`. Valid addresses for the HT16K33 are 7 bits
    /// long and start with 1110 (0x70 - 0x77).
    /// This function does not communicate with the device.
    pub fn new(i2c: I2C, address: u8) -> Result<Self, Ht16k33Error<E>> {
        if address & 0b1111_1000 != 0b0111_0000 {
            return Err(Ht16k33Error::InvalidAddress(address));
        }

        Ok(Self {
            i2c,
            address,
        })
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Turns on the devices's oscillator, which is the first step in enabling it.
    pub fn initialize(&mut self) -> Result<(), Ht16k33Error<E>> {
        self.write_one(SYSTEM_SETUP_REGISTER | SYSTEM_SETUP_ENABLE_OSCILLATOR)
    }

    /// Sets the dimming on the device.
    /// `dimming` is 0-15. Only the lowest 4 bits will be used.
    /// `dimming` = 0 is the lowest level, but is not off
    pub fn set_dimming(&mut self, dimming: u8) -> Result<(), Ht16k33Error<E>> {
        self.write_one(DIMMING_REGISTER | (dimming & 0b1111))
    }

    /// Turns the display on with the given blinking, or off entirely for
    /// `BlinkRate::DisplayOff`. Display data is kept either way.
    pub fn set_blink_rate(&mut self, rate: BlinkRate) -> Result<(), Ht16k33Error<E>> {
        let setup = match rate {
            BlinkRate::DisplayOff => DISPLAY_OFF,
            BlinkRate::Off => DISPLAY_ON_BLINK_OFF,
            BlinkRate::TwoHz => DISPLAY_ON_BLINK_2HZ,
            BlinkRate::OneHz => DISPLAY_ON_BLINK_1HZ,
            BlinkRate::HalfHz => DISPLAY_ON_BLINK_HALF_HZ,
        };

        self.write_one(DISPLAY_REGISTER | setup)
    }

    /// Sets the device's display data, which is how each LED is turned on or off.
    ///
    /// Each pair of bytes in the data correspond to a common output. e.g. bytes
    /// 0 and 1 are for COM0, bytes 2 and 3 are for COM1, etc.
    ///
    /// The bits in each pair of bytes correspond to the 16 row outputs, where
    /// ROW0 is the LSB of the first byte, ROW 7 is the MSB of the first byte,
    /// ROW8 is the LSB of the second byte, and ROW 15 is the MSB of the second.
    pub fn set_display_data(&mut self, data: &[u8; DISPLAY_DATA_LENGTH]) -> Result<(), Ht16k33Error<E>> {
        let mut bytes = [0u8; DISPLAY_DATA_LENGTH + 1];
        bytes[0] = DISPLAY_DATA_START_REGISTER;
        bytes[1..].copy_from_slice(data);

        self.i2c.write(self.address, &bytes)?;
        Ok(())
    }

    /// Helper to write a single byte to the device
    fn write_one(&mut self, byte: u8) -> Result<(), Ht16k33Error<E>> {
        self.i2c.write(self.address, &[byte])?;
        Ok(())
    }

    /// Consumes `self` and returns the `i2c` that it owned so it can be reused.
    pub fn destroy(self) -> I2C {
        self.i2c
    }
}
