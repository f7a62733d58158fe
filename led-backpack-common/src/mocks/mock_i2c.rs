use std::collections::VecDeque;
use embedded_hal::i2c::{Error, ErrorKind, ErrorType, I2c, Operation};

struct ExpectedWrite {
    address: u8,
    bytes: Vec<u8>,
    ret: Result<(), MockError>,
}

/// A mock of the embedded_hal::i2c::I2c trait for testing purposes. The
/// HT16K33 is write-only as far as this crate is concerned, so only writes are
/// supported.
pub struct MockI2c {
    writes: VecDeque<ExpectedWrite>,
    // Once the queued writes run out, accept any further write instead of
    // panicking. Used by tests that only care about a prefix of the traffic.
    accept_extra_writes: bool,
    write_count: usize,
}

impl MockI2c {
    pub fn new() -> Self {
        Self {
            writes: VecDeque::new(),
            accept_extra_writes: false,
            write_count: 0,
        }
    }

    pub fn expect_write(&mut self, address: u8, bytes: &[u8]) {
        self.writes.push_back(ExpectedWrite {
            address,
            bytes: bytes.to_vec(),
            ret: Ok(()),
        });
    }

    pub fn expect_write_err(&mut self, address: u8, err: MockError) {
        self.writes.push_back(ExpectedWrite {
            address,
            bytes: vec!(),
            ret: Err(err),
        });
    }

    pub fn accept_extra_writes(&mut self) {
        self.accept_extra_writes = true;
    }

    /// Number of writes performed so far, expected or not.
    pub fn write_count(&self) -> usize {
        self.write_count
    }

    pub fn verify(&self) {
        assert_eq!(self.writes.len(), 0, "less writes were performed than expected");
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MockError {
    Bad,
}

impl Error for MockError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

impl ErrorType for MockI2c {
    type Error = MockError;
}

impl I2c for MockI2c {
    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self.write_count += 1;

        if let Some(write) = self.writes.pop_front() {
            assert_eq!(address, write.address, "Unexpected address");

            if write.ret.is_ok() {
                assert_eq!(bytes, write.bytes, "Unexpected write bytes: {:x?}", bytes);
            }

            write.ret
        } else if self.accept_extra_writes {
            Ok(())
        } else {
            panic!("Unexpected write({:x}, {:x?})", address, bytes);
        }
    }

    fn read(&mut self, address: u8, _buffer: &mut [u8]) -> Result<(), Self::Error> {
        panic!("Unexpected read({:x})", address);
    }

    fn write_read(&mut self, address: u8, _bytes: &[u8], _buffer: &mut [u8]) -> Result<(), Self::Error> {
        panic!("Unexpected write_read({:x})", address);
    }

    fn transaction(&mut self, _address: u8, _operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
        unimplemented!()
    }
}

mod tests {
    use super::*;

    #[test]
    fn test_write() {
        let mut i2c = MockI2c::new();
        let address = 0x70;
        let write_bytes = [1, 2, 3, 4];

        i2c.expect_write(address, &write_bytes);
        i2c.write(address, &write_bytes).unwrap();

        i2c.verify();
    }

    #[test]
    fn test_write_err() {
        let mut i2c = MockI2c::new();
        let address = 0x70;

        i2c.expect_write_err(address, MockError::Bad);
        assert!(i2c.write(address, &[1]).is_err());

        i2c.verify();
    }

    #[test]
    #[should_panic]
    fn test_write_fail() {
        let mut i2c = MockI2c::new();
        let address = 0x70;

        i2c.expect_write(address, &[1, 2, 3, 4]);
        i2c.write(address, &[1, 2, 4, 3]).unwrap();
    }

    #[test]
    #[should_panic]
    fn test_write_fail_address() {
        let mut i2c = MockI2c::new();

        i2c.expect_write(0x70, &[1]);
        i2c.write(0x71, &[1]).unwrap();
    }

    #[test]
    #[should_panic]
    fn test_unexpected_write() {
        let mut i2c = MockI2c::new();
        i2c.write(0x70, &[1]).unwrap();
    }

    #[test]
    fn test_accept_extra_writes() {
        let mut i2c = MockI2c::new();
        let address = 0x70;

        i2c.expect_write(address, &[1]);
        i2c.accept_extra_writes();
        i2c.write(address, &[1]).unwrap();
        i2c.write(address, &[2]).unwrap();
        i2c.write(address, &[3]).unwrap();

        assert_eq!(i2c.write_count(), 3);
        i2c.verify();
    }

    #[test]
    #[should_panic]
    fn test_multiple_calls_fail() {
        let mut i2c = MockI2c::new();
        let address = 0x70;

        i2c.expect_write(address, &[1]);
        i2c.expect_write(address, &[2]);
        i2c.expect_write(address, &[3]);
        i2c.write(address, &[1]).unwrap();
        i2c.write(address, &[3]).unwrap();

        i2c.verify();
    }
}
