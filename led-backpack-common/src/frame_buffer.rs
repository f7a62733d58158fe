//! In-memory state of an 8x8 bicolor matrix.
//!
//! Each row is a `u16`. The low byte holds the green LEDs for columns 0-7 and
//! the high byte holds the red LEDs for the same columns, so a yellow pixel has
//! both its bits set. Row `i` maps onto HT16K33 common `i`, which is why the
//! wire format is simply each row's low byte followed by its high byte.

pub const ROWS: usize = 8;
pub const COLUMNS: usize = 8;
/// Bytes sent to the device for a full frame, two per row.
pub const FRAME_LENGTH: usize = ROWS * 2;

const RED_PLANE_OFFSET: usize = 8;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Off,
    Red,
    Yellow,
    Green,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameBuffer {
    rows: [u16; ROWS],
}

impl FrameBuffer {
    pub const fn new() -> Self {
        Self { rows: [0u16; ROWS] }
    }

    pub fn rows(&self) -> &[u16; ROWS] {
        &self.rows
    }

    /// Overwrites a whole row. Out of range rows are ignored.
    pub fn set_row(&mut self, row: usize, value: u16) {
        if let Some(r) = self.rows.get_mut(row) {
            *r = value;
        }
    }

    /// Folds one pixel into the buffer. Colors are OR'd into the existing row,
    /// so setting green and then red gives yellow. `Color::Off` clears both
    /// planes.
    ///
    /// Out of range coordinates or a `None` color leave the buffer untouched.
    pub fn set_pixel(&mut self, row: usize, column: usize, color: Option<Color>) {
        if column >= COLUMNS {
            return;
        }

        let (Some(r), Some(color)) = (self.rows.get_mut(row), color) else {
            return;
        };

        let green = 1u16 << column;
        let red = 1u16 << (column + RED_PLANE_OFFSET);

        match color {
            Color::Green => *r |= green,
            Color::Red => *r |= red,
            Color::Yellow => *r |= green | red,
            Color::Off => *r &= !green & !red,
        }
    }

    /// Decodes the color of one pixel, or None if it is out of range.
    pub fn pixel(&self, row: usize, column: usize) -> Option<Color> {
        if column >= COLUMNS {
            return None;
        }

        let r = *self.rows.get(row)?;
        let green = r & (1 << column) != 0;
        let red = r & (1 << (column + RED_PLANE_OFFSET)) != 0;

        Some(match (red, green) {
            (true, true) => Color::Yellow,
            (true, false) => Color::Red,
            (false, true) => Color::Green,
            (false, false) => Color::Off,
        })
    }

    pub fn clear(&mut self) {
        self.rows = [0u16; ROWS];
    }

    /// Serializes the buffer the way the HT16K33 display memory expects it.
    pub fn to_bytes(&self) -> [u8; FRAME_LENGTH] {
        let mut bytes = [0u8; FRAME_LENGTH];

        for (pair, row) in bytes.chunks_exact_mut(2).zip(self.rows.iter()) {
            pair.copy_from_slice(&row.to_le_bytes());
        }

        bytes
    }

    /// Rebuilds a buffer from a serialized frame.
    pub fn from_bytes(bytes: &[u8; FRAME_LENGTH]) -> Self {
        let mut buffer = Self::new();

        for (row, pair) in buffer.rows.iter_mut().zip(bytes.chunks_exact(2)) {
            *row = u16::from_le_bytes([pair[0], pair[1]]);
        }

        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLORS: [Color; 4] = [Color::Off, Color::Red, Color::Yellow, Color::Green];

    #[test]
    fn test_new_is_zeroed() {
        assert_eq!(FrameBuffer::new().rows(), &[0u16; ROWS]);
    }

    #[test]
    fn test_set_pixel_planes() {
        let mut buffer = FrameBuffer::new();

        buffer.set_pixel(0, 3, Some(Color::Green));
        buffer.set_pixel(1, 3, Some(Color::Red));
        buffer.set_pixel(2, 3, Some(Color::Yellow));

        assert_eq!(buffer.rows()[0], 0b0000_0000_0000_1000);
        assert_eq!(buffer.rows()[1], 0b0000_1000_0000_0000);
        assert_eq!(buffer.rows()[2], 0b0000_1000_0000_1000);
    }

    #[test]
    fn test_set_pixel_off_clears_both_planes() {
        for row in 0..ROWS {
            for column in 0..COLUMNS {
                for color in COLORS {
                    let mut buffer = FrameBuffer::new();
                    buffer.set_row(row, 0xFFFF);
                    buffer.set_pixel(row, column, Some(color));
                    buffer.set_pixel(row, column, Some(Color::Off));

                    let r = buffer.rows()[row];
                    assert_eq!(r & (1 << column), 0);
                    assert_eq!(r & (1 << (column + 8)), 0);
                    // Only the target pixel changes
                    assert_eq!(r | (1 << column) | (1 << (column + 8)), 0xFFFF);
                }
            }
        }
    }

    #[test]
    fn test_green_and_red_make_yellow_in_either_order() {
        for row in 0..ROWS {
            for column in 0..COLUMNS {
                let mut green_first = FrameBuffer::new();
                green_first.set_pixel(row, column, Some(Color::Green));
                green_first.set_pixel(row, column, Some(Color::Red));

                let mut red_first = FrameBuffer::new();
                red_first.set_pixel(row, column, Some(Color::Red));
                red_first.set_pixel(row, column, Some(Color::Green));

                let mut yellow = FrameBuffer::new();
                yellow.set_pixel(row, column, Some(Color::Yellow));

                assert_eq!(green_first, yellow);
                assert_eq!(red_first, yellow);
                assert_eq!(yellow.pixel(row, column), Some(Color::Yellow));
            }
        }
    }

    #[test]
    fn test_set_pixel_out_of_range_is_ignored() {
        let mut buffer = FrameBuffer::new();
        buffer.set_row(4, 0x1234);
        let before = buffer;

        buffer.set_pixel(8, 0, Some(Color::Red));
        buffer.set_pixel(0, 8, Some(Color::Green));
        buffer.set_pixel(usize::MAX, usize::MAX, Some(Color::Yellow));
        buffer.set_pixel(4, 2, None);

        assert_eq!(buffer, before);
        assert_eq!(buffer.to_bytes(), before.to_bytes());
    }

    #[test]
    fn test_set_row_out_of_range_is_ignored() {
        let mut buffer = FrameBuffer::new();
        buffer.set_row(ROWS, 0xFFFF);

        assert_eq!(buffer, FrameBuffer::new());
    }

    #[test]
    fn test_pixel_decodes() {
        let mut buffer = FrameBuffer::new();
        buffer.set_pixel(7, 7, Some(Color::Red));
        buffer.set_pixel(0, 0, Some(Color::Green));

        assert_eq!(buffer.pixel(7, 7), Some(Color::Red));
        assert_eq!(buffer.pixel(0, 0), Some(Color::Green));
        assert_eq!(buffer.pixel(3, 3), Some(Color::Off));
        assert_eq!(buffer.pixel(8, 0), None);
    }

    #[test]
    fn test_clear() {
        let mut buffer = FrameBuffer::new();
        for row in 0..ROWS {
            buffer.set_row(row, 0xFFFF);
        }

        buffer.clear();

        assert_eq!(buffer.rows(), &[0u16; ROWS]);
    }

    #[test]
    fn test_to_bytes_low_byte_first() {
        let mut buffer = FrameBuffer::new();
        buffer.set_row(0, 0xAB12);
        buffer.set_row(7, 0x00FF);

        let bytes = buffer.to_bytes();

        assert_eq!(bytes[0], 0x12);
        assert_eq!(bytes[1], 0xAB);
        assert_eq!(bytes[14], 0xFF);
        assert_eq!(bytes[15], 0x00);
        assert_eq!(FrameBuffer::from_bytes(&bytes), buffer);
    }
}
