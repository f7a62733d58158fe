//! Prints frames to a terminal instead of an LED matrix, for machines without
//! a backpack attached.

use std::io::{self, Stdout, Write};

use led_backpack_common::{
    backpack::BlinkRate,
    frame_buffer::{Color, FrameBuffer, COLUMNS, FRAME_LENGTH, ROWS},
    sink::DisplaySink,
};
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

pub struct ConsoleSink<W> {
    out: W,
}

impl ConsoleSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print(&mut self, text: &str) {
        // Nothing useful to do if the terminal is gone
        if let Err(err) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            debug!("Error printing to console: {}", err);
        }
    }
}

/// Draws one frame as text, a line per row. Column 7 is printed first so
/// glyphs read the right way round.
pub fn render_frame(frame: &[u8; FRAME_LENGTH]) -> String {
    let buffer = FrameBuffer::from_bytes(frame);
    let mut text = String::with_capacity(ROWS * (COLUMNS + 1));

    for row in 0..ROWS {
        for column in (0..COLUMNS).rev() {
            text.push(match buffer.pixel(row, column) {
                Some(Color::Green) => 'G',
                Some(Color::Red) => 'R',
                Some(Color::Yellow) => 'Y',
                Some(Color::Off) | None => '.',
            });
        }
        text.push('\n');
    }

    text
}

impl<W: Write> DisplaySink for ConsoleSink<W> {
    fn write_frame(&mut self, frame: &[u8; FRAME_LENGTH]) {
        let text = format!("matrix:\n{}", render_frame(frame));
        self.print(&text);
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.print(&format!("matrix: brightness {}\n", brightness));
    }

    fn set_blink_rate(&mut self, rate: BlinkRate) {
        self.print(&format!("matrix: blink rate {:?}\n", rate));
    }
}
