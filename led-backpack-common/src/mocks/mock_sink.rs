use crate::{
    backpack::BlinkRate,
    frame_buffer::FRAME_LENGTH,
    sink::DisplaySink,
};

use super::mock_delay::{Event, EventLog};

/// A sink that records everything written to it into an `EventLog`.
pub struct RecordingSink {
    log: EventLog,
}

impl RecordingSink {
    pub fn new(log: &EventLog) -> Self {
        Self { log: log.clone() }
    }
}

impl DisplaySink for RecordingSink {
    fn write_frame(&mut self, frame: &[u8; FRAME_LENGTH]) {
        self.log.push(Event::Frame(*frame));
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.log.push(Event::Brightness(brightness));
    }

    fn set_blink_rate(&mut self, rate: BlinkRate) {
        self.log.push(Event::BlinkRate(rate));
    }
}
