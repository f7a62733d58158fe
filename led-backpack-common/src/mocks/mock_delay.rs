use std::{cell::RefCell, rc::Rc};

use embedded_hal::delay::DelayNs;

use crate::{backpack::BlinkRate, frame_buffer::FRAME_LENGTH};

/// Something observable that happened on a mock sink or delay.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Event {
    Frame([u8; FRAME_LENGTH]),
    Hold(u32),
    Brightness(u8),
    BlinkRate(BlinkRate),
}

/// Shared, ordered record of events so that tests can check how frames and
/// holds interleave.
#[derive(Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<Event>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    /// Events with consecutive holds summed into one, which hides how a hold
    /// was sliced.
    pub fn merged(&self) -> Vec<Event> {
        let mut merged: Vec<Event> = Vec::new();

        for event in self.events() {
            match (merged.last_mut(), event) {
                (Some(Event::Hold(total)), Event::Hold(ms)) => *total += ms,
                _ => merged.push(event),
            }
        }

        merged
    }

    pub fn frames(&self) -> Vec<[u8; FRAME_LENGTH]> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Frame(frame) => Some(frame),
                _ => None,
            })
            .collect()
    }

    pub fn total_hold_ms(&self) -> u32 {
        self.events()
            .into_iter()
            .map(|event| match event {
                Event::Hold(ms) => ms,
                _ => 0,
            })
            .sum()
    }
}

/// A delay that returns immediately and records how long it was asked to wait.
pub struct MockDelay {
    log: EventLog,
}

impl MockDelay {
    pub fn new(log: &EventLog) -> Self {
        Self { log: log.clone() }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {
        unimplemented!()
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.push(Event::Hold(ms));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_records_hold() {
        let log = EventLog::new();
        let mut delay = MockDelay::new(&log);

        delay.delay_ms(20);
        delay.delay_ms(30);

        assert_eq!(log.events(), vec![Event::Hold(20), Event::Hold(30)]);
        assert_eq!(log.total_hold_ms(), 50);
    }

    #[test]
    fn test_merged_keeps_frames_between_holds() {
        let log = EventLog::new();
        log.push(Event::Hold(1));
        log.push(Event::Hold(2));
        log.push(Event::Frame([0u8; FRAME_LENGTH]));
        log.push(Event::Hold(3));

        assert_eq!(
            log.merged(),
            vec![Event::Hold(3), Event::Frame([0u8; FRAME_LENGTH]), Event::Hold(3)]
        );
    }
}
