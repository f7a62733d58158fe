pub mod time {
    use core::cmp::min;
    use core::sync::atomic::{AtomicBool, Ordering};

    use embedded_hal::delay::DelayNs;

    // Animation timing on the matrix is coarse, millisecond ticks are plenty.
    pub type Duration = fugit::MillisDurationU32;

    pub const ZERO_DURATION: Duration = Duration::from_ticks(0);

    /// Longest single sleep issued by `hold`. A cancel request is noticed
    /// within this long.
    pub const HOLD_SLICE: Duration = Duration::millis(10);

    /// Blocks the calling thread for `duration` using `delay`, checking
    /// `cancel` before every slice. Returns false if the hold was cut short
    /// because `cancel` was set.
    pub fn hold<D: DelayNs>(delay: &mut D, duration: Duration, cancel: &AtomicBool) -> bool {
        let mut remaining = duration.to_millis();

        while remaining > 0 {
            if cancel.load(Ordering::Relaxed) {
                return false;
            }

            let slice = min(remaining, HOLD_SLICE.to_millis());
            delay.delay_ms(slice);
            remaining -= slice;
        }

        !cancel.load(Ordering::Relaxed)
    }
}
