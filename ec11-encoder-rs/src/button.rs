//! Edge-triggered push-button debouncer.
//!
//! A press is the rising edge of the (pull-down convention) button level.
//! After an accepted press, further rising edges are ignored until more
//! than `debounce_ms` have elapsed. Releases are never filtered: the level
//! is tracked on every sample so that the next edge is detected correctly.

use crate::transitions::DEBOUNCE_MS;

/// Milliseconds elapsed from `then_ms` to `now_ms` on a wrapping 32-bit
/// clock. Correct across a rollover for any gap shorter than ~49.7 days.
#[inline]
pub fn elapsed_ms(now_ms: u32, then_ms: u32) -> u32 {
    now_ms.wrapping_sub(then_ms)
}

/// Debounced press detector for a single button.
#[derive(Debug, Clone)]
pub struct ButtonDebouncer {
    last_level: bool,
    last_press_ms: Option<u32>,
    debounce_ms: u32,
}

impl ButtonDebouncer {
    /// Create a debouncer seeded with the current button level and the
    /// default 50 ms window.
    ///
    /// Seeding with `true` means a button held at power-on does not count
    /// as a press; it has to be released and pressed again.
    pub fn new(pressed: bool) -> Self {
        Self::with_window(pressed, DEBOUNCE_MS)
    }

    /// Create a debouncer with a custom window in milliseconds.
    pub fn with_window(pressed: bool, debounce_ms: u32) -> Self {
        Self {
            last_level: pressed,
            last_press_ms: None,
            debounce_ms,
        }
    }

    /// Feed one sample. Returns `true` exactly when a press is accepted.
    pub fn update(&mut self, pressed: bool, now_ms: u32) -> bool {
        let rising = pressed && !self.last_level;
        self.last_level = pressed;

        if !rising {
            return false;
        }

        let outside_window = match self.last_press_ms {
            None => true,
            Some(then) => elapsed_ms(now_ms, then) > self.debounce_ms,
        };

        if outside_window {
            self.last_press_ms = Some(now_ms);
            #[cfg(feature = "defmt")]
            defmt::debug!("button press accepted at {=u32} ms", now_ms);
        } else {
            #[cfg(feature = "defmt")]
            defmt::trace!("button edge at {=u32} ms inside debounce window", now_ms);
        }

        outside_window
    }

    /// Last sampled level (`true` = pressed).
    pub fn level(&self) -> bool {
        self.last_level
    }

    /// Timestamp of the last accepted press, if any.
    pub fn last_press_ms(&self) -> Option<u32> {
        self.last_press_ms
    }

    /// Debounce window in milliseconds.
    pub fn debounce_ms(&self) -> u32 {
        self.debounce_ms
    }
}
