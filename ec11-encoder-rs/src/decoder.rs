//! Pin-free EC11 decoder: rotation and push-button in one owned value.
//!
//! [`EncoderDecoder`] consumes raw levels that the caller has already read
//! from GPIO and produces clean events. It performs no I/O and holds no
//! global state, so it can be driven from a superloop, a timer interrupt
//! (behind the caller's own critical section) or the Embassy task in
//! the `task` module.

use crate::button::ButtonDebouncer;
use crate::config::DecoderConfig;
use crate::error::ConfigError;
use crate::rotation::{Direction, QuadratureDecoder};

/// Quadrature decoder with integrated debounced push-button detection.
///
/// # Example
///
/// ```
/// use ec11_encoder::{Direction, EncoderDecoder};
///
/// // Seed with the levels read at start-up: A=0, B=0, button released.
/// let mut decoder = EncoderDecoder::new(false, false, false);
///
/// // One detent clockwise: 00 -> 10 -> 11 -> 01 -> 00
/// assert_eq!(decoder.sample_rotation(true, false), Direction::Idle);
/// assert_eq!(decoder.sample_rotation(true, true), Direction::Idle);
/// assert_eq!(decoder.sample_rotation(false, true), Direction::Idle);
/// assert_eq!(decoder.sample_rotation(false, false), Direction::Clockwise);
/// assert_eq!(decoder.counter(), 4);
///
/// assert!(decoder.sample_button(true, 1_000));
/// decoder.reset_counter();
/// assert_eq!(decoder.counter(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct EncoderDecoder {
    rotation: QuadratureDecoder,
    button: ButtonDebouncer,
}

impl EncoderDecoder {
    /// Create a decoder from an initial sample of all three pins, using the
    /// default [`DecoderConfig`].
    ///
    /// `button` follows the pull-down convention: `true` = pressed.
    pub fn new(pin_a: bool, pin_b: bool, button: bool) -> Self {
        let config = DecoderConfig::default();
        Self {
            rotation: QuadratureDecoder::with_steps_per_detent(pin_a, pin_b, config.steps_per_detent),
            button: ButtonDebouncer::with_window(button, config.debounce_ms),
        }
    }

    /// Create a decoder with a custom configuration.
    ///
    /// Returns an error if `config` fails [`DecoderConfig::validate`].
    pub fn with_config(
        pin_a: bool,
        pin_b: bool,
        button: bool,
        config: &DecoderConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            rotation: QuadratureDecoder::with_steps_per_detent(pin_a, pin_b, config.steps_per_detent),
            button: ButtonDebouncer::with_window(button, config.debounce_ms),
        })
    }

    // -----------------------------------------------------------------------
    // Sampling
    // -----------------------------------------------------------------------

    /// Feed the current levels of the two quadrature pins.
    ///
    /// Returns [`Direction::Clockwise`] or [`Direction::CounterClockwise`]
    /// on the sample that completes a detent, and [`Direction::Idle`]
    /// otherwise. The counter moves on every valid raw transition.
    pub fn sample_rotation(&mut self, pin_a: bool, pin_b: bool) -> Direction {
        self.rotation.update(pin_a, pin_b)
    }

    /// Feed the current button level (`true` = pressed) and a monotonic
    /// millisecond timestamp.
    ///
    /// Returns `true` on an accepted press. The timestamp may wrap around
    /// `u32::MAX`.
    pub fn sample_button(&mut self, pressed: bool, now_ms: u32) -> bool {
        self.button.update(pressed, now_ms)
    }

    // -----------------------------------------------------------------------
    // Counter
    // -----------------------------------------------------------------------

    /// Net raw transitions since construction or the last
    /// [`reset_counter`](Self::reset_counter). Saturates instead of wrapping.
    pub fn counter(&self) -> i32 {
        self.rotation.position()
    }

    /// Zero the counter. Pending detent steps and button state are kept.
    pub fn reset_counter(&mut self) {
        self.rotation.reset_position();
    }

    // -----------------------------------------------------------------------
    // Diagnostics
    // -----------------------------------------------------------------------

    /// Raw steps accumulated towards the next detent.
    pub fn pending_steps(&self) -> i8 {
        self.rotation.pending_steps()
    }

    /// Last sampled quadrature state, `(a << 1) | b`.
    pub fn quadrature_state(&self) -> u8 {
        self.rotation.state()
    }

    /// Last sampled button level.
    pub fn button_level(&self) -> bool {
        self.button.level()
    }

    /// Double-bit jumps absorbed so far.
    pub fn missed_transitions(&self) -> u32 {
        self.rotation.missed_transitions()
    }
}
