//! Decoder, wiring and polling configuration.

use crate::error::ConfigError;
use crate::transitions::{DEBOUNCE_MS, MAX_STEPS_PER_DETENT, STEPS_PER_DETENT};

// ── Decoder ──────────────────────────────────────────────────────────────

/// Tuning for [`EncoderDecoder`](crate::EncoderDecoder).
///
/// The defaults match an EC11 with one detent per full quadrature cycle
/// and a typical tactile switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecoderConfig {
    /// Raw transitions that make up one detent (1–4). Default: 4.
    pub steps_per_detent: u8,
    /// Press cooldown in milliseconds. A rising edge is accepted only when
    /// strictly more than this has elapsed since the last accepted press.
    /// Default: 50.
    pub debounce_ms: u32,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            steps_per_detent: STEPS_PER_DETENT,
            debounce_ms: DEBOUNCE_MS,
        }
    }
}

impl DecoderConfig {
    /// Check that the configuration can be honoured by the decoder.
    ///
    /// Any `debounce_ms` is accepted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.steps_per_detent == 0 || self.steps_per_detent > MAX_STEPS_PER_DETENT {
            return Err(ConfigError::InvalidStepsPerDetent);
        }
        Ok(())
    }
}

// ── Button wiring ────────────────────────────────────────────────────────

/// Electrical configuration of the push-button pin.
///
/// The decoder always works in the pull-down convention (`true` = pressed);
/// [`ButtonWiring::apply`] converts a raw pin level into that convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonWiring {
    /// Pin reads low at rest and high while pressed.
    #[default]
    PullDown,
    /// Pin reads high at rest and low while pressed.
    PullUp,
}

impl ButtonWiring {
    /// Convert a raw pin level to "is pressed".
    #[inline]
    pub fn apply(self, raw_high: bool) -> bool {
        match self {
            ButtonWiring::PullDown => raw_high,
            ButtonWiring::PullUp => !raw_high,
        }
    }
}

// ── Polling ──────────────────────────────────────────────────────────────

/// Settings for the polling loop driving an [`Ec11`](crate::Ec11).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollConfig {
    /// Delay between two polls in milliseconds. Default: 1.
    pub poll_period_ms: u64,
    /// Zero the position counter after every accepted button press.
    /// The press event still carries the counter value before the reset
    /// (see [`Ec11::poll_with_reset`](crate::Ec11::poll_with_reset)).
    /// Default: `false`.
    pub reset_counter_on_press: bool,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            poll_period_ms: 1,
            reset_counter_on_press: false,
        }
    }
}

impl PollConfig {
    /// Poll period in milliseconds, never less than 1.
    pub fn poll_period_ms(&self) -> u64 {
        self.poll_period_ms.max(1)
    }
}
