//! Error types for the encoder driver.

use core::fmt;

/// Invalid [`DecoderConfig`](crate::DecoderConfig) values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `steps_per_detent` must be in `1..=4`.
    InvalidStepsPerDetent,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::InvalidStepsPerDetent => write!(f, "steps per detent must be 1-4"),
        }
    }
}

/// Errors that can occur when sampling the encoder pins.
#[derive(Debug)]
pub enum EncoderError<E> {
    /// Reading a GPIO pin failed.
    Pin(E),

    /// The decoder configuration was rejected.
    InvalidConfig(ConfigError),
}

// Allow ergonomic `?` propagation from raw pin errors.
impl<E> From<E> for EncoderError<E> {
    fn from(error: E) -> Self {
        EncoderError::Pin(error)
    }
}

impl<E: fmt::Debug> fmt::Display for EncoderError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EncoderError::Pin(e) => write!(f, "GPIO error: {:?}", e),
            EncoderError::InvalidConfig(e) => write!(f, "Invalid configuration: {}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for EncoderError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            EncoderError::Pin(e) => defmt::write!(f, "GPIO error: {}", e),
            EncoderError::InvalidConfig(e) => defmt::write!(f, "Invalid configuration: {}", e),
        }
    }
}
