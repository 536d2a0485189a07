//! Polled driver for EC11 rotary encoders with integrated push-button.
//!
//! This crate turns raw GPIO levels from a mechanical quadrature encoder
//! into clean, discrete events: one [`Direction`] per detent and one
//! debounced press per click of the shaft button.
//!
//! # Architecture
//!
//! The crate is split into layers:
//!
//! - **[`transitions`]**: the 16-entry quadrature transition table and
//!   decoder constants.
//! - **[`QuadratureDecoder`]** / **[`ButtonDebouncer`]**: the two state
//!   machines, each usable on its own.
//! - **[`EncoderDecoder`]**: both state machines plus the position
//!   counter, fed with levels the caller has already read. No I/O.
//! - **[`Ec11`]**: owns three `embedded-hal` input pins and feeds the
//!   decoder, delivering [`EncoderEvent`]s to an [`EventSink`].
//! - **`task`** *(feature)*: Embassy polling loop around [`Ec11`].
//!
//! # Quick start
//!
//! ```ignore
//! use ec11_encoder::{ButtonWiring, DecoderConfig, Ec11, EncoderEvent};
//! use heapless::Deque;
//!
//! let mut encoder = Ec11::new(pin_a, pin_b, pin_c, ButtonWiring::PullDown, DecoderConfig::default())?;
//! let mut events: Deque<EncoderEvent, 8> = Deque::new();
//!
//! loop {
//!     encoder.poll(now_ms(), &mut events)?;
//!     while let Some(event) = events.pop_front() {
//!         // react to the event
//!     }
//! }
//! ```
//!
//! # Features
//!
//! - **`defmt`**: `defmt::Format` implementations on public types and
//!   trace/debug logging inside the decoder.
//! - **`task`**: `encoder_poll_task` and an [`EventSink`] implementation
//!   for `embassy_sync::channel::Sender`.

#![cfg_attr(not(test), no_std)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod button;
pub mod config;
pub mod decoder;
pub mod ec11;
pub mod error;
pub mod event;
pub mod rotation;
#[cfg(feature = "task")]
pub mod task;
pub mod transitions;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use button::ButtonDebouncer;
pub use config::{ButtonWiring, DecoderConfig, PollConfig};
pub use decoder::EncoderDecoder;
pub use ec11::Ec11;
pub use error::{ConfigError, EncoderError};
pub use event::{EncoderEvent, EventSink};
pub use rotation::{Direction, QuadratureDecoder};
#[cfg(feature = "task")]
pub use task::encoder_poll_task;
pub use transitions::{DEBOUNCE_MS, MAX_STEPS_PER_DETENT, STEPS_PER_DETENT, TRANSITION_TABLE};
