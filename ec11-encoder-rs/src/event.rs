//! Encoder events and the consumer interface they are delivered through.
//!
//! The decoder itself never performs I/O. Whatever reacts to the encoder
//! (logging, a UI, a parameter store) implements [`EventSink`] and is handed
//! to [`Ec11::poll`](crate::Ec11::poll) or the async polling task.

use heapless::Deque;

use crate::rotation::Direction;

/// A discrete event produced by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncoderEvent {
    /// The shaft moved by one detent.
    Rotated {
        /// Never [`Direction::Idle`].
        direction: Direction,
        /// Counter value after the detent.
        counter: i32,
    },
    /// The push-button was pressed.
    ButtonPressed {
        /// Counter value at the moment of the press.
        counter: i32,
    },
}

/// Receiver of [`EncoderEvent`]s.
pub trait EventSink {
    /// Handle one event. Must not block.
    fn on_event(&mut self, event: EncoderEvent);
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn on_event(&mut self, event: EncoderEvent) {
        (**self).on_event(event);
    }
}

/// Fixed-capacity queue for superloop firmware without an executor.
///
/// When the queue is full the new event is dropped.
impl<const N: usize> EventSink for Deque<EncoderEvent, N> {
    fn on_event(&mut self, event: EncoderEvent) {
        if let Err(_dropped) = self.push_back(event) {
            #[cfg(feature = "defmt")]
            defmt::warn!("Event queue full, dropping {}", _dropped);
        }
    }
}

#[cfg(feature = "task")]
impl<M, const N: usize> EventSink for embassy_sync::channel::Sender<'_, M, EncoderEvent, N>
where
    M: embassy_sync::blocking_mutex::raw::RawMutex,
{
    fn on_event(&mut self, event: EncoderEvent) {
        if let Err(_e) = self.try_send(event) {
            #[cfg(feature = "defmt")]
            defmt::warn!("Event channel full, dropping {}", event);
        }
    }
}
