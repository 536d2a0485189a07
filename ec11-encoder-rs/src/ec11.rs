//! GPIO-backed interface for an EC11 rotary encoder with push-button.
//!
//! [`Ec11`] owns the three input pins, reads them through the
//! `embedded-hal` digital traits, normalises the button wiring and feeds
//! the pin-free [`EncoderDecoder`].

use embedded_hal::digital::InputPin;

use crate::config::{ButtonWiring, DecoderConfig};
use crate::decoder::EncoderDecoder;
use crate::error::EncoderError;
use crate::event::{EncoderEvent, EventSink};
use crate::rotation::Direction;

/// EC11 rotary encoder wired to three GPIO inputs.
///
/// Terminal A and B carry the quadrature signal, terminal C (here
/// `button`) the push switch. All three pins must share one error type,
/// which is the case for every HAL that reports `Infallible`.
///
/// # Example
///
/// ```ignore
/// use ec11_encoder::{ButtonWiring, DecoderConfig, Ec11};
///
/// // `a`, `b`, `c` are any `embedded-hal` 1.0 input pins.
/// let mut encoder = Ec11::new(a, b, c, ButtonWiring::PullDown, DecoderConfig::default())?;
///
/// loop {
///     let direction = encoder.read_rotation()?;
///     if encoder.read_button(now_ms())? {
///         encoder.reset_counter();
///     }
/// }
/// ```
pub struct Ec11<A, B, C> {
    pin_a: A,
    pin_b: B,
    button: C,
    wiring: ButtonWiring,
    decoder: EncoderDecoder,
}

impl<A, B, C, E> Ec11<A, B, C>
where
    A: InputPin<Error = E>,
    B: InputPin<Error = E>,
    C: InputPin<Error = E>,
{
    /// Create a new encoder interface.
    ///
    /// Validates `config` and reads all three pins once to seed the
    /// decoder, so the first poll does not report a spurious transition.
    ///
    /// # Arguments
    /// * `pin_a`, `pin_b` — quadrature inputs (takes ownership)
    /// * `button` — push-button input
    /// * `wiring` — how the button pin is pulled at rest
    /// * `config` — detent size and debounce window
    ///
    /// # Errors
    /// * [`EncoderError::InvalidConfig`] if `config` is rejected
    /// * [`EncoderError::Pin`] if the initial read fails
    pub fn new(
        mut pin_a: A,
        mut pin_b: B,
        mut button: C,
        wiring: ButtonWiring,
        config: DecoderConfig,
    ) -> Result<Self, EncoderError<E>> {
        let a = pin_a.is_high()?;
        let b = pin_b.is_high()?;
        let pressed = wiring.apply(button.is_high()?);

        let decoder = EncoderDecoder::with_config(a, b, pressed, &config)
            .map_err(EncoderError::InvalidConfig)?;

        Ok(Self {
            pin_a,
            pin_b,
            button,
            wiring,
            decoder,
        })
    }

    // -----------------------------------------------------------------------
    // Sampling
    // -----------------------------------------------------------------------

    /// Read both quadrature pins and advance the rotation state machine.
    ///
    /// # Errors
    /// [`EncoderError::Pin`] if either pin cannot be read; the decoder state
    /// is left untouched in that case.
    pub fn read_rotation(&mut self) -> Result<Direction, EncoderError<E>> {
        let a = self.pin_a.is_high()?;
        let b = self.pin_b.is_high()?;
        Ok(self.decoder.sample_rotation(a, b))
    }

    /// Read the button pin and run the debouncer.
    ///
    /// # Arguments
    /// * `now_ms` — monotonic milliseconds; may wrap around `u32::MAX`
    ///
    /// # Errors
    /// [`EncoderError::Pin`] if the pin cannot be read.
    pub fn read_button(&mut self, now_ms: u32) -> Result<bool, EncoderError<E>> {
        let pressed = self.wiring.apply(self.button.is_high()?);
        Ok(self.decoder.sample_button(pressed, now_ms))
    }

    /// Sample rotation and button once and deliver any resulting events.
    ///
    /// Rotation is sampled first, so a detent and a press in the same poll
    /// arrive in that order and the press carries the updated counter.
    pub fn poll<S>(&mut self, now_ms: u32, sink: &mut S) -> Result<(), EncoderError<E>>
    where
        S: EventSink + ?Sized,
    {
        self.poll_with_reset(now_ms, sink, false)
    }

    /// Same as [`poll`](Self::poll), optionally zeroing the counter after
    /// an accepted press.
    ///
    /// The [`EncoderEvent::ButtonPressed`] event is delivered first and
    /// carries the counter value from before the reset.
    pub fn poll_with_reset<S>(
        &mut self,
        now_ms: u32,
        sink: &mut S,
        reset_on_press: bool,
    ) -> Result<(), EncoderError<E>>
    where
        S: EventSink + ?Sized,
    {
        let direction = self.read_rotation()?;
        if !direction.is_idle() {
            sink.on_event(EncoderEvent::Rotated {
                direction,
                counter: self.decoder.counter(),
            });
        }

        if self.read_button(now_ms)? {
            sink.on_event(EncoderEvent::ButtonPressed {
                counter: self.decoder.counter(),
            });
            if reset_on_press {
                self.decoder.reset_counter();
            }
        }

        Ok(())
    }

    // -----------------------------------------------------------------------
    // Counter and state
    // -----------------------------------------------------------------------

    /// Net raw transitions since start-up or the last reset.
    pub fn counter(&self) -> i32 {
        self.decoder.counter()
    }

    /// Zero the counter.
    pub fn reset_counter(&mut self) {
        self.decoder.reset_counter();
    }

    /// Button wiring this encoder was created with.
    pub fn wiring(&self) -> ButtonWiring {
        self.wiring
    }

    /// Read-only access to the underlying decoder.
    pub fn decoder(&self) -> &EncoderDecoder {
        &self.decoder
    }

    /// Give the pins back.
    pub fn release(self) -> (A, B, C) {
        (self.pin_a, self.pin_b, self.button)
    }
}
