//! Embassy polling loop for an [`Ec11`].
//!
//! [`encoder_poll_task`] replaces the hand-written superloop: it samples the
//! pins at a fixed period, timestamps button samples with
//! [`embassy_time::Instant`], and hands events to an [`EventSink`],
//! typically an `embassy_sync` channel sender read by another task.

use embassy_time::{Duration, Instant, Timer};
use embedded_hal::digital::InputPin;

use crate::config::PollConfig;
use crate::ec11::Ec11;
use crate::event::EventSink;

/// Current uptime as a wrapping 32-bit millisecond stamp.
fn now_ms() -> u32 {
    // Truncation is the intended wraparound.
    Instant::now().as_millis() as u32
}

/// Periodic encoder polling loop. Runs forever.
///
/// This is a regular `async fn`, **not** an Embassy `#[task]`. Callers
/// create a thin, concrete task wrapper, since Embassy tasks cannot be
/// generic:
///
/// ```ignore
/// #[embassy_executor::task]
/// async fn encoder_task(
///     encoder: Ec11<Input<'static>, Input<'static>, Input<'static>>,
///     events: Sender<'static, CriticalSectionRawMutex, EncoderEvent, 8>,
/// ) {
///     encoder_poll_task(encoder, events, PollConfig::default()).await;
/// }
/// ```
///
/// # Errors
///
/// A failed pin read is logged and the loop carries on with the next poll.
pub async fn encoder_poll_task<A, B, C, E, S>(
    mut encoder: Ec11<A, B, C>,
    mut sink: S,
    config: PollConfig,
) where
    A: InputPin<Error = E>,
    B: InputPin<Error = E>,
    C: InputPin<Error = E>,
    S: EventSink,
{
    let period = Duration::from_millis(config.poll_period_ms());

    #[cfg(feature = "defmt")]
    defmt::info!("Encoder polling every {} ms", config.poll_period_ms());

    loop {
        Timer::after(period).await;

        if let Err(_e) = encoder.poll_with_reset(now_ms(), &mut sink, config.reset_counter_on_press) {
            #[cfg(feature = "defmt")]
            defmt::warn!("Encoder pin read failed");
        }
    }
}
