//! ec11-hw-interface
//!
//! EC11 rotary encoder test firmware for the Raspberry Pi Pico 2. Wires the
//! `ec11-encoder` crate into a live loop:
//!
//! 1. The encoder task polls the A/B/C pins every millisecond.
//! 2. Each completed detent or debounced button press is pushed into the
//!    `EVENTS` channel.
//! 3. The logger task drains the channel and prints every event with the
//!    current counter. A button press zeroes the counter.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use {defmt_rtt as _, panic_probe as _};

use ec11_encoder::{
    encoder_poll_task, ButtonWiring, DecoderConfig, Direction, Ec11, EncoderEvent, PollConfig,
};

// ---------------------------------------------------------------------------
// Boot block
// ---------------------------------------------------------------------------

/// Tell the RP2350 Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = embassy_rp::block::ImageDef::secure_exe();

// ---------------------------------------------------------------------------
// Static storage
// ---------------------------------------------------------------------------

/// Capacity of the event channel between the encoder and logger tasks.
const EVENT_CAPACITY: usize = 8;

/// Encoder events: written by the encoder task, read by the logger task.
static EVENTS: Channel<CriticalSectionRawMutex, EncoderEvent, EVENT_CAPACITY> = Channel::new();

// ---------------------------------------------------------------------------
// Type aliases
// ---------------------------------------------------------------------------

/// Concrete encoder type on this board.
type Encoder = Ec11<Input<'static>, Input<'static>, Input<'static>>;

type EventSender = Sender<'static, CriticalSectionRawMutex, EncoderEvent, EVENT_CAPACITY>;
type EventReceiver = Receiver<'static, CriticalSectionRawMutex, EncoderEvent, EVENT_CAPACITY>;

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Thin wrapper that monomorphises the generic `encoder_poll_task` so it can
/// be spawned as a concrete Embassy task.
#[embassy_executor::task]
async fn encoder_task(encoder: Encoder, events: EventSender, config: PollConfig) {
    encoder_poll_task(encoder, events, config).await;
}

/// Logs every encoder event.
#[embassy_executor::task]
async fn logger_task(events: EventReceiver) {
    info!("Logger task started");

    loop {
        match events.receive().await {
            EncoderEvent::Rotated { direction: Direction::Clockwise, counter } => {
                info!("Clockwise      - Counter: {}", counter);
            }
            EncoderEvent::Rotated { direction: Direction::CounterClockwise, counter } => {
                info!("Anti-clockwise - Counter: {}", counter);
            }
            EncoderEvent::Rotated { direction: Direction::Idle, .. } => {}
            EncoderEvent::ButtonPressed { counter } => {
                info!("Button pressed! Counter: {} -> 0", counter);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("ec11-hw-interface starting");

    // —— Pin assignments ————————————————————————————————————————————————————
    // ENC_A → GP3  (p.PIN_3)  external 10k pull-up, no internal pull
    // ENC_B → GP4  (p.PIN_4)  external 10k pull-up, no internal pull
    // ENC_C → GP5  (p.PIN_5)  button to 3V3, internal pull-down
    // ———————————————————————————————————————————————————————————————————————

    let pin_a = Input::new(p.PIN_3, Pull::None);
    let pin_b = Input::new(p.PIN_4, Pull::None);
    let pin_c = Input::new(p.PIN_5, Pull::Down);

    let encoder = match Ec11::new(pin_a, pin_b, pin_c, ButtonWiring::PullDown, DecoderConfig::default()) {
        Ok(encoder) => encoder,
        Err(e) => {
            error!("Encoder setup failed: {}", e);
            return;
        }
    };

    info!(
        "Encoder ready: A=GP3 B=GP4 C=GP5, initial state {=u8:b}",
        encoder.decoder().quadrature_state()
    );
    info!("Rotate encoder or press button...");

    // A press reports the counter, then zeroes it.
    let poll_config = PollConfig {
        poll_period_ms: 1,
        reset_counter_on_press: true,
    };

    // —— Spawn tasks ————————————————————————————————————————————————————————

    unwrap!(spawner.spawn(logger_task(EVENTS.receiver())));
    unwrap!(spawner.spawn(encoder_task(encoder, EVENTS.sender(), poll_config)));

    info!("All tasks spawned");
}
