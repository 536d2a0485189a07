//! Quadrature transition table and decoder constants.
//!
//! The two encoder channels are packed into a 2-bit state `(a << 1) | b`.
//! A transition is addressed by concatenating the previous and the current
//! state into a 4-bit index: `(old << 2) | new`.
//!
//! ```text
//! clockwise:          00 -> 10 -> 11 -> 01 -> 00   (+1 per step)
//! counter-clockwise:  00 -> 01 -> 11 -> 10 -> 00   (-1 per step)
//! ```
//!
//! Same-state indices (0, 5, 10, 15) and double-bit jumps (3, 6, 9, 12)
//! decode to 0.

// ---------------------------------------------------------------------------
// Lookup table
// ---------------------------------------------------------------------------

/// Step delta for every `(old << 2) | new` quadrature transition.
pub const TRANSITION_TABLE: [i8; 16] = [0, -1, 1, 0, 1, 0, 0, -1, -1, 0, 0, 1, 0, 1, -1, 0];

/// Mask selecting a 2-bit quadrature state.
pub(crate) const STATE_MASK: u8 = 0b11;

// ---------------------------------------------------------------------------
// Decoder defaults
// ---------------------------------------------------------------------------

/// Raw quadrature transitions per mechanical detent on a standard EC11.
pub const STEPS_PER_DETENT: u8 = 4;

/// Largest supported detent size: one full quadrature cycle.
pub const MAX_STEPS_PER_DETENT: u8 = 4;

/// Minimum time between two accepted button presses, in milliseconds.
pub const DEBOUNCE_MS: u32 = 50;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Pack the two channel levels into a 2-bit quadrature state.
#[inline]
pub const fn pack_state(a: bool, b: bool) -> u8 {
    ((a as u8) << 1) | (b as u8)
}

/// Table index for a transition between two 2-bit states.
#[inline]
pub const fn transition_index(old: u8, new: u8) -> usize {
    ((((old & STATE_MASK) << 2) | (new & STATE_MASK)) & 0x0F) as usize
}

/// Step delta for a transition: `+1`, `-1`, or `0` for no movement.
#[inline]
pub const fn transition_delta(old: u8, new: u8) -> i8 {
    TRANSITION_TABLE[transition_index(old, new)]
}

/// `true` when both channels changed at once, meaning at least one sample
/// was missed between the two readings.
#[inline]
pub const fn is_double_jump(old: u8, new: u8) -> bool {
    (old ^ new) & STATE_MASK == STATE_MASK
}
