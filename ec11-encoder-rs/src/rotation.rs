//! Quadrature state machine with detent accumulation.

use crate::transitions::{
    is_double_jump, pack_state, transition_delta, MAX_STEPS_PER_DETENT, STATE_MASK, STEPS_PER_DETENT,
};

/// Direction of a completed detent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(i8)]
pub enum Direction {
    /// One detent counter-clockwise.
    CounterClockwise = -1,
    /// No detent completed on this sample.
    #[default]
    Idle = 0,
    /// One detent clockwise.
    Clockwise = 1,
}

impl Direction {
    /// Signed value: `-1`, `0` or `+1`.
    #[inline]
    pub const fn as_i8(self) -> i8 {
        self as i8
    }

    /// `true` for [`Direction::Idle`].
    #[inline]
    pub const fn is_idle(self) -> bool {
        matches!(self, Direction::Idle)
    }

    /// Sign of an accumulated step count.
    pub const fn from_steps(steps: i8) -> Self {
        if steps > 0 {
            Direction::Clockwise
        } else if steps < 0 {
            Direction::CounterClockwise
        } else {
            Direction::Idle
        }
    }
}

impl From<Direction> for i8 {
    fn from(direction: Direction) -> Self {
        direction.as_i8()
    }
}

impl From<Direction> for i32 {
    fn from(direction: Direction) -> Self {
        i32::from(direction.as_i8())
    }
}

/// Decodes raw A/B samples into detent events and a fine-grained position.
///
/// Every valid raw transition moves `position` by one; a [`Direction`] is
/// only reported once `steps_per_detent` transitions have accumulated in
/// the same net direction. Double-bit jumps are absorbed as no-ops.
#[derive(Debug, Clone)]
pub struct QuadratureDecoder {
    last_state: u8,
    position: i32,
    accumulator: i8,
    steps_per_detent: i8,
    missed: u32,
}

impl QuadratureDecoder {
    /// Create a decoder seeded with the current channel levels, using the
    /// default of 4 steps per detent.
    pub fn new(a: bool, b: bool) -> Self {
        Self::with_steps_per_detent(a, b, STEPS_PER_DETENT)
    }

    /// Create a decoder with a custom detent size.
    ///
    /// `steps_per_detent` is clamped to `1..=MAX_STEPS_PER_DETENT`; use
    /// [`DecoderConfig::validate`](crate::DecoderConfig::validate) to reject
    /// bad values instead.
    pub fn with_steps_per_detent(a: bool, b: bool, steps_per_detent: u8) -> Self {
        Self {
            last_state: pack_state(a, b),
            position: 0,
            accumulator: 0,
            steps_per_detent: steps_per_detent.clamp(1, MAX_STEPS_PER_DETENT) as i8,
            missed: 0,
        }
    }

    /// Feed one sample of both channels.
    ///
    /// Returns the detent direction when this sample completes a detent,
    /// [`Direction::Idle`] otherwise.
    pub fn update(&mut self, a: bool, b: bool) -> Direction {
        let current = pack_state(a, b);
        let delta = transition_delta(self.last_state, current);

        if delta == 0 {
            if is_double_jump(self.last_state, current) {
                self.missed = self.missed.saturating_add(1);
                #[cfg(feature = "defmt")]
                defmt::trace!("quadrature jump {=u8:b} -> {=u8:b} ignored", self.last_state, current);
            }
            self.last_state = current;
            return Direction::Idle;
        }

        self.accumulator += delta;
        self.position = self.position.saturating_add(i32::from(delta));
        self.last_state = current;

        if self.accumulator.abs() >= self.steps_per_detent {
            let direction = Direction::from_steps(self.accumulator);
            self.accumulator = 0;
            return direction;
        }

        Direction::Idle
    }

    /// Net raw transitions since construction or the last reset.
    ///
    /// Saturates at `i32::MIN` / `i32::MAX` rather than wrapping.
    pub fn position(&self) -> i32 {
        self.position
    }

    /// Zero the position. The pending detent steps are kept.
    pub fn reset_position(&mut self) {
        self.position = 0;
    }

    /// Raw steps accumulated towards the next detent.
    pub fn pending_steps(&self) -> i8 {
        self.accumulator
    }

    /// Raw transitions that make up one detent.
    pub fn steps_per_detent(&self) -> u8 {
        self.steps_per_detent as u8
    }

    /// Last sampled 2-bit state, `(a << 1) | b`.
    pub fn state(&self) -> u8 {
        self.last_state & STATE_MASK
    }

    /// Number of double-bit jumps seen, i.e. samples that were missed.
    pub fn missed_transitions(&self) -> u32 {
        self.missed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CW: [(bool, bool); 4] = [(true, false), (true, true), (false, true), (false, false)];
    const CCW: [(bool, bool); 4] = [(false, true), (true, true), (true, false), (false, false)];

    fn feed(dec: &mut QuadratureDecoder, samples: &[(bool, bool)]) -> [Direction; 4] {
        let mut out = [Direction::Idle; 4];
        for (i, &(a, b)) in samples.iter().enumerate() {
            out[i] = dec.update(a, b);
        }
        out
    }

    // ── Direction ────────────────────────────────────────────────────

    #[test]
    fn direction_values() {
        assert_eq!(Direction::Clockwise.as_i8(), 1);
        assert_eq!(Direction::CounterClockwise.as_i8(), -1);
        assert_eq!(Direction::Idle.as_i8(), 0);
        assert_eq!(i32::from(Direction::CounterClockwise), -1);
        assert!(Direction::default().is_idle());
    }

    #[test]
    fn direction_from_steps_is_sign() {
        assert_eq!(Direction::from_steps(4), Direction::Clockwise);
        assert_eq!(Direction::from_steps(-7), Direction::CounterClockwise);
        assert_eq!(Direction::from_steps(0), Direction::Idle);
    }

    // ── Detents ──────────────────────────────────────────────────────

    #[test]
    fn four_clockwise_steps_emit_once_on_the_fourth() {
        let mut dec = QuadratureDecoder::new(false, false);
        let out = feed(&mut dec, &CW);
        assert_eq!(out, [Direction::Idle, Direction::Idle, Direction::Idle, Direction::Clockwise]);
        assert_eq!(dec.position(), 4);
        assert_eq!(dec.pending_steps(), 0);
    }

    #[test]
    fn four_counter_clockwise_steps_emit_once_on_the_fourth() {
        let mut dec = QuadratureDecoder::new(false, false);
        let out = feed(&mut dec, &CCW);
        assert_eq!(
            out,
            [Direction::Idle, Direction::Idle, Direction::Idle, Direction::CounterClockwise]
        );
        assert_eq!(dec.position(), -4);
        assert_eq!(dec.pending_steps(), 0);
    }

    #[test]
    fn counter_clockwise_scenario_step_by_step() {
        let mut dec = QuadratureDecoder::new(false, false);

        assert_eq!(dec.update(false, true), Direction::Idle);
        assert_eq!(dec.pending_steps(), -1);
        assert_eq!(dec.update(true, true), Direction::Idle);
        assert_eq!(dec.pending_steps(), -2);
        assert_eq!(dec.update(true, false), Direction::Idle);
        assert_eq!(dec.pending_steps(), -3);
        assert_eq!(dec.update(false, false), Direction::CounterClockwise);
        assert_eq!(dec.pending_steps(), 0);
        assert_eq!(dec.state(), 0);
    }

    #[test]
    fn accumulator_stays_below_a_detent_between_emissions() {
        let mut dec = QuadratureDecoder::new(false, false);
        for _ in 0..10 {
            for &(a, b) in &CW {
                let dir = dec.update(a, b);
                if dir.is_idle() {
                    assert!(dec.pending_steps().abs() <= 3);
                } else {
                    assert_eq!(dec.pending_steps(), 0);
                }
            }
        }
        assert_eq!(dec.position(), 40);
    }

    #[test]
    fn back_and_forth_wobble_never_emits() {
        let mut dec = QuadratureDecoder::new(false, false);
        for _ in 0..20 {
            assert_eq!(dec.update(true, false), Direction::Idle);
            assert_eq!(dec.update(false, false), Direction::Idle);
        }
        assert_eq!(dec.position(), 0);
        assert_eq!(dec.pending_steps(), 0);
    }

    #[test]
    fn reversal_mid_detent_cancels_pending_steps() {
        let mut dec = QuadratureDecoder::new(false, false);
        // Two steps clockwise, then back the same two steps.
        dec.update(true, false);
        dec.update(true, true);
        assert_eq!(dec.pending_steps(), 2);
        dec.update(true, false);
        dec.update(false, false);
        assert_eq!(dec.pending_steps(), 0);
        // A full counter-clockwise cycle now emits exactly one detent.
        let out = feed(&mut dec, &CCW);
        assert_eq!(out[3], Direction::CounterClockwise);
        assert_eq!(dec.position(), -4);
    }

    #[test]
    fn custom_detent_size() {
        let mut dec = QuadratureDecoder::with_steps_per_detent(false, false, 2);
        let out = feed(&mut dec, &CW);
        assert_eq!(out, [Direction::Idle, Direction::Clockwise, Direction::Idle, Direction::Clockwise]);
    }

    #[test]
    fn detent_size_is_clamped() {
        let mut dec = QuadratureDecoder::with_steps_per_detent(false, false, 0);
        assert_eq!(dec.steps_per_detent(), 1);
        assert_eq!(dec.update(true, false), Direction::Clockwise);

        let mut dec = QuadratureDecoder::with_steps_per_detent(false, false, 9);
        assert_eq!(dec.steps_per_detent(), MAX_STEPS_PER_DETENT);
        let out = feed(&mut dec, &CW);
        assert_eq!(out, [Direction::Idle, Direction::Idle, Direction::Idle, Direction::Clockwise]);
    }

    // ── No-op samples ────────────────────────────────────────────────

    #[test]
    fn unchanged_levels_are_idempotent() {
        let mut dec = QuadratureDecoder::new(true, true);
        dec.update(false, true);
        let (pos, pending) = (dec.position(), dec.pending_steps());
        for _ in 0..100 {
            assert_eq!(dec.update(false, true), Direction::Idle);
        }
        assert_eq!(dec.position(), pos);
        assert_eq!(dec.pending_steps(), pending);
        assert_eq!(dec.missed_transitions(), 0);
    }

    #[test]
    fn double_jump_is_absorbed() {
        let mut dec = QuadratureDecoder::new(false, false);
        dec.update(true, false);
        assert_eq!(dec.position(), 1);

        // 10 -> 01 flips both channels.
        assert_eq!(dec.update(false, true), Direction::Idle);
        assert_eq!(dec.position(), 1);
        assert_eq!(dec.pending_steps(), 1);
        assert_eq!(dec.missed_transitions(), 1);
        // The new state is still tracked.
        assert_eq!(dec.state(), 0b01);
    }

    // ── Position ─────────────────────────────────────────────────────

    #[test]
    fn position_is_signed_sum_of_deltas() {
        let mut dec = QuadratureDecoder::new(false, false);
        let samples = [
            (true, false),
            (true, true),
            (true, false),
            (false, false),
            (false, true),
            (true, true),
            (true, false),
            (false, false),
            (false, true),
        ];
        let mut expected = 0i32;
        let mut last = pack_state(false, false);
        for &(a, b) in &samples {
            let next = pack_state(a, b);
            expected += i32::from(transition_delta(last, next));
            last = next;
            dec.update(a, b);
        }
        assert_eq!(dec.position(), expected);
        assert_eq!(dec.position(), -5);
    }

    #[test]
    fn reset_position_keeps_pending_steps() {
        let mut dec = QuadratureDecoder::new(false, false);
        dec.update(true, false);
        dec.update(true, true);
        dec.reset_position();
        assert_eq!(dec.position(), 0);
        assert_eq!(dec.pending_steps(), 2);
        assert_eq!(dec.update(false, true), Direction::Idle);
        assert_eq!(dec.update(false, false), Direction::Clockwise);
        assert_eq!(dec.position(), 2);
    }

    #[test]
    fn position_saturates() {
        let mut dec = QuadratureDecoder::new(false, false);
        dec.position = i32::MAX - 1;
        feed(&mut dec, &CW);
        assert_eq!(dec.position(), i32::MAX);
    }
}
