//! Hover lifecycle for a tiltable surface.
//!
//! Two states: `Idle` and `Hovering`. Enter moves to `Hovering`, every move
//! while hovering recomputes the tilt, leave resets to `Idle` and the
//! neutral state. Click is deliberately not a transition; it only fires the
//! independent bounce effect, which the UI layer owns.

use crate::tilt::{compute_tilt, SurfaceRect, TiltConfig, TiltState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverPhase {
    Idle,
    Hovering,
}

/// Per-surface hover machine. Owns nothing but the phase; the display state
/// it returns is recomputed from scratch on every event, so there is no
/// hidden accumulation between events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverMachine {
    phase: HoverPhase,
    config: TiltConfig,
}

impl HoverMachine {
    pub fn new(config: TiltConfig) -> Self {
        Self {
            phase: HoverPhase::Idle,
            config,
        }
    }

    pub fn phase(&self) -> HoverPhase {
        self.phase
    }

    pub fn config(&self) -> &TiltConfig {
        &self.config
    }

    /// Pointer entered the surface: transition to `Hovering` and compute the
    /// first tilt.
    pub fn pointer_enter(&mut self, pointer_x: f64, pointer_y: f64, rect: &SurfaceRect) -> TiltState {
        self.phase = HoverPhase::Hovering;
        compute_tilt(pointer_x, pointer_y, rect, &self.config)
    }

    /// Pointer moved. Recomputes while hovering; a stray move without a
    /// preceding enter leaves the surface at rest.
    pub fn pointer_move(&mut self, pointer_x: f64, pointer_y: f64, rect: &SurfaceRect) -> TiltState {
        match self.phase {
            HoverPhase::Hovering => compute_tilt(pointer_x, pointer_y, rect, &self.config),
            HoverPhase::Idle => TiltState::neutral(),
        }
    }

    /// Pointer left the surface: back to `Idle` and the exact neutral state,
    /// regardless of the hover trajectory.
    pub fn pointer_leave(&mut self) -> TiltState {
        self.phase = HoverPhase::Idle;
        TiltState::neutral()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> SurfaceRect {
        SurfaceRect::new(0.0, 0.0, 200.0, 100.0)
    }

    #[test]
    fn starts_idle() {
        let machine = HoverMachine::new(TiltConfig::default());
        assert_eq!(machine.phase(), HoverPhase::Idle);
    }

    #[test]
    fn enter_transitions_to_hovering() {
        let mut machine = HoverMachine::new(TiltConfig::default());
        let state = machine.pointer_enter(200.0, 0.0, &rect());
        assert_eq!(machine.phase(), HoverPhase::Hovering);
        assert_eq!(state.rotation_x_deg, 8.0);
    }

    #[test]
    fn move_while_hovering_recomputes() {
        let mut machine = HoverMachine::new(TiltConfig::default());
        machine.pointer_enter(100.0, 50.0, &rect());
        let state = machine.pointer_move(200.0, 0.0, &rect());
        assert_eq!(machine.phase(), HoverPhase::Hovering);
        assert_eq!(state.rotation_y_deg, 8.0);
    }

    #[test]
    fn move_while_idle_stays_neutral() {
        let mut machine = HoverMachine::new(TiltConfig::default());
        let state = machine.pointer_move(200.0, 0.0, &rect());
        assert_eq!(machine.phase(), HoverPhase::Idle);
        assert!(state.is_neutral());
    }

    #[test]
    fn leave_resets_to_neutral_regardless_of_trajectory() {
        let mut machine = HoverMachine::new(TiltConfig::default());
        machine.pointer_enter(10.0, 10.0, &rect());
        machine.pointer_move(150.0, 80.0, &rect());
        machine.pointer_move(30.0, 5.0, &rect());
        let state = machine.pointer_leave();
        assert_eq!(machine.phase(), HoverPhase::Idle);
        assert!(state.is_neutral());
    }

    #[test]
    fn leave_is_idempotent() {
        let mut machine = HoverMachine::new(TiltConfig::default());
        machine.pointer_enter(10.0, 10.0, &rect());
        let first = machine.pointer_leave();
        let second = machine.pointer_leave();
        assert_eq!(first, second);
        assert!(second.is_neutral());
    }

    #[test]
    fn reenter_after_leave_hovers_again() {
        let mut machine = HoverMachine::new(TiltConfig::default());
        machine.pointer_enter(10.0, 10.0, &rect());
        machine.pointer_leave();
        let state = machine.pointer_enter(100.0, 50.0, &rect());
        assert_eq!(machine.phase(), HoverPhase::Hovering);
        assert_eq!(state.glow_intensity, 1.0);
    }
}
