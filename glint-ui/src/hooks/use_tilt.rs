// glint-ui/src/hooks/use_tilt.rs
use glint_core::{HoverMachine, HoverPhase, SurfaceRect, TiltConfig, TiltState};
use leptos::*;

/// Handle returned by [`use_tilt`]: one surface's tilt state plus the
/// pointer-event entry points that drive it.
#[derive(Clone, Copy)]
pub struct TiltHandle {
    /// Current deformation to render. Starts neutral.
    pub state: ReadSignal<TiltState>,
    set_state: WriteSignal<TiltState>,
    machine: StoredValue<HoverMachine>,
}

/// Hook owning the tilt state of a single hoverable surface.
///
/// The state is created neutral on mount and discarded with the component;
/// nothing is shared between surfaces. Every pointer event recomputes the
/// whole state through the pure core function, so there is no accumulation
/// between events.
pub fn use_tilt(config: TiltConfig) -> TiltHandle {
    let (state, set_state) = create_signal(TiltState::neutral());
    let machine = store_value(HoverMachine::new(config));

    TiltHandle {
        state,
        set_state,
        machine,
    }
}

impl TiltHandle {
    pub fn phase(&self) -> HoverPhase {
        self.machine.with_value(|m| m.phase())
    }

    pub fn pointer_enter(&self, pointer_x: f64, pointer_y: f64, rect: &SurfaceRect) {
        let mut next = TiltState::neutral();
        self.machine
            .update_value(|m| next = m.pointer_enter(pointer_x, pointer_y, rect));
        self.set_state.set(next);
    }

    pub fn pointer_move(&self, pointer_x: f64, pointer_y: f64, rect: &SurfaceRect) {
        let mut next = TiltState::neutral();
        self.machine
            .update_value(|m| next = m.pointer_move(pointer_x, pointer_y, rect));
        self.set_state.set(next);
    }

    pub fn pointer_leave(&self) {
        let mut next = TiltState::neutral();
        self.machine.update_value(|m| next = m.pointer_leave());
        self.set_state.set(next);
    }
}
