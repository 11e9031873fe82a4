// glint-ui/src/hooks/use_bounce.rs
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use std::time::Duration;

/// Handle for the one-shot bounce animation on a surface.
///
/// The bounce is decorative and independent of tilt state. Its lifecycle:
/// `trigger` raises the active flag, the CSS animation runs, and the
/// `animationend` handler calls `finish` to lower it again. Re-triggering
/// while active restarts the animation (drop the class for one tick, then
/// re-apply); handles never stack. A pending restart is cancelled when the
/// owning component is torn down, so no callback outlives the surface.
#[derive(Clone, Copy)]
pub struct BounceHandle {
    /// Whether the bounce animation class is currently applied.
    pub active: ReadSignal<bool>,
    set_active: WriteSignal<bool>,
    restart: StoredValue<Option<TimeoutHandle>>,
}

pub fn use_bounce() -> BounceHandle {
    let (active, set_active) = create_signal(false);
    let restart = store_value(None::<TimeoutHandle>);

    on_cleanup(move || {
        restart.update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.clear();
            }
        });
    });

    BounceHandle {
        active,
        set_active,
        restart,
    }
}

impl BounceHandle {
    /// Start the bounce, restarting it if one is already running.
    pub fn trigger(&self) {
        // At most one pending restart at a time.
        self.restart.update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.clear();
            }
        });

        if self.active.get_untracked() {
            // The browser only restarts keyframes when the class goes away
            // for a tick, so clear now and re-apply on a zero-delay timeout.
            self.set_active.set(false);
            let set_active = self.set_active;
            let restart = self.restart;
            match set_timeout_with_handle(
                move || {
                    restart.set_value(None);
                    set_active.set(true);
                },
                Duration::from_millis(0),
            ) {
                Ok(handle) => self.restart.set_value(Some(handle)),
                Err(err) => log::warn!("failed to schedule bounce restart: {err:?}"),
            }
        } else {
            self.set_active.set(true);
        }
    }

    /// Natural completion path, wired to `animationend`.
    pub fn finish(&self) {
        self.set_active.set(false);
    }
}
