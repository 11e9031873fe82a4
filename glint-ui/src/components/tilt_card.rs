// glint-ui/src/components/tilt_card.rs
use glint_core::{glow_style, sheen_style, transform_style, transition_style, SurfaceRect, TiltConfig};
use leptos::*;

use crate::hooks::{use_bounce, use_tilt};

/// Hoverable surface with the 3D tilt effect.
///
/// Pointer-move recomputes the tilt synchronously against the element's
/// current bounding rect; pointer-leave settles back to rest through the
/// configured transition. Click fires the one-shot bounce, which is
/// independent of the hover state machine.
#[component]
pub fn TiltCard(
    /// Tilt tuning; defaults match the standard card effect
    #[prop(optional)]
    config: TiltConfig,
    /// Extra classes for the surface element
    #[prop(into, optional)]
    class: String,
    /// Card content
    children: Children,
) -> impl IntoView {
    let node_ref = create_node_ref::<html::Div>();
    let tilt = use_tilt(config);
    let bounce = use_bounce();

    let rect_now = move || {
        node_ref.get_untracked().map(|el| {
            let rect = el.get_bounding_client_rect();
            SurfaceRect::new(rect.left(), rect.top(), rect.width(), rect.height())
        })
    };

    view! {
        <div
            node_ref=node_ref
            class=move || {
                format!(
                    "tilt-card relative will-change-transform {} {}",
                    if bounce.active.get() { "tilt-card-bounce" } else { "" },
                    class,
                )
            }
            style=move || {
                let state = tilt.state.get();
                format!(
                    "transform: {}; transition: {};",
                    transform_style(&config, &state),
                    transition_style(&config),
                )
            }
            on:pointerenter=move |ev| {
                if let Some(rect) = rect_now() {
                    tilt.pointer_enter(ev.client_x() as f64, ev.client_y() as f64, &rect);
                }
            }
            on:pointermove=move |ev| {
                if let Some(rect) = rect_now() {
                    tilt.pointer_move(ev.client_x() as f64, ev.client_y() as f64, &rect);
                }
            }
            on:pointerleave=move |_| tilt.pointer_leave()
            on:click=move |_| bounce.trigger()
            on:animationend=move |_| bounce.finish()
        >
            <div
                class="tilt-card-glow absolute inset-0 pointer-events-none rounded-[inherit]"
                style=move || glow_style(&tilt.state.get())
            ></div>
            <div
                class="tilt-card-sheen absolute inset-0 pointer-events-none rounded-[inherit]"
                style=move || sheen_style(&tilt.state.get())
            ></div>
            <div class="relative z-10">{children()}</div>
        </div>
    }
}
