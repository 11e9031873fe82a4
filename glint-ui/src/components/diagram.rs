//! Async diagram rendering with graceful failure.

use std::cell::Cell;
use std::rc::Rc;

use leptos::*;

use crate::mermaid::{initialize_theme, render_diagram, DiagramTheme};

thread_local! {
    static NEXT_DIAGRAM_ID: Cell<u64> = const { Cell::new(0) };
}

// mermaid wants a unique DOM id per render call.
fn next_element_id() -> String {
    NEXT_DIAGRAM_ID.with(|counter| {
        let id = counter.get();
        counter.set(id + 1);
        format!("glint-diagram-{id}")
    })
}

/// Renders diagram notation to SVG via mermaid.
///
/// Render failure swaps in a visible error indicator with the raw source; a
/// broken diagram must never blank the content around it. Stale responses
/// (the source or theme changed while a render was in flight) are dropped.
#[component]
pub fn Diagram(
    /// Diagram source text
    #[prop(into)]
    source: Signal<String>,
    /// Light/dark rendering theme
    #[prop(into)]
    theme: Signal<DiagramTheme>,
) -> impl IntoView {
    let (svg, set_svg) = create_signal(None::<String>);
    let (error, set_error) = create_signal(None::<String>);
    let generation = Rc::new(Cell::new(0u64));

    create_effect(move |_| {
        let source_text = source.get();
        let theme = theme.get();

        generation.set(generation.get() + 1);
        let this_generation = generation.get();
        let generation = Rc::clone(&generation);

        spawn_local(async move {
            initialize_theme(theme);
            let element_id = next_element_id();
            let result = render_diagram(&element_id, &source_text).await;

            // A newer render superseded this one.
            if generation.get() != this_generation {
                return;
            }
            // try_set: the component may already be unmounted when a
            // response arrives; that response is simply ignored.
            match result {
                Ok(svg_text) => {
                    set_error.try_set(None);
                    set_svg.try_set(Some(svg_text));
                }
                Err(err) => {
                    log::warn!("diagram render failed: {err}");
                    set_error.try_set(Some(err));
                }
            }
        });
    });

    view! {
        <div class="diagram">
            {move || {
                if let Some(err) = error.get() {
                    view! {
                        <div class="diagram-error border border-red-500/40 bg-red-500/10 rounded-lg p-3 space-y-2">
                            <p class="text-red-400 text-sm">"Diagram failed to render: " {err}</p>
                            <pre class="text-xs text-gray-400 overflow-x-auto">{move || source.get()}</pre>
                        </div>
                    }
                    .into_view()
                } else if let Some(svg_text) = svg.get() {
                    view! { <div class="diagram-svg overflow-x-auto" inner_html=svg_text></div> }
                        .into_view()
                } else {
                    view! { <div class="diagram-loading text-sm text-gray-400">"Rendering diagram..."</div> }
                        .into_view()
                }
            }}
        </div>
    }
}
