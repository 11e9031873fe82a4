//! Markdown rendering with embedded diagram delegation.

use glint_core::{segment_markdown, Segment};
use leptos::*;

use crate::components::diagram::Diagram;
use crate::mermaid::DiagramTheme;

/// Renders markdown, delegating `mermaid` fenced blocks to [`Diagram`].
/// Segments keep document order.
#[component]
pub fn MarkdownView(
    /// Markdown source
    #[prop(into)]
    source: Signal<String>,
    /// Theme for embedded diagrams
    #[prop(into)]
    theme: Signal<DiagramTheme>,
) -> impl IntoView {
    let segments = create_memo(move |_| segment_markdown(&source.get()));

    view! {
        <div class="markdown-body space-y-3">
            {move || {
                segments
                    .get()
                    .into_iter()
                    .map(|segment| match segment {
                        Segment::Html(html_text) => {
                            view! { <div inner_html=html_text></div> }.into_view()
                        }
                        Segment::Diagram(diagram_source) => view! {
                            <Diagram
                                source=Signal::derive(move || diagram_source.clone())
                                theme=theme
                            />
                        }
                        .into_view(),
                    })
                    .collect_view()
            }}
        </div>
    }
}
