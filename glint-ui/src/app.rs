use leptos::*;

use crate::api::SummaryClient;
use crate::components::markdown_view::MarkdownView;
use crate::components::summary_panel::{SummaryPanel, ViewMode};
use crate::components::tilt_card::TiltCard;
use crate::components::toast::{Toast, ToastMessage};
use crate::hooks::{load_prefs, save_prefs, PersistedPrefs};
use crate::mermaid::DiagramTheme;

const DEMO_SOURCE_ID: &str = "demo-source";

const DEMO_NOTE: &str = r#"## Ingestion pipeline

Documents flow through extraction before they reach the index:

```mermaid
graph TD
  A[Upload] --> B[Extract text]
  B --> C[Chunk]
  C --> D[Embed]
  D --> E[(Index)]
```

Failed extractions land in a retry queue and are re-attempted hourly.
"#;

const DEMO_SUMMARY: &str = r#"### Summary

This source describes the **document ingestion pipeline**: uploads are
extracted, chunked, embedded, and indexed. Failed extractions are retried
hourly from a dedicated queue.
"#;

#[component]
pub fn App() -> impl IntoView {
    // ========== Load preferences from localStorage ==========
    let prefs = load_prefs();
    let initial_mode = prefs
        .as_ref()
        .map(|p| p.summary_mode)
        .unwrap_or(ViewMode::Rendered);
    let (theme, set_theme) = create_signal(prefs.map(|p| p.diagram_theme).unwrap_or_default());
    let (summary_mode, set_summary_mode) = create_signal(initial_mode);
    let (toast, set_toast) = create_signal(None::<ToastMessage>);

    // ========== Persist preferences when they change ==========
    create_effect(move |_| {
        save_prefs(&PersistedPrefs::new(summary_mode.get(), theme.get()));
    });

    let client = SummaryClient::new("");
    let on_notify = Callback::new(move |message| set_toast.set(Some(message)));

    view! {
        <div class=move || {
            format!(
                "min-h-screen p-8 space-y-6 {}",
                match theme.get() {
                    DiagramTheme::Dark => "bg-gray-950 text-gray-100",
                    DiagramTheme::Light => "bg-gray-100 text-gray-900",
                },
            )
        }>
            <header class="flex items-center justify-between">
                <h1 class="text-xl font-semibold">"Knowledge base"</h1>
                <button
                    class="px-3 py-1.5 rounded-lg border border-gray-500/40 text-sm hover:bg-gray-500/10 transition-colors"
                    on:click=move |_| set_theme.update(|t| *t = t.toggled())
                >
                    {move || match theme.get() {
                        DiagramTheme::Light => "Dark mode",
                        DiagramTheme::Dark => "Light mode",
                    }}
                </button>
            </header>

            <div class="grid gap-6 md:grid-cols-2">
                <TiltCard class="rounded-xl bg-white/5 border border-gray-500/20 p-6 shadow-lg">
                    <MarkdownView
                        source=Signal::derive(move || DEMO_NOTE.to_string())
                        theme=theme
                    />
                </TiltCard>

                <TiltCard class="rounded-xl bg-white/5 border border-gray-500/20 p-6 shadow-lg">
                    <SummaryPanel
                        source_id=DEMO_SOURCE_ID
                        initial_summary=DEMO_SUMMARY
                        client=client
                        theme=theme
                        initial_mode=initial_mode
                        on_notify=on_notify
                        on_mode_change=Callback::new(move |mode| set_summary_mode.set(mode))
                    />
                </TiltCard>
            </div>

            <Toast message=toast />
        </div>
    }
}
