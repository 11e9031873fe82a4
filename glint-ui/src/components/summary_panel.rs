//! Detail/edit panel for an AI-generated summary.
//!
//! Three presentation modes over one summary: rendered markdown, raw
//! markdown, and an editable draft. Saving and regenerating go through the
//! summary service; a failed save leaves the draft intact and re-editable,
//! and regenerating over unsaved edits requires explicit confirmation.

use std::cell::Cell;
use std::rc::Rc;

use leptos::*;
use serde::{Deserialize, Serialize};

use crate::api::SummaryClient;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::markdown_view::MarkdownView;
use crate::components::toast::ToastMessage;
use crate::mermaid::DiagramTheme;

/// Presentation mode for the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    Rendered,
    Raw,
    Editing,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Rendered, ViewMode::Raw, ViewMode::Editing];

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Rendered => "Rendered",
            ViewMode::Raw => "Raw",
            ViewMode::Editing => "Edit",
        }
    }
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::Rendered
    }
}

#[component]
pub fn SummaryPanel(
    /// Identifier of the source whose summary is shown
    #[prop(into)]
    source_id: String,
    /// Last-saved summary text
    #[prop(into)]
    initial_summary: String,
    /// Client for the summary endpoints
    client: SummaryClient,
    /// Theme for embedded diagrams
    #[prop(into)]
    theme: Signal<DiagramTheme>,
    /// Mode to open in (defaults to Rendered)
    #[prop(optional)]
    initial_mode: Option<ViewMode>,
    /// Receives failures and confirmations for display
    #[prop(into)]
    on_notify: Callback<ToastMessage>,
    /// Observes user mode switches so callers can persist the preference
    #[prop(into, optional)]
    on_mode_change: Option<Callback<ViewMode>>,
) -> impl IntoView {
    let (mode, set_mode) = create_signal(initial_mode.unwrap_or_default());
    let (summary, set_summary) = create_signal(initial_summary);
    let (draft, set_draft) = create_signal(String::new());
    let (dirty, set_dirty) = create_signal(false);
    let (busy, set_busy) = create_signal(false);
    let (confirm_visible, set_confirm_visible) = create_signal(false);

    let source_id = store_value(source_id);
    let client = store_value(client);
    // Bumped on every request; responses carrying an older value are stale
    // and get dropped (last-write-wins, one request in flight per action).
    let generation = Rc::new(Cell::new(0u64));

    let switch_mode = move |next: ViewMode| {
        if next == ViewMode::Editing && !dirty.get_untracked() {
            // A fresh edit session starts from the last-saved text.
            set_draft.set(summary.get_untracked());
        }
        set_mode.set(next);
        if let Some(callback) = on_mode_change {
            callback.call(next);
        }
    };

    let run_regenerate = {
        let generation = Rc::clone(&generation);
        move || {
            set_busy.set(true);
            generation.set(generation.get() + 1);
            let this_generation = generation.get();
            let generation = Rc::clone(&generation);
            let client = client.with_value(|c| c.clone());
            let id = source_id.with_value(|s| s.clone());
            spawn_local(async move {
                let result = client.regenerate(&id).await;
                if generation.get() != this_generation {
                    return;
                }
                // try_set: the panel may be gone by the time this resolves.
                set_busy.try_set(false);
                match result {
                    Ok(new_summary) => {
                        set_summary.try_set(new_summary.summary.clone());
                        set_draft.try_set(new_summary.summary);
                        set_dirty.try_set(false);
                        on_notify.call(ToastMessage::info("Summary regenerated"));
                    }
                    Err(err) => {
                        log::warn!("summary regenerate failed: {err}");
                        on_notify
                            .call(ToastMessage::error(format!("Could not regenerate summary: {err}")));
                    }
                }
            });
        }
    };

    let on_regenerate_click = {
        let run_regenerate = run_regenerate.clone();
        move |_| {
            if dirty.get_untracked() {
                // Unsaved edits would be overwritten; ask first.
                set_confirm_visible.set(true);
            } else {
                run_regenerate();
            }
        }
    };

    let on_confirm_regenerate = {
        let run_regenerate = run_regenerate.clone();
        Callback::new(move |_| {
            set_confirm_visible.set(false);
            run_regenerate();
        })
    };
    let on_cancel_regenerate = Callback::new(move |_| set_confirm_visible.set(false));

    let run_save = {
        let generation = Rc::clone(&generation);
        move |_| {
            set_busy.set(true);
            generation.set(generation.get() + 1);
            let this_generation = generation.get();
            let generation = Rc::clone(&generation);
            let client = client.with_value(|c| c.clone());
            let id = source_id.with_value(|s| s.clone());
            let text = draft.get_untracked();
            spawn_local(async move {
                let result = client.update(&id, &text).await;
                if generation.get() != this_generation {
                    return;
                }
                set_busy.try_set(false);
                match result {
                    Ok(()) => {
                        set_summary.try_set(text);
                        set_dirty.try_set(false);
                        set_mode.try_set(ViewMode::Rendered);
                        on_notify.call(ToastMessage::info("Summary saved"));
                    }
                    Err(err) => {
                        // Failed save: the draft stays intact and editable.
                        log::warn!("summary update failed: {err}");
                        on_notify.call(ToastMessage::error(format!("Could not save summary: {err}")));
                    }
                }
            });
        }
    };

    let mode_button = move |m: ViewMode| {
        view! {
            <button
                class=move || {
                    format!(
                        "px-3 py-1 rounded-md text-sm transition-colors {}",
                        if mode.get() == m {
                            "bg-white/20 text-white"
                        } else {
                            "text-gray-400 hover:bg-white/10"
                        },
                    )
                }
                disabled=move || busy.get()
                on:click=move |_| switch_mode(m)
            >
                {m.label()}
            </button>
        }
    };

    view! {
        <section class="summary-panel space-y-3">
            <header class="flex items-center justify-between">
                <div class="flex gap-1">
                    {ViewMode::ALL.into_iter().map(mode_button).collect_view()}
                </div>
                <button
                    class="px-3 py-1 rounded-md border border-white/20 text-sm hover:bg-white/10 transition-colors disabled:opacity-50"
                    disabled=move || busy.get()
                    on:click=on_regenerate_click
                >
                    {move || if busy.get() { "Working..." } else { "Regenerate" }}
                </button>
            </header>

            {move || match mode.get() {
                ViewMode::Rendered => view! {
                    <MarkdownView source=Signal::derive(move || summary.get()) theme=theme />
                }
                .into_view(),
                ViewMode::Raw => view! {
                    <pre class="text-sm font-mono whitespace-pre-wrap bg-black/30 rounded-lg p-3 overflow-x-auto">
                        {move || summary.get()}
                    </pre>
                }
                .into_view(),
                ViewMode::Editing => view! {
                    <div class="space-y-2">
                        <textarea
                            class="w-full min-h-[12rem] text-sm font-mono bg-black/30 border border-white/10 rounded-lg p-3"
                            prop:value=move || draft.get()
                            on:input=move |ev| {
                                set_draft.set(event_target_value(&ev));
                                set_dirty.set(true);
                            }
                        ></textarea>
                        <div class="flex justify-end">
                            <button
                                class="px-3 py-1 rounded-md bg-white/20 text-sm hover:bg-white/30 transition-colors disabled:opacity-50"
                                disabled=move || busy.get()
                                on:click=run_save.clone()
                            >
                                "Save"
                            </button>
                        </div>
                    </div>
                }
                .into_view(),
            }}

            <ConfirmDialog
                visible=confirm_visible
                title="Overwrite edits?"
                message="Regenerating will replace your unsaved edits with a new summary."
                cancel_label="Keep editing"
                confirm_label="Regenerate"
                danger=true
                on_cancel=on_cancel_regenerate
                on_confirm=on_confirm_regenerate
            />
        </section>
    }
}
