//! Toast notification component for transient feedback.

use leptos::*;

const TOAST_VISIBLE_MS: f64 = 2500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Error,
}

/// One notification: failures from the summary service, save/regenerate
/// confirmations, and the like.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastMessage {
    pub level: ToastLevel,
    pub text: String,
}

impl ToastMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Error,
            text: text.into(),
        }
    }
}

/// Toast that appears briefly then fades out. Errors stay red; info stays
/// neutral.
#[component]
pub fn Toast(
    /// Message to display (None = hidden)
    message: ReadSignal<Option<ToastMessage>>,
) -> impl IntoView {
    let (is_visible, set_is_visible) = create_signal(false);
    let (display, set_display) = create_signal(None::<ToastMessage>);

    let hide_timer = leptos_use::use_timeout_fn(
        move |_: ()| {
            set_is_visible.set(false);
        },
        TOAST_VISIBLE_MS,
    );

    create_effect(move |_| {
        if let Some(msg) = message.get() {
            set_display.set(Some(msg));
            set_is_visible.set(true);

            // Restart the hide timer for every new message.
            (hide_timer.stop)();
            (hide_timer.start)(());
        }
    });

    view! {
        <div
            class=move || {
                let level_classes = match display.get().map(|m| m.level) {
                    Some(ToastLevel::Error) => "bg-red-900/90 text-red-100",
                    _ => "bg-black/80 text-white",
                };
                format!(
                    "fixed bottom-12 left-1/2 -translate-x-1/2 z-50 \
                     px-4 py-2 rounded-lg text-sm font-medium \
                     transition-opacity duration-300 \
                     pointer-events-none {} {}",
                    level_classes,
                    if is_visible.get() { "opacity-100" } else { "opacity-0" }
                )
            }
        >
            {move || display.get().map(|m| m.text).unwrap_or_default()}
        </div>
    }
}
