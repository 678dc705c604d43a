//! Toast stack for transient error messages.

use leptos::prelude::*;

use crate::state::toast::ToastState;
#[cfg(feature = "csr")]
use crate::state::toast::TOAST_TTL_MS;

/// Renders queued toasts and dismisses each one after `TOAST_TTL_MS`.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    // One timer per toast: the effect's value is the highest id already
    // scheduled, so re-runs caused by dismissals schedule nothing.
    #[cfg(feature = "csr")]
    Effect::new(move |scheduled: Option<u64>| {
        let scheduled = scheduled.unwrap_or(0);
        let fresh = toasts.with(|s| s.pushed_after(scheduled));
        for &id in &fresh {
            gloo_timers::callback::Timeout::new(TOAST_TTL_MS, move || {
                toasts.update(|s| s.dismiss(id));
            })
            .forget();
        }
        fresh.last().copied().unwrap_or(scheduled)
    });

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class="toast toast--error" on:click=move |_| toasts.update(|s| s.dismiss(id))>
                            {toast.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
