use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::state::Notice;

pub const NOTICE_TIMEOUT_MS: u32 = 5_000;

/// Success/error strip above a panel. Each notice dismisses itself after
/// `timeout_ms`; a newer notice is never cleared by an older timer.
#[component]
pub fn NoticeBanner(
    #[prop(into)] notice: Signal<Option<Notice>>,
    on_dismiss: Callback<u64>,
    #[prop(optional)] timeout_ms: Option<u32>,
) -> impl IntoView {
    let timeout_ms = timeout_ms.unwrap_or(NOTICE_TIMEOUT_MS);

    create_effect(move |_| {
        let Some(serial) = notice.get().map(|n| n.serial) else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(timeout_ms).await;
            let still_showing = notice
                .try_get_untracked()
                .flatten()
                .map(|n| n.serial == serial)
                .unwrap_or(false);
            if still_showing {
                on_dismiss.call(serial);
            }
        });
    });

    move || notice.get().map(|n| view! { <NoticeBody notice=n on_dismiss=on_dismiss /> })
}

#[component]
fn NoticeBody(notice: Notice, on_dismiss: Callback<u64>) -> impl IntoView {
    let (container, icon) = if notice.is_error() {
        (
            "bg-status-error-bg border-status-error-border text-status-error-text",
            "fa-exclamation-circle",
        )
    } else {
        (
            "bg-status-success-bg border-status-success-border text-status-success-text",
            "fa-check-circle",
        )
    };
    let role = if notice.is_error() { "alert" } else { "status" };
    let serial = notice.serial;
    let details = notice.details.clone();

    view! {
        <div
            class=format!("flex items-start gap-3 border px-4 py-3 rounded mb-4 {}", container)
            role=role
        >
            <i class=format!("fas {} mt-0.5", icon)></i>
            <div class="flex-1 text-sm">
                <p>{notice.message.clone()}</p>
                {(!details.is_empty()).then(|| view! {
                    <ul class="list-disc list-inside mt-1">
                        {details.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                    </ul>
                })}
            </div>
            <button
                type="button"
                aria-label="Dismiss"
                class="opacity-70 hover:opacity-100"
                on:click=move |_| on_dismiss.call(serial)
            >
                {"✕"}
            </button>
        </div>
    }
}
