use leptos::ev::{KeyboardEvent, SubmitEvent};
use leptos::*;

use crate::state::Notice;

/// Modal wrapping a create/edit form. The form stays open while a submit is
/// pending and shows the failure inline so the operator can retry.
#[component]
pub fn FormDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] submitting: MaybeSignal<bool>,
    #[prop(optional, into)] error: Option<Signal<Option<Notice>>>,
    children: ChildrenFn,
) -> impl IntoView {
    let title = Signal::derive(move || title.get());
    let children = store_value(children);
    let error_text = move || {
        error
            .and_then(|notice| notice.get())
            .filter(Notice::is_error)
    };
    let cancel = move || {
        if !submitting.get_untracked() {
            on_cancel.call(());
        }
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[60] flex items-center justify-center p-4">
                <div class="absolute inset-0 bg-overlay-backdrop" on:click=move |_| cancel()></div>
                <form
                    class="relative z-[61] w-full max-w-2xl max-h-[90vh] overflow-y-auto rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    on:submit=move |ev: SubmitEvent| {
                        ev.prevent_default();
                        if !submitting.get_untracked() {
                            on_submit.call(());
                        }
                    }
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            cancel();
                        }
                    }
                >
                    <h2 class="text-lg font-semibold text-fg">{move || title.get()}</h2>
                    {move || error_text().map(|notice| view! {
                        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-3 py-2 rounded text-sm" role="alert">
                            <p>{notice.message}</p>
                            <ul class="list-disc list-inside">
                                {notice.details.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                            </ul>
                        </div>
                    })}
                    <div class="space-y-4">{children.with_value(|children| children())}</div>
                    <div class="flex justify-end gap-2 pt-2">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated disabled:opacity-50"
                            disabled=move || submitting.get()
                            on:click=move |_| cancel()
                        >
                            {"Cancel"}
                        </button>
                        <button
                            type="submit"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                            disabled=move || submitting.get()
                        >
                            {move || if submitting.get() { "Saving…" } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::NoticeState;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn open_dialog_renders_title_children_and_error() {
        let html = render_to_string(move || {
            let mut notices = NoticeState::default();
            notices.set_error("Question is required.");
            let notice = notices.current().cloned();
            view! {
                <FormDialog
                    is_open=Signal::derive(|| true)
                    title="Add FAQ"
                    on_submit=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                    error=Signal::derive(move || notice.clone())
                >
                    <input name="question" />
                </FormDialog>
            }
        });
        assert!(html.contains("Add FAQ"));
        assert!(html.contains("name=\"question\""));
        assert!(html.contains("Question is required."));
        assert!(html.contains("Save"));
    }

    #[test]
    fn submitting_dialog_disables_buttons() {
        let html = render_to_string(move || {
            view! {
                <FormDialog
                    is_open=Signal::derive(|| true)
                    title="Edit settings"
                    submitting=true
                    on_submit=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                >
                    <span>"fields"</span>
                </FormDialog>
            }
        });
        assert!(html.contains("Saving…"));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn closed_dialog_renders_nothing() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <FormDialog
                        is_open=Signal::derive(|| false)
                        title="Hidden"
                        on_submit=Callback::new(|_| {})
                        on_cancel=Callback::new(|_| {})
                    >
                        <span>"fields"</span>
                    </FormDialog>
                </div>
            }
        });
        assert!(!html.contains("Hidden"));
    }
}
