use super::view_model::{use_faqs_view_model, FaqsViewModel, ANSWER_PREVIEW_CHARS};
use crate::api::Faq;
use crate::components::{
    common::{Button, ButtonVariant},
    confirm_dialog::ConfirmDialog,
    empty_state::EmptyState,
    forms::{CheckboxField, TextAreaField, TextField},
    layout::Layout,
    modal::FormDialog,
    panel::PanelShell,
};
use crate::state::{dismiss_callback, notice_signal};
use crate::utils::truncate_preview;
use leptos::*;

#[component]
pub fn FaqsPage() -> impl IntoView {
    let vm = use_faqs_view_model();
    view! {
        <Layout>
            <FaqsPanel vm=vm />
        </Layout>
    }
}

#[component]
pub fn FaqsPanel(vm: FaqsViewModel) -> impl IntoView {
    let state = vm.state;
    let faqs = Signal::derive(move || state.with(|s| s.data().cloned().unwrap_or_default()));
    let loading = Signal::derive(move || state.with(|s| s.is_loading() && s.data().is_none()));
    let dialog_open = Signal::derive(move || state.with(|s| s.is_dialog_open()));
    let submitting = Signal::derive(move || state.with(|s| s.is_submitting()));
    let dialog_title = Signal::derive(move || {
        if vm.editing_id.get().is_some() {
            "Edit FAQ".to_string()
        } else {
            "Add FAQ".to_string()
        }
    });
    let delete_open = Signal::derive(move || vm.pending_delete.get().is_some());
    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|faq| format!("Delete the question \"{}\"?", faq.question))
            .unwrap_or_default()
    });

    view! {
        <PanelShell
            title="FAQs"
            loading=loading
            notice=notice_signal(state)
            on_dismiss=dismiss_callback(state)
            action={view! {
                <Button on_click={Callback::new(move |_| vm.open_editor(None))} disabled=submitting>
                    {"Add FAQ"}
                </Button>
            }
            .into_view()}
        >
            <Show
                when=move || !faqs.with(Vec::is_empty)
                fallback=|| view! { <EmptyState title="No FAQs yet" /> }
            >
                <table class="min-w-full divide-y divide-border text-sm">
                    <thead>
                        <tr class="text-left text-fg-muted">
                            <th class="py-2 pr-4">{"Question"}</th>
                            <th class="py-2 pr-4">{"Answer"}</th>
                            <th class="py-2 pr-4">{"Status"}</th>
                            <th class="py-2 text-right">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        <For
                            each=move || faqs.get()
                            key=|faq| (faq.id, faq.question.clone(), faq.answer.clone(), faq.is_active)
                            children=move |faq| view! { <FaqRow vm=vm faq=faq submitting=submitting /> }
                        />
                    </tbody>
                </table>
            </Show>
        </PanelShell>
        <FormDialog
            is_open=dialog_open
            title=dialog_title
            submitting=submitting
            error=notice_signal(state)
            on_submit={Callback::new(move |_| vm.submit())}
            on_cancel={Callback::new(move |_| vm.close_editor())}
        >
            <TextField label="Question" value=vm.form.question required=true />
            <TextAreaField label="Answer" value=vm.form.answer required=true rows=6 />
            <CheckboxField label="Active" checked=vm.form.is_active />
        </FormDialog>
        <ConfirmDialog
            is_open=delete_open
            title="Delete FAQ"
            message=delete_message
            confirm_label="Delete"
            destructive=true
            pending=submitting
            on_confirm={Callback::new(move |_| vm.confirm_delete())}
            on_cancel={Callback::new(move |_| vm.cancel_delete())}
        />
    }
}

#[component]
fn FaqRow(vm: FaqsViewModel, faq: Faq, submitting: Signal<bool>) -> impl IntoView {
    let (status, badge) = if faq.is_active {
        ("Active", "bg-status-success-bg text-status-success-text")
    } else {
        ("Inactive", "bg-surface-muted text-fg-muted")
    };
    let preview = truncate_preview(&faq.answer, ANSWER_PREVIEW_CHARS);
    let edit_faq = faq.clone();
    let delete_faq = faq.clone();
    view! {
        <tr>
            <td class="py-2 pr-4 font-medium text-fg">{faq.question.clone()}</td>
            <td class="py-2 pr-4 text-fg-muted">{preview}</td>
            <td class="py-2 pr-4">
                <span class=format!("inline-flex rounded-full px-2 py-0.5 text-xs font-medium {}", badge)>
                    {status}
                </span>
            </td>
            <td class="py-2 text-right space-x-2 whitespace-nowrap">
                <Button
                    variant=ButtonVariant::Ghost
                    disabled=submitting
                    on_click={Callback::new(move |_| vm.open_editor(Some(edit_faq.clone())))}
                >
                    {"Edit"}
                </Button>
                <Button
                    variant=ButtonVariant::Danger
                    disabled=submitting
                    on_click={Callback::new(move |_| vm.request_delete(delete_faq.clone()))}
                >
                    {"Delete"}
                </Button>
            </td>
        </tr>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::seed_panel;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn rows_show_status_and_truncated_answer() {
        let long_answer = "x".repeat(200);
        let expected = format!("{}…", "x".repeat(ANSWER_PREVIEW_CHARS));
        let html = render_to_string(move || {
            let vm = use_faqs_view_model();
            seed_panel(
                vm.state,
                Some(vec![
                    Faq {
                        id: 1,
                        question: "Long?".into(),
                        answer: long_answer.clone(),
                        is_active: true,
                    },
                    Faq {
                        id: 2,
                        question: "Hidden?".into(),
                        answer: "Short".into(),
                        is_active: false,
                    },
                ]),
            );
            view! { <FaqsPanel vm=vm /> }
        });
        assert!(html.contains(&expected));
        assert!(!html.contains(&"x".repeat(ANSWER_PREVIEW_CHARS + 1)));
        assert!(html.contains(">Active<"));
        assert!(html.contains(">Inactive<"));
    }

    #[test]
    fn add_dialog_defaults_to_active() {
        let html = render_to_string(move || {
            let vm = use_faqs_view_model();
            seed_panel(vm.state, Some(Vec::new()));
            vm.open_editor(None);
            view! { <FaqsPanel vm=vm /> }
        });
        assert!(html.contains("Add FAQ"));
        assert!(html.contains("No FAQs yet"));
        assert!(html.contains("checked"));
    }
}
