use super::view_model::{use_caregiver_terms_view_model, CaregiverTermsViewModel, DeleteTarget};
use crate::api::{CaregiverSubtopic, CaregiverTerm};
use crate::components::{
    common::{Button, ButtonVariant},
    confirm_dialog::ConfirmDialog,
    empty_state::EmptyState,
    forms::{TextAreaField, TextField},
    layout::Layout,
    modal::FormDialog,
    panel::PanelShell,
};
use crate::state::{dismiss_callback, notice_signal};
use leptos::*;

#[component]
pub fn CaregiverTermsPage() -> impl IntoView {
    let vm = use_caregiver_terms_view_model();
    view! {
        <Layout>
            <CaregiverTermsPanel vm=vm />
        </Layout>
    }
}

#[component]
pub fn CaregiverTermsPanel(vm: CaregiverTermsViewModel) -> impl IntoView {
    let state = vm.state;
    let terms = Signal::derive(move || state.with(|s| s.data().cloned().unwrap_or_default()));
    let loading = Signal::derive(move || state.with(|s| s.is_loading() && s.data().is_none()));
    let dialog_open = Signal::derive(move || state.with(|s| s.is_dialog_open()));
    let submitting = Signal::derive(move || state.with(|s| s.is_submitting()));
    let dialog_title = Signal::derive(move || vm.target.get().dialog_title().to_string());
    let delete_open = Signal::derive(move || vm.pending_delete.with(Option::is_some));
    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .with(|target| target.as_ref().map(DeleteTarget::prompt))
            .unwrap_or_default()
    });

    view! {
        <PanelShell
            title="Caregiver Terms"
            loading=loading
            notice=notice_signal(state)
            on_dismiss=dismiss_callback(state)
            action={view! {
                <Button on_click={Callback::new(move |_| vm.open_term(None))} disabled=submitting>
                    {"Add term"}
                </Button>
            }
            .into_view()}
        >
            <Show
                when=move || !terms.with(Vec::is_empty)
                fallback=|| view! { <EmptyState title="No caregiver terms yet" /> }
            >
                <ul class="space-y-4">
                    {move || {
                        terms
                            .get()
                            .into_iter()
                            .map(|term| view! { <CaregiverTermItem vm=vm term=term submitting=submitting /> })
                            .collect_view()
                    }}
                </ul>
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
            <TextField label="Title" value=vm.title required=true />
            <TextAreaField label="Content" value=vm.content required=true rows=6 />
        </FormDialog>
        <ConfirmDialog
            is_open=delete_open
            title="Delete"
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
fn CaregiverTermItem(vm: CaregiverTermsViewModel, term: CaregiverTerm, submitting: Signal<bool>) -> impl IntoView {
    let term_id = term.id;
    let edit_term = term.clone();
    let delete_term = term.clone();
    view! {
        <li class="rounded-lg border border-border bg-surface-elevated p-4">
            <div class="flex flex-col gap-2 sm:flex-row sm:items-start sm:justify-between">
                <div>
                    <h3 class="font-semibold text-fg">{term.title.clone()}</h3>
                    <p class="mt-1 whitespace-pre-line text-sm text-fg-muted">{term.content.clone()}</p>
                </div>
                <div class="flex gap-2 shrink-0">
                    <Button
                        variant=ButtonVariant::Ghost
                        disabled=submitting
                        on_click={Callback::new(move |_| vm.open_term(Some(&edit_term)))}
                    >
                        {"Edit"}
                    </Button>
                    <Button
                        variant=ButtonVariant::Danger
                        disabled=submitting
                        on_click={Callback::new(move |_| vm.request_delete(DeleteTarget::Term(delete_term.clone())))}
                    >
                        {"Delete"}
                    </Button>
                </div>
            </div>
            <ul class="mt-4 border-l-2 border-border pl-4 space-y-2">
                {term
                    .subtopics
                    .into_iter()
                    .map(|subtopic| view! { <CaregiverSubtopicItem vm=vm subtopic=subtopic submitting=submitting /> })
                    .collect_view()}
            </ul>
            <Button
                variant=ButtonVariant::Ghost
                class="mt-2"
                disabled=submitting
                on_click={Callback::new(move |_| vm.open_subtopic(term_id, None))}
            >
                {"Add subtopic"}
            </Button>
        </li>
    }
}

#[component]
fn CaregiverSubtopicItem(
    vm: CaregiverTermsViewModel,
    subtopic: CaregiverSubtopic,
    submitting: Signal<bool>,
) -> impl IntoView {
    let edit_subtopic = subtopic.clone();
    let delete_subtopic = subtopic.clone();
    view! {
        <li class="flex items-start justify-between gap-2">
            <div>
                <h4 class="text-sm font-medium text-fg">{subtopic.title.clone()}</h4>
                <p class="text-sm text-fg-muted whitespace-pre-line">{subtopic.content.clone()}</p>
            </div>
            <div class="flex gap-2 shrink-0">
                <Button
                    variant=ButtonVariant::Ghost
                    disabled=submitting
                    on_click={Callback::new(move |_| {
                        vm.open_subtopic(edit_subtopic.caregiver_term_id, Some(&edit_subtopic))
                    })}
                >
                    {"Edit"}
                </Button>
                <Button
                    variant=ButtonVariant::Danger
                    disabled=submitting
                    on_click={Callback::new(move |_| {
                        vm.request_delete(DeleteTarget::Subtopic(delete_subtopic.clone()))
                    })}
                >
                    {"Delete"}
                </Button>
            </div>
        </li>
    }
}
