use super::view_model::{use_privacy_policy_view_model, DeleteTarget, PrivacyPolicyViewModel};
use crate::api::{PrivacyPolicy, PrivacySubtopic};
use crate::components::{
    common::{Button, ButtonVariant},
    confirm_dialog::ConfirmDialog,
    empty_state::EmptyState,
    forms::{TextAreaField, TextField},
    layout::{Layout, LoadingSpinner},
    modal::FormDialog,
    panel::PanelShell,
};
use crate::state::{dismiss_callback, notice_signal};
use leptos::*;

#[component]
pub fn PrivacyPolicyPage() -> impl IntoView {
    let vm = use_privacy_policy_view_model();
    view! {
        <Layout>
            <PrivacyPolicyPanel vm=vm />
        </Layout>
    }
}

#[component]
pub fn PrivacyPolicyPanel(vm: PrivacyPolicyViewModel) -> impl IntoView {
    let state = vm.state;
    let policies = Signal::derive(move || state.with(|s| s.data().cloned().unwrap_or_default()));
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
            title="Privacy Policy"
            loading=loading
            notice=notice_signal(state)
            on_dismiss=dismiss_callback(state)
            action={view! {
                <Button on_click={Callback::new(move |_| vm.open_policy(None))} disabled=submitting>
                    {"Add section"}
                </Button>
            }
            .into_view()}
        >
            <Show
                when=move || !policies.with(Vec::is_empty)
                fallback=|| view! { <EmptyState title="No privacy policy sections yet" /> }
            >
                <ul class="space-y-4">
                    <For
                        each=move || policies.get()
                        key=|policy| (policy.id, policy.title.clone(), policy.content.clone())
                        children=move |policy| view! { <PolicyItem vm=vm policy=policy submitting=submitting /> }
                    />
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
fn PolicyItem(vm: PrivacyPolicyViewModel, policy: PrivacyPolicy, submitting: Signal<bool>) -> impl IntoView {
    let policy_id = policy.id;
    let expanded = Signal::derive(move || vm.subtopics.with(|c| c.is_expanded(policy_id)));
    let children_loading = Signal::derive(move || vm.subtopics.with(|c| c.is_loading(policy_id)));
    let children = Signal::derive(move || {
        vm.subtopics
            .with(|c| c.children(policy_id).map(<[PrivacySubtopic]>::to_vec))
            .unwrap_or_default()
    });
    let edit_policy = policy.clone();
    let delete_policy = policy.clone();

    view! {
        <li class="rounded-lg border border-border bg-surface-elevated p-4">
            <div class="flex flex-col gap-2 sm:flex-row sm:items-start sm:justify-between">
                <div>
                    <h3 class="font-semibold text-fg">{policy.title.clone()}</h3>
                    <p class="mt-1 whitespace-pre-line text-sm text-fg-muted">{policy.content.clone()}</p>
                </div>
                <div class="flex gap-2 shrink-0">
                    <Button
                        variant=ButtonVariant::Secondary
                        on_click={Callback::new(move |_| vm.toggle_subtopics(policy_id))}
                        attr:aria-expanded=move || expanded.get().to_string()
                    >
                        {move || if expanded.get() { "Hide subtopics" } else { "Show subtopics" }}
                    </Button>
                    <Button
                        variant=ButtonVariant::Ghost
                        disabled=submitting
                        on_click={Callback::new(move |_| vm.open_policy(Some(&edit_policy)))}
                    >
                        {"Edit"}
                    </Button>
                    <Button
                        variant=ButtonVariant::Danger
                        disabled=submitting
                        on_click={Callback::new(move |_| {
                            vm.request_delete(DeleteTarget::Policy(delete_policy.clone()))
                        })}
                    >
                        {"Delete"}
                    </Button>
                </div>
            </div>
            <Show when=move || expanded.get()>
                <div class="mt-4 border-l-2 border-border pl-4 space-y-2">
                    <Show
                        when=move || !(children_loading.get() && children.with(Vec::is_empty))
                        fallback=|| view! { <LoadingSpinner /> }
                    >
                        <Show
                            when=move || !children.with(Vec::is_empty)
                            fallback=|| view! { <p class="text-sm text-fg-muted">{"No subtopics yet."}</p> }
                        >
                            <ul class="space-y-2">
                                <For
                                    each=move || children.get()
                                    key=|subtopic| (subtopic.id, subtopic.title.clone(), subtopic.content.clone())
                                    children=move |subtopic| {
                                        view! { <SubtopicItem vm=vm subtopic=subtopic submitting=submitting /> }
                                    }
                                />
                            </ul>
                        </Show>
                    </Show>
                    <Button
                        variant=ButtonVariant::Ghost
                        disabled=submitting
                        on_click={Callback::new(move |_| vm.open_subtopic(policy_id, None))}
                    >
                        {"Add subtopic"}
                    </Button>
                </div>
            </Show>
        </li>
    }
}

#[component]
fn SubtopicItem(vm: PrivacyPolicyViewModel, subtopic: PrivacySubtopic, submitting: Signal<bool>) -> impl IntoView {
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
                        vm.open_subtopic(edit_subtopic.policy_id, Some(&edit_subtopic))
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
