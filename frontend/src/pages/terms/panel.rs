use super::tree::{SubtopicNode, TermNode};
use super::view_model::{use_terms_view_model, DeleteTarget, TermsViewModel};
use crate::api::TermSubpoint;
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
use leptos::ev::SubmitEvent;
use leptos::*;

#[component]
pub fn TermsPage() -> impl IntoView {
    let vm = use_terms_view_model();
    view! {
        <Layout>
            <TermsPanel vm=vm />
        </Layout>
    }
}

#[component]
pub fn TermsPanel(vm: TermsViewModel) -> impl IntoView {
    let state = vm.state;
    let tree = Signal::derive(move || state.with(|s| s.data().cloned().unwrap_or_default()));
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
            title="Terms & Conditions"
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
                when=move || !tree.with(Vec::is_empty)
                fallback=|| view! { <EmptyState title="No terms yet" /> }
            >
                <ol class="space-y-4 list-decimal list-inside">
                    {move || {
                        tree.get()
                            .into_iter()
                            .map(|node| view! { <TermItem vm=vm node=node submitting=submitting /> })
                            .collect_view()
                    }}
                </ol>
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
fn TermItem(vm: TermsViewModel, node: TermNode, submitting: Signal<bool>) -> impl IntoView {
    let term = node.term.clone();
    let term_id = term.id;
    let edit_term = term.clone();
    let delete_term = term.clone();

    view! {
        <li class="rounded-lg border border-border bg-surface-elevated p-4">
            <div class="inline-flex w-[calc(100%-2rem)] flex-col gap-2 sm:flex-row sm:items-start sm:justify-between">
                <div>
                    <h3 class="inline font-semibold text-fg">{term.title.clone()}</h3>
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
            <div class="mt-4 border-l-2 border-border pl-4 space-y-4">
                {node
                    .subtopics
                    .into_iter()
                    .map(|subtopic| view! { <SubtopicItem vm=vm node=subtopic submitting=submitting /> })
                    .collect_view()}
                <Button
                    variant=ButtonVariant::Ghost
                    disabled=submitting
                    on_click={Callback::new(move |_| vm.open_subtopic(term_id, None))}
                >
                    {"Add subtopic"}
                </Button>
            </div>
        </li>
    }
}

#[component]
fn SubtopicItem(vm: TermsViewModel, node: SubtopicNode, submitting: Signal<bool>) -> impl IntoView {
    let subtopic = node.subtopic.clone();
    let edit_subtopic = subtopic.clone();
    let delete_subtopic = subtopic.clone();

    view! {
        <section class="space-y-2">
            <div class="flex items-start justify-between gap-2">
                <div>
                    <h4 class="text-sm font-semibold text-fg">{subtopic.title.clone()}</h4>
                    <p class="text-sm text-fg-muted whitespace-pre-line">{subtopic.content.clone()}</p>
                </div>
                <div class="flex gap-2 shrink-0">
                    <Button
                        variant=ButtonVariant::Ghost
                        disabled=submitting
                        on_click={Callback::new(move |_| {
                            vm.open_subtopic(edit_subtopic.term_id, Some(&edit_subtopic))
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
            </div>
            <ul class="list-disc pl-5 space-y-1 text-sm text-fg">
                {node
                    .points
                    .into_iter()
                    .map(|point| view! { <PointItem vm=vm point=point submitting=submitting /> })
                    .collect_view()}
            </ul>
            <PointInput vm=vm subtopic_id=subtopic.id submitting=submitting />
        </section>
    }
}

#[component]
fn PointItem(vm: TermsViewModel, point: TermSubpoint, submitting: Signal<bool>) -> impl IntoView {
    let edit_point = point.clone();
    let delete_point = point.clone();
    view! {
        <li class="flex items-start justify-between gap-2">
            <span>{point.point.clone()}</span>
            <span class="flex gap-1 shrink-0">
                <Button
                    variant=ButtonVariant::Ghost
                    disabled=submitting
                    on_click={Callback::new(move |_| vm.edit_point(&edit_point))}
                >
                    {"Edit"}
                </Button>
                <Button
                    variant=ButtonVariant::Danger
                    disabled=submitting
                    on_click={Callback::new(move |_| vm.request_delete(DeleteTarget::Point(delete_point.clone())))}
                >
                    {"Delete"}
                </Button>
            </span>
        </li>
    }
}

/// Add/edit input for the points of one subtopic.
#[component]
fn PointInput(vm: TermsViewModel, subtopic_id: i64, submitting: Signal<bool>) -> impl IntoView {
    let text = Signal::derive(move || vm.points.with(|drafts| drafts.text(subtopic_id)));
    let editing = Signal::derive(move || vm.points.with(|drafts| drafts.editing(subtopic_id).is_some()));
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_point(subtopic_id);
    };

    view! {
        <form class="flex gap-2" on:submit=on_submit>
            <input
                type="text"
                class="flex-1 rounded-md border border-form-control-border bg-form-control-bg px-3 py-1 text-sm text-fg"
                placeholder="New point"
                aria-label="Point"
                value=text.get_untracked()
                prop:value=move || text.get()
                disabled=move || submitting.get()
                on:input=move |ev| vm.set_point_text(subtopic_id, event_target_value(&ev))
            />
            <button
                type="submit"
                class=format!("inline-flex items-center rounded-md px-3 py-1 text-sm font-semibold disabled:opacity-50 {}", ButtonVariant::Primary.classes())
                disabled=move || submitting.get()
            >
                {move || if editing.get() { "Save point" } else { "Add point" }}
            </button>
            <Show when=move || editing.get() || !text.with(String::is_empty)>
                <Button
                    variant=ButtonVariant::Ghost
                    on_click={Callback::new(move |_| vm.cancel_point(subtopic_id))}
                >
                    {"Cancel"}
                </Button>
            </Show>
        </form>
    }
}
