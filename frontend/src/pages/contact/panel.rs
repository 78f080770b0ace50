use super::view_model::{use_contact_view_model, ContactViewModel};
use crate::api::ContactInfo;
use crate::components::{
    common::Button,
    empty_state::EmptyState,
    forms::{TextAreaField, TextField},
    layout::Layout,
    modal::FormDialog,
    panel::PanelShell,
};
use crate::state::{dismiss_callback, notice_signal};
use crate::utils::format_timestamp;
use leptos::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    let vm = use_contact_view_model();
    view! {
        <Layout>
            <ContactPanel vm=vm />
        </Layout>
    }
}

#[component]
pub fn ContactPanel(vm: ContactViewModel) -> impl IntoView {
    let state = vm.state;
    let contact = Signal::derive(move || state.with(|s| s.data().cloned()));
    let loading = Signal::derive(move || state.with(|s| s.is_loading() && s.data().is_none()));
    let dialog_open = Signal::derive(move || state.with(|s| s.is_dialog_open()));
    let submitting = Signal::derive(move || state.with(|s| s.is_submitting()));
    let action_label = move || state.with(|s| s.action_label());
    let dialog_title =
        Signal::derive(move || format!("{} contact info", state.with(|s| s.action_label())));

    view! {
        <PanelShell
            title="Contact Info"
            loading=loading
            notice=notice_signal(state)
            on_dismiss=dismiss_callback(state)
            action={view! {
                <Button on_click={Callback::new(move |_| vm.open_editor())} disabled=submitting>
                    {action_label}
                </Button>
            }
            .into_view()}
        >
            {move || match contact.get() {
                Some(info) => view! { <ContactDetails info=info /> }.into_view(),
                None => view! { <EmptyState title="No contact info yet" /> }.into_view(),
            }}
        </PanelShell>
        <FormDialog
            is_open=dialog_open
            title=dialog_title
            submitting=submitting
            error=notice_signal(state)
            on_submit={Callback::new(move |_| vm.submit())}
            on_cancel={Callback::new(move |_| vm.close_editor())}
        >
            <TextField label="Phone" value=vm.form.phone required=true input_type="tel" />
            <TextField label="Email" value=vm.form.email required=true input_type="email" />
            <TextAreaField label="Address" value=vm.form.address required=true rows=3 />
        </FormDialog>
    }
}

#[component]
fn ContactDetails(info: ContactInfo) -> impl IntoView {
    let updated = info.updated_at.as_deref().and_then(format_timestamp);
    let mailto = format!("mailto:{}", info.email);
    view! {
        <dl class="grid grid-cols-1 sm:grid-cols-3 gap-4 text-sm">
            <div>
                <dt class="text-fg-muted">{"Phone"}</dt>
                <dd class="text-fg">{info.phone.clone()}</dd>
            </div>
            <div>
                <dt class="text-fg-muted">{"Email"}</dt>
                <dd><a class="text-action-primary-bg underline" href=mailto>{info.email.clone()}</a></dd>
            </div>
            <div>
                <dt class="text-fg-muted">{"Address"}</dt>
                <dd class="text-fg whitespace-pre-line">{info.address.clone()}</dd>
            </div>
        </dl>
        {updated.map(|when| view! { <p class="text-xs text-fg-muted">{format!("Last updated {}", when)}</p> })}
    }
}
