use super::view_model::{use_social_links_view_model, SocialLinksViewModel};
use crate::api::{SocialLink, SocialPlatform};
use crate::components::{
    common::{Button, ButtonVariant},
    confirm_dialog::ConfirmDialog,
    empty_state::EmptyState,
    forms::{SelectField, TextField},
    layout::Layout,
    modal::FormDialog,
    panel::PanelShell,
};
use crate::state::{dismiss_callback, notice_signal};
use leptos::*;

#[component]
pub fn SocialLinksPage() -> impl IntoView {
    let vm = use_social_links_view_model();
    view! {
        <Layout>
            <SocialLinksPanel vm=vm />
        </Layout>
    }
}

#[component]
pub fn SocialLinksPanel(vm: SocialLinksViewModel) -> impl IntoView {
    let state = vm.state;
    let links = Signal::derive(move || state.with(|s| s.data().cloned().unwrap_or_default()));
    let loading = Signal::derive(move || state.with(|s| s.is_loading() && s.data().is_none()));
    let dialog_open = Signal::derive(move || state.with(|s| s.is_dialog_open()));
    let submitting = Signal::derive(move || state.with(|s| s.is_submitting()));
    let dialog_title = Signal::derive(move || {
        if vm.editing_id.get().is_some() {
            "Edit social link".to_string()
        } else {
            "Add social link".to_string()
        }
    });
    let delete_open = Signal::derive(move || vm.pending_delete.get().is_some());
    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|link| format!("Delete the {} link {}?", link.platform.label(), link.url))
            .unwrap_or_default()
    });

    view! {
        <PanelShell
            title="Social Links"
            loading=loading
            notice=notice_signal(state)
            on_dismiss=dismiss_callback(state)
            action={view! {
                <Button on_click={Callback::new(move |_| vm.open_editor(None))} disabled=submitting>
                    {"Add link"}
                </Button>
            }
            .into_view()}
        >
            <Show
                when=move || !links.with(Vec::is_empty)
                fallback=|| view! { <EmptyState title="No social links yet" /> }
            >
                <table class="min-w-full divide-y divide-border text-sm">
                    <thead>
                        <tr class="text-left text-fg-muted">
                            <th class="py-2 pr-4">{"Platform"}</th>
                            <th class="py-2 pr-4">{"URL"}</th>
                            <th class="py-2 text-right">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        <For
                            each=move || links.get()
                            key=|link| (link.id, link.platform.clone(), link.url.clone())
                            children=move |link| view! { <SocialLinkRow vm=vm link=link submitting=submitting /> }
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
            <SelectField
                label="Platform"
                value=vm.platform
                options={platform_options(&vm.platform.get_untracked())}
            />
            <TextField label="URL" value=vm.url required=true input_type="url" placeholder="https://" />
        </FormDialog>
        <ConfirmDialog
            is_open=delete_open
            title="Delete social link"
            message=delete_message
            confirm_label="Delete"
            destructive=true
            pending=submitting
            on_confirm={Callback::new(move |_| vm.confirm_delete())}
            on_cancel={Callback::new(move |_| vm.cancel_delete())}
        />
    }
}

/// Selectable platforms, plus the edited link's own platform when the form
/// does not list it.
fn platform_options(current: &str) -> Vec<(String, String)> {
    let mut options: Vec<(String, String)> = SocialPlatform::SELECTABLE
        .iter()
        .map(|p| (p.as_str().to_string(), p.label().to_string()))
        .collect();
    if let Some(platform) = SocialPlatform::parse(current).filter(|p| !p.is_selectable()) {
        options.push((platform.as_str().to_string(), platform.label().to_string()));
    }
    options
}

#[component]
fn SocialLinkRow(vm: SocialLinksViewModel, link: SocialLink, submitting: Signal<bool>) -> impl IntoView {
    let edit_link = link.clone();
    let delete_link = link.clone();
    view! {
        <tr>
            <td class="py-2 pr-4 font-medium text-fg">{link.platform.label().to_string()}</td>
            <td class="py-2 pr-4">
                <a class="text-action-primary-bg underline break-all" href=link.url.clone() target="_blank" rel="noopener noreferrer">
                    {link.url.clone()}
                </a>
            </td>
            <td class="py-2 text-right space-x-2 whitespace-nowrap">
                <Button
                    variant=ButtonVariant::Ghost
                    disabled=submitting
                    on_click={Callback::new(move |_| vm.open_editor(Some(edit_link.clone())))}
                >
                    {"Edit"}
                </Button>
                <Button
                    variant=ButtonVariant::Danger
                    disabled=submitting
                    on_click={Callback::new(move |_| vm.request_delete(delete_link.clone()))}
                >
                    {"Delete"}
                </Button>
            </td>
        </tr>
    }
}
