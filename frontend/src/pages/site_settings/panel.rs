use super::view_model::{use_site_settings_view_model, SiteSettingsViewModel};
use crate::api::SiteSettings;
use crate::components::{
    common::Button,
    empty_state::EmptyState,
    forms::{ImageField, TextAreaField, TextField},
    image::ImagePreview,
    layout::Layout,
    modal::FormDialog,
    panel::PanelShell,
};
use crate::config::{image_url, UploadKind};
use crate::state::{dismiss_callback, notice_signal};
use crate::utils::format_timestamp;
use leptos::*;

#[component]
pub fn SiteSettingsPage() -> impl IntoView {
    let vm = use_site_settings_view_model();
    view! {
        <Layout>
            <SiteSettingsPanel vm=vm />
        </Layout>
    }
}

fn settings_image(reference: Option<&str>) -> Option<String> {
    reference.map(|r| image_url(UploadKind::Settings, r))
}

#[component]
pub fn SiteSettingsPanel(vm: SiteSettingsViewModel) -> impl IntoView {
    let state = vm.state;
    let settings = Signal::derive(move || state.with(|s| s.data().cloned()));
    let loading = Signal::derive(move || state.with(|s| s.is_loading() && s.data().is_none()));
    let dialog_open = Signal::derive(move || state.with(|s| s.is_dialog_open()));
    let submitting = Signal::derive(move || state.with(|s| s.is_submitting()));
    let action_label = move || state.with(|s| s.action_label());
    let dialog_title =
        Signal::derive(move || format!("{} website settings", state.with(|s| s.action_label())));

    let current = move |pick: fn(&SiteSettings) -> Option<&str>| {
        Signal::derive(move || settings.with(|s| settings_image(s.as_ref().and_then(pick))))
    };

    view! {
        <PanelShell
            title="Website Settings"
            subtitle="Branding shown across the public site."
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
            {move || match settings.get() {
                Some(record) => view! { <SettingsSummary settings=record /> }.into_view(),
                None => view! {
                    <EmptyState
                        title="No website settings yet"
                        description="Use Add to set the site name and images."
                    />
                }
                .into_view(),
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
            <TextField label="Site name" value=vm.form.site_name required=true />
            <TextField label="Caption" value=vm.form.caption />
            <TextAreaField label="Tagline" value=vm.form.tagline rows=2 />
            <ImageField
                label="Logo"
                selected=vm.form.logo
                current_url={current(|s| s.logo.as_deref())}
            />
            <ImageField
                label="Banner 1"
                selected={vm.form.banners[0]}
                current_url={current(|s| s.banner1.as_deref())}
            />
            <ImageField
                label="Banner 2"
                selected={vm.form.banners[1]}
                current_url={current(|s| s.banner2.as_deref())}
            />
            <ImageField
                label="Banner 3"
                selected={vm.form.banners[2]}
                current_url={current(|s| s.banner3.as_deref())}
            />
        </FormDialog>
    }
}

#[component]
fn SettingsSummary(settings: SiteSettings) -> impl IntoView {
    let updated = settings.updated_at.as_deref().and_then(format_timestamp);
    let banners = settings
        .banners()
        .into_iter()
        .enumerate()
        .map(|(index, banner)| {
            let label = format!("Banner {}", index + 1);
            view! {
                <figure class="space-y-1">
                    <figcaption class="text-xs text-fg-muted">{label.clone()}</figcaption>
                    <ImagePreview src=settings_image(banner) alt=label />
                </figure>
            }
        })
        .collect_view();

    view! {
        <dl class="grid grid-cols-1 sm:grid-cols-3 gap-4 text-sm">
            <div>
                <dt class="text-fg-muted">{"Site name"}</dt>
                <dd class="text-fg font-medium">{settings.site_name.clone()}</dd>
            </div>
            <div>
                <dt class="text-fg-muted">{"Caption"}</dt>
                <dd class="text-fg">{settings.caption.clone()}</dd>
            </div>
            <div>
                <dt class="text-fg-muted">{"Tagline"}</dt>
                <dd class="text-fg">{settings.tagline.clone()}</dd>
            </div>
        </dl>
        <div class="grid grid-cols-2 lg:grid-cols-4 gap-4">
            <figure class="space-y-1">
                <figcaption class="text-xs text-fg-muted">{"Logo"}</figcaption>
                <ImagePreview src=settings_image(settings.logo.as_deref()) alt="Logo" />
            </figure>
            {banners}
        </div>
        {updated.map(|when| view! { <p class="text-xs text-fg-muted">{format!("Last updated {}", when)}</p> })}
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::components::image::MISSING_IMAGE;
    use crate::test_support::helpers::seed_panel;
    use crate::test_support::ssr::{render_to_string, strip_comments};

    #[test]
    fn existing_settings_render_logo_placeholders_and_edit() {
        let html = render_to_string(move || {
            let vm = use_site_settings_view_model();
            seed_panel(
                vm.state,
                Some(SiteSettings {
                    id: Some(1),
                    site_name: "Acme".into(),
                    caption: "c".into(),
                    tagline: "t".into(),
                    logo: Some("logo.png".into()),
                    updated_at: Some("2024-05-01 10:30:00".into()),
                    ..Default::default()
                }),
            );
            view! { <SiteSettingsPanel vm=vm /> }
        });
        assert!(html.contains("<img"));
        assert!(html.contains("/settings/logo.png"));
        assert_eq!(html.matches(MISSING_IMAGE).count(), 3);
        let markup = strip_comments(&html);
        assert!(markup.contains(">Edit</button>"));
        assert!(!markup.contains(">Add</button>"));
        assert!(html.contains("Last updated 2024-05-01 10:30"));
    }

    #[test]
    fn missing_settings_offer_add() {
        let html = render_to_string(move || {
            let vm = use_site_settings_view_model();
            seed_panel(vm.state, None);
            view! { <SiteSettingsPanel vm=vm /> }
        });
        let markup = strip_comments(&html);
        assert!(markup.contains(">Add</button>"));
        assert!(!markup.contains(">Edit</button>"));
        assert!(html.contains("No website settings yet"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn editor_prefills_current_values() {
        let html = render_to_string(move || {
            let vm = use_site_settings_view_model();
            seed_panel(
                vm.state,
                Some(SiteSettings {
                    site_name: "Acme".into(),
                    tagline: "Made with care".into(),
                    ..Default::default()
                }),
            );
            vm.open_editor();
            view! { <SiteSettingsPanel vm=vm /> }
        });
        assert!(html.contains("Edit website settings"));
        assert!(html.contains("Made with care"));
        assert!(html.contains("Banner 3"));
    }
}
