use super::view_model::{use_content_section_view_model, ContentSectionViewModel};
use crate::api::{ContentBlock, ContentSection};
use crate::components::{
    common::Button,
    empty_state::EmptyState,
    forms::{ImageField, TextAreaField, TextField},
    image::ImagePreview,
    layout::Layout,
    modal::FormDialog,
    panel::PanelShell,
};
use crate::config::image_url;
use crate::state::{dismiss_callback, notice_signal};
use crate::utils::format_timestamp;
use leptos::*;

#[component]
pub fn AboutUsPage() -> impl IntoView {
    view! { <ContentSectionPage section=ContentSection::AboutUs /> }
}

#[component]
pub fn FounderPage() -> impl IntoView {
    view! { <ContentSectionPage section=ContentSection::Founder /> }
}

#[component]
pub fn OurStoryPage() -> impl IntoView {
    view! { <ContentSectionPage section=ContentSection::OurStory /> }
}

#[component]
fn ContentSectionPage(section: ContentSection) -> impl IntoView {
    let vm = use_content_section_view_model(section);
    view! {
        <Layout>
            <ContentSectionPanel vm=vm />
        </Layout>
    }
}

#[component]
pub fn ContentSectionPanel(vm: ContentSectionViewModel) -> impl IntoView {
    let section = vm.section;
    let state = vm.state;
    let block = Signal::derive(move || state.with(|s| s.data().cloned()));
    let loading = Signal::derive(move || state.with(|s| s.is_loading() && s.data().is_none()));
    let dialog_open = Signal::derive(move || state.with(|s| s.is_dialog_open()));
    let submitting = Signal::derive(move || state.with(|s| s.is_submitting()));
    let action_label = move || state.with(|s| s.action_label());
    let dialog_title = Signal::derive(move || {
        format!("{} {}", state.with(|s| s.action_label()), section.label())
    });
    let current_image = Signal::derive(move || {
        block.with(|b| {
            b.as_ref()
                .and_then(|b| b.image.as_deref())
                .map(|image| image_url(section.upload_kind(), image))
        })
    });

    view! {
        <PanelShell
            title=section.label()
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
            {move || match block.get() {
                Some(record) => view! { <ContentBlockView section=section block=record /> }.into_view(),
                None => view! {
                    <EmptyState
                        title=format!("No {} content yet", section.label())
                        description="Use Add to publish this section."
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
            <TextField label="Title" value=vm.form.title required=true />
            <TextAreaField label="Content" value=vm.form.content required=true rows=8 />
            <ImageField label="Image" selected=vm.form.image current_url=current_image />
        </FormDialog>
    }
}

#[component]
fn ContentBlockView(section: ContentSection, block: ContentBlock) -> impl IntoView {
    let image = block
        .image
        .as_deref()
        .map(|image| image_url(section.upload_kind(), image));
    let updated = block.updated_at.as_deref().and_then(format_timestamp);
    view! {
        <article class="flex flex-col md:flex-row gap-6">
            <div class="md:w-1/3">
                <ImagePreview src=image alt=format!("{} image", section.label()) class="w-full rounded border border-border object-cover" />
            </div>
            <div class="md:flex-1 space-y-2">
                <h3 class="text-xl font-semibold text-fg">{block.title.clone()}</h3>
                <p class="text-sm text-fg whitespace-pre-line">{block.content.clone()}</p>
                {updated.map(|when| view! { <p class="text-xs text-fg-muted">{format!("Last updated {}", when)}</p> })}
            </div>
        </article>
    }
}
