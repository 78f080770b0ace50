use leptos::*;

use crate::components::layout::{LoadingSpinner, PanelHeader};
use crate::components::notice::NoticeBanner;
use crate::state::Notice;

/// Card that frames every content panel: title, notice strip, and a spinner
/// while the first load is still pending.
#[component]
pub fn PanelShell(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] notice: Signal<Option<Notice>>,
    on_dismiss: Callback<u64>,
    #[prop(optional)] action: Option<View>,
    children: ChildrenFn,
) -> impl IntoView {
    let children = store_value(children);
    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <PanelHeader title=title subtitle=subtitle action=action />
            <NoticeBanner notice=notice on_dismiss=on_dismiss />
            <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner /> }>
                {children.with_value(|children| children())}
            </Show>
        </section>
    }
}
