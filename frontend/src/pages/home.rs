use crate::components::layout::{Layout, PANEL_LINKS};
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Layout>
            <div class="px-4 sm:px-0">
                <h1 class="text-3xl font-extrabold text-fg">"Content Admin"</h1>
                <p class="mt-2 text-fg-muted">
                    "Manage the content shown on the public website."
                </p>
                <ul class="mt-8 grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                    {PANEL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <li>
                                    <a
                                        href=link.path
                                        class="block h-full rounded-lg border border-border bg-surface-elevated p-5 shadow-sm hover:border-action-primary-bg"
                                    >
                                        <h2 class="text-lg font-semibold text-fg">{link.label}</h2>
                                        <p class="mt-1 text-sm text-fg-muted">{link.description}</p>
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </Layout>
    }
}
