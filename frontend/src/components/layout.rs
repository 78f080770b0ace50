use leptos::*;

/// One entry in the navigation bar and on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLink {
    pub path: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const PANEL_LINKS: &[PanelLink] = &[
    PanelLink {
        path: "/settings",
        label: "Site Settings",
        description: "Site name, caption, tagline, logo and banners.",
    },
    PanelLink {
        path: "/about-us",
        label: "About Us",
        description: "The about-us section shown on the public site.",
    },
    PanelLink {
        path: "/founder",
        label: "Founder",
        description: "The founder profile and portrait.",
    },
    PanelLink {
        path: "/our-story",
        label: "Our Story",
        description: "The story section and its image.",
    },
    PanelLink {
        path: "/social-links",
        label: "Social Links",
        description: "Links to the organisation's social media accounts.",
    },
    PanelLink {
        path: "/contact",
        label: "Contact Info",
        description: "Phone, e-mail and postal address.",
    },
    PanelLink {
        path: "/faqs",
        label: "FAQs",
        description: "Frequently asked questions and their visibility.",
    },
    PanelLink {
        path: "/privacy-policy",
        label: "Privacy Policy",
        description: "Policy sections with their subtopics.",
    },
    PanelLink {
        path: "/terms",
        label: "Terms & Conditions",
        description: "Terms, subtopics and individual points.",
    },
    PanelLink {
        path: "/caregiver-terms",
        label: "Caregiver Terms",
        description: "Terms that apply to caregivers, with subtopics.",
    },
];

const NAV_LINK_CLASS: &str =
    "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="text-xl font-semibold text-fg">
                        "Content Admin"
                    </a>
                    <nav class="hidden xl:flex space-x-1">
                        {PANEL_LINKS
                            .iter()
                            .map(|link| view! { <a href=link.path class=NAV_LINK_CLASS>{link.label}</a> })
                            .collect_view()}
                    </nav>
                    <button
                        type="button"
                        class="xl:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                        on:click=toggle_menu
                        aria-expanded=move || menu_open.get()
                        aria-controls="mobile-nav"
                    >
                        <span class="sr-only">
                            {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                        </span>
                        <svg
                            class="h-6 w-6"
                            xmlns="http://www.w3.org/2000/svg"
                            fill="none"
                            viewBox="0 0 24 24"
                            stroke="currentColor"
                        >
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M4 6h16M4 12h16M4 18h16"
                            />
                        </svg>
                    </button>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="xl:hidden border-t border-border">
                        <nav class="px-4 py-3 space-y-2">
                            {PANEL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.path
                                            class=format!("block {}", NAV_LINK_CLASS)
                                            on:click=move |_| set_menu_open.set(false)
                                        >
                                            {link.label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

/// Title row of a panel with an optional action on the right.
#[component]
pub fn PanelHeader(
    #[prop(into)] title: String,
    #[prop(optional_no_strip)] subtitle: Option<String>,
    #[prop(optional_no_strip)] action: Option<View>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-2 sm:flex-row sm:items-center sm:justify-between mb-4">
            <div>
                <h2 class="text-lg font-semibold text-fg">{title}</h2>
                {subtitle.map(|text| view! { <p class="text-sm text-fg-muted">{text}</p> })}
            </div>
            {action}
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8" aria-busy="true">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}
