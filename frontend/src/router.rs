use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::api::ApiClient;
use crate::pages::{
    AboutUsPage, CaregiverTermsPage, ContactPage, FaqsPage, FounderPage, HomePage, OurStoryPage,
    PrivacyPolicyPage, SiteSettingsPage, SocialLinksPage, TermsPage,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/settings",
    "/about-us",
    "/founder",
    "/our-story",
    "/social-links",
    "/contact",
    "/faqs",
    "/privacy-policy",
    "/terms",
    "/caregiver-terms",
];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_meta_context();
    view! {
        <Title text="Content Admin"/>
        <Router>
            <Routes>
                <Route path="/" view=HomePage/>
                <Route path="/settings" view=SiteSettingsPage/>
                <Route path="/about-us" view=AboutUsPage/>
                <Route path="/founder" view=FounderPage/>
                <Route path="/our-story" view=OurStoryPage/>
                <Route path="/social-links" view=SocialLinksPage/>
                <Route path="/contact" view=ContactPage/>
                <Route path="/faqs" view=FaqsPage/>
                <Route path="/privacy-policy" view=PrivacyPolicyPage/>
                <Route path="/terms" view=TermsPage/>
                <Route path="/caregiver-terms" view=CaregiverTermsPage/>
                <Route path="/*any" view=NotFound/>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <crate::components::layout::Layout>
            <crate::components::empty_state::EmptyState
                title="Page not found"
                description="Pick a panel from the navigation above."
            />
        </crate::components::layout::Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::layout::PANEL_LINKS;
    use std::collections::HashSet;

    #[test]
    fn every_panel_link_has_a_route() {
        for link in PANEL_LINKS {
            assert!(
                ROUTE_PATHS.contains(&link.path),
                "navigation link without route: {}",
                link.path
            );
        }
        assert_eq!(ROUTE_PATHS.len(), PANEL_LINKS.len() + 1);
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
