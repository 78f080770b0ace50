pub mod caregiver_terms;
pub mod contact;
pub mod content_section;
pub mod faqs;
pub mod home;
pub mod privacy_policy;
pub mod site_settings;
pub mod social_links;
pub mod terms;

pub use caregiver_terms::CaregiverTermsPage;
pub use contact::ContactPage;
pub use content_section::{AboutUsPage, FounderPage, OurStoryPage};
pub use faqs::FaqsPage;
pub use home::HomePage;
pub use privacy_policy::PrivacyPolicyPage;
pub use site_settings::SiteSettingsPage;
pub use social_links::SocialLinksPage;
pub use terms::TermsPage;
