mod caregiver_terms;
pub mod client;
mod contact;
mod content_sections;
mod faqs;
pub mod multipart;
mod privacy_policy;
mod site_settings;
mod social_links;
mod terms;
pub mod types;

pub use client::*;
pub use content_sections::ContentBlockUpload;
pub use multipart::UploadFile;
pub use site_settings::SiteSettingsUpload;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
