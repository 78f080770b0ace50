use reqwest::Method;

use crate::api::{
    client::ApiClient,
    multipart::{FormPayload, UploadFile},
    types::{ApiError, MutationResponse, SiteSettings},
};

const SETTINGS_PATH: &str = "/website-settings";

/// Text fields plus any newly chosen images for the branding form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteSettingsUpload {
    pub site_name: String,
    pub caption: String,
    pub tagline: String,
    pub logo: Option<UploadFile>,
    pub banner1: Option<UploadFile>,
    pub banner2: Option<UploadFile>,
    pub banner3: Option<UploadFile>,
}

impl SiteSettingsUpload {
    pub fn into_payload(self) -> FormPayload {
        FormPayload::new()
            .text("site_name", self.site_name)
            .text("caption", self.caption)
            .text("tagline", self.tagline)
            .optional_file("logo", self.logo)
            .optional_file("banner1", self.banner1)
            .optional_file("banner2", self.banner2)
            .optional_file("banner3", self.banner3)
    }
}

impl ApiClient {
    pub async fn get_site_settings(&self) -> Result<Option<SiteSettings>, ApiError> {
        self.get_optional(SETTINGS_PATH).await
    }

    /// Create and update share this endpoint; the server upserts the singleton.
    pub async fn save_site_settings(
        &self,
        upload: SiteSettingsUpload,
    ) -> Result<MutationResponse, ApiError> {
        self.send_multipart(Method::POST, SETTINGS_PATH, upload.into_payload())
            .await
    }
}
