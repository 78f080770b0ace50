use crate::api::{ApiClient, ApiError, MutationResponse, SiteSettings, SiteSettingsUpload};
use std::rc::Rc;

#[derive(Clone)]
pub struct SiteSettingsRepository {
    client: Rc<ApiClient>,
}

impl SiteSettingsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn load(&self) -> Result<Option<SiteSettings>, ApiError> {
        self.client.get_site_settings().await
    }

    pub async fn save(&self, upload: SiteSettingsUpload) -> Result<MutationResponse, ApiError> {
        self.client.save_site_settings(upload).await
    }
}
