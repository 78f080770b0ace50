use reqwest::Method;

use crate::api::{
    client::ApiClient,
    types::{ApiError, ContactInfo, ContactInfoPayload, MutationResponse},
};

const CONTACT_PATH: &str = "/contact-info";

impl ApiClient {
    pub async fn get_contact_info(&self) -> Result<Option<ContactInfo>, ApiError> {
        self.get_optional(CONTACT_PATH).await
    }

    pub async fn save_contact_info(
        &self,
        payload: &ContactInfoPayload,
    ) -> Result<MutationResponse, ApiError> {
        self.send_json(Method::POST, CONTACT_PATH, payload).await
    }
}
