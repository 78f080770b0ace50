use reqwest::Method;

use crate::api::{
    client::ApiClient,
    types::{ApiError, Faq, FaqPayload, MutationResponse},
};

impl ApiClient {
    pub async fn list_faqs(&self) -> Result<Vec<Faq>, ApiError> {
        self.get_json("/faqs").await
    }

    pub async fn create_faq(&self, payload: &FaqPayload) -> Result<MutationResponse, ApiError> {
        self.send_json(Method::POST, "/faqs", payload).await
    }

    pub async fn update_faq(
        &self,
        id: i64,
        payload: &FaqPayload,
    ) -> Result<MutationResponse, ApiError> {
        self.send_json(Method::PUT, &format!("/faqs/{}", id), payload)
            .await
    }

    pub async fn delete_faq(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.delete(&format!("/faqs/{}", id)).await
    }
}
