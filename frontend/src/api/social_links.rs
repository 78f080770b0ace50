use reqwest::Method;

use crate::api::{
    client::ApiClient,
    types::{ApiError, MutationResponse, SocialLink, SocialLinkPayload},
};

impl ApiClient {
    pub async fn list_social_links(&self) -> Result<Vec<SocialLink>, ApiError> {
        self.get_json("/social-links").await
    }

    pub async fn create_social_link(
        &self,
        payload: &SocialLinkPayload,
    ) -> Result<MutationResponse, ApiError> {
        self.send_json(Method::POST, "/social-links", payload).await
    }

    pub async fn update_social_link(
        &self,
        id: i64,
        payload: &SocialLinkPayload,
    ) -> Result<MutationResponse, ApiError> {
        self.send_json(Method::PUT, &format!("/social-links/{}", id), payload)
            .await
    }

    pub async fn delete_social_link(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.delete(&format!("/social-links/{}", id)).await
    }
}
