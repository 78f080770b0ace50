use reqwest::Method;

use crate::api::{
    client::ApiClient,
    types::{
        ApiError, MutationResponse, PrivacyPolicy, PrivacySubtopic, PrivacySubtopicPayload,
        TitledContentPayload,
    },
};

impl ApiClient {
    pub async fn list_privacy_policies(&self) -> Result<Vec<PrivacyPolicy>, ApiError> {
        self.get_json("/privacy-policy").await
    }

    pub async fn create_privacy_policy(
        &self,
        payload: &TitledContentPayload,
    ) -> Result<MutationResponse, ApiError> {
        self.send_json(Method::POST, "/privacy-policy", payload).await
    }

    pub async fn update_privacy_policy(
        &self,
        id: i64,
        payload: &TitledContentPayload,
    ) -> Result<MutationResponse, ApiError> {
        self.send_json(Method::PUT, &format!("/privacy-policy/{}", id), payload)
            .await
    }

    pub async fn delete_privacy_policy(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.delete(&format!("/privacy-policy/{}", id)).await
    }

    pub async fn list_privacy_subtopics(
        &self,
        policy_id: i64,
    ) -> Result<Vec<PrivacySubtopic>, ApiError> {
        self.get_json(&format!("/privacy-policy/{}/subtopics", policy_id))
            .await
    }

    pub async fn create_privacy_subtopic(
        &self,
        payload: &PrivacySubtopicPayload,
    ) -> Result<MutationResponse, ApiError> {
        self.send_json(Method::POST, "/privacy-policy-subtopics", payload)
            .await
    }

    pub async fn update_privacy_subtopic(
        &self,
        id: i64,
        payload: &PrivacySubtopicPayload,
    ) -> Result<MutationResponse, ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/privacy-policy-subtopics/{}", id),
            payload,
        )
        .await
    }

    pub async fn delete_privacy_subtopic(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.delete(&format!("/privacy-policy-subtopics/{}", id))
            .await
    }
}
