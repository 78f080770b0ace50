use reqwest::Method;

use crate::api::{
    client::ApiClient,
    types::{
        ApiError, CaregiverSubtopicPayload, CaregiverTerm, MutationResponse,
        TitledContentPayload,
    },
};

impl ApiClient {
    /// Subtopics arrive embedded in each term.
    pub async fn list_caregiver_terms(&self) -> Result<Vec<CaregiverTerm>, ApiError> {
        self.get_json("/caregiver-terms").await
    }

    pub async fn create_caregiver_term(
        &self,
        payload: &TitledContentPayload,
    ) -> Result<MutationResponse, ApiError> {
        self.send_json(Method::POST, "/caregiver-terms", payload).await
    }

    pub async fn update_caregiver_term(
        &self,
        id: i64,
        payload: &TitledContentPayload,
    ) -> Result<MutationResponse, ApiError> {
        self.send_json(Method::PUT, &format!("/caregiver-terms/{}", id), payload)
            .await
    }

    pub async fn delete_caregiver_term(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.delete(&format!("/caregiver-terms/{}", id)).await
    }

    pub async fn create_caregiver_subtopic(
        &self,
        payload: &CaregiverSubtopicPayload,
    ) -> Result<MutationResponse, ApiError> {
        self.send_json(Method::POST, "/caregiver-term-subtopics", payload)
            .await
    }

    pub async fn update_caregiver_subtopic(
        &self,
        id: i64,
        payload: &CaregiverSubtopicPayload,
    ) -> Result<MutationResponse, ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/caregiver-term-subtopics/{}", id),
            payload,
        )
        .await
    }

    pub async fn delete_caregiver_subtopic(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.delete(&format!("/caregiver-term-subtopics/{}", id))
            .await
    }
}
