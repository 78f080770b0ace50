use reqwest::Method;

use crate::api::{
    client::ApiClient,
    types::{
        ApiError, MutationResponse, Term, TermSubpoint, TermSubpointPayload, TermSubtopic,
        TermSubtopicPayload, TitledContentPayload,
    },
};

impl ApiClient {
    pub async fn list_terms(&self) -> Result<Vec<Term>, ApiError> {
        self.get_json("/terms").await
    }

    pub async fn create_term(
        &self,
        payload: &TitledContentPayload,
    ) -> Result<MutationResponse, ApiError> {
        self.send_json(Method::POST, "/terms", payload).await
    }

    pub async fn update_term(
        &self,
        id: i64,
        payload: &TitledContentPayload,
    ) -> Result<MutationResponse, ApiError> {
        self.send_json(Method::PUT, &format!("/terms/{}", id), payload)
            .await
    }

    pub async fn delete_term(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.delete(&format!("/terms/{}", id)).await
    }

    pub async fn list_term_subtopics(&self, term_id: i64) -> Result<Vec<TermSubtopic>, ApiError> {
        self.get_json(&format!("/terms/{}/subtopics", term_id)).await
    }

    pub async fn create_term_subtopic(
        &self,
        payload: &TermSubtopicPayload,
    ) -> Result<MutationResponse, ApiError> {
        self.send_json(Method::POST, "/term-subtopics", payload).await
    }

    pub async fn update_term_subtopic(
        &self,
        id: i64,
        payload: &TermSubtopicPayload,
    ) -> Result<MutationResponse, ApiError> {
        self.send_json(Method::PUT, &format!("/term-subtopics/{}", id), payload)
            .await
    }

    pub async fn delete_term_subtopic(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.delete(&format!("/term-subtopics/{}", id)).await
    }

    pub async fn list_term_subpoints(
        &self,
        subtopic_id: i64,
    ) -> Result<Vec<TermSubpoint>, ApiError> {
        self.get_json(&format!("/term-subtopics/{}/subpoints", subtopic_id))
            .await
    }

    pub async fn create_term_subpoint(
        &self,
        payload: &TermSubpointPayload,
    ) -> Result<MutationResponse, ApiError> {
        self.send_json(Method::POST, "/term-subpoints", payload).await
    }

    pub async fn update_term_subpoint(
        &self,
        id: i64,
        payload: &TermSubpointPayload,
    ) -> Result<MutationResponse, ApiError> {
        self.send_json(Method::PUT, &format!("/term-subpoints/{}", id), payload)
            .await
    }

    pub async fn delete_term_subpoint(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.delete(&format!("/term-subpoints/{}", id)).await
    }
}
