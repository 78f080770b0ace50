use crate::api::{
    ApiClient, ApiError, CaregiverSubtopicPayload, CaregiverTerm, MutationResponse,
    TitledContentPayload,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct CaregiverTermsRepository {
    client: Rc<ApiClient>,
}

impl CaregiverTermsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Terms with their subtopics embedded.
    pub async fn list(&self) -> Result<Vec<CaregiverTerm>, ApiError> {
        self.client.list_caregiver_terms().await
    }

    pub async fn save_term(
        &self,
        id: Option<i64>,
        payload: TitledContentPayload,
    ) -> Result<MutationResponse, ApiError> {
        match id {
            Some(id) => self.client.update_caregiver_term(id, &payload).await,
            None => self.client.create_caregiver_term(&payload).await,
        }
    }

    pub async fn delete_term(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.client.delete_caregiver_term(id).await
    }

    pub async fn save_subtopic(
        &self,
        id: Option<i64>,
        payload: CaregiverSubtopicPayload,
    ) -> Result<MutationResponse, ApiError> {
        match id {
            Some(id) => self.client.update_caregiver_subtopic(id, &payload).await,
            None => self.client.create_caregiver_subtopic(&payload).await,
        }
    }

    pub async fn delete_subtopic(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.client.delete_caregiver_subtopic(id).await
    }
}
