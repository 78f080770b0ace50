use crate::api::{
    ApiClient, ApiError, MutationResponse, Term, TermSubpoint, TermSubpointPayload, TermSubtopic,
    TermSubtopicPayload, TitledContentPayload,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct TermsRepository {
    client: Rc<ApiClient>,
}

impl TermsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list_terms(&self) -> Result<Vec<Term>, ApiError> {
        self.client.list_terms().await
    }

    pub async fn list_subtopics(&self, term_id: i64) -> Result<Vec<TermSubtopic>, ApiError> {
        self.client.list_term_subtopics(term_id).await
    }

    pub async fn list_points(&self, subtopic_id: i64) -> Result<Vec<TermSubpoint>, ApiError> {
        self.client.list_term_subpoints(subtopic_id).await
    }

    pub async fn save_term(
        &self,
        id: Option<i64>,
        payload: TitledContentPayload,
    ) -> Result<MutationResponse, ApiError> {
        match id {
            Some(id) => self.client.update_term(id, &payload).await,
            None => self.client.create_term(&payload).await,
        }
    }

    pub async fn delete_term(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.client.delete_term(id).await
    }

    pub async fn save_subtopic(
        &self,
        id: Option<i64>,
        payload: TermSubtopicPayload,
    ) -> Result<MutationResponse, ApiError> {
        match id {
            Some(id) => self.client.update_term_subtopic(id, &payload).await,
            None => self.client.create_term_subtopic(&payload).await,
        }
    }

    pub async fn delete_subtopic(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.client.delete_term_subtopic(id).await
    }

    pub async fn save_point(
        &self,
        id: Option<i64>,
        payload: TermSubpointPayload,
    ) -> Result<MutationResponse, ApiError> {
        match id {
            Some(id) => self.client.update_term_subpoint(id, &payload).await,
            None => self.client.create_term_subpoint(&payload).await,
        }
    }

    pub async fn delete_point(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.client.delete_term_subpoint(id).await
    }
}
