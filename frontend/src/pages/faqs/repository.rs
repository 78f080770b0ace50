use crate::api::{ApiClient, ApiError, Faq, FaqPayload, MutationResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct FaqsRepository {
    client: Rc<ApiClient>,
}

impl FaqsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Faq>, ApiError> {
        self.client.list_faqs().await
    }

    pub async fn save(&self, id: Option<i64>, payload: FaqPayload) -> Result<MutationResponse, ApiError> {
        match id {
            Some(id) => self.client.update_faq(id, &payload).await,
            None => self.client.create_faq(&payload).await,
        }
    }

    pub async fn delete(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.client.delete_faq(id).await
    }
}
