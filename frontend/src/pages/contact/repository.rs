use crate::api::{ApiClient, ApiError, ContactInfo, ContactInfoPayload, MutationResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct ContactRepository {
    client: Rc<ApiClient>,
}

impl ContactRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn load(&self) -> Result<Option<ContactInfo>, ApiError> {
        self.client.get_contact_info().await
    }

    pub async fn save(&self, payload: ContactInfoPayload) -> Result<MutationResponse, ApiError> {
        self.client.save_contact_info(&payload).await
    }
}
