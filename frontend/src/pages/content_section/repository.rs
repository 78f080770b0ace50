use crate::api::{
    ApiClient, ApiError, ContentBlock, ContentBlockUpload, ContentSection, MutationResponse,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct ContentSectionRepository {
    client: Rc<ApiClient>,
    section: ContentSection,
}

impl ContentSectionRepository {
    pub fn new_with_client(client: Rc<ApiClient>, section: ContentSection) -> Self {
        Self { client, section }
    }

    pub fn section(&self) -> ContentSection {
        self.section
    }

    pub async fn load(&self) -> Result<Option<ContentBlock>, ApiError> {
        self.client.get_content_block(self.section).await
    }

    pub async fn save(&self, upload: ContentBlockUpload) -> Result<MutationResponse, ApiError> {
        self.client.save_content_block(self.section, upload).await
    }
}
