use reqwest::Method;

use crate::api::{
    client::ApiClient,
    multipart::{FormPayload, UploadFile},
    types::{ApiError, ContentBlock, ContentSection, MutationResponse},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentBlockUpload {
    pub title: String,
    pub content: String,
    pub image: Option<UploadFile>,
}

impl ContentBlockUpload {
    pub fn into_payload(self) -> FormPayload {
        FormPayload::new()
            .text("title", self.title)
            .text("content", self.content)
            .optional_file("image", self.image)
    }
}

impl ApiClient {
    /// The section endpoints answer with a list; its first entry is the live record.
    pub async fn get_content_block(
        &self,
        section: ContentSection,
    ) -> Result<Option<ContentBlock>, ApiError> {
        self.get_optional(section.endpoint()).await
    }

    pub async fn save_content_block(
        &self,
        section: ContentSection,
        upload: ContentBlockUpload,
    ) -> Result<MutationResponse, ApiError> {
        self.send_multipart(Method::POST, section.endpoint(), upload.into_payload())
            .await
    }
}
