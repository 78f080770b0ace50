use crate::api::{ApiClient, ApiError, MutationResponse, SocialLink, SocialLinkPayload};
use std::rc::Rc;

#[derive(Clone)]
pub struct SocialLinksRepository {
    client: Rc<ApiClient>,
}

impl SocialLinksRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<SocialLink>, ApiError> {
        self.client.list_social_links().await
    }

    /// Creates when `id` is `None`, otherwise updates that link.
    pub async fn save(
        &self,
        id: Option<i64>,
        payload: SocialLinkPayload,
    ) -> Result<MutationResponse, ApiError> {
        match id {
            Some(id) => self.client.update_social_link(id, &payload).await,
            None => self.client.create_social_link(&payload).await,
        }
    }

    pub async fn delete(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.client.delete_social_link(id).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::SocialPlatform;
    use serde_json::json;

    fn repo(server: &MockServer) -> SocialLinksRepository {
        SocialLinksRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )))
    }

    #[tokio::test]
    async fn save_dispatches_create_or_update_by_edit_id() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/social-links");
            then.status(201).json_body(json!({"id": 9}));
        });
        server.mock(|when, then| {
            when.method(PUT).path("/api/social-links/4");
            then.status(200).json_body(json!({"message": "Updated"}));
        });

        let repo = repo(&server);
        let payload = SocialLinkPayload {
            platform: SocialPlatform::Instagram,
            url: "https://instagram.com/acme".into(),
        };
        repo.save(None, payload.clone()).await.expect("create");
        repo.save(Some(4), payload).await.expect("update");

        assert_eq!(
            server.last_json(POST, "/api/social-links"),
            Some(json!({"platform": "instagram", "url": "https://instagram.com/acme"}))
        );
        assert_eq!(server.hits(PUT, "/api/social-links/4"), 1);
    }

    #[tokio::test]
    async fn list_tolerates_unknown_platforms() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/social-links");
            then.status(200).json_body(json!([
                {"id": 1, "platform": "facebook", "url": "https://facebook.com/acme"},
                {"id": 2, "platform": "mastodon", "url": "https://mastodon.social/@acme"}
            ]));
        });

        let links = repo(&server).list().await.expect("list");
        assert_eq!(links.len(), 2);
        assert_eq!(links[1].platform, SocialPlatform::Other("mastodon".into()));
    }
}
