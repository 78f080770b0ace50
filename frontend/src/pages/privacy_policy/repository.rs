use crate::api::{
    ApiClient, ApiError, MutationResponse, PrivacyPolicy, PrivacySubtopic, PrivacySubtopicPayload,
    TitledContentPayload,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct PrivacyPolicyRepository {
    client: Rc<ApiClient>,
}

impl PrivacyPolicyRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list_policies(&self) -> Result<Vec<PrivacyPolicy>, ApiError> {
        self.client.list_privacy_policies().await
    }

    pub async fn save_policy(
        &self,
        id: Option<i64>,
        payload: TitledContentPayload,
    ) -> Result<MutationResponse, ApiError> {
        match id {
            Some(id) => self.client.update_privacy_policy(id, &payload).await,
            None => self.client.create_privacy_policy(&payload).await,
        }
    }

    pub async fn delete_policy(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.client.delete_privacy_policy(id).await
    }

    pub async fn list_subtopics(&self, policy_id: i64) -> Result<Vec<PrivacySubtopic>, ApiError> {
        self.client.list_privacy_subtopics(policy_id).await
    }

    pub async fn save_subtopic(
        &self,
        id: Option<i64>,
        payload: PrivacySubtopicPayload,
    ) -> Result<MutationResponse, ApiError> {
        match id {
            Some(id) => self.client.update_privacy_subtopic(id, &payload).await,
            None => self.client.create_privacy_subtopic(&payload).await,
        }
    }

    pub async fn delete_subtopic(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.client.delete_privacy_subtopic(id).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    fn repo(server: &MockServer) -> PrivacyPolicyRepository {
        PrivacyPolicyRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )))
    }

    #[tokio::test]
    async fn listing_policies_does_not_touch_subtopics() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/privacy-policy");
            then.status(200).json_body(json!([
                {"id": 1, "title": "Data", "content": "We collect..."},
                {"id": 2, "title": "Cookies", "content": "We use..."}
            ]));
        });

        let policies = repo(&server).list_policies().await.expect("list");
        assert_eq!(policies.len(), 2);
        assert_eq!(server.received().len(), 1, "subtopics load on expand only");
    }

    #[tokio::test]
    async fn subtopic_mutations_carry_parent_id() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/privacy-policy-subtopics");
            then.status(201).json_body(json!({"id": 11}));
        });
        server.mock(|when, then| {
            when.method(PUT).path("/api/privacy-policy-subtopics/11");
            then.status(200).json_body(json!({"message": "Updated"}));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/privacy-policy/2/subtopics");
            then.status(200).json_body(json!([
                {"id": 11, "policy_id": 2, "title": "Retention", "content": "30 days"}
            ]));
        });

        let repo = repo(&server);
        let payload = PrivacySubtopicPayload {
            policy_id: 2,
            title: "Retention".into(),
            content: "30 days".into(),
        };
        repo.save_subtopic(None, payload.clone()).await.expect("create");
        repo.save_subtopic(Some(11), payload).await.expect("update");
        let children = repo.list_subtopics(2).await.expect("children");

        assert_eq!(
            server.last_json(POST, "/api/privacy-policy-subtopics"),
            Some(json!({"policy_id": 2, "title": "Retention", "content": "30 days"}))
        );
        assert_eq!(children[0].id, 11);
        assert_eq!(server.hits(GET, "/api/privacy-policy/2/subtopics"), 1);
    }
}
