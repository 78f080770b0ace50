//! The fully nested terms tree and the fetches that assemble it.
//!
//! Loading is strictly sequential and depth first: the term list, then for
//! each term its subtopics followed by the points of each of those subtopics.
//! For `T` terms and `S` subtopics in total that is exactly `1 + T + S`
//! requests, always in the same order.

use super::repository::TermsRepository;
use crate::api::{ApiError, Term, TermSubpoint, TermSubtopic};

#[derive(Debug, Clone, PartialEq)]
pub struct SubtopicNode {
    pub subtopic: TermSubtopic,
    pub points: Vec<TermSubpoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TermNode {
    pub term: Term,
    pub subtopics: Vec<SubtopicNode>,
}

pub async fn load_terms_tree(repo: &TermsRepository) -> Result<Vec<TermNode>, ApiError> {
    let terms = repo.list_terms().await?;
    let mut tree = Vec::with_capacity(terms.len());
    for term in terms {
        let subtopics = load_term_subtopics(repo, term.id).await?;
        tree.push(TermNode { term, subtopics });
    }
    Ok(tree)
}

/// One term's subtopics with their points.
pub async fn load_term_subtopics(
    repo: &TermsRepository,
    term_id: i64,
) -> Result<Vec<SubtopicNode>, ApiError> {
    let subtopics = repo.list_subtopics(term_id).await?;
    let mut nodes = Vec::with_capacity(subtopics.len());
    for subtopic in subtopics {
        let points = repo.list_points(subtopic.id).await?;
        nodes.push(SubtopicNode { subtopic, points });
    }
    Ok(nodes)
}

/// Swaps in freshly fetched subtopics for `term_id`. Returns false when the
/// term is no longer in the tree.
pub fn replace_subtopics(tree: &mut [TermNode], term_id: i64, subtopics: Vec<SubtopicNode>) -> bool {
    match tree.iter_mut().find(|node| node.term.id == term_id) {
        Some(node) => {
            node.subtopics = subtopics;
            true
        }
        None => false,
    }
}

pub fn replace_points(tree: &mut [TermNode], subtopic_id: i64, points: Vec<TermSubpoint>) -> bool {
    let node = tree
        .iter_mut()
        .flat_map(|term| term.subtopics.iter_mut())
        .find(|node| node.subtopic.id == subtopic_id);
    match node {
        Some(node) => {
            node.points = points;
            true
        }
        None => false,
    }
}

pub fn subtopic_ids(tree: &[TermNode]) -> Vec<i64> {
    tree.iter()
        .flat_map(|term| term.subtopics.iter().map(|node| node.subtopic.id))
        .collect()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::ApiClient;
    use serde_json::json;
    use std::rc::Rc;

    fn repo(server: &MockServer) -> TermsRepository {
        TermsRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )))
    }

    fn mock_two_terms(server: &MockServer) {
        server.mock(|when, then| {
            when.method(GET).path("/api/terms");
            then.status(200).json_body(json!([
                {"id": 1, "title": "Use", "content": "..."},
                {"id": 2, "title": "Payment", "content": "..."}
            ]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/terms/1/subtopics");
            then.status(200).json_body(json!([
                {"id": 10, "term_id": 1, "title": "Accounts", "content": ""},
                {"id": 11, "term_id": 1, "title": "Conduct", "content": ""}
            ]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/terms/2/subtopics");
            then.status(200).json_body(json!([]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/term-subtopics/10/subpoints");
            then.status(200).json_body(json!([
                {"id": 100, "subtopic_id": 10, "point": "One account per person"}
            ]));
        });
    }

    #[tokio::test]
    async fn tree_load_issues_one_plus_t_plus_s_requests_in_order() {
        let server = MockServer::start_async().await;
        mock_two_terms(&server);
        server.mock(|when, then| {
            when.method(GET).path("/api/term-subtopics/11/subpoints");
            then.status(200).json_body(json!([]));
        });

        let tree = load_terms_tree(&repo(&server)).await.expect("tree");
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].subtopics.len(), 2);
        assert_eq!(tree[0].subtopics[0].points[0].point, "One account per person");
        assert!(tree[1].subtopics.is_empty());

        let paths: Vec<String> = server.received().into_iter().map(|r| r.path).collect();
        assert_eq!(
            paths,
            vec![
                "/api/terms",
                "/api/terms/1/subtopics",
                "/api/term-subtopics/10/subpoints",
                "/api/term-subtopics/11/subpoints",
                "/api/terms/2/subtopics",
            ]
        );
    }

    #[tokio::test]
    async fn nested_failure_aborts_the_whole_load() {
        let server = MockServer::start_async().await;
        mock_two_terms(&server);
        server.mock(|when, then| {
            when.method(GET).path("/api/term-subtopics/11/subpoints");
            then.status(500).empty_body();
        });

        let err = load_terms_tree(&repo(&server)).await.expect_err("aborted");
        assert_eq!(err.code, "HTTP_500");
        assert_eq!(server.hits(GET, "/api/terms/2/subtopics"), 0);
    }

    fn sample_tree() -> Vec<TermNode> {
        vec![TermNode {
            term: Term {
                id: 1,
                title: "Use".into(),
                content: String::new(),
            },
            subtopics: vec![SubtopicNode {
                subtopic: TermSubtopic {
                    id: 10,
                    term_id: 1,
                    title: "Accounts".into(),
                    content: String::new(),
                },
                points: Vec::new(),
            }],
        }]
    }

    #[test]
    fn replacing_points_touches_only_that_subtopic() {
        let mut tree = sample_tree();
        let point = TermSubpoint {
            id: 7,
            subtopic_id: 10,
            point: "Keep passwords secret".into(),
        };
        assert!(replace_points(&mut tree, 10, vec![point.clone()]));
        assert_eq!(tree[0].subtopics[0].points, vec![point]);
        assert!(!replace_points(&mut tree, 99, Vec::new()));
    }

    #[test]
    fn replacing_subtopics_requires_known_term() {
        let mut tree = sample_tree();
        assert!(replace_subtopics(&mut tree, 1, Vec::new()));
        assert!(tree[0].subtopics.is_empty());
        assert!(!replace_subtopics(&mut tree, 2, Vec::new()));
        assert!(subtopic_ids(&tree).is_empty());
    }
}
