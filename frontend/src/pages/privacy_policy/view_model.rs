use super::repository::PrivacyPolicyRepository;
use crate::api::{
    ApiClient, ApiError, PrivacyPolicy, PrivacySubtopic, PrivacySubtopicPayload,
    TitledContentPayload,
};
use crate::state::{reject, spawn_load, spawn_submit, spawn_subtree_load, PanelState, SubtreeCache};
use leptos::*;
use std::rc::Rc;

/// What the shared dialog is editing. `None` ids mean "create".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditTarget {
    Policy(Option<i64>),
    Subtopic { policy_id: i64, id: Option<i64> },
}

impl EditTarget {
    pub fn dialog_title(self) -> &'static str {
        match self {
            EditTarget::Policy(None) => "Add policy section",
            EditTarget::Policy(Some(_)) => "Edit policy section",
            EditTarget::Subtopic { id: None, .. } => "Add subtopic",
            EditTarget::Subtopic { id: Some(_), .. } => "Edit subtopic",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DeleteTarget {
    Policy(PrivacyPolicy),
    Subtopic(PrivacySubtopic),
}

impl DeleteTarget {
    pub fn prompt(&self) -> String {
        match self {
            DeleteTarget::Policy(policy) => format!(
                "Delete \"{}\" and all of its subtopics?",
                policy.title
            ),
            DeleteTarget::Subtopic(subtopic) => format!("Delete the subtopic \"{}\"?", subtopic.title),
        }
    }
}

/// Title and content as typed into the dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionDraft {
    pub title: String,
    pub content: String,
}

impl SectionDraft {
    pub fn into_payload(self) -> Result<TitledContentPayload, ApiError> {
        TitledContentPayload::from_input(&self.title, &self.content)
    }
}

#[derive(Clone, Copy)]
pub struct PrivacyPolicyViewModel {
    pub state: RwSignal<PanelState<Vec<PrivacyPolicy>>>,
    pub subtopics: RwSignal<SubtreeCache<PrivacySubtopic>>,
    pub title: RwSignal<String>,
    pub content: RwSignal<String>,
    pub target: RwSignal<EditTarget>,
    pub pending_delete: RwSignal<Option<DeleteTarget>>,
    repo: StoredValue<PrivacyPolicyRepository>,
}

impl PrivacyPolicyViewModel {
    pub fn reload(&self) {
        let repo = self.repo.get_value();
        spawn_load(self.state, move || async move {
            repo.list_policies().await.map(Some)
        });
    }

    /// Shows or hides the subtopics of `policy_id`, fetching them the first time.
    pub fn toggle_subtopics(&self, policy_id: i64) {
        if self
            .subtopics
            .try_update(|cache| cache.toggle(policy_id))
            .unwrap_or(false)
        {
            self.reload_subtopics(policy_id);
        }
    }

    pub fn reload_subtopics(&self, policy_id: i64) {
        let repo = self.repo.get_value();
        spawn_subtree_load(self.subtopics, policy_id, move || async move {
            repo.list_subtopics(policy_id).await
        });
    }

    /// Drops cached subtopics of policies that disappeared from the list.
    pub fn prune_subtopics(&self) {
        let ids = self.state.with_untracked(|s| {
            s.data()
                .map(|policies| policies.iter().map(|p| p.id).collect::<Vec<_>>())
        });
        if let Some(ids) = ids {
            self.subtopics.update(|cache| cache.retain_parents(&ids));
        }
    }

    pub fn open_editor(&self, target: EditTarget, draft: SectionDraft) {
        if self.state.with_untracked(|s| s.is_submitting()) {
            return;
        }
        self.title.set(draft.title);
        self.content.set(draft.content);
        self.target.set(target);
        self.state.update(|s| {
            s.open_editor();
        });
    }

    pub fn open_policy(&self, policy: Option<&PrivacyPolicy>) {
        let draft = policy
            .map(|p| SectionDraft {
                title: p.title.clone(),
                content: p.content.clone(),
            })
            .unwrap_or_default();
        self.open_editor(EditTarget::Policy(policy.map(|p| p.id)), draft);
    }

    pub fn open_subtopic(&self, policy_id: i64, subtopic: Option<&PrivacySubtopic>) {
        let draft = subtopic
            .map(|s| SectionDraft {
                title: s.title.clone(),
                content: s.content.clone(),
            })
            .unwrap_or_default();
        self.open_editor(
            EditTarget::Subtopic {
                policy_id,
                id: subtopic.map(|s| s.id),
            },
            draft,
        );
    }

    pub fn close_editor(&self) {
        self.state.update(|s| {
            s.close_editor();
        });
    }

    pub fn submit(&self) {
        let draft = SectionDraft {
            title: self.title.get_untracked(),
            content: self.content.get_untracked(),
        };
        let payload = match draft.into_payload() {
            Ok(payload) => payload,
            Err(err) => return reject(self.state, err),
        };
        let repo = self.repo.get_value();
        let vm = *self;
        match self.target.get_untracked() {
            EditTarget::Policy(id) => spawn_submit(
                self.state,
                if id.is_some() {
                    "Policy section updated."
                } else {
                    "Policy section added."
                },
                move || async move { repo.save_policy(id, payload).await },
                move || vm.reload(),
            ),
            EditTarget::Subtopic { policy_id, id } => {
                let payload = PrivacySubtopicPayload {
                    policy_id,
                    title: payload.title,
                    content: payload.content,
                };
                spawn_submit(
                    self.state,
                    if id.is_some() {
                        "Subtopic updated."
                    } else {
                        "Subtopic added."
                    },
                    move || async move { repo.save_subtopic(id, payload).await },
                    move || {
                        vm.subtopics.update(|cache| cache.expand(policy_id));
                        vm.reload_subtopics(policy_id);
                    },
                )
            }
        }
    }

    pub fn request_delete(&self, target: DeleteTarget) {
        self.pending_delete.set(Some(target));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        let Some(target) = self.pending_delete.get_untracked() else {
            return;
        };
        self.pending_delete.set(None);
        let repo = self.repo.get_value();
        let vm = *self;
        match target {
            DeleteTarget::Policy(policy) => spawn_submit(
                self.state,
                "Policy section deleted.",
                move || async move { repo.delete_policy(policy.id).await },
                move || {
                    vm.subtopics.update(|cache| cache.forget(policy.id));
                    vm.reload();
                },
            ),
            DeleteTarget::Subtopic(subtopic) => spawn_submit(
                self.state,
                "Subtopic deleted.",
                move || async move { repo.delete_subtopic(subtopic.id).await },
                move || vm.reload_subtopics(subtopic.policy_id),
            ),
        }
    }
}

pub fn use_privacy_policy_view_model() -> PrivacyPolicyViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let vm = PrivacyPolicyViewModel {
        state: create_rw_signal(PanelState::new("Privacy policy")),
        subtopics: create_rw_signal(SubtreeCache::default()),
        title: create_rw_signal(String::new()),
        content: create_rw_signal(String::new()),
        target: create_rw_signal(EditTarget::Policy(None)),
        pending_delete: create_rw_signal(None),
        repo: store_value(PrivacyPolicyRepository::new_with_client(Rc::new(api))),
    };
    create_effect(move |_| vm.reload());
    create_effect(move |_| {
        vm.state.with(|_| ());
        vm.prune_subtopics();
    });
    vm
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_title_follows_target() {
        assert_eq!(EditTarget::Policy(None).dialog_title(), "Add policy section");
        assert_eq!(
            EditTarget::Subtopic {
                policy_id: 1,
                id: Some(3)
            }
            .dialog_title(),
            "Edit subtopic"
        );
    }

    #[test]
    fn section_requires_title_and_content() {
        let err = SectionDraft {
            title: "Cookies".into(),
            content: String::new(),
        }
        .into_payload()
        .expect_err("content");
        assert_eq!(err.error, "Content is required.");
    }

    #[test]
    fn deleting_a_policy_warns_about_subtopics() {
        let prompt = DeleteTarget::Policy(PrivacyPolicy {
            id: 1,
            title: "Cookies".into(),
            content: String::new(),
        })
        .prompt();
        assert!(prompt.contains("all of its subtopics"));
    }
}
