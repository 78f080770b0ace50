use super::repository::CaregiverTermsRepository;
use crate::api::{
    ApiClient, ApiError, CaregiverSubtopic, CaregiverSubtopicPayload, CaregiverTerm,
    TitledContentPayload,
};
use crate::state::{reject, spawn_load, spawn_submit, PanelState};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditTarget {
    Term(Option<i64>),
    Subtopic { term_id: i64, id: Option<i64> },
}

impl EditTarget {
    pub fn dialog_title(self) -> &'static str {
        match self {
            EditTarget::Term(None) => "Add caregiver term",
            EditTarget::Term(Some(_)) => "Edit caregiver term",
            EditTarget::Subtopic { id: None, .. } => "Add subtopic",
            EditTarget::Subtopic { id: Some(_), .. } => "Edit subtopic",
        }
    }

    fn success_message(self) -> &'static str {
        match self {
            EditTarget::Term(None) => "Caregiver term added.",
            EditTarget::Term(Some(_)) => "Caregiver term updated.",
            EditTarget::Subtopic { id: None, .. } => "Subtopic added.",
            EditTarget::Subtopic { id: Some(_), .. } => "Subtopic updated.",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DeleteTarget {
    Term(CaregiverTerm),
    Subtopic(CaregiverSubtopic),
}

impl DeleteTarget {
    pub fn prompt(&self) -> String {
        match self {
            DeleteTarget::Term(term) => format!("Delete the caregiver term \"{}\"?", term.title),
            DeleteTarget::Subtopic(subtopic) => format!("Delete the subtopic \"{}\"?", subtopic.title),
        }
    }
}

#[derive(Clone, Copy)]
pub struct CaregiverTermsViewModel {
    pub state: RwSignal<PanelState<Vec<CaregiverTerm>>>,
    pub title: RwSignal<String>,
    pub content: RwSignal<String>,
    pub target: RwSignal<EditTarget>,
    pub pending_delete: RwSignal<Option<DeleteTarget>>,
    repo: StoredValue<CaregiverTermsRepository>,
}

impl CaregiverTermsViewModel {
    pub fn reload(&self) {
        let repo = self.repo.get_value();
        spawn_load(self.state, move || async move { repo.list().await.map(Some) });
    }

    fn open_editor(&self, target: EditTarget, title: String, content: String) {
        if self.state.with_untracked(|s| s.is_submitting()) {
            return;
        }
        self.title.set(title);
        self.content.set(content);
        self.target.set(target);
        self.state.update(|s| {
            s.open_editor();
        });
    }

    pub fn open_term(&self, term: Option<&CaregiverTerm>) {
        let (title, content) = term
            .map(|t| (t.title.clone(), t.content.clone()))
            .unwrap_or_default();
        self.open_editor(EditTarget::Term(term.map(|t| t.id)), title, content);
    }

    pub fn open_subtopic(&self, term_id: i64, subtopic: Option<&CaregiverSubtopic>) {
        let (title, content) = subtopic
            .map(|s| (s.title.clone(), s.content.clone()))
            .unwrap_or_default();
        self.open_editor(
            EditTarget::Subtopic {
                term_id,
                id: subtopic.map(|s| s.id),
            },
            title,
            content,
        );
    }

    pub fn close_editor(&self) {
        self.state.update(|s| {
            s.close_editor();
        });
    }

    fn payload(&self) -> Result<TitledContentPayload, ApiError> {
        TitledContentPayload::from_input(&self.title.get_untracked(), &self.content.get_untracked())
    }

    pub fn submit(&self) {
        let payload = match self.payload() {
            Ok(payload) => payload,
            Err(err) => return reject(self.state, err),
        };
        let target = self.target.get_untracked();
        let repo = self.repo.get_value();
        let vm = *self;
        spawn_submit(
            self.state,
            target.success_message(),
            move || async move {
                match target {
                    EditTarget::Term(id) => repo.save_term(id, payload).await,
                    EditTarget::Subtopic { term_id, id } => {
                        let payload = CaregiverSubtopicPayload {
                            caregiver_term_id: term_id,
                            title: payload.title,
                            content: payload.content,
                        };
                        repo.save_subtopic(id, payload).await
                    }
                }
            },
            move || vm.reload(),
        );
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
        let message = match target {
            DeleteTarget::Term(_) => "Caregiver term deleted.",
            DeleteTarget::Subtopic(_) => "Subtopic deleted.",
        };
        spawn_submit(
            self.state,
            message,
            move || async move {
                match target {
                    DeleteTarget::Term(term) => repo.delete_term(term.id).await,
                    DeleteTarget::Subtopic(subtopic) => repo.delete_subtopic(subtopic.id).await,
                }
            },
            move || vm.reload(),
        );
    }
}

pub fn use_caregiver_terms_view_model() -> CaregiverTermsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let vm = CaregiverTermsViewModel {
        state: create_rw_signal(PanelState::new("Caregiver terms")),
        title: create_rw_signal(String::new()),
        content: create_rw_signal(String::new()),
        target: create_rw_signal(EditTarget::Term(None)),
        pending_delete: create_rw_signal(None),
        repo: store_value(CaregiverTermsRepository::new_with_client(Rc::new(api))),
    };
    create_effect(move |_| vm.reload());
    vm
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_name_their_level() {
        assert_eq!(EditTarget::Term(None).dialog_title(), "Add caregiver term");
        let target = EditTarget::Subtopic {
            term_id: 2,
            id: Some(9),
        };
        assert_eq!(target.dialog_title(), "Edit subtopic");
        assert_eq!(target.success_message(), "Subtopic updated.");
    }
}
