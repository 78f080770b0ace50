use super::repository::FaqsRepository;
use crate::api::{ApiClient, ApiError, Faq, FaqPayload};
use crate::state::{reject, spawn_load, spawn_submit, PanelState};
use crate::utils::validation::require;
use leptos::*;
use std::rc::Rc;

/// Characters of the answer shown in the table.
pub const ANSWER_PREVIEW_CHARS: usize = 120;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaqDraft {
    pub question: String,
    pub answer: String,
    pub is_active: bool,
}

impl FaqDraft {
    pub fn from_faq(faq: Option<&Faq>) -> Self {
        match faq {
            Some(faq) => Self {
                question: faq.question.clone(),
                answer: faq.answer.clone(),
                is_active: faq.is_active,
            },
            None => Self {
                question: String::new(),
                answer: String::new(),
                is_active: true,
            },
        }
    }

    pub fn into_payload(self) -> Result<FaqPayload, ApiError> {
        require("Question", &self.question)?;
        require("Answer", &self.answer)?;
        Ok(FaqPayload {
            question: self.question.trim().to_string(),
            answer: self.answer.trim().to_string(),
            is_active: self.is_active,
        })
    }
}

#[derive(Clone, Copy)]
pub struct FaqForm {
    pub question: RwSignal<String>,
    pub answer: RwSignal<String>,
    pub is_active: RwSignal<bool>,
}

impl FaqForm {
    fn new() -> Self {
        Self {
            question: create_rw_signal(String::new()),
            answer: create_rw_signal(String::new()),
            is_active: create_rw_signal(true),
        }
    }

    fn fill(&self, draft: FaqDraft) {
        self.question.set(draft.question);
        self.answer.set(draft.answer);
        self.is_active.set(draft.is_active);
    }

    fn draft(&self) -> FaqDraft {
        FaqDraft {
            question: self.question.get_untracked(),
            answer: self.answer.get_untracked(),
            is_active: self.is_active.get_untracked(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct FaqsViewModel {
    pub state: RwSignal<PanelState<Vec<Faq>>>,
    pub form: FaqForm,
    pub editing_id: RwSignal<Option<i64>>,
    pub pending_delete: RwSignal<Option<Faq>>,
    repo: StoredValue<FaqsRepository>,
}

impl FaqsViewModel {
    pub fn reload(&self) {
        let repo = self.repo.get_value();
        spawn_load(self.state, move || async move { repo.list().await.map(Some) });
    }

    pub fn open_editor(&self, faq: Option<Faq>) {
        if self.state.with_untracked(|s| s.is_submitting()) {
            return;
        }
        self.form.fill(FaqDraft::from_faq(faq.as_ref()));
        self.editing_id.set(faq.map(|f| f.id));
        self.state.update(|s| {
            s.open_editor();
        });
    }

    pub fn close_editor(&self) {
        self.state.update(|s| {
            s.close_editor();
        });
    }

    pub fn submit(&self) {
        let payload = match self.form.draft().into_payload() {
            Ok(payload) => payload,
            Err(err) => return reject(self.state, err),
        };
        let id = self.editing_id.get_untracked();
        let repo = self.repo.get_value();
        let vm = *self;
        spawn_submit(
            self.state,
            if id.is_some() { "FAQ updated." } else { "FAQ added." },
            move || async move { repo.save(id, payload).await },
            move || vm.reload(),
        );
    }

    pub fn request_delete(&self, faq: Faq) {
        self.pending_delete.set(Some(faq));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        let Some(faq) = self.pending_delete.get_untracked() else {
            return;
        };
        self.pending_delete.set(None);
        let repo = self.repo.get_value();
        let vm = *self;
        spawn_submit(
            self.state,
            "FAQ deleted.",
            move || async move { repo.delete(faq.id).await },
            move || vm.reload(),
        );
    }
}

pub fn use_faqs_view_model() -> FaqsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let vm = FaqsViewModel {
        state: create_rw_signal(PanelState::new("FAQs")),
        form: FaqForm::new(),
        editing_id: create_rw_signal(None),
        pending_delete: create_rw_signal(None),
        repo: store_value(FaqsRepository::new_with_client(Rc::new(api))),
    };
    create_effect(move |_| vm.reload());
    vm
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_faqs_start_active() {
        let draft = FaqDraft::from_faq(None);
        assert!(draft.is_active);
    }

    #[test]
    fn payload_requires_question_and_answer() {
        let err = FaqDraft {
            question: "  ".into(),
            answer: "A".into(),
            is_active: false,
        }
        .into_payload()
        .expect_err("question");
        assert_eq!(err.error, "Question is required.");

        let payload = FaqDraft {
            question: "Hours?".into(),
            answer: "9 to 5".into(),
            is_active: false,
        }
        .into_payload()
        .expect("payload");
        assert!(!payload.is_active);
    }
}
