use super::repository::ContentSectionRepository;
use crate::api::{ApiClient, ApiError, ContentBlock, ContentBlockUpload, ContentSection, UploadFile};
use crate::state::{reject, spawn_load, spawn_submit, PanelState};
use crate::utils::{read_optional_upload, validation::require};
use leptos::*;
use std::rc::Rc;
use web_sys::File;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentDraft {
    pub title: String,
    pub content: String,
}

impl ContentDraft {
    pub fn from_record(record: Option<&ContentBlock>) -> Self {
        record
            .map(|r| Self {
                title: r.title.clone(),
                content: r.content.clone(),
            })
            .unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        require("Title", &self.title)?;
        require("Content", &self.content)
    }

    pub fn into_upload(self, image: Option<UploadFile>) -> ContentBlockUpload {
        ContentBlockUpload {
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            image,
        }
    }
}

#[derive(Clone, Copy)]
pub struct ContentForm {
    pub title: RwSignal<String>,
    pub content: RwSignal<String>,
    pub image: RwSignal<Option<File>>,
}

impl ContentForm {
    fn new() -> Self {
        Self {
            title: create_rw_signal(String::new()),
            content: create_rw_signal(String::new()),
            image: create_rw_signal(None),
        }
    }

    fn fill(&self, record: Option<&ContentBlock>) {
        let draft = ContentDraft::from_record(record);
        self.title.set(draft.title);
        self.content.set(draft.content);
        self.image.set(None);
    }

    fn draft(&self) -> ContentDraft {
        ContentDraft {
            title: self.title.get_untracked(),
            content: self.content.get_untracked(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct ContentSectionViewModel {
    pub section: ContentSection,
    pub state: RwSignal<PanelState<ContentBlock>>,
    pub form: ContentForm,
    repo: StoredValue<ContentSectionRepository>,
}

impl ContentSectionViewModel {
    pub fn reload(&self) {
        let repo = self.repo.get_value();
        spawn_load(self.state, move || async move { repo.load().await });
    }

    pub fn open_editor(&self) {
        if self.state.with_untracked(|s| s.is_submitting()) {
            return;
        }
        let record = self.state.with_untracked(|s| s.data().cloned());
        self.form.fill(record.as_ref());
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
        let draft = self.form.draft();
        if let Err(err) = draft.validate() {
            reject(self.state, err);
            return;
        }
        let image = self.form.image.get_untracked();
        let repo = self.repo.get_value();
        let vm = *self;
        spawn_submit(
            self.state,
            "Content saved.",
            move || async move {
                let image = read_optional_upload(image).await?;
                repo.save(draft.into_upload(image)).await
            },
            move || vm.reload(),
        );
    }
}

pub fn use_content_section_view_model(section: ContentSection) -> ContentSectionViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let vm = ContentSectionViewModel {
        section,
        state: create_rw_signal(PanelState::new(section.label())),
        form: ContentForm::new(),
        repo: store_value(ContentSectionRepository::new_with_client(Rc::new(api), section)),
    };
    create_effect(move |_| vm.reload());
    vm
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_requires_title_and_content() {
        let mut draft = ContentDraft::default();
        assert_eq!(
            draft.validate().expect_err("title").error,
            "Title is required."
        );
        draft.title = "Founder".into();
        assert_eq!(
            draft.validate().expect_err("content").error,
            "Content is required."
        );
        draft.content = "Started it all".into();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn upload_omits_image_when_unchanged() {
        let upload = ContentDraft {
            title: " About ".into(),
            content: "Body".into(),
        }
        .into_upload(None);
        assert_eq!(upload.title, "About");
        assert_eq!(upload.into_payload().field_names(), vec!["title", "content"]);
    }
}
