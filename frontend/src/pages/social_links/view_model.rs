use super::repository::SocialLinksRepository;
use crate::api::{ApiClient, ApiError, SocialLink, SocialLinkPayload, SocialPlatform};
use crate::state::{reject, spawn_load, spawn_submit, PanelState};
use crate::utils::validation::{is_http_url, require};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SocialLinkDraft {
    pub platform: String,
    pub url: String,
}

impl SocialLinkDraft {
    pub fn from_link(link: Option<&SocialLink>) -> Self {
        let platform = link.map(|l| l.platform.clone()).unwrap_or_default();
        Self {
            platform: platform.as_str().to_string(),
            url: link.map(|l| l.url.clone()).unwrap_or_default(),
        }
    }

    pub fn into_payload(self) -> Result<SocialLinkPayload, ApiError> {
        let platform = SocialPlatform::parse(&self.platform)
            .ok_or_else(|| ApiError::validation("Choose a platform."))?;
        require("URL", &self.url)?;
        if !is_http_url(&self.url) {
            return Err(ApiError::validation(
                "URL must start with http:// or https://.",
            ));
        }
        Ok(SocialLinkPayload {
            platform,
            url: self.url.trim().to_string(),
        })
    }
}

#[derive(Clone, Copy)]
pub struct SocialLinksViewModel {
    pub state: RwSignal<PanelState<Vec<SocialLink>>>,
    pub platform: RwSignal<String>,
    pub url: RwSignal<String>,
    /// `Some(id)` while the dialog edits an existing link.
    pub editing_id: RwSignal<Option<i64>>,
    pub pending_delete: RwSignal<Option<SocialLink>>,
    repo: StoredValue<SocialLinksRepository>,
}

impl SocialLinksViewModel {
    pub fn reload(&self) {
        let repo = self.repo.get_value();
        spawn_load(self.state, move || async move { repo.list().await.map(Some) });
    }

    pub fn open_editor(&self, link: Option<SocialLink>) {
        if self.state.with_untracked(|s| s.is_submitting()) {
            return;
        }
        let draft = SocialLinkDraft::from_link(link.as_ref());
        self.platform.set(draft.platform);
        self.url.set(draft.url);
        self.editing_id.set(link.map(|l| l.id));
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
        let draft = SocialLinkDraft {
            platform: self.platform.get_untracked(),
            url: self.url.get_untracked(),
        };
        let payload = match draft.into_payload() {
            Ok(payload) => payload,
            Err(err) => return reject(self.state, err),
        };
        let id = self.editing_id.get_untracked();
        let repo = self.repo.get_value();
        let vm = *self;
        spawn_submit(
            self.state,
            if id.is_some() {
                "Social link updated."
            } else {
                "Social link added."
            },
            move || async move { repo.save(id, payload).await },
            move || vm.reload(),
        );
    }

    pub fn request_delete(&self, link: SocialLink) {
        self.pending_delete.set(Some(link));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        let Some(link) = self.pending_delete.get_untracked() else {
            return;
        };
        self.pending_delete.set(None);
        let repo = self.repo.get_value();
        let vm = *self;
        spawn_submit(
            self.state,
            "Social link deleted.",
            move || async move { repo.delete(link.id).await },
            move || vm.reload(),
        );
    }
}

pub fn use_social_links_view_model() -> SocialLinksViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let vm = SocialLinksViewModel {
        state: create_rw_signal(PanelState::new("Social links")),
        platform: create_rw_signal(SocialPlatform::default().as_str().to_string()),
        url: create_rw_signal(String::new()),
        editing_id: create_rw_signal(None),
        pending_delete: create_rw_signal(None),
        repo: store_value(SocialLinksRepository::new_with_client(Rc::new(api))),
    };
    create_effect(move |_| vm.reload());
    vm
}
