use super::repository::SiteSettingsRepository;
use crate::api::{ApiClient, ApiError, SiteSettings, SiteSettingsUpload, UploadFile};
use crate::state::{reject, spawn_load, spawn_submit, PanelState};
use crate::utils::{read_optional_upload, validation::require};
use leptos::*;
use std::rc::Rc;
use web_sys::File;

/// Text part of the settings form, detached from signals.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsDraft {
    pub site_name: String,
    pub caption: String,
    pub tagline: String,
}

impl SettingsDraft {
    pub fn from_record(record: Option<&SiteSettings>) -> Self {
        record
            .map(|r| Self {
                site_name: r.site_name.clone(),
                caption: r.caption.clone(),
                tagline: r.tagline.clone(),
            })
            .unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        require("Site name", &self.site_name)
    }

    /// Files are `[logo, banner1, banner2, banner3]`; `None` keeps the stored image.
    pub fn into_upload(self, files: [Option<UploadFile>; 4]) -> SiteSettingsUpload {
        let [logo, banner1, banner2, banner3] = files;
        SiteSettingsUpload {
            site_name: self.site_name.trim().to_string(),
            caption: self.caption.trim().to_string(),
            tagline: self.tagline.trim().to_string(),
            logo,
            banner1,
            banner2,
            banner3,
        }
    }
}

#[derive(Clone, Copy)]
pub struct SettingsForm {
    pub site_name: RwSignal<String>,
    pub caption: RwSignal<String>,
    pub tagline: RwSignal<String>,
    pub logo: RwSignal<Option<File>>,
    pub banners: [RwSignal<Option<File>>; 3],
}

impl SettingsForm {
    fn new() -> Self {
        Self {
            site_name: create_rw_signal(String::new()),
            caption: create_rw_signal(String::new()),
            tagline: create_rw_signal(String::new()),
            logo: create_rw_signal(None),
            banners: [
                create_rw_signal(None),
                create_rw_signal(None),
                create_rw_signal(None),
            ],
        }
    }

    pub fn fill(&self, record: Option<&SiteSettings>) {
        let draft = SettingsDraft::from_record(record);
        self.site_name.set(draft.site_name);
        self.caption.set(draft.caption);
        self.tagline.set(draft.tagline);
        self.logo.set(None);
        for banner in self.banners {
            banner.set(None);
        }
    }

    pub fn draft(&self) -> SettingsDraft {
        SettingsDraft {
            site_name: self.site_name.get_untracked(),
            caption: self.caption.get_untracked(),
            tagline: self.tagline.get_untracked(),
        }
    }

    fn files(&self) -> [Option<File>; 4] {
        [
            self.logo.get_untracked(),
            self.banners[0].get_untracked(),
            self.banners[1].get_untracked(),
            self.banners[2].get_untracked(),
        ]
    }
}

#[derive(Clone, Copy)]
pub struct SiteSettingsViewModel {
    pub state: RwSignal<PanelState<SiteSettings>>,
    pub form: SettingsForm,
    repo: StoredValue<SiteSettingsRepository>,
}

impl SiteSettingsViewModel {
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
        let files = self.form.files();
        let repo = self.repo.get_value();
        let vm = *self;
        spawn_submit(
            self.state,
            "Website settings saved.",
            move || async move {
                let [logo, banner1, banner2, banner3] = files;
                let uploads = [
                    read_optional_upload(logo).await?,
                    read_optional_upload(banner1).await?,
                    read_optional_upload(banner2).await?,
                    read_optional_upload(banner3).await?,
                ];
                repo.save(draft.into_upload(uploads)).await
            },
            move || vm.reload(),
        );
    }
}

pub fn use_site_settings_view_model() -> SiteSettingsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let vm = SiteSettingsViewModel {
        state: create_rw_signal(PanelState::new("Website settings")),
        form: SettingsForm::new(),
        repo: store_value(SiteSettingsRepository::new_with_client(Rc::new(api))),
    };
    create_effect(move |_| vm.reload());
    vm
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> SiteSettings {
        SiteSettings {
            id: Some(1),
            site_name: "Acme".into(),
            caption: "c".into(),
            tagline: "t".into(),
            logo: Some("logo.png".into()),
            ..Default::default()
        }
    }

    #[test]
    fn draft_prefills_from_record_or_starts_blank() {
        let draft = SettingsDraft::from_record(Some(&acme()));
        assert_eq!(draft.site_name, "Acme");
        assert_eq!(draft.tagline, "t");
        assert_eq!(SettingsDraft::from_record(None), SettingsDraft::default());
    }

    #[test]
    fn draft_requires_site_name() {
        let err = SettingsDraft::default().validate().expect_err("blank name");
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert!(SettingsDraft::from_record(Some(&acme())).validate().is_ok());
    }

    #[test]
    fn upload_keeps_stored_images_when_no_file_chosen() {
        let upload = SettingsDraft {
            site_name: " Acme ".into(),
            caption: "c".into(),
            tagline: "t".into(),
        }
        .into_upload([
            None,
            Some(UploadFile::new("b1.jpg", "image/jpeg", vec![9])),
            None,
            None,
        ]);
        assert_eq!(upload.site_name, "Acme");
        let payload = upload.into_payload();
        assert_eq!(
            payload.field_names(),
            vec!["site_name", "caption", "tagline", "banner1"]
        );
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::test_support::ssr::{wait_until, with_local_runtime_async};
    use serde_json::json;

    #[test]
    fn first_save_posts_then_refetches_and_switches_to_edit() {
        with_local_runtime_async(|| async {
            let server = MockServer::start_async().await;
            server.mock(|when, then| {
                when.method(GET).path("/api/website-settings");
                then.status(404).json_body(json!({"error": "Not found"}));
            });
            server.mock(|when, then| {
                when.method(POST).path("/api/website-settings");
                then.status(200).json_body(json!({"message": "Website settings saved"}));
            });
            provide_context(ApiClient::new_with_base_url(server.url("/api")));
            let vm = use_site_settings_view_model();

            vm.reload();
            assert!(wait_until(|| !vm.state.with_untracked(|s| s.is_loading())).await);
            assert_eq!(vm.state.with_untracked(|s| s.action_label()), "Add");

            server.mock(|when, then| {
                when.method(GET).path("/api/website-settings");
                then.status(200).json_body(json!({
                    "id": 1,
                    "site_name": "Acme",
                    "caption": "c",
                    "tagline": "t",
                    "logo": null
                }));
            });
            vm.open_editor();
            assert_eq!(vm.form.site_name.get_untracked(), "");
            vm.form.site_name.set(" Acme ".into());
            vm.form.caption.set("c".into());
            vm.form.tagline.set("t".into());
            vm.submit();

            assert!(wait_until(|| vm.state.with_untracked(|s| s.data().is_some())).await);
            assert_eq!(vm.state.with_untracked(|s| s.action_label()), "Edit");
            assert!(!vm.state.with_untracked(|s| s.is_dialog_open()));
            assert_eq!(
                vm.state.with_untracked(|s| s.notice.current().map(|n| n.message.clone())),
                Some("Website settings saved".to_string())
            );

            let calls: Vec<_> = server.received().into_iter().map(|r| r.method).collect();
            assert_eq!(calls, vec![GET, POST, GET]);
            assert_eq!(server.hits(PUT, "/api/website-settings"), 0);
        });
    }

    #[test]
    fn blank_site_name_never_reaches_the_server() {
        with_local_runtime_async(|| async {
            let server = MockServer::start_async().await;
            provide_context(ApiClient::new_with_base_url(server.url("/api")));
            let vm = use_site_settings_view_model();

            vm.open_editor();
            vm.submit();

            assert!(vm.state.with_untracked(|s| s.is_dialog_open()));
            assert_eq!(
                vm.state.with_untracked(|s| s.notice.current().map(|n| n.message.clone())),
                Some("Site name is required.".to_string())
            );
            assert!(server.received().is_empty());
        });
    }
}
