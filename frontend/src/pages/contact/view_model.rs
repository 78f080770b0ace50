use super::repository::ContactRepository;
use crate::api::{ApiClient, ApiError, ContactInfo, ContactInfoPayload};
use crate::state::{reject, spawn_load, spawn_submit, PanelState};
use crate::utils::validation::{is_plausible_email, require};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl ContactDraft {
    pub fn from_record(record: Option<&ContactInfo>) -> Self {
        record
            .map(|r| Self {
                phone: r.phone.clone(),
                email: r.email.clone(),
                address: r.address.clone(),
            })
            .unwrap_or_default()
    }

    pub fn into_payload(self) -> Result<ContactInfoPayload, ApiError> {
        require("Phone", &self.phone)?;
        require("Email", &self.email)?;
        require("Address", &self.address)?;
        if !is_plausible_email(&self.email) {
            return Err(ApiError::validation("Enter a valid e-mail address."));
        }
        Ok(ContactInfoPayload {
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            address: self.address.trim().to_string(),
        })
    }
}

#[derive(Clone, Copy)]
pub struct ContactForm {
    pub phone: RwSignal<String>,
    pub email: RwSignal<String>,
    pub address: RwSignal<String>,
}

#[derive(Clone, Copy)]
pub struct ContactViewModel {
    pub state: RwSignal<PanelState<ContactInfo>>,
    pub form: ContactForm,
    repo: StoredValue<ContactRepository>,
}

impl ContactViewModel {
    pub fn reload(&self) {
        let repo = self.repo.get_value();
        spawn_load(self.state, move || async move { repo.load().await });
    }

    pub fn open_editor(&self) {
        if self.state.with_untracked(|s| s.is_submitting()) {
            return;
        }
        let draft = self
            .state
            .with_untracked(|s| ContactDraft::from_record(s.data()));
        self.form.phone.set(draft.phone);
        self.form.email.set(draft.email);
        self.form.address.set(draft.address);
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
        let draft = ContactDraft {
            phone: self.form.phone.get_untracked(),
            email: self.form.email.get_untracked(),
            address: self.form.address.get_untracked(),
        };
        let payload = match draft.into_payload() {
            Ok(payload) => payload,
            Err(err) => return reject(self.state, err),
        };
        let repo = self.repo.get_value();
        let vm = *self;
        spawn_submit(
            self.state,
            "Contact info saved.",
            move || async move { repo.save(payload).await },
            move || vm.reload(),
        );
    }
}

pub fn use_contact_view_model() -> ContactViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let vm = ContactViewModel {
        state: create_rw_signal(PanelState::new("Contact info")),
        form: ContactForm {
            phone: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            address: create_rw_signal(String::new()),
        },
        repo: store_value(ContactRepository::new_with_client(Rc::new(api))),
    };
    create_effect(move |_| vm.reload());
    vm
}
