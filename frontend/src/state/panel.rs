//! Uniform view state shared by every content panel.
//!
//! `Idle -> Loaded -> Editing -> Submitting -> Loaded | Editing`, plus a
//! request sequence so a slow response can never overwrite a newer one.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;

use leptos::*;

use crate::api::{ApiError, MutationResponse};
use crate::state::notice::{Notice, NoticeState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelPhase {
    /// Nothing to display yet (or the singleton does not exist).
    #[default]
    Idle,
    Loaded,
    /// A create/update dialog is open.
    Editing,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn issue(&mut self) -> RequestToken {
        self.latest = self.latest.wrapping_add(1);
        RequestToken(self.latest)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}

/// Independent sequences per key, e.g. one per reconciled subtree.
#[derive(Debug, Clone)]
pub struct KeyedSequence<K> {
    seq: RequestSequence,
    latest: HashMap<K, RequestToken>,
}

impl<K> Default for KeyedSequence<K> {
    fn default() -> Self {
        Self {
            seq: RequestSequence::default(),
            latest: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> KeyedSequence<K> {
    pub fn issue(&mut self, key: K) -> RequestToken {
        let token = self.seq.issue();
        self.latest.insert(key, token);
        token
    }

    /// True (and forgets the key) when `token` is the newest one issued for `key`.
    pub fn settle(&mut self, key: &K, token: RequestToken) -> bool {
        if self.latest.get(key) != Some(&token) {
            return false;
        }
        self.latest.remove(key);
        true
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelState<T> {
    label: &'static str,
    data: Option<T>,
    phase: PanelPhase,
    loading: bool,
    loads: RequestSequence,
    submitting_from: PanelPhase,
    pub notice: NoticeState,
}

impl<T> PanelState<T> {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            data: None,
            phase: PanelPhase::Idle,
            loading: false,
            loads: RequestSequence::default(),
            submitting_from: PanelPhase::Idle,
            notice: NoticeState::default(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_dialog_open(&self) -> bool {
        match self.phase {
            PanelPhase::Editing => true,
            PanelPhase::Submitting => self.submitting_from == PanelPhase::Editing,
            _ => false,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == PanelPhase::Submitting
    }

    /// "Add" until a record exists, "Edit" afterwards.
    pub fn action_label(&self) -> &'static str {
        if self.data.is_some() {
            "Edit"
        } else {
            "Add"
        }
    }

    pub fn begin_load(&mut self) -> RequestToken {
        self.loading = true;
        self.loads.issue()
    }

    /// Applies a load result unless a newer load was issued meanwhile.
    ///
    /// Failures keep whatever was displayed before and are only logged.
    pub fn finish_load(&mut self, token: RequestToken, result: Result<Option<T>, ApiError>) -> bool {
        if !self.loads.is_current(token) {
            log::debug!("{}: discarding stale response {:?}", self.label, token);
            return false;
        }
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = data;
                if matches!(self.phase, PanelPhase::Idle | PanelPhase::Loaded) {
                    self.settle();
                }
                true
            }
            Err(err) => {
                log::error!("{}: failed to load: {}", self.label, err);
                false
            }
        }
    }

    /// Token of the newest full load issued so far.
    pub fn generation(&self) -> RequestToken {
        RequestToken(self.loads.latest)
    }

    /// Edits the loaded data in place, e.g. to swap in a re-fetched subtree.
    /// Dropped when a full load was issued after `since`.
    pub fn patch_data(&mut self, since: RequestToken, patch: impl FnOnce(&mut T)) -> bool {
        if !self.loads.is_current(since) {
            log::debug!("{}: discarding subtree patch from {:?}", self.label, since);
            return false;
        }
        match self.data.as_mut() {
            Some(data) => {
                patch(data);
                true
            }
            None => false,
        }
    }

    /// Opens the dialog. Refused while a submit is in flight.
    pub fn open_editor(&mut self) -> bool {
        if self.phase == PanelPhase::Submitting {
            return false;
        }
        self.notice.clear();
        self.phase = PanelPhase::Editing;
        true
    }

    pub fn close_editor(&mut self) -> bool {
        if self.phase != PanelPhase::Editing {
            return false;
        }
        self.settle();
        true
    }

    /// Enters `Submitting`; a second submit before the first resolves is refused.
    pub fn begin_submit(&mut self) -> bool {
        if self.phase == PanelPhase::Submitting {
            return false;
        }
        self.submitting_from = if self.phase == PanelPhase::Editing {
            PanelPhase::Editing
        } else {
            PanelPhase::Loaded
        };
        self.notice.clear();
        self.phase = PanelPhase::Submitting;
        true
    }

    /// On success the dialog closes and the notice is set; on failure the
    /// panel returns to where the submit started so the operator can retry.
    pub fn finish_submit(&mut self, result: Result<String, ApiError>) -> bool {
        if self.phase != PanelPhase::Submitting {
            return false;
        }
        match result {
            Ok(message) => {
                log::info!("{}: {}", self.label, message);
                self.notice.set_success(message);
                self.settle();
                true
            }
            Err(err) => {
                log::warn!("{}: mutation failed: {}", self.label, err);
                self.notice.set_api_error(&err);
                if self.submitting_from == PanelPhase::Editing {
                    self.phase = PanelPhase::Editing;
                } else {
                    self.settle();
                }
                false
            }
        }
    }

    fn settle(&mut self) {
        self.phase = if self.data.is_some() {
            PanelPhase::Loaded
        } else {
            PanelPhase::Idle
        };
        self.submitting_from = PanelPhase::Idle;
    }
}

pub fn notice_signal<T: 'static>(state: RwSignal<PanelState<T>>) -> Signal<Option<Notice>> {
    Signal::derive(move || state.with(|s| s.notice.current().cloned()))
}

pub fn dismiss_callback<T: 'static>(state: RwSignal<PanelState<T>>) -> Callback<u64> {
    Callback::new(move |serial| state.update(|s| s.notice.dismiss(serial)))
}

/// Raises a validation notice without touching the phase.
pub fn reject<T: 'static>(state: RwSignal<PanelState<T>>, error: ApiError) {
    log::debug!("rejected before submit: {}", error);
    state.update(|s| {
        s.notice.set_api_error(&error);
    });
}

/// Issues a load for `state` and applies the result when it arrives.
pub fn spawn_load<T, F, Fut>(state: RwSignal<PanelState<T>>, fetch: F)
where
    T: 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<Option<T>, ApiError>> + 'static,
{
    let Some(token) = state.try_update(|s| s.begin_load()) else {
        return;
    };
    spawn_local(async move {
        let result = fetch().await;
        state.update(|s| {
            s.finish_load(token, result);
        });
    });
}

/// Runs a mutation unless one is already in flight. `reconcile` runs only
/// after the server acknowledged the change.
pub fn spawn_submit<T, F, Fut, R>(
    state: RwSignal<PanelState<T>>,
    fallback_message: &'static str,
    mutate: F,
    reconcile: R,
) where
    T: 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<MutationResponse, ApiError>> + 'static,
    R: FnOnce() + 'static,
{
    if !state.try_update(|s| s.begin_submit()).unwrap_or(false) {
        log::debug!("submit ignored: another request is still pending");
        return;
    }
    spawn_local(async move {
        let result = mutate()
            .await
            .map(|ack| ack.message_or(fallback_message));
        let saved = state.try_update(|s| s.finish_submit(result)).unwrap_or(false);
        if saved {
            reconcile();
        }
    });
}
