use super::drafts::SubpointDrafts;
use super::repository::TermsRepository;
use super::tree::{
    load_term_subtopics, load_terms_tree, replace_points, replace_subtopics, subtopic_ids,
    TermNode,
};
use crate::api::{
    ApiClient, ApiError, Term, TermSubpoint, TermSubtopic, TermSubtopicPayload,
    TitledContentPayload,
};
use crate::state::{reject, spawn_submit, KeyedSequence, PanelState, RequestToken};
use leptos::*;
use std::collections::HashSet;
use std::future::Future;
use std::rc::Rc;

/// Subtree a mutation re-fetches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
    Term(i64),
    Subtopic(i64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditTarget {
    Term(Option<i64>),
    Subtopic { term_id: i64, id: Option<i64> },
}

impl EditTarget {
    pub fn dialog_title(self) -> &'static str {
        match self {
            EditTarget::Term(None) => "Add term",
            EditTarget::Term(Some(_)) => "Edit term",
            EditTarget::Subtopic { id: None, .. } => "Add subtopic",
            EditTarget::Subtopic { id: Some(_), .. } => "Edit subtopic",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DeleteTarget {
    Term(Term),
    Subtopic(TermSubtopic),
    Point(TermSubpoint),
}

impl DeleteTarget {
    pub fn prompt(&self) -> String {
        match self {
            DeleteTarget::Term(term) => {
                format!("Delete the term \"{}\" with its subtopics and points?", term.title)
            }
            DeleteTarget::Subtopic(subtopic) => {
                format!("Delete the subtopic \"{}\" with its points?", subtopic.title)
            }
            DeleteTarget::Point(point) => format!("Delete the point \"{}\"?", point.point),
        }
    }
}


#[derive(Clone, Copy)]
pub struct TermsViewModel {
    pub state: RwSignal<PanelState<Vec<TermNode>>>,
    pub title: RwSignal<String>,
    pub content: RwSignal<String>,
    pub target: RwSignal<EditTarget>,
    pub points: RwSignal<SubpointDrafts>,
    pub pending_delete: RwSignal<Option<DeleteTarget>>,
    reconciles: StoredValue<KeyedSequence<Scope>>,
    /// Subtrees patched while a full load was in flight; that load may carry
    /// older copies of them.
    patched_during_load: StoredValue<HashSet<Scope>>,
    repo: StoredValue<TermsRepository>,
}

impl TermsViewModel {
    pub fn reload(&self) {
        let Some(token) = self.state.try_update(|s| s.begin_load()) else {
            return;
        };
        let repo = self.repo.get_value();
        let vm = *self;
        spawn_local(async move {
            let result = load_terms_tree(&repo).await.map(Some);
            vm.land_tree(token, result);
        });
    }

    /// Applies a full load, then re-fetches every subtree that was patched
    /// while it was in flight.
    fn land_tree(&self, token: RequestToken, result: Result<Option<Vec<TermNode>>, ApiError>) {
        let Some((applied, settled)) = self.state.try_update(|s| {
            let applied = s.finish_load(token, result);
            (applied, !s.is_loading())
        }) else {
            return;
        };
        if !settled {
            return;
        }
        let replay = self
            .patched_during_load
            .try_update_value(std::mem::take)
            .unwrap_or_default();
        if !applied {
            return;
        }
        for scope in replay {
            log::debug!("terms: re-fetching {:?} patched during the full load", scope);
            match scope {
                Scope::Term(id) => self.reconcile_term(id),
                Scope::Subtopic(id) => self.reconcile_points(id),
            }
        }
    }

    /// Re-fetches one subtree and swaps it into the displayed tree.
    fn reconcile<F, Fut, V>(&self, scope: Scope, fetch: F, apply: fn(&mut [TermNode], i64, V) -> bool)
    where
        F: FnOnce(TermsRepository) -> Fut + 'static,
        Fut: Future<Output = Result<V, ApiError>> + 'static,
        V: 'static,
    {
        let since = self.state.with_untracked(|s| s.generation());
        let Some(token) = self.reconciles.try_update_value(|seq| seq.issue(scope)) else {
            return;
        };
        let repo = self.repo.get_value();
        let vm = *self;
        let parent = match scope {
            Scope::Term(id) | Scope::Subtopic(id) => id,
        };
        spawn_local(async move {
            let result = fetch(repo).await;
            let current = vm
                .reconciles
                .try_update_value(|seq| seq.settle(&scope, token))
                .unwrap_or(false);
            if !current {
                log::debug!("terms: discarding stale {:?} refresh", scope);
                return;
            }
            match result {
                Ok(value) => {
                    let in_flight = vm
                        .state
                        .try_update(|s| {
                            s.patch_data(since, |tree| {
                                apply(tree, parent, value);
                            }) && s.is_loading()
                        })
                        .unwrap_or(false);
                    if in_flight {
                        vm.patched_during_load.update_value(|scopes| {
                            scopes.insert(scope);
                        });
                    }
                }
                Err(err) => log::error!("terms: failed to refresh {:?}: {}", scope, err),
            }
        });
    }

    pub fn reconcile_term(&self, term_id: i64) {
        self.reconcile(
            Scope::Term(term_id),
            move |repo| async move { load_term_subtopics(&repo, term_id).await },
            replace_subtopics,
        );
    }

    pub fn reconcile_points(&self, subtopic_id: i64) {
        self.reconcile(
            Scope::Subtopic(subtopic_id),
            move |repo| async move { repo.list_points(subtopic_id).await },
            replace_points,
        );
    }

    /// Forgets point input of subtopics that are no longer displayed.
    pub fn prune_point_drafts(&self) {
        let ids = self
            .state
            .with_untracked(|s| s.data().map(|tree| subtopic_ids(tree)));
        if let Some(ids) = ids {
            self.points.update(|drafts| drafts.retain_subtopics(&ids));
        }
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

    pub fn open_term(&self, term: Option<&Term>) {
        let (title, content) = term
            .map(|t| (t.title.clone(), t.content.clone()))
            .unwrap_or_default();
        self.open_editor(EditTarget::Term(term.map(|t| t.id)), title, content);
    }

    pub fn open_subtopic(&self, term_id: i64, subtopic: Option<&TermSubtopic>) {
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

    pub fn submit(&self) {
        let payload = match TitledContentPayload::from_input(
            &self.title.get_untracked(),
            &self.content.get_untracked(),
        ) {
            Ok(payload) => payload,
            Err(err) => return reject(self.state, err),
        };
        let repo = self.repo.get_value();
        let vm = *self;
        match self.target.get_untracked() {
            EditTarget::Term(id) => spawn_submit(
                self.state,
                if id.is_some() { "Term updated." } else { "Term added." },
                move || async move { repo.save_term(id, payload).await },
                move || vm.reload(),
            ),
            EditTarget::Subtopic { term_id, id } => {
                let payload = TermSubtopicPayload {
                    term_id,
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
                    move || vm.reconcile_term(term_id),
                )
            }
        }
    }

    pub fn set_point_text(&self, subtopic_id: i64, text: String) {
        self.points.update(|drafts| drafts.set_text(subtopic_id, text));
    }

    pub fn edit_point(&self, point: &TermSubpoint) {
        self.points.update(|drafts| drafts.start_edit(point));
    }

    pub fn cancel_point(&self, subtopic_id: i64) {
        self.points.update(|drafts| drafts.clear(subtopic_id));
    }

    /// Saves the point typed under `subtopic_id`; other rows keep their input.
    pub fn submit_point(&self, subtopic_id: i64) {
        let (id, payload) = match self.points.with_untracked(|drafts| drafts.payload(subtopic_id)) {
            Ok(parts) => parts,
            Err(err) => return reject(self.state, err),
        };
        let repo = self.repo.get_value();
        let vm = *self;
        spawn_submit(
            self.state,
            if id.is_some() { "Point updated." } else { "Point added." },
            move || async move { repo.save_point(id, payload).await },
            move || {
                vm.cancel_point(subtopic_id);
                vm.reconcile_points(subtopic_id);
            },
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
        match target {
            DeleteTarget::Term(term) => spawn_submit(
                self.state,
                "Term deleted.",
                move || async move { repo.delete_term(term.id).await },
                move || vm.reload(),
            ),
            DeleteTarget::Subtopic(subtopic) => spawn_submit(
                self.state,
                "Subtopic deleted.",
                move || async move { repo.delete_subtopic(subtopic.id).await },
                move || {
                    vm.cancel_point(subtopic.id);
                    vm.reconcile_term(subtopic.term_id);
                },
            ),
            DeleteTarget::Point(point) => spawn_submit(
                self.state,
                "Point deleted.",
                move || async move { repo.delete_point(point.id).await },
                move || vm.reconcile_points(point.subtopic_id),
            ),
        }
    }
}

pub fn use_terms_view_model() -> TermsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let vm = TermsViewModel {
        state: create_rw_signal(PanelState::new("Terms")),
        title: create_rw_signal(String::new()),
        content: create_rw_signal(String::new()),
        target: create_rw_signal(EditTarget::Term(None)),
        points: create_rw_signal(SubpointDrafts::default()),
        pending_delete: create_rw_signal(None),
        reconciles: store_value(KeyedSequence::default()),
        patched_during_load: store_value(HashSet::new()),
        repo: store_value(TermsRepository::new_with_client(Rc::new(api))),
    };
    create_effect(move |_| vm.reload());
    create_effect(move |_| {
        vm.state.with(|_| ());
        vm.prune_point_drafts();
    });
    vm
}
