// ── Draft forms ──
//
// A draft is an uncommitted record held client-side. It never enters the
// store's collection: a successful submit resets it, and the record the
// user sees afterwards comes from the reload. A draft opened from a stored
// record remembers its id and submits as an update.

mod portfolio;
mod snippet;

use std::fmt;

pub use portfolio::{PortfolioDraft, PortfolioField};
pub use snippet::{SnippetDraft, SnippetField, parse_tags};

use crate::remote::Remote;
use crate::store::{MutationOutcome, ResourceStore};

/// Record shape edited by a form.
pub trait Draft: Clone + Default + PartialEq + fmt::Debug + Send + Sync {
    /// Single-field edit.
    type Field;
    /// Create or update request built from the draft.
    type Request;

    /// Replace exactly the field named by `field`.
    fn set(&mut self, field: Self::Field);

    fn to_request(&self) -> Self::Request;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState<D> {
    pub draft: D,
    pub visible: bool,
    /// Id of the record being edited. `None` means the draft is new.
    pub editing: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent<F> {
    /// Show or hide the form. The draft is kept.
    Toggle,
    Edit(F),
    /// The store accepted the submit.
    Submitted,
    /// The store rejected the submit. The draft is kept.
    SubmitFailed,
}

impl<D: Draft> FormState<D> {
    /// Visible form pre-filled from the stored record `id`.
    pub fn for_record(id: impl Into<String>, draft: D) -> Self {
        Self {
            draft,
            visible: true,
            editing: Some(id.into()),
        }
    }

    #[must_use]
    pub fn apply(mut self, event: FormEvent<D::Field>) -> Self {
        match event {
            FormEvent::Toggle => self.visible = !self.visible,
            FormEvent::Edit(field) => self.draft.set(field),
            FormEvent::Submitted => self = Self::default(),
            FormEvent::SubmitFailed => {}
        }
        self
    }
}

/// Form controller for one resource type.
#[derive(Debug, Default)]
pub struct DraftForm<D> {
    state: FormState<D>,
}

impl<D: Draft> DraftForm<D> {
    pub fn new() -> Self {
        Self {
            state: FormState::default(),
        }
    }

    pub fn state(&self) -> &FormState<D> {
        &self.state
    }

    pub fn draft(&self) -> &D {
        &self.state.draft
    }

    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    /// Id of the record being edited, if any.
    pub fn editing(&self) -> Option<&str> {
        self.state.editing.as_deref()
    }

    /// Replace the current draft with `draft` for the stored record `id`
    /// and show the form. Any unsent new draft is discarded.
    pub fn open_existing(&mut self, id: impl Into<String>, draft: D) {
        self.state = FormState::for_record(id, draft);
    }

    fn dispatch(&mut self, event: FormEvent<D::Field>) {
        self.state = std::mem::take(&mut self.state).apply(event);
    }

    pub fn toggle(&mut self) {
        self.dispatch(FormEvent::Toggle);
    }

    pub fn edit(&mut self, field: D::Field) {
        self.dispatch(FormEvent::Edit(field));
    }

    /// Send the draft to `store`, as an update when a stored record is
    /// open and as a create otherwise. The draft resets only if the server
    /// accepted it.
    pub async fn submit<R>(&mut self, store: &ResourceStore<R>) -> MutationOutcome
    where
        R: Remote<New = D::Request>,
    {
        let request = self.state.draft.to_request();
        let outcome = match &self.state.editing {
            Some(id) => store.update(id, &request).await,
            None => store.create(&request).await,
        };
        if outcome.is_committed() {
            self.dispatch(FormEvent::Submitted);
        } else {
            self.dispatch(FormEvent::SubmitFailed);
        }
        outcome
    }
}
