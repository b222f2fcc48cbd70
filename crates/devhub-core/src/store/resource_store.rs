// ── Async store driver ──
//
// Owns the `watch` channel holding `StoreState`, talks to the `Remote`,
// and feeds every result back through the pure `StoreState::apply`.

use tokio::sync::watch;
use tracing::{debug, warn};

use super::state::{StoreEvent, StoreState};
use crate::error::CoreError;
use crate::remote::{Operation, Remote};

type State<R> = StoreState<<R as Remote>::Record, <R as Remote>::Target>;

/// Result of a create, update, or delete.
#[derive(Debug)]
pub enum MutationOutcome {
    /// The server accepted the change and a reload was issued.
    Committed,
    /// The server rejected the change or could not be reached.
    /// The collection is unchanged and the store error is set.
    Failed(CoreError),
    /// The user answered "no" to the confirmation. Nothing was sent.
    Declined,
}

impl MutationOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed)
    }
}

/// Client-side mirror of one server collection.
///
/// The server is the source of truth: every successful mutation is
/// followed by a full reload against the last target, never a local
/// patch. Loads carry a sequence number so a slow response to an older
/// request cannot overwrite a newer one.
pub struct ResourceStore<R: Remote> {
    remote: R,
    state: watch::Sender<State<R>>,
}

impl<R: Remote> ResourceStore<R> {
    pub fn new(remote: R) -> Self {
        let (state, _) = watch::channel(StoreState::default());
        Self { remote, state }
    }

    /// Current state (cloned).
    pub fn snapshot(&self) -> State<R> {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<State<R>> {
        self.state.subscribe()
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    fn dispatch(&self, event: StoreEvent<R::Record, R::Target>) {
        // `send_modify` updates unconditionally, even with zero receivers.
        self.state
            .send_modify(|state| *state = std::mem::take(state).apply(event));
    }

    fn failure_message(op: Operation, err: &CoreError) -> String {
        format!("{}: {err}", R::LABELS.failure_prefix(op))
    }

    /// Fetch the collection for `target` and replace the local copy.
    ///
    /// On failure the previous records stay and the error is recorded.
    /// If a newer load was issued while this one was in flight, its
    /// result is dropped and `Ok(())` is returned.
    pub async fn load(&self, target: R::Target) -> Result<(), CoreError> {
        let mut seq = 0;
        let request = target.clone();
        self.state.send_modify(|state| {
            seq = state.next_seq();
            *state = std::mem::take(state).apply(StoreEvent::LoadStarted { seq, target });
        });
        debug!(seq, target = ?request, "loading collection");

        let result = self.remote.list(&request).await;
        let current = self.state.borrow().is_current(seq);

        match result {
            Ok(records) => {
                if current {
                    debug!(seq, count = records.len(), "collection loaded");
                } else {
                    debug!(seq, "discarding stale load response");
                }
                self.dispatch(StoreEvent::LoadSucceeded { seq, records });
                Ok(())
            }
            Err(err) => {
                if !current {
                    debug!(seq, error = %err, "discarding stale load failure");
                    return Ok(());
                }
                let message = Self::failure_message(Operation::Fetch, &err);
                warn!(seq, "{message}");
                self.dispatch(StoreEvent::LoadFailed { seq, message });
                Err(err)
            }
        }
    }

    /// Reload against whatever target the latest load used.
    pub async fn reload(&self) -> Result<(), CoreError> {
        let target = self.state.borrow().target.clone();
        self.load(target).await
    }

    /// Submit a new record, then reload.
    pub async fn create(&self, record: &R::New) -> MutationOutcome {
        match self.remote.create(record).await {
            Ok(()) => {
                debug!(op = %Operation::Create, "mutation accepted");
                if let Err(err) = self.reload().await {
                    warn!(error = %err, "reload after create failed");
                }
                MutationOutcome::Committed
            }
            Err(err) => self.mutation_failed(Operation::Create, err),
        }
    }

    /// Replace the record `id` with `record`, then reload.
    pub async fn update(&self, id: &str, record: &R::New) -> MutationOutcome {
        match self.remote.update(id, record).await {
            Ok(()) => {
                debug!(op = %Operation::Update, id, "mutation accepted");
                if let Err(err) = self.reload().await {
                    warn!(error = %err, "reload after update failed");
                }
                MutationOutcome::Committed
            }
            Err(err) => self.mutation_failed(Operation::Update, err),
        }
    }

    /// Delete the record `id`, then reload.
    pub async fn remove(&self, id: &str) -> MutationOutcome {
        match self.remote.remove(id).await {
            Ok(()) => {
                debug!(op = %Operation::Delete, id, "mutation accepted");
                if let Err(err) = self.reload().await {
                    warn!(error = %err, "reload after delete failed");
                }
                MutationOutcome::Committed
            }
            Err(err) => self.mutation_failed(Operation::Delete, err),
        }
    }

    fn mutation_failed(&self, op: Operation, err: CoreError) -> MutationOutcome {
        let message = Self::failure_message(op, &err);
        warn!("{message}");
        self.dispatch(StoreEvent::MutationFailed { message });
        MutationOutcome::Failed(err)
    }
}
