#![allow(clippy::unwrap_used)]
// Overlapping loads against a remote whose responses are released by hand.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use tokio::sync::oneshot;

use devhub_core::{
    CoreError, FilterController, Labels, MutationOutcome, Remote, ResourceStore, SnippetFilter,
    SnippetTarget,
};

type Reply = Result<Vec<String>, CoreError>;

/// Each `list` call takes the next queued receiver and waits on it.
/// Mutations succeed or fail according to `accept`.
struct ScriptedRemote {
    replies: Mutex<VecDeque<oneshot::Receiver<Reply>>>,
    requested: Mutex<Vec<SnippetTarget>>,
    accept: bool,
}

impl ScriptedRemote {
    fn new(replies: Vec<oneshot::Receiver<Reply>>, accept: bool) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requested: Mutex::new(Vec::new()),
            accept,
        }
    }
}

impl Remote for ScriptedRemote {
    type Record = String;
    type Target = SnippetTarget;
    type New = u32;

    const LABELS: Labels = Labels {
        fetch_failed: "Failed to fetch things",
        create_failed: "Failed to create thing",
        update_failed: "Failed to update thing",
        delete_failed: "Failed to delete thing",
        delete_prompt: "Delete this thing?",
        empty: "Nothing here.",
        create_action: "Add Thing",
    };

    fn list(&self, target: &SnippetTarget) -> impl Future<Output = Reply> + Send {
        self.requested.lock().unwrap().push(target.clone());
        let next = self.replies.lock().unwrap().pop_front();
        async move {
            match next {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(CoreError::Internal("reply dropped".into()))),
                None => Err(CoreError::Internal("no scripted reply".into())),
            }
        }
    }

    async fn create(&self, _record: &u32) -> Result<(), CoreError> {
        self.mutation()
    }

    async fn update(&self, _id: &str, _record: &u32) -> Result<(), CoreError> {
        self.mutation()
    }

    async fn remove(&self, _id: &str) -> Result<(), CoreError> {
        self.mutation()
    }
}

impl ScriptedRemote {
    fn mutation(&self) -> Result<(), CoreError> {
        if self.accept {
            Ok(())
        } else {
            Err(CoreError::Api {
                message: "Request failed with status code 500: nope".into(),
                status: Some(500),
            })
        }
    }
}

fn records(items: &[&str]) -> Reply {
    Ok(items.iter().map(|s| (*s).to_owned()).collect())
}

/// Start `target` loading in the background and wait until it is issued.
async fn issue(
    store: &Arc<ResourceStore<ScriptedRemote>>,
    target: SnippetTarget,
) -> tokio::task::JoinHandle<Result<(), CoreError>> {
    let expected = store.snapshot().latest_seq + 1;
    let task = {
        let store = Arc::clone(store);
        tokio::spawn(async move { store.load(target).await })
    };
    while store.snapshot().latest_seq < expected {
        tokio::task::yield_now().await;
    }
    task
}

#[tokio::test]
async fn test_stale_success_does_not_overwrite_newer_result() {
    let (old_tx, old_rx) = oneshot::channel();
    let (new_tx, new_rx) = oneshot::channel();
    let store = Arc::new(ResourceStore::new(ScriptedRemote::new(
        vec![old_rx, new_rx],
        true,
    )));

    let old = issue(&store, SnippetTarget::All).await;
    let new = issue(&store, SnippetTarget::Public).await;
    assert!(store.snapshot().loading);

    new_tx.send(records(&["public"])).unwrap();
    new.await.unwrap().unwrap();
    assert!(!store.snapshot().loading);

    old_tx.send(records(&["all-1", "all-2"])).unwrap();
    old.await.unwrap().unwrap();

    let state = store.snapshot();
    assert_eq!(state.records, vec!["public"]);
    assert_eq!(state.target, SnippetTarget::Public);
    assert_eq!(state.latest_seq, 2);
    assert_eq!(
        *store.remote().requested.lock().unwrap(),
        vec![SnippetTarget::All, SnippetTarget::Public]
    );
}

#[tokio::test]
async fn test_stale_failure_is_ignored() {
    let (old_tx, old_rx) = oneshot::channel();
    let (new_tx, new_rx) = oneshot::channel();
    let store = Arc::new(ResourceStore::new(ScriptedRemote::new(
        vec![old_rx, new_rx],
        true,
    )));

    let old = issue(&store, SnippetTarget::All).await;
    let new = issue(&store, SnippetTarget::Public).await;

    old_tx
        .send(Err(CoreError::Internal("late".into())))
        .unwrap();
    assert!(old.await.unwrap().is_ok(), "stale failure is not reported");
    assert!(store.snapshot().loading);
    assert_eq!(store.snapshot().error, None);

    new_tx.send(records(&["public"])).unwrap();
    new.await.unwrap().unwrap();
    assert_eq!(store.snapshot().records, vec!["public"]);
}

#[tokio::test]
async fn test_in_order_completion_applies_latest() {
    let (first_tx, first_rx) = oneshot::channel();
    let (second_tx, second_rx) = oneshot::channel();
    let store = Arc::new(ResourceStore::new(ScriptedRemote::new(
        vec![first_rx, second_rx],
        true,
    )));

    let first = issue(&store, SnippetTarget::All).await;
    let second = issue(&store, SnippetTarget::Public).await;

    first_tx.send(records(&["all"])).unwrap();
    first.await.unwrap().unwrap();
    assert!(store.snapshot().records.is_empty(), "superseded load");

    second_tx.send(records(&["public"])).unwrap();
    second.await.unwrap().unwrap();
    assert_eq!(store.snapshot().records, vec!["public"]);
}

#[tokio::test]
async fn test_mutation_reloads_against_last_target() {
    let (tx1, rx1) = oneshot::channel();
    let (tx2, rx2) = oneshot::channel();
    tx1.send(records(&["p1"])).unwrap();
    tx2.send(records(&["p1", "p2"])).unwrap();
    let store = ResourceStore::new(ScriptedRemote::new(vec![rx1, rx2], true));

    let mut filter = FilterController::new();
    filter.select(SnippetFilter::Public, &store).await.unwrap();
    let outcome = store.create(&2).await;

    assert!(matches!(outcome, MutationOutcome::Committed));
    assert_eq!(store.snapshot().records, vec!["p1", "p2"]);
    assert_eq!(
        *store.remote().requested.lock().unwrap(),
        vec![SnippetTarget::Public, SnippetTarget::Public]
    );
}

#[tokio::test]
async fn test_rejected_mutation_leaves_collection_and_skips_reload() {
    let (tx, rx) = oneshot::channel();
    tx.send(records(&["a", "b"])).unwrap();
    let store = ResourceStore::new(ScriptedRemote::new(vec![rx], false));
    store.load(SnippetTarget::All).await.unwrap();

    let outcome = store.remove("a").await;

    assert!(matches!(outcome, MutationOutcome::Failed(_)));
    let state = store.snapshot();
    assert_eq!(state.records, vec!["a", "b"]);
    assert_eq!(
        state.error.as_deref(),
        Some("Failed to delete thing: Request failed with status code 500: nope")
    );
    assert_eq!(store.remote().requested.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_reloads_against_last_target() {
    let (tx1, rx1) = oneshot::channel();
    let (tx2, rx2) = oneshot::channel();
    tx1.send(records(&["p1"])).unwrap();
    tx2.send(records(&["p1 edited"])).unwrap();
    let store = ResourceStore::new(ScriptedRemote::new(vec![rx1, rx2], true));

    let mut filter = FilterController::new();
    filter.select(SnippetFilter::Public, &store).await.unwrap();
    let outcome = store.update("p1", &7).await;

    assert!(outcome.is_committed());
    assert_eq!(store.snapshot().records, vec!["p1 edited"]);
    assert_eq!(
        *store.remote().requested.lock().unwrap(),
        vec![SnippetTarget::Public, SnippetTarget::Public]
    );
}

#[tokio::test]
async fn test_rejected_update_uses_update_prefix() {
    let (tx, rx) = oneshot::channel();
    tx.send(records(&["a"])).unwrap();
    let store = ResourceStore::new(ScriptedRemote::new(vec![rx], false));
    store.load(SnippetTarget::All).await.unwrap();

    let outcome = store.update("a", &1).await;

    assert!(matches!(outcome, MutationOutcome::Failed(_)));
    let state = store.snapshot();
    assert_eq!(state.records, vec!["a"]);
    assert_eq!(
        state.error.as_deref(),
        Some("Failed to update thing: Request failed with status code 500: nope")
    );
    assert_eq!(store.remote().requested.lock().unwrap().len(), 1);
}
