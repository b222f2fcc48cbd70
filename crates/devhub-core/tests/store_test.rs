#![allow(clippy::unwrap_used)]
// Store, filter, form, and delete flows against a wiremock server.

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use devhub_core::{
    Confirm, Console, CoreError, DevHubConfig, MutationOutcome, PortfolioDraft, PortfolioField,
    SnippetDraft, SnippetField, SnippetFilter, confirm_and_remove,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Console) {
    let server = MockServer::start().await;
    let console = Console::new(DevHubConfig {
        api_url: format!("{}/api", server.uri()),
        ..DevHubConfig::default()
    })
    .unwrap();
    (server, console)
}

fn link(id: &str, order: i64) -> Value {
    json!({
        "id": id, "title": format!("Link {id}"),
        "url": format!("https://{id}.dev"), "order": order
    })
}

fn snippet(id: &str, public: bool) -> Value {
    json!({
        "id": id, "title": format!("Snippet {id}"), "code": "fn main() {}",
        "language": "rust", "tags": ["cli"], "isPublic": public,
        "createdAt": { "seconds": 1_705_314_600, "nanos": 0 }
    })
}

async fn mount_get(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Answers every prompt the same way and records what it was asked.
struct ScriptedConfirm {
    answer: bool,
    asked: std::sync::Mutex<Vec<String>>,
}

impl ScriptedConfirm {
    fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: std::sync::Mutex::new(Vec::new()),
        }
    }
}

impl Confirm for ScriptedConfirm {
    async fn confirm(&self, prompt: &str) -> Result<bool, CoreError> {
        self.asked.lock().unwrap().push(prompt.to_owned());
        Ok(self.answer)
    }
}

fn ids<T>(records: &[T], id: impl Fn(&T) -> &str) -> Vec<String> {
    records.iter().map(|r| id(r).to_owned()).collect()
}

// ── Load ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_mount_loads_collection_in_server_order() {
    let (server, console) = setup().await;
    mount_get(&server, "/api/portfolio", json!([link("c", 3), link("a", 1)])).await;

    let view = console.portfolio();
    view.mount().await.unwrap();

    let state = view.store.snapshot();
    assert_eq!(ids(&state.records, |l| l.id.as_str()), vec!["c", "a"]);
    assert!(!state.loading);
    assert_eq!(state.error, None);
}

#[tokio::test]
async fn test_failed_load_keeps_previous_collection() {
    let (server, console) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/snippets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([snippet("1", false)])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/snippets"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "db down" })))
        .mount(&server)
        .await;

    let view = console.snippets();
    view.mount().await.unwrap();
    let err = view.store.reload().await.unwrap_err();
    assert!(matches!(err, CoreError::Api { status: Some(500), .. }));

    let state = view.store.snapshot();
    assert_eq!(ids(&state.records, |s| s.id.as_str()), vec!["1"]);
    assert_eq!(
        state.error.as_deref(),
        Some("Failed to fetch snippets: Request failed with status code 500: db down")
    );
    assert!(!state.loading);
}

// ── Filter ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_public_filter_requests_only_public_target() {
    let (server, console) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/snippets/public"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([snippet("p", true)])))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/snippets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let mut view = console.snippets();
    view.filter
        .select(SnippetFilter::Public, &view.store)
        .await
        .unwrap();
    // Re-selecting the active filter fetches again.
    view.filter
        .select(SnippetFilter::Public, &view.store)
        .await
        .unwrap();

    assert_eq!(view.filter.selected(), SnippetFilter::Public);
    assert_eq!(ids(&view.store.snapshot().records, |s| s.id.as_str()), vec!["p"]);
}

#[tokio::test]
async fn test_switching_back_to_all_requests_all_target() {
    let (server, console) = setup().await;
    mount_get(&server, "/api/snippets/public", json!([snippet("p", true)])).await;
    mount_get(
        &server,
        "/api/snippets",
        json!([snippet("p", true), snippet("q", false)]),
    )
    .await;

    let mut view = console.snippets();
    view.filter
        .select(SnippetFilter::Public, &view.store)
        .await
        .unwrap();
    view.filter
        .select(SnippetFilter::All, &view.store)
        .await
        .unwrap();

    assert_eq!(
        ids(&view.store.snapshot().records, |s| s.id.as_str()),
        vec!["p", "q"]
    );
}

// ── Create ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_submit_creates_without_id_then_reloads_and_resets() {
    let (server, console) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/snippets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/snippets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([snippet("new", false)])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/snippets"))
        .and(body_json(json!({
            "title": "Hello", "code": "println!()", "language": "rust",
            "tags": ["a", "b", "c"], "category": "", "isPublic": false, "description": ""
        })))
        .respond_with(ResponseTemplate::new(201).set_body_string("new"))
        .expect(1)
        .mount(&server)
        .await;

    let mut view = console.snippets();
    view.mount().await.unwrap();
    view.form.toggle();
    view.form.edit(SnippetField::Title("Hello".into()));
    view.form.edit(SnippetField::Code("println!()".into()));
    view.form.edit(SnippetField::Language("rust".into()));
    view.form.edit(SnippetField::Tags("a, b ,  , c".into()));

    let outcome = view.form.submit(&view.store).await;

    assert!(outcome.is_committed());
    assert!(!view.form.is_visible());
    assert_eq!(view.form.draft(), &SnippetDraft::default());
    assert_eq!(ids(&view.store.snapshot().records, |s| s.id.as_str()), vec!["new"]);
}

#[tokio::test]
async fn test_failed_create_keeps_draft_and_collection() {
    let (server, console) = setup().await;
    mount_get(&server, "/api/portfolio", json!([link("a", 1)])).await;
    Mock::given(method("POST"))
        .and(path("/api/portfolio"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": "Bad Request" })))
        .mount(&server)
        .await;

    let mut view = console.portfolio();
    view.mount().await.unwrap();
    view.form.toggle();
    view.form.edit(PortfolioField::Title("Blog".into()));
    view.form.edit(PortfolioField::Url("https://blog.dev".into()));

    let outcome = view.form.submit(&view.store).await;

    assert!(matches!(outcome, MutationOutcome::Failed(_)));
    assert!(view.form.is_visible());
    assert_eq!(view.form.draft().title, "Blog");

    let state = view.store.snapshot();
    assert_eq!(ids(&state.records, |l| l.id.as_str()), vec!["a"]);
    assert_eq!(
        state.error.as_deref(),
        Some("Failed to create portfolio link: Request failed with status code 400: Bad Request")
    );
}

// ── Update ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_edit_submits_put_without_id_then_reloads_and_resets() {
    let (server, console) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/portfolio/a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(link("a", 1)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/portfolio"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([link("a", 1)])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/portfolio"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([link("a", 5)])))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/portfolio/a"))
        .and(body_json(json!({
            "title": "Link a", "url": "https://a.dev", "order": 5,
            "category": "", "icon": "", "description": ""
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut view = console.portfolio();
    view.mount().await.unwrap();
    let stored = console.portfolio_link("a").await.unwrap();
    view.form.open_existing(&stored.id, PortfolioDraft::from(&stored));
    assert_eq!(view.form.editing(), Some("a"));
    view.form.edit(PortfolioField::Order(5));

    let outcome = view.form.submit(&view.store).await;

    assert!(outcome.is_committed());
    assert!(!view.form.is_visible());
    assert_eq!(view.form.editing(), None);
    assert_eq!(view.store.snapshot().records[0].order, 5);
}

#[tokio::test]
async fn test_failed_update_keeps_draft_and_collection() {
    let (server, console) = setup().await;
    mount_get(&server, "/api/snippets", json!([snippet("s1", false)])).await;
    Mock::given(method("PUT"))
        .and(path("/api/snippets/s1"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "Snippet not found" })),
        )
        .mount(&server)
        .await;

    let mut view = console.snippets();
    view.mount().await.unwrap();
    let stored = view.store.snapshot().records[0].clone();
    view.form.open_existing(&stored.id, SnippetDraft::from(&stored));
    view.form.edit(SnippetField::IsPublic(true));

    let outcome = view.form.submit(&view.store).await;

    assert!(matches!(outcome, MutationOutcome::Failed(CoreError::Api { status: Some(404), .. })));
    assert!(view.form.is_visible());
    assert_eq!(view.form.editing(), Some("s1"));
    assert!(view.form.draft().is_public);

    let state = view.store.snapshot();
    assert!(!state.records[0].is_public);
    assert_eq!(
        state.error.as_deref(),
        Some("Failed to update snippet: Request failed with status code 404: Snippet not found")
    );
}

// ── Delete ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_declined_delete_sends_nothing() {
    let (server, console) = setup().await;
    mount_get(&server, "/api/portfolio", json!([link("a", 1)])).await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let view = console.portfolio();
    view.mount().await.unwrap();
    let before = view.store.snapshot();

    let confirm = ScriptedConfirm::new(false);
    let outcome = confirm_and_remove(&view.store, "a", &confirm).await.unwrap();

    assert!(matches!(outcome, MutationOutcome::Declined));
    assert_eq!(view.store.snapshot(), before);
    assert_eq!(
        *confirm.asked.lock().unwrap(),
        vec!["Are you sure you want to delete this link?".to_owned()]
    );
}

#[tokio::test]
async fn test_confirmed_delete_reloads() {
    let (server, console) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/snippets"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([snippet("1", false), snippet("2", false)])),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_get(&server, "/api/snippets", json!([snippet("2", false)])).await;
    Mock::given(method("DELETE"))
        .and(path("/api/snippets/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let view = console.snippets();
    view.mount().await.unwrap();

    let confirm = ScriptedConfirm::new(true);
    let outcome = confirm_and_remove(&view.store, "1", &confirm).await.unwrap();

    assert!(outcome.is_committed());
    assert_eq!(ids(&view.store.snapshot().records, |s| s.id.as_str()), vec!["2"]);
    assert_eq!(
        *confirm.asked.lock().unwrap(),
        vec!["Are you sure you want to delete this snippet?".to_owned()]
    );
}

#[tokio::test]
async fn test_failed_delete_keeps_collection() {
    let (server, console) = setup().await;
    mount_get(&server, "/api/portfolio", json!([link("a", 1), link("b", 2)])).await;
    Mock::given(method("DELETE"))
        .and(path("/api/portfolio/a"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let view = console.portfolio();
    view.mount().await.unwrap();

    let outcome = view.store.remove("a").await;

    assert!(matches!(outcome, MutationOutcome::Failed(_)));
    let state = view.store.snapshot();
    assert_eq!(ids(&state.records, |l| l.id.as_str()), vec!["a", "b"]);
    assert!(
        state
            .error
            .as_deref()
            .unwrap()
            .starts_with("Failed to delete link: ")
    );
}

#[tokio::test]
async fn test_delete_404_keeps_server_detail() {
    let (server, console) = setup().await;
    mount_get(&server, "/api/snippets", json!([snippet("gone", false)])).await;
    Mock::given(method("DELETE"))
        .and(path("/api/snippets/gone"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "Snippet gone missing" })),
        )
        .mount(&server)
        .await;

    let view = console.snippets();
    view.mount().await.unwrap();
    let outcome = view.store.remove("gone").await;

    assert!(matches!(
        outcome,
        MutationOutcome::Failed(CoreError::Api { status: Some(404), .. })
    ));
    assert_eq!(
        view.store.snapshot().error.as_deref(),
        Some("Failed to delete snippet: Request failed with status code 404: Snippet gone missing")
    );
}

#[tokio::test]
async fn test_list_404_keeps_server_detail() {
    let (server, console) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/snippets/public"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "No route" })))
        .mount(&server)
        .await;

    let mut view = console.snippets();
    let err = view
        .filter
        .select(SnippetFilter::Public, &view.store)
        .await
        .unwrap_err();

    assert!(matches!(err, CoreError::Api { status: Some(404), .. }));
    assert_eq!(
        view.store.snapshot().error.as_deref(),
        Some("Failed to fetch snippets: Request failed with status code 404: No route")
    );
}

// ── Lookups ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_missing_snippet_is_not_found() {
    let (server, console) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/snippets/nope"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = console.snippet("nope").await.unwrap_err();
    assert_eq!(err.to_string(), "snippet not found: nope");
}
