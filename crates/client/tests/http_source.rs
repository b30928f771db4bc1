//! Drives `HttpSource` and the views against the real API router served on
//! an ephemeral local port.

use std::sync::Arc;
use std::time::Duration;

use assert_matches::assert_matches;

use devinterview_api::config::ServerConfig;
use devinterview_api::router::build_app_router;
use devinterview_api::state::AppState;
use devinterview_client::admin::AdminConsole;
use devinterview_client::detail::{DetailState, DetailView};
use devinterview_client::listing::{CatalogBrowser, ListingView};
use devinterview_client::subscription::{FormStatus, SubscriptionForm};
use devinterview_client::{HttpSource, Session};
use devinterview_core::category::{Category, CategorySelector};
use devinterview_core::error::CoreError;
use devinterview_store::models::question::{LearningResource, QuestionDraft};
use devinterview_store::source::QuestionSource;
use devinterview_store::CatalogStore;

/// Serve the full router over `store`; returns the base URL.
async fn spawn_api(store: CatalogStore) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: addr.port(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        seed_example_data: true,
    };
    let app = build_app_router(AppState::new(store, config));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

fn draft(title: &str) -> QuestionDraft {
    QuestionDraft {
        title: title.to_string(),
        category: Some(Category::Database),
        model_answer: "Write-ahead logging".to_string(),
        deep_dive: "## WAL".to_string(),
        learning_resources: vec![LearningResource::new("Docs", "https://wal.test")],
    }
}

/// A source that talks to `url` directly, ignoring any proxy settings in
/// the environment.
fn local_source(url: &str) -> HttpSource {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpSource::with_client(client, url)
}

fn session_for(url: &str) -> Session {
    Session::new(Arc::new(local_source(url)), Some(Duration::from_secs(5)))
}

// ---------------------------------------------------------------------------
// Source contract
// ---------------------------------------------------------------------------

#[tokio::test]
async fn lists_and_fetches_questions() {
    let url = spawn_api(CatalogStore::seeded()).await;
    let source = local_source(&url);

    let questions = source.list_questions().await.unwrap();
    let ids: Vec<_> = questions.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    let first = source.get_question(1).await.unwrap().unwrap();
    assert_eq!(first, questions[0]);
    assert_eq!(source.get_question(999).await.unwrap(), None);
}

#[tokio::test]
async fn create_update_delete_roundtrip() {
    let store = CatalogStore::seeded();
    let url = spawn_api(store.clone()).await;
    let source = local_source(&url);

    let created = source.create_question(draft("What is a WAL?")).await.unwrap();
    assert!(created.id > 5);
    assert_eq!(store.question_count().await, 6);

    let updated = source
        .update_question(created.id, draft("Why write-ahead?"))
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Why write-ahead?");

    source.delete_question(created.id).await.unwrap();
    assert_eq!(source.get_question(created.id).await.unwrap(), None);
    assert_eq!(store.question_count().await, 5);
}

#[tokio::test]
async fn status_codes_map_to_core_errors() {
    let url = spawn_api(CatalogStore::seeded()).await;
    let source = local_source(&url);

    let err = source.update_question(999, draft("t")).await.unwrap_err();
    assert_matches!(err, CoreError::NotFound { id, .. } if id == "999");

    let err = source.delete_question(999).await.unwrap_err();
    assert_matches!(err, CoreError::NotFound { .. });

    let err = source.create_question(draft("")).await.unwrap_err();
    assert_matches!(err, CoreError::Validation(msg) if msg.contains("Title is required"));

    let err = source.subscribe_email(String::new()).await.unwrap_err();
    assert_matches!(err, CoreError::Validation(_));
}

#[tokio::test]
async fn subscribes_through_api() {
    let store = CatalogStore::seeded();
    let url = spawn_api(store.clone()).await;
    let source = local_source(&url);

    let first = source.subscribe_email("dev@example.com".into()).await.unwrap();
    let again = source.subscribe_email("dev@example.com".into()).await.unwrap();
    assert!(first.is_active);
    assert_eq!(first.subscribed_at, again.subscribed_at);
}

#[tokio::test]
async fn unreachable_api_is_unavailable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let source = local_source(&format!("http://{addr}"));
    let err = source.list_questions().await.unwrap_err();
    assert!(err.is_retryable());
    assert_matches!(err, CoreError::Unavailable(_));
}

#[tokio::test]
async fn misrouted_base_url_is_unavailable_not_missing() {
    let url = spawn_api(CatalogStore::seeded()).await;
    let source = local_source(&format!("{url}/wrong-prefix"));

    let err = source.list_questions().await.unwrap_err();
    assert_matches!(err, CoreError::Unavailable(msg) if msg.contains("404"));

    let err = source.get_question(1).await.unwrap_err();
    assert_matches!(err, CoreError::Unavailable(_));

    let err = source.delete_question(1).await.unwrap_err();
    assert_matches!(err, CoreError::Unavailable(_));

    let session = session_for(&format!("{url}/wrong-prefix"));
    let mut detail = DetailView::new();
    assert_matches!(detail.load(&session, "1").await, DetailState::Failed(notice) if notice.retryable);
}

// ---------------------------------------------------------------------------
// Views over HTTP
// ---------------------------------------------------------------------------

#[tokio::test]
async fn browser_filters_loaded_catalog() {
    let url = spawn_api(CatalogStore::seeded()).await;
    let session = session_for(&url);

    let mut browser = CatalogBrowser::new();
    browser.load(&session).await;
    assert_matches!(browser.view(), ListingView::Results(items) if items.len() == 5);

    browser.set_query("jvm");
    assert_eq!(browser.visible().len(), 1);

    browser.set_selector(CategorySelector::Only(Category::Database));
    assert_matches!(browser.view(), ListingView::NoResults);
}

#[tokio::test]
async fn admin_changes_are_visible_to_detail_view() {
    let url = spawn_api(CatalogStore::seeded()).await;
    let session = session_for(&url);

    let mut console = AdminConsole::new();
    assert!(console.load(&session).await.is_succeeded());

    let editor = console.open_create();
    *editor.draft_mut() = draft("What is a WAL?");
    let saved = console.save(&session).await.into_result().unwrap();

    let mut detail = DetailView::new();
    let token = saved.id.to_string();
    assert_matches!(detail.load(&session, &token).await, DetailState::Found(q) if q.title == "What is a WAL?");

    let request = console.request_delete(saved.id).unwrap();
    assert!(console.confirm_delete(&session, request).await.is_succeeded());
    assert_eq!(detail.load(&session, &token).await, &DetailState::NotFound);
}

#[tokio::test]
async fn subscription_form_over_http() {
    let url = spawn_api(CatalogStore::seeded()).await;
    let session = session_for(&url);

    let mut form = SubscriptionForm::new();
    form.set_input("dev@example.com");
    assert!(form.submit(&session).await.is_succeeded());
    assert_eq!(form.status(), FormStatus::Subscribed);
    assert_eq!(form.input(), "");
}
