// tests/support/helpers.rs
use super::mocks::SteppingClock;
use axum::body::{self, Body};
use axum::http::{Method, Request, Response, StatusCode};
use editorial_core::application::commands::articles::ArticleCommandService;
use editorial_core::application::ports::time::Clock;
use editorial_core::application::services::ApplicationServices;
use editorial_core::domain::article::{Article, ArticleReadRepository, ArticleWriteRepository};
use editorial_core::domain::user::Actor;
use editorial_core::infrastructure::repositories::MemoryArticleRepository;
use editorial_core::presentation::http::error::ErrorBody;
use editorial_core::presentation::http::extractors::{ACTOR_ID_HEADER, ACTOR_ROLE_HEADER};
use editorial_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

pub struct Harness {
    pub repo: Arc<MemoryArticleRepository>,
    pub services: Arc<ApplicationServices>,
}

impl Harness {
    pub fn commands(&self) -> &ArticleCommandService {
        &self.services.article_commands
    }
}

pub fn services_over(
    write: Arc<dyn ArticleWriteRepository>,
    read: Arc<dyn ArticleReadRepository>,
) -> Arc<ApplicationServices> {
    let clock: Arc<dyn Clock> = Arc::new(SteppingClock::default());
    Arc::new(ApplicationServices::new(write, read, clock))
}

/// In-memory services pre-seeded with `articles`.
pub async fn harness_with(articles: Vec<Article>) -> Harness {
    let repo = Arc::new(MemoryArticleRepository::new());
    for article in articles {
        repo.seed(article).await;
    }
    let services = services_over(repo.clone(), repo.clone());
    Harness { repo, services }
}

pub fn router_for(services: Arc<ApplicationServices>) -> axum::Router {
    build_router(
        HttpState { services },
        &["http://localhost:3000".to_string()],
    )
}

pub fn request(method: Method, uri: &str, actor: Option<Actor>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(actor) = actor {
        builder = builder
            .header(ACTOR_ID_HEADER, actor.id.0.to_string())
            .header(ACTOR_ROLE_HEADER, actor.role.as_str());
    }
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn json_body(resp: Response<Body>) -> Value {
    let bytes = body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// エラーレスポンスのステータスと種別を検証する
pub async fn assert_error_response(resp: Response<Body>, status: StatusCode, kind: &str) {
    assert_eq!(resp.status(), status);
    let bytes = body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let error: ErrorBody = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(error.kind, kind);
    assert!(!error.message.is_empty());
}
