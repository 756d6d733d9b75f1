// src/presentation/http/routes.rs
use crate::presentation::http::controllers::articles;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::{HeaderName, HeaderValue, Method},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use super::extractors::{ACTOR_ID_HEADER, ACTOR_ROLE_HEADER};

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            HeaderName::from_static(ACTOR_ID_HEADER),
            HeaderName::from_static(ACTOR_ROLE_HEADER),
        ])
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route(
            "/api/v1/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/api/v1/articles/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route("/api/v1/articles/{id}/submit", post(articles::submit_article))
        .route("/api/v1/articles/{id}/approve", post(articles::approve_article))
        .route("/api/v1/articles/{id}/reject", post(articles::reject_article))
        .route(
            "/api/v1/articles/{id}/request-revision",
            post(articles::request_revision),
        )
        .route(
            "/api/v1/articles/{id}/start-revision",
            post(articles::start_revision),
        )
        .route(
            "/api/v1/articles/{id}/finish-revision",
            post(articles::finish_revision),
        )
        .route(
            "/api/v1/articles/{id}/edit-access",
            post(articles::request_edit_access),
        )
        .route(
            "/api/v1/articles/{id}/edit-access/respond",
            post(articles::respond_to_edit_request),
        )
        .route(
            "/api/v1/articles/{id}/edit-access/cancel",
            post(articles::cancel_edit_request),
        )
        .route(
            "/api/v1/articles/{id}/edit-access/revert",
            post(articles::revert_edit_approval),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(Extension(state)),
        )
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
