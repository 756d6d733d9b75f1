use axum::http::{Method, StatusCode};
use editorial_core::application::queries::articles::GetArticleByIdQuery;
use editorial_core::domain::article::{AdminEditRequest, ArticleStatus};
use serde_json::json;
use std::sync::Arc;
use tower::util::ServiceExt as _;

mod support;
use support::{
    ArticleBuilder, FailingArticleRepo, admin, assert_error_response, author, harness_with,
    json_body, other_journalist, request, router_for, services_over,
};

#[tokio::test]
async fn e2e_health_is_public() {
    let h = harness_with(vec![]).await;
    let app = router_for(h.services.clone());

    let resp = app
        .oneshot(request(Method::GET, "/health", None, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["status"], "ok");
}

/// 識別ヘッダーなしは 401
#[tokio::test]
async fn e2e_missing_identity_returns_401() {
    let h = harness_with(vec![ArticleBuilder::new().build()]).await;
    let app = router_for(h.services.clone());

    let resp = app
        .oneshot(request(Method::POST, "/api/v1/articles/1/submit", None, None))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "unauthenticated").await;
}

#[tokio::test]
async fn e2e_create_then_submit_and_approve() {
    let h = harness_with(vec![]).await;
    let app = router_for(h.services.clone());

    let body = json!({
        "title": "Dividing hostas",
        "body": "Lift clumps in early spring.",
        "primary_image": "https://cdn.example/hosta.jpg"
    });
    let resp = app
        .clone()
        .oneshot(request(Method::POST, "/api/v1/articles", Some(author()), Some(body)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = json_body(resp).await;
    assert_eq!(created["status"], "DRAFT");
    assert_eq!(created["admin_edit_request"], "NONE");
    let id = created["id"].as_i64().unwrap();

    let resp = app
        .clone()
        .oneshot(request(
            Method::POST,
            &format!("/api/v1/articles/{id}/submit?expected_version=1"),
            Some(author()),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["status"], "IN_REVIEW");

    let resp = app
        .oneshot(request(
            Method::POST,
            &format!("/api/v1/articles/{id}/approve"),
            Some(admin()),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let published = json_body(resp).await;
    assert_eq!(published["status"], "PUBLISHED");
    assert_eq!(published["version"], 3);
}

#[tokio::test]
async fn e2e_error_taxonomy_maps_to_status_codes() {
    let h = harness_with(vec![
        ArticleBuilder::new().id(1).status(ArticleStatus::NeedsRevision).feedback("cite sources").build(),
        ArticleBuilder::new()
            .id(2)
            .status(ArticleStatus::InReview)
            .edit_request(AdminEditRequest::Pending)
            .build(),
        ArticleBuilder::new().id(3).version(5).build(),
    ])
    .await;
    let app = router_for(h.services.clone());

    let resp = app
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/v1/articles/1/start-revision",
            Some(other_journalist()),
            None,
        ))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::FORBIDDEN, "unauthorized").await;

    let resp = app
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/v1/articles/2/edit-access",
            Some(admin()),
            None,
        ))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::CONFLICT, "illegal_transition").await;

    let resp = app
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/v1/articles/3/submit?expected_version=4",
            Some(author()),
            None,
        ))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::PRECONDITION_FAILED, "concurrency_conflict").await;

    let resp = app
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/v1/articles/2/request-revision",
            Some(admin()),
            Some(json!({ "feedback": "" })),
        ))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::BAD_REQUEST, "validation_error").await;

    let resp = app
        .oneshot(request(Method::GET, "/api/v1/articles/404", Some(admin()), None))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::NOT_FOUND, "not_found").await;
}

#[tokio::test]
async fn e2e_author_answers_edit_request() {
    let h = harness_with(vec![
        ArticleBuilder::new()
            .status(ArticleStatus::Revised)
            .edit_request(AdminEditRequest::Pending)
            .build(),
    ])
    .await;
    let app = router_for(h.services.clone());

    let resp = app
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/v1/articles/1/edit-access/respond",
            Some(author()),
            Some(json!({ "decision": "APPROVED" })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["admin_edit_request"], "APPROVED");

    let resp = app
        .clone()
        .oneshot(request(
            Method::PUT,
            "/api/v1/articles/1",
            Some(admin()),
            Some(json!({ "body": "Corrected planting depth." })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["body"], "Corrected planting depth.");

    let resp = app
        .oneshot(request(
            Method::POST,
            "/api/v1/articles/1/edit-access/revert",
            Some(admin()),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["admin_edit_request"], "NONE");
}

#[tokio::test]
async fn e2e_list_requires_a_filter() {
    let h = harness_with(vec![ArticleBuilder::new().status(ArticleStatus::InReview).build()]).await;
    let app = router_for(h.services.clone());

    let resp = app
        .clone()
        .oneshot(request(Method::GET, "/api/v1/articles", Some(admin()), None))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::BAD_REQUEST, "validation_error").await;

    let resp = app
        .oneshot(request(
            Method::GET,
            "/api/v1/articles?status=IN_REVIEW",
            Some(admin()),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await.as_array().unwrap().len(), 1);
}

/// ストア障害の詳細はクライアントに漏らさない
#[tokio::test]
async fn e2e_store_failure_is_opaque_500() {
    let repo = Arc::new(FailingArticleRepo);
    let app = router_for(services_over(repo.clone(), repo));

    let resp = app
        .oneshot(request(Method::GET, "/api/v1/articles/1", Some(admin()), None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(resp).await;
    assert_eq!(body["kind"], "infrastructure");
    assert_eq!(body["message"], "internal error");
}

/// 不正なリクエストも JSON のバリデーションエラーとして返す
#[tokio::test]
async fn e2e_malformed_requests_are_validation_errors() {
    let h = harness_with(vec![
        ArticleBuilder::new().id(1).status(ArticleStatus::InReview).build(),
        ArticleBuilder::new()
            .id(2)
            .status(ArticleStatus::InReview)
            .edit_request(AdminEditRequest::Pending)
            .build(),
    ])
    .await;
    let app = router_for(h.services.clone());

    let resp = app
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/v1/articles/1/request-revision",
            Some(admin()),
            Some(json!({})),
        ))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::BAD_REQUEST, "validation_error").await;

    let resp = app
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/v1/articles/1/request-revision",
            Some(admin()),
            None,
        ))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::BAD_REQUEST, "validation_error").await;

    let resp = app
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/v1/articles/1/approve?expected_version=abc",
            Some(admin()),
            None,
        ))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::BAD_REQUEST, "validation_error").await;

    let resp = app
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/v1/articles/2/edit-access/respond",
            Some(author()),
            Some(json!({ "decision": "MAYBE" })),
        ))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::BAD_REQUEST, "validation_error").await;

    let resp = app
        .oneshot(request(Method::GET, "/api/v1/articles/abc", Some(admin()), None))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::BAD_REQUEST, "validation_error").await;

    let stored = h
        .services
        .article_queries
        .get_article_by_id(&admin(), GetArticleByIdQuery { id: 1 })
        .await
        .unwrap();
    assert_eq!(stored.status, ArticleStatus::InReview);
    assert_eq!(stored.version, 1);
}
