// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        ArticleRef, CreateArticleCommand, DeleteArticleCommand, RequestRevisionCommand,
        RespondToEditRequestCommand, UpdateArticleContentCommand,
    },
    dto::ArticleDto,
    error::ApplicationError,
    queries::articles::{GetArticleByIdQuery, ListArticlesByAuthorQuery, ListArticlesByStatusQuery},
};
use crate::domain::article::{ArticleStatus, EditDecision};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, ValidJson, ValidPath, ValidQuery};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;

/// Version the client last read; omitted means "whatever is current".
#[derive(Debug, Default, Deserialize)]
pub struct VersionParams {
    #[serde(default)]
    pub expected_version: Option<i64>,
}

impl VersionParams {
    fn target(&self, id: i64) -> ArticleRef {
        ArticleRef {
            id,
            expected_version: self.expected_version,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ArticleListParams {
    #[serde(default)]
    pub author_id: Option<i64>,
    #[serde(default)]
    pub status: Option<ArticleStatus>,
}

#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub primary_image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub primary_image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RequestRevisionRequest {
    #[serde(default)]
    pub feedback: String,
}

#[derive(Debug, Deserialize)]
pub struct RespondRequest {
    pub decision: EditDecision,
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    user: Authenticated,
    ValidQuery(params): ValidQuery<ArticleListParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    let queries = &state.services.article_queries;
    let result = match (params.author_id, params.status) {
        (Some(author_id), _) => {
            queries
                .list_by_author(&user, ListArticlesByAuthorQuery { author_id })
                .await
        }
        (None, Some(status)) => {
            queries
                .list_by_status(&user, ListArticlesByStatusQuery { status })
                .await
        }
        (None, None) => Err(ApplicationError::validation(
            "either author_id or status must be given",
        )),
    };

    result.into_http().map(Json)
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    user: Authenticated,
    ValidPath(id): ValidPath<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(&user, GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    user: Authenticated,
    ValidJson(payload): ValidJson<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let mut builder = CreateArticleCommand::builder()
        .title(payload.title)
        .body(payload.body);
    if let Some(image) = payload.primary_image {
        builder = builder.primary_image(image);
    }

    state
        .services
        .article_commands
        .create_article(&user, builder.build())
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    user: Authenticated,
    ValidPath(id): ValidPath<i64>,
    ValidQuery(version): ValidQuery<VersionParams>,
    ValidJson(payload): ValidJson<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleContentCommand {
        target: version.target(id),
        title: payload.title,
        body: payload.body,
        primary_image: payload.primary_image,
    };

    state
        .services
        .article_commands
        .update_content(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    user: Authenticated,
    ValidPath(id): ValidPath<i64>,
    ValidQuery(version): ValidQuery<VersionParams>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(
            &user,
            DeleteArticleCommand {
                target: version.target(id),
            },
        )
        .await
        .into_http()
        .map(|()| StatusCode::NO_CONTENT)
}

pub async fn submit_article(
    Extension(state): Extension<HttpState>,
    user: Authenticated,
    ValidPath(id): ValidPath<i64>,
    ValidQuery(version): ValidQuery<VersionParams>,
) -> HttpResult<Json<ArticleDto>> {
    let commands = &state.services.article_commands;
    commands.submit(&user, version.target(id)).await.into_http().map(Json)
}

pub async fn approve_article(
    Extension(state): Extension<HttpState>,
    user: Authenticated,
    ValidPath(id): ValidPath<i64>,
    ValidQuery(version): ValidQuery<VersionParams>,
) -> HttpResult<Json<ArticleDto>> {
    let commands = &state.services.article_commands;
    commands.approve(&user, version.target(id)).await.into_http().map(Json)
}

pub async fn reject_article(
    Extension(state): Extension<HttpState>,
    user: Authenticated,
    ValidPath(id): ValidPath<i64>,
    ValidQuery(version): ValidQuery<VersionParams>,
) -> HttpResult<Json<ArticleDto>> {
    let commands = &state.services.article_commands;
    commands.reject(&user, version.target(id)).await.into_http().map(Json)
}

pub async fn request_revision(
    Extension(state): Extension<HttpState>,
    user: Authenticated,
    ValidPath(id): ValidPath<i64>,
    ValidQuery(version): ValidQuery<VersionParams>,
    ValidJson(payload): ValidJson<RequestRevisionRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = RequestRevisionCommand {
        target: version.target(id),
        feedback: payload.feedback,
    };
    state
        .services
        .article_commands
        .request_revision(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn start_revision(
    Extension(state): Extension<HttpState>,
    user: Authenticated,
    ValidPath(id): ValidPath<i64>,
    ValidQuery(version): ValidQuery<VersionParams>,
) -> HttpResult<Json<ArticleDto>> {
    let commands = &state.services.article_commands;
    commands
        .start_revision(&user, version.target(id))
        .await
        .into_http()
        .map(Json)
}

pub async fn finish_revision(
    Extension(state): Extension<HttpState>,
    user: Authenticated,
    ValidPath(id): ValidPath<i64>,
    ValidQuery(version): ValidQuery<VersionParams>,
) -> HttpResult<Json<ArticleDto>> {
    let commands = &state.services.article_commands;
    commands
        .finish_revision(&user, version.target(id))
        .await
        .into_http()
        .map(Json)
}

pub async fn request_edit_access(
    Extension(state): Extension<HttpState>,
    user: Authenticated,
    ValidPath(id): ValidPath<i64>,
    ValidQuery(version): ValidQuery<VersionParams>,
) -> HttpResult<Json<ArticleDto>> {
    let commands = &state.services.article_commands;
    commands
        .request_edit_access(&user, version.target(id))
        .await
        .into_http()
        .map(Json)
}

pub async fn respond_to_edit_request(
    Extension(state): Extension<HttpState>,
    user: Authenticated,
    ValidPath(id): ValidPath<i64>,
    ValidQuery(version): ValidQuery<VersionParams>,
    ValidJson(payload): ValidJson<RespondRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = RespondToEditRequestCommand {
        target: version.target(id),
        decision: payload.decision,
    };
    state
        .services
        .article_commands
        .respond_to_edit_request(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn cancel_edit_request(
    Extension(state): Extension<HttpState>,
    user: Authenticated,
    ValidPath(id): ValidPath<i64>,
    ValidQuery(version): ValidQuery<VersionParams>,
) -> HttpResult<Json<ArticleDto>> {
    let commands = &state.services.article_commands;
    commands
        .cancel_edit_request(&user, version.target(id))
        .await
        .into_http()
        .map(Json)
}

pub async fn revert_edit_approval(
    Extension(state): Extension<HttpState>,
    user: Authenticated,
    ValidPath(id): ValidPath<i64>,
    ValidQuery(version): ValidQuery<VersionParams>,
) -> HttpResult<Json<ArticleDto>> {
    let commands = &state.services.article_commands;
    commands
        .revert_edit_approval(&user, version.target(id))
        .await
        .into_http()
        .map(Json)
}
