// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    AdminEditRequest, ArticleId, ArticleStatus, ArticleVersion, Feedback,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Editable content of an article. Drafts may be incomplete; submission is not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleContent {
    pub title: String,
    pub body: String,
    pub primary_image: Option<String>,
}

impl ArticleContent {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        primary_image: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            primary_image,
        }
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.body.trim().is_empty() {
            missing.push("body");
        }
        if self
            .primary_image
            .as_deref()
            .is_none_or(|image| image.trim().is_empty())
        {
            missing.push("primary_image");
        }
        missing
    }

    pub fn ensure_submittable(&self) -> DomainResult<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(format!(
                "article cannot be submitted without: {}",
                missing.join(", ")
            )))
        }
    }

    pub fn apply(&mut self, patch: ContentPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(body) = patch.body {
            self.body = body;
        }
        if let Some(image) = patch.primary_image {
            self.primary_image = if image.trim().is_empty() {
                None
            } else {
                Some(image)
            };
        }
    }
}

/// Partial content edit. An empty `primary_image` string clears the image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentPatch {
    pub title: Option<String>,
    pub body: Option<String>,
    pub primary_image: Option<String>,
}

impl ContentPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none() && self.primary_image.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub author_id: UserId,
    pub content: ArticleContent,
    pub status: ArticleStatus,
    pub admin_edit_request: AdminEditRequest,
    pub feedback: Option<Feedback>,
    pub version: ArticleVersion,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }

    /// Moves the primary status and stamps the change. Leaving moderation makes
    /// any outstanding edit-access request moot, so it is reset to `NONE`.
    pub(crate) fn move_to(
        &mut self,
        status: ArticleStatus,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.status = status;
        if !status.is_under_moderation() {
            self.admin_edit_request = AdminEditRequest::None;
        }
        self.touch(now)
    }

    pub(crate) fn set_edit_request(
        &mut self,
        state: AdminEditRequest,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.admin_edit_request = state;
        self.touch(now)
    }

    pub(crate) fn touch(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        self.version = self.version.next()?;
        self.updated_at = now;
        Ok(())
    }

    /// Checks the record-level invariants every accepted command must preserve.
    pub fn check_invariants(&self) -> DomainResult<()> {
        if self.admin_edit_request != AdminEditRequest::None && !self.status.is_under_moderation()
        {
            return Err(DomainError::IllegalTransition(format!(
                "edit request {} is not allowed while article is {}",
                self.admin_edit_request, self.status
            )));
        }
        if self.status == ArticleStatus::Draft
            && (self.admin_edit_request != AdminEditRequest::None || self.feedback.is_some())
        {
            return Err(DomainError::IllegalTransition(
                "draft articles carry neither edit requests nor feedback".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub author_id: UserId,
    pub content: ArticleContent,
    pub created_at: DateTime<Utc>,
}

impl NewArticle {
    /// Materialises the draft once storage has assigned an id.
    pub fn into_article(self, id: ArticleId) -> Article {
        Article {
            id,
            author_id: self.author_id,
            content: self.content,
            status: ArticleStatus::Draft,
            admin_edit_request: AdminEditRequest::None,
            feedback: None,
            version: ArticleVersion::INITIAL,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}
