use crate::domain::article::{AdminEditRequest, Article, ArticleStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub primary_image: Option<String>,
    pub status: ArticleStatus,
    pub admin_edit_request: AdminEditRequest,
    #[serde(default)]
    pub feedback: Option<String>,
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            author_id: article.author_id.into(),
            title: article.content.title,
            body: article.content.body,
            primary_image: article.content.primary_image,
            status: article.status,
            admin_edit_request: article.admin_edit_request,
            feedback: article.feedback.map(|f| f.into_inner()),
            version: article.version.into(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
