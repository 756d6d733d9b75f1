use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleStatus, ArticleVersion};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;

    /// Conditional write: stores `article` only if the persisted version still
    /// equals `expected`, otherwise fails with `DomainError::Conflict`.
    async fn save(&self, article: Article, expected: ArticleVersion) -> DomainResult<Article>;

    async fn delete(&self, id: ArticleId, expected: ArticleVersion) -> DomainResult<()>;
}

/// Listings are ordered by article id, ascending.
#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Article>>;
    async fn list_by_status(&self, status: ArticleStatus) -> DomainResult<Vec<Article>>;
}
