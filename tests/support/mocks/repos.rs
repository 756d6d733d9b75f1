// tests/support/mocks/repos.rs
use async_trait::async_trait;
use editorial_core::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleStatus, ArticleVersion,
    ArticleWriteRepository, NewArticle,
};
use editorial_core::domain::errors::{DomainError, DomainResult};
use editorial_core::domain::user::UserId;
use editorial_core::infrastructure::repositories::MemoryArticleRepository;
use std::sync::Arc;
use tokio::sync::Barrier;

/// Holds every `find_by_id` until `parties` readers have arrived, so that
/// concurrent commands are guaranteed to read the same version.
pub struct BarrierReadRepo {
    inner: Arc<MemoryArticleRepository>,
    barrier: Barrier,
}

impl BarrierReadRepo {
    pub fn new(inner: Arc<MemoryArticleRepository>, parties: usize) -> Self {
        Self {
            inner,
            barrier: Barrier::new(parties),
        }
    }
}

#[async_trait]
impl ArticleReadRepository for BarrierReadRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let found = self.inner.find_by_id(id).await;
        self.barrier.wait().await;
        found
    }

    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Article>> {
        self.inner.list_by_author(author_id).await
    }

    async fn list_by_status(&self, status: ArticleStatus) -> DomainResult<Vec<Article>> {
        self.inner.list_by_status(status).await
    }
}

/// Store whose backend is unreachable.
pub struct FailingArticleRepo;

fn unavailable<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("connection refused".into()))
}

#[async_trait]
impl ArticleWriteRepository for FailingArticleRepo {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        unavailable()
    }

    async fn save(&self, _article: Article, _expected: ArticleVersion) -> DomainResult<Article> {
        unavailable()
    }

    async fn delete(&self, _id: ArticleId, _expected: ArticleVersion) -> DomainResult<()> {
        unavailable()
    }
}

#[async_trait]
impl ArticleReadRepository for FailingArticleRepo {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        unavailable()
    }

    async fn list_by_author(&self, _author_id: UserId) -> DomainResult<Vec<Article>> {
        unavailable()
    }

    async fn list_by_status(&self, _status: ArticleStatus) -> DomainResult<Vec<Article>> {
        unavailable()
    }
}
