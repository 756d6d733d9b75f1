// src/infrastructure/repositories/memory_article.rs
use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleStatus, ArticleVersion,
    ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;

#[derive(Default)]
struct Store {
    next_id: i64,
    articles: BTreeMap<ArticleId, Article>,
}

/// Process-local article store with the same conditional-write semantics as
/// the Postgres adapter.
#[derive(Default)]
pub struct MemoryArticleRepository {
    inner: RwLock<Store>,
}

impl MemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a fully-formed article, e.g. one fixed mid-workflow in tests.
    pub async fn seed(&self, article: Article) {
        let mut store = self.inner.write().await;
        store.next_id = store.next_id.max(article.id.0);
        store.articles.insert(article.id, article);
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.articles.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.articles.is_empty()
    }
}

fn ensure_version(current: &Article, expected: ArticleVersion) -> DomainResult<()> {
    if current.version == expected {
        Ok(())
    } else {
        Err(DomainError::Conflict(format!(
            "article {} changed: expected version {expected}, found {}",
            current.id, current.version
        )))
    }
}

#[async_trait]
impl ArticleWriteRepository for MemoryArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut store = self.inner.write().await;
        store.next_id += 1;
        let id = ArticleId::new(store.next_id)?;
        let article = article.into_article(id);
        store.articles.insert(id, article.clone());
        Ok(article)
    }

    async fn save(&self, article: Article, expected: ArticleVersion) -> DomainResult<Article> {
        let mut store = self.inner.write().await;
        let current = store
            .articles
            .get_mut(&article.id)
            .ok_or_else(|| DomainError::NotFound(format!("article {} not found", article.id)))?;
        ensure_version(current, expected)?;
        *current = article.clone();
        Ok(article)
    }

    async fn delete(&self, id: ArticleId, expected: ArticleVersion) -> DomainResult<()> {
        let mut store = self.inner.write().await;
        let current = store
            .articles
            .get(&id)
            .ok_or_else(|| DomainError::NotFound(format!("article {id} not found")))?;
        ensure_version(current, expected)?;
        store.articles.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for MemoryArticleRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.inner.read().await.articles.get(&id).cloned())
    }

    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Article>> {
        let store = self.inner.read().await;
        Ok(store
            .articles
            .values()
            .filter(|article| article.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn list_by_status(&self, status: ArticleStatus) -> DomainResult<Vec<Article>> {
        let store = self.inner.read().await;
        Ok(store
            .articles
            .values()
            .filter(|article| article.status == status)
            .cloned()
            .collect())
    }
}
