// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    AdminEditRequest, Article, ArticleContent, ArticleId, ArticleReadRepository, ArticleStatus,
    ArticleVersion, ArticleWriteRepository, Feedback, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const ARTICLE_COLUMNS: &str = "id, author_id, title, body, primary_image, status, \
     admin_edit_request, feedback, version, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn exists(&self, id: ArticleId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM articles WHERE id = $1)")
            .bind(i64::from(id))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    /// Distinguishes a lost conditional write from a missing row.
    async fn missed_write(&self, id: ArticleId, expected: ArticleVersion) -> DomainError {
        match self.exists(id).await {
            Ok(true) => DomainError::Conflict(format!(
                "article {id} changed since version {expected}, refetch and retry"
            )),
            Ok(false) => DomainError::NotFound(format!("article {id} not found")),
            Err(err) => err,
        }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    author_id: i64,
    title: String,
    body: String,
    primary_image: Option<String>,
    status: String,
    admin_edit_request: String,
    feedback: Option<String>,
    version: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            author_id: UserId::new(row.author_id)?,
            content: ArticleContent::new(row.title, row.body, row.primary_image),
            status: row.status.parse()?,
            admin_edit_request: row.admin_edit_request.parse()?,
            feedback: row.feedback.map(Feedback::new).transpose()?,
            version: ArticleVersion::new(row.version)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            author_id,
            content,
            created_at,
        } = article;

        let sql = format!(
            "INSERT INTO articles (author_id, title, body, primary_image, status, admin_edit_request, version, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(author_id))
            .bind(content.title)
            .bind(content.body)
            .bind(content.primary_image)
            .bind(ArticleStatus::Draft.as_str())
            .bind(AdminEditRequest::None.as_str())
            .bind(i64::from(ArticleVersion::INITIAL))
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn save(&self, article: Article, expected: ArticleVersion) -> DomainResult<Article> {
        let id = article.id;
        let sql = format!(
            "UPDATE articles
                SET title = $1, body = $2, primary_image = $3, status = $4,
                    admin_edit_request = $5, feedback = $6, version = $7, updated_at = $8
              WHERE id = $9 AND version = $10
          RETURNING {ARTICLE_COLUMNS}"
        );
        let maybe_row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(article.content.title)
            .bind(article.content.body)
            .bind(article.content.primary_image)
            .bind(article.status.as_str())
            .bind(article.admin_edit_request.as_str())
            .bind(article.feedback.map(Feedback::into_inner))
            .bind(i64::from(article.version))
            .bind(article.updated_at)
            .bind(i64::from(id))
            .bind(i64::from(expected))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        match maybe_row {
            Some(row) => Article::try_from(row),
            None => Err(self.missed_write(id, expected).await),
        }
    }

    async fn delete(&self, id: ArticleId, expected: ArticleVersion) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1 AND version = $2")
            .bind(i64::from(id))
            .bind(i64::from(expected))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(self.missed_write(id, expected).await);
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Article>> {
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE author_id = $1 ORDER BY id ASC"
        );
        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(author_id))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn list_by_status(&self, status: ArticleStatus) -> DomainResult<Vec<Article>> {
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE status = $1 ORDER BY id ASC"
        );
        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(status.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
