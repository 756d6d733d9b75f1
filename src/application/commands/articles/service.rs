// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::{
            Article, ArticleId, ArticleReadRepository, ArticleVersion, ArticleWriteRepository,
            EditAccessNegotiator, RoleGateway, Transition, WorkflowEngine,
        },
        errors::DomainError,
    },
};

/// Identifies the article a command targets and, optionally, the version the
/// caller last saw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleRef {
    pub id: i64,
    pub expected_version: Option<i64>,
}

impl ArticleRef {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            expected_version: None,
        }
    }

    pub fn at_version(id: i64, version: i64) -> Self {
        Self {
            id,
            expected_version: Some(version),
        }
    }
}

/// Single entry point for every state-changing article command. Each command
/// performs one read and at most one conditional write of the article.
pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) gateway: RoleGateway,
    pub(super) engine: WorkflowEngine,
    pub(super) negotiator: EditAccessNegotiator,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            clock,
            gateway: RoleGateway::new(),
            engine: WorkflowEngine::new(),
            negotiator: EditAccessNegotiator::new(),
        }
    }

    /// Reads the article and rejects the command early when the caller acted
    /// on a version that is no longer current.
    pub(super) async fn load(&self, target: ArticleRef) -> ApplicationResult<Article> {
        let id = ArticleId::new(target.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("article {id} not found")))?;

        if let Some(expected) = target.expected_version {
            let expected = ArticleVersion::new(expected)?;
            if expected != article.version {
                tracing::warn!(
                    article_id = %id,
                    expected = %expected,
                    current = %article.version,
                    "command issued against a stale article version"
                );
                return Err(ApplicationError::conflict(format!(
                    "article {id} is at version {}, not {expected}",
                    article.version
                )));
            }
        }

        Ok(article)
    }

    /// Persists an accepted transition with a conditional write against the
    /// version that was read.
    pub(super) async fn commit(
        &self,
        read_version: ArticleVersion,
        transition: Transition,
    ) -> ApplicationResult<ArticleDto> {
        let Transition { article, event } = transition;
        let id = article.id;
        let saved = self
            .write_repo
            .save(article, read_version)
            .await
            .map_err(|err| {
                if let DomainError::Conflict(_) = &err {
                    tracing::warn!(article_id = %id, read_version = %read_version, "conditional write rejected");
                }
                ApplicationError::from(err)
            })?;
        event.record();
        Ok(saved.into())
    }
}
