// src/application/commands/articles/capability.rs
use super::ArticleCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::{
        article::{Article, ArticleAction, Grant},
        errors::DomainError,
        user::Actor,
    },
};

impl ArticleCommandService {
    pub(super) fn authorize(
        &self,
        action: ArticleAction,
        actor: &Actor,
        article: &Article,
    ) -> ApplicationResult<Grant> {
        self.gateway
            .authorize(action, actor, article)
            .map_err(|err| rejected(action, actor, article, err).into())
    }
}

/// Logs a refused command before handing the error back to the caller.
pub(super) fn rejected(
    action: ArticleAction,
    actor: &Actor,
    article: &Article,
    err: DomainError,
) -> DomainError {
    tracing::debug!(
        article_id = %article.id,
        actor = %actor,
        command = %action,
        status = %article.status,
        edit_request = %article.admin_edit_request,
        error = %err,
        "article command rejected"
    );
    err
}
