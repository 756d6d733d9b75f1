//! Negotiation of temporary admin write access.
//!
//! ```text
//! NONE | DENIED --request--> PENDING
//! PENDING --respond(APPROVED)--> APPROVED
//! PENDING --respond(DENIED)--> DENIED
//! PENDING --cancel--> NONE
//! APPROVED --revert--> NONE
//! ```
//!
//! Requests can only be opened while the article is `IN_REVIEW` or `REVISED`.
//! A denial is not exclusive: the admin may ask again.

use chrono::{DateTime, Utc};

use crate::domain::article::entity::Article;
use crate::domain::article::events::ArticleEvent;
use crate::domain::article::specifications::{ArticleAction, Grant};
use crate::domain::article::value_objects::{AdminEditRequest, EditDecision};
use crate::domain::article::workflow::Transition;
use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAccessCommand {
    Request,
    Respond(EditDecision),
    Cancel,
    Revert,
}

impl EditAccessCommand {
    pub fn action(&self) -> ArticleAction {
        match self {
            EditAccessCommand::Request => ArticleAction::RequestEditAccess,
            EditAccessCommand::Respond(_) => ArticleAction::RespondToEditRequest,
            EditAccessCommand::Cancel => ArticleAction::CancelEditRequest,
            EditAccessCommand::Revert => ArticleAction::RevertEditApproval,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EditAccessNegotiator;

impl EditAccessNegotiator {
    pub fn new() -> Self {
        Self
    }

    /// The negotiation table. `None` means the command is not available from `from`.
    pub fn target(from: AdminEditRequest, command: EditAccessCommand) -> Option<AdminEditRequest> {
        use AdminEditRequest as R;

        match (from, command) {
            (R::None | R::Denied, EditAccessCommand::Request) => Some(R::Pending),
            (R::Pending, EditAccessCommand::Respond(decision)) => Some(decision.into()),
            (R::Pending, EditAccessCommand::Cancel) | (R::Approved, EditAccessCommand::Revert) => {
                Some(R::None)
            }
            _ => None,
        }
    }

    pub fn apply(
        &self,
        article: &Article,
        grant: &Grant,
        command: EditAccessCommand,
        now: DateTime<Utc>,
    ) -> DomainResult<Transition> {
        let action = command.action();
        grant.ensure_action(action)?;

        // revert is accepted whatever the status, so a stale grant can always be released
        let needs_moderation = !matches!(command, EditAccessCommand::Revert | EditAccessCommand::Cancel);
        if needs_moderation && !article.status.is_under_moderation() {
            return Err(DomainError::illegal_transition(format!(
                "edit access cannot be negotiated while article is {}",
                article.status
            )));
        }

        let from = article.admin_edit_request;
        let to = Self::target(from, command).ok_or_else(|| {
            DomainError::illegal_transition(format!(
                "cannot {action} while edit request is {from}"
            ))
        })?;

        let mut next = article.clone();
        next.set_edit_request(to, now)?;
        next.check_invariants()?;

        let event = ArticleEvent::EditRequestChanged {
            id: next.id,
            actor: grant.actor(),
            action,
            from,
            to,
            version: next.version,
            at: now,
        };
        Ok(Transition {
            article: next,
            event,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::entity::{ArticleContent, NewArticle};
    use crate::domain::article::specifications::RoleGateway;
    use crate::domain::article::value_objects::{ArticleId, ArticleStatus};
    use crate::domain::user::{Actor, UserId};

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-05-01T08:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn author() -> Actor {
        Actor::journalist(UserId::new(1).unwrap())
    }

    fn admin() -> Actor {
        Actor::admin(UserId::new(99).unwrap())
    }

    fn article_in(status: ArticleStatus, request: AdminEditRequest) -> Article {
        let mut article = NewArticle {
            author_id: author().id,
            content: ArticleContent::default(),
            created_at: now(),
        }
        .into_article(ArticleId::new(3).unwrap());
        article.status = status;
        article.admin_edit_request = request;
        article
    }

    fn run(article: &Article, actor: Actor, command: EditAccessCommand) -> DomainResult<Article> {
        let grant = RoleGateway::new().authorize(command.action(), &actor, article)?;
        EditAccessNegotiator::new()
            .apply(article, &grant, command, now())
            .map(|t| t.article)
    }

    #[test]
    fn request_opens_pending_negotiation() {
        let article = article_in(ArticleStatus::InReview, AdminEditRequest::None);
        let next = run(&article, admin(), EditAccessCommand::Request).unwrap();
        assert_eq!(next.admin_edit_request, AdminEditRequest::Pending);
        assert_eq!(next.status, ArticleStatus::InReview);
        assert_eq!(next.version, article.version.next().unwrap());
    }

    #[test]
    fn second_request_while_pending_is_illegal() {
        let article = article_in(ArticleStatus::Revised, AdminEditRequest::Pending);
        let err = run(&article, admin(), EditAccessCommand::Request).unwrap_err();
        assert!(matches!(err, DomainError::IllegalTransition(_)));
    }

    #[test]
    fn request_outside_moderation_is_illegal() {
        for status in [
            ArticleStatus::Draft,
            ArticleStatus::NeedsRevision,
            ArticleStatus::JournalistRevising,
            ArticleStatus::Published,
            ArticleStatus::Rejected,
        ] {
            let article = article_in(status, AdminEditRequest::None);
            let err = run(&article, admin(), EditAccessCommand::Request).unwrap_err();
            assert!(matches!(err, DomainError::IllegalTransition(_)), "{status}");
        }
    }

    #[test]
    fn author_answers_pending_request() {
        let article = article_in(ArticleStatus::InReview, AdminEditRequest::Pending);
        let approved = run(&article, author(), EditAccessCommand::Respond(EditDecision::Approved)).unwrap();
        assert_eq!(approved.admin_edit_request, AdminEditRequest::Approved);
        let denied = run(&article, author(), EditAccessCommand::Respond(EditDecision::Denied)).unwrap();
        assert_eq!(denied.admin_edit_request, AdminEditRequest::Denied);
    }

    #[test]
    fn denied_request_can_be_asked_again() {
        let article = article_in(ArticleStatus::InReview, AdminEditRequest::Denied);
        let next = run(&article, admin(), EditAccessCommand::Request).unwrap();
        assert_eq!(next.admin_edit_request, AdminEditRequest::Pending);
    }

    #[test]
    fn cancel_after_response_is_illegal() {
        let article = article_in(ArticleStatus::InReview, AdminEditRequest::Approved);
        let err = run(&article, admin(), EditAccessCommand::Cancel).unwrap_err();
        assert!(matches!(err, DomainError::IllegalTransition(_)));

        let pending = article_in(ArticleStatus::InReview, AdminEditRequest::Pending);
        let cancelled = run(&pending, admin(), EditAccessCommand::Cancel).unwrap();
        assert_eq!(cancelled.admin_edit_request, AdminEditRequest::None);
    }

    #[test]
    fn revert_releases_grant() {
        let article = article_in(ArticleStatus::Revised, AdminEditRequest::Approved);
        let next = run(&article, admin(), EditAccessCommand::Revert).unwrap();
        assert_eq!(next.admin_edit_request, AdminEditRequest::None);
    }

    #[test]
    fn revert_without_grant_is_illegal() {
        let article = article_in(ArticleStatus::Published, AdminEditRequest::None);
        let err = run(&article, admin(), EditAccessCommand::Revert).unwrap_err();
        assert!(matches!(err, DomainError::IllegalTransition(_)));
    }

    #[test]
    fn journalist_cannot_request_access() {
        let article = article_in(ArticleStatus::InReview, AdminEditRequest::None);
        let err = run(&article, author(), EditAccessCommand::Request).unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));
    }
}
