//! Primary editorial state machine.
//!
//! ```text
//! DRAFT --submit--> IN_REVIEW
//! IN_REVIEW | REVISED --approve--> PUBLISHED
//! IN_REVIEW | REVISED --reject--> REJECTED
//! IN_REVIEW | REVISED --request_revision--> NEEDS_REVISION
//! NEEDS_REVISION --start_revision--> JOURNALIST_REVISING
//! JOURNALIST_REVISING --finish_revision--> REVISED
//! REVISED --submit--> IN_REVIEW
//! ```
//!
//! The engine is pure: it never performs I/O and always returns a fresh
//! [`Article`] rather than mutating the caller's copy.

use chrono::{DateTime, Utc};

use crate::domain::article::entity::{Article, ContentPatch};
use crate::domain::article::events::ArticleEvent;
use crate::domain::article::specifications::{ArticleAction, Grant, Ownership};
use crate::domain::article::value_objects::{ArticleStatus, Feedback};
use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowCommand {
    Submit,
    Approve,
    Reject,
    RequestRevision { feedback: String },
    StartRevision,
    FinishRevision,
}

impl WorkflowCommand {
    pub fn action(&self) -> ArticleAction {
        match self {
            WorkflowCommand::Submit => ArticleAction::Submit,
            WorkflowCommand::Approve => ArticleAction::Approve,
            WorkflowCommand::Reject => ArticleAction::Reject,
            WorkflowCommand::RequestRevision { .. } => ArticleAction::RequestRevision,
            WorkflowCommand::StartRevision => ArticleAction::StartRevision,
            WorkflowCommand::FinishRevision => ArticleAction::FinishRevision,
        }
    }
}

/// Outcome of an accepted command: the next article state plus the event describing it.
#[derive(Debug, Clone)]
pub struct Transition {
    pub article: Article,
    pub event: ArticleEvent,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct WorkflowEngine;

impl WorkflowEngine {
    pub fn new() -> Self {
        Self
    }

    /// The transition table. `None` means the command is not available from `from`.
    pub fn target(from: ArticleStatus, action: ArticleAction) -> Option<ArticleStatus> {
        use ArticleStatus as S;

        match (from, action) {
            (S::Draft | S::Revised, ArticleAction::Submit) => Some(S::InReview),
            (S::InReview | S::Revised, ArticleAction::Approve) => Some(S::Published),
            (S::InReview | S::Revised, ArticleAction::Reject) => Some(S::Rejected),
            (S::InReview | S::Revised, ArticleAction::RequestRevision) => Some(S::NeedsRevision),
            (S::NeedsRevision, ArticleAction::StartRevision) => Some(S::JournalistRevising),
            (S::JournalistRevising, ArticleAction::FinishRevision) => Some(S::Revised),
            _ => None,
        }
    }

    /// Actions of the primary machine available from `status`, in table order.
    pub fn available_actions(status: ArticleStatus) -> Vec<ArticleAction> {
        [
            ArticleAction::Submit,
            ArticleAction::Approve,
            ArticleAction::Reject,
            ArticleAction::RequestRevision,
            ArticleAction::StartRevision,
            ArticleAction::FinishRevision,
        ]
        .into_iter()
        .filter(|action| Self::target(status, *action).is_some())
        .collect()
    }

    pub fn apply(
        &self,
        article: &Article,
        grant: &Grant,
        command: &WorkflowCommand,
        now: DateTime<Utc>,
    ) -> DomainResult<Transition> {
        let action = command.action();
        grant.ensure_action(action)?;

        let from = article.status;
        let to = Self::target(from, action).ok_or_else(|| {
            DomainError::illegal_transition(format!(
                "cannot {action} an article that is {from}"
            ))
        })?;

        let mut next = article.clone();
        match command {
            WorkflowCommand::Submit => {
                article.content.ensure_submittable()?;
                next.feedback = None;
            }
            WorkflowCommand::RequestRevision { feedback } => {
                next.feedback = Some(Feedback::new(feedback.as_str())?);
            }
            // feedback stays visible through the revision until the next submit
            WorkflowCommand::Approve
            | WorkflowCommand::Reject
            | WorkflowCommand::StartRevision
            | WorkflowCommand::FinishRevision => {}
        }
        next.move_to(to, now)?;
        next.check_invariants()?;

        let event = ArticleEvent::StatusChanged {
            id: next.id,
            actor: grant.actor(),
            action,
            from,
            to,
            edit_request: next.admin_edit_request,
            version: next.version,
            at: now,
        };
        Ok(Transition {
            article: next,
            event,
        })
    }

    /// Content mutation outside the status machine. Authors edit drafts and
    /// revisions in progress; a co-owning admin edits while the grant stands.
    pub fn edit_content(
        &self,
        article: &Article,
        grant: &Grant,
        patch: ContentPatch,
        now: DateTime<Utc>,
    ) -> DomainResult<Transition> {
        grant.ensure_action(ArticleAction::EditContent)?;
        if patch.is_empty() {
            return Err(DomainError::validation("no content changes supplied"));
        }

        let editable = match grant.ownership() {
            Ownership::Author => matches!(
                article.status,
                ArticleStatus::Draft | ArticleStatus::JournalistRevising
            ),
            Ownership::CoOwner => article.status.is_under_moderation(),
            Ownership::Stranger => false,
        };
        if !editable {
            return Err(DomainError::illegal_transition(format!(
                "content cannot be edited while article is {}",
                article.status
            )));
        }

        let mut next = article.clone();
        next.content.apply(patch);
        next.touch(now)?;
        next.check_invariants()?;

        let event = ArticleEvent::ContentUpdated {
            id: next.id,
            actor: grant.actor(),
            version: next.version,
            at: now,
        };
        Ok(Transition {
            article: next,
            event,
        })
    }

    /// Deletion is out of band: admins may delete anything, authors only drafts.
    pub fn ensure_deletable(&self, article: &Article, grant: &Grant) -> DomainResult<()> {
        grant.ensure_action(ArticleAction::Delete)?;
        if grant.actor().role.is_admin() || article.status == ArticleStatus::Draft {
            Ok(())
        } else {
            Err(DomainError::illegal_transition(format!(
                "authors can only delete drafts, article is {}",
                article.status
            )))
        }
    }
}
