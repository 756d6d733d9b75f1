//! Authorization table for article commands.
//!
//! Every state-changing call goes through [`RoleGateway::authorize`] first. The
//! returned [`Grant`] is the only way to reach the workflow engine and the
//! edit-access negotiator, so the permission rules live here and nowhere else.

use std::fmt;

use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::AdminEditRequest;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{Actor, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleAction {
    Read,
    EditContent,
    Delete,
    Submit,
    Approve,
    Reject,
    RequestRevision,
    StartRevision,
    FinishRevision,
    RequestEditAccess,
    RespondToEditRequest,
    CancelEditRequest,
    RevertEditApproval,
}

impl ArticleAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleAction::Read => "read",
            ArticleAction::EditContent => "edit_content",
            ArticleAction::Delete => "delete",
            ArticleAction::Submit => "submit",
            ArticleAction::Approve => "approve",
            ArticleAction::Reject => "reject",
            ArticleAction::RequestRevision => "request_revision",
            ArticleAction::StartRevision => "start_revision",
            ArticleAction::FinishRevision => "finish_revision",
            ArticleAction::RequestEditAccess => "request_edit_access",
            ArticleAction::RespondToEditRequest => "respond_edit_request",
            ArticleAction::CancelEditRequest => "cancel_edit_request",
            ArticleAction::RevertEditApproval => "revert_edit_approval",
        }
    }
}

impl fmt::Display for ArticleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relationship between the acting principal and the article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ownership {
    Author,
    /// Admin holding an approved edit-access grant.
    CoOwner,
    Stranger,
}

impl Ownership {
    pub fn of(actor: &Actor, article: &Article) -> Self {
        if article.is_authored_by(actor.id) {
            Ownership::Author
        } else if actor.role == Role::Admin
            && article.admin_edit_request == AdminEditRequest::Approved
        {
            Ownership::CoOwner
        } else {
            Ownership::Stranger
        }
    }
}

/// Proof that an actor passed the gateway for one action on one article.
#[derive(Debug, Clone, Copy)]
pub struct Grant {
    actor: Actor,
    action: ArticleAction,
    ownership: Ownership,
}

impl Grant {
    pub fn actor(&self) -> Actor {
        self.actor
    }

    pub fn action(&self) -> ArticleAction {
        self.action
    }

    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    pub(crate) fn ensure_action(&self, expected: ArticleAction) -> DomainResult<()> {
        if self.action == expected {
            Ok(())
        } else {
            Err(DomainError::unauthorized(format!(
                "grant for {} cannot be used for {expected}",
                self.action
            )))
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RoleGateway;

impl RoleGateway {
    pub fn new() -> Self {
        Self
    }

    pub fn authorize(
        &self,
        action: ArticleAction,
        actor: &Actor,
        article: &Article,
    ) -> DomainResult<Grant> {
        let ownership = Ownership::of(actor, article);
        if Self::permits(action, actor.role, ownership) {
            Ok(Grant {
                actor: *actor,
                action,
                ownership,
            })
        } else {
            Err(DomainError::unauthorized(format!(
                "{actor} may not {action} article {}",
                article.id
            )))
        }
    }

    pub fn is_authorized(&self, action: ArticleAction, actor: &Actor, article: &Article) -> bool {
        Self::permits(action, actor.role, Ownership::of(actor, article))
    }

    /// The authorization table, keyed by `(action, role, ownership)`.
    fn permits(action: ArticleAction, role: Role, ownership: Ownership) -> bool {
        use ArticleAction as A;
        use Ownership as O;

        match (action, role, ownership) {
            (A::Read, Role::Admin, _) | (A::Read, Role::Journalist, O::Author) => true,
            (A::Read, Role::Journalist, _) => false,

            (A::EditContent, _, O::Author | O::CoOwner) => true,
            (A::EditContent, _, O::Stranger) => false,

            (A::Delete, Role::Admin, _) | (A::Delete, Role::Journalist, O::Author) => true,
            (A::Delete, Role::Journalist, _) => false,

            (A::Submit, Role::Journalist, O::Author) => true,
            (A::Submit, _, _) => false,

            (
                A::Approve
                | A::Reject
                | A::RequestRevision
                | A::RequestEditAccess
                | A::CancelEditRequest
                | A::RevertEditApproval,
                role,
                _,
            ) => role == Role::Admin,

            (A::StartRevision | A::FinishRevision | A::RespondToEditRequest, _, ownership) => {
                ownership == O::Author
            }
        }
    }
}
