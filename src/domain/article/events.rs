use crate::domain::article::specifications::ArticleAction;
use crate::domain::article::value_objects::{
    AdminEditRequest, ArticleId, ArticleStatus, ArticleVersion,
};
use crate::domain::user::{Actor, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleEvent {
    Created {
        id: ArticleId,
        author_id: UserId,
        at: DateTime<Utc>,
    },
    StatusChanged {
        id: ArticleId,
        actor: Actor,
        action: ArticleAction,
        from: ArticleStatus,
        to: ArticleStatus,
        edit_request: AdminEditRequest,
        version: ArticleVersion,
        at: DateTime<Utc>,
    },
    EditRequestChanged {
        id: ArticleId,
        actor: Actor,
        action: ArticleAction,
        from: AdminEditRequest,
        to: AdminEditRequest,
        version: ArticleVersion,
        at: DateTime<Utc>,
    },
    ContentUpdated {
        id: ArticleId,
        actor: Actor,
        version: ArticleVersion,
        at: DateTime<Utc>,
    },
    Deleted {
        id: ArticleId,
        actor: Actor,
        at: DateTime<Utc>,
    },
}

impl ArticleEvent {
    /// Emits the event as a structured log record.
    pub fn record(&self) {
        match self {
            ArticleEvent::Created { id, author_id, .. } => {
                tracing::info!(article_id = %id, author_id = %author_id, "article created");
            }
            ArticleEvent::StatusChanged {
                id,
                actor,
                action,
                from,
                to,
                edit_request,
                version,
                ..
            } => {
                tracing::info!(
                    article_id = %id,
                    actor = %actor,
                    command = %action,
                    from = %from,
                    to = %to,
                    edit_request = %edit_request,
                    version = %version,
                    "article status changed"
                );
            }
            ArticleEvent::EditRequestChanged {
                id,
                actor,
                action,
                from,
                to,
                version,
                ..
            } => {
                tracing::info!(
                    article_id = %id,
                    actor = %actor,
                    command = %action,
                    from = %from,
                    to = %to,
                    version = %version,
                    "edit access changed"
                );
            }
            ArticleEvent::ContentUpdated {
                id, actor, version, ..
            } => {
                tracing::info!(article_id = %id, actor = %actor, version = %version, "article content updated");
            }
            ArticleEvent::Deleted { id, actor, .. } => {
                tracing::info!(article_id = %id, actor = %actor, "article deleted");
            }
        }
    }
}
