pub mod edit_access;
pub mod entity;
pub mod events;
pub mod repository;
pub mod specifications;
pub mod value_objects;
pub mod workflow;

pub use edit_access::{EditAccessCommand, EditAccessNegotiator};
pub use entity::{Article, ArticleContent, ContentPatch, NewArticle};
pub use events::ArticleEvent;
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use specifications::{ArticleAction, Grant, Ownership, RoleGateway};
pub use value_objects::{
    AdminEditRequest, ArticleId, ArticleStatus, ArticleVersion, EditDecision, Feedback,
};
pub use workflow::{Transition, WorkflowCommand, WorkflowEngine};
