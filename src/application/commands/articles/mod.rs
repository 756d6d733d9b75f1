// src/application/commands/articles/mod.rs
mod capability;
mod create;
mod delete;
mod edit_access;
mod service;
mod update;
mod workflow;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use delete::DeleteArticleCommand;
pub use edit_access::RespondToEditRequestCommand;
pub use service::{ArticleCommandService, ArticleRef};
pub use update::UpdateArticleContentCommand;
pub use workflow::RequestRevisionCommand;
