//! Editorial workflow core for the nursery CMS: the article moderation state
//! machine, the admin edit-access negotiation layered on it, and the command
//! facade and adapters around them.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
