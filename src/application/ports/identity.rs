// src/application/ports/identity.rs
use crate::application::error::ApplicationResult;
use crate::domain::user::Actor;

/// Resolves the principal issuing the current command.
pub trait IdentityProvider: Send + Sync {
    fn current_actor(&self) -> ApplicationResult<Actor>;
}

/// An already-resolved actor is its own identity.
impl IdentityProvider for Actor {
    fn current_actor(&self) -> ApplicationResult<Actor> {
        Ok(*self)
    }
}
