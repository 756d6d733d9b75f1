// src/presentation/http/extractors.rs
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::identity::IdentityProvider,
    },
    domain::user::{Actor, Role, UserId},
};
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::error::HttpError;

pub const ACTOR_ID_HEADER: &str = "x-actor-id";
pub const ACTOR_ROLE_HEADER: &str = "x-actor-role";

/// Actor resolved from the identity headers set by the session gateway in
/// front of this service.
#[derive(Debug, Clone, Copy)]
pub struct Authenticated(pub Actor);

impl IdentityProvider for Authenticated {
    fn current_actor(&self) -> ApplicationResult<Actor> {
        Ok(self.0)
    }
}

fn header<'a>(parts: &'a Parts, name: &'static str) -> ApplicationResult<&'a str> {
    parts
        .headers
        .get(name)
        .ok_or_else(|| ApplicationError::unauthenticated(format!("missing {name} header")))?
        .to_str()
        .map_err(|_| ApplicationError::unauthenticated(format!("{name} header is not valid text")))
}

fn resolve(parts: &Parts) -> ApplicationResult<Actor> {
    let id = header(parts, ACTOR_ID_HEADER)?
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|raw| UserId::new(raw).ok())
        .ok_or_else(|| ApplicationError::unauthenticated("actor id must be a positive integer"))?;
    let role = header(parts, ACTOR_ROLE_HEADER)?
        .parse::<Role>()
        .map_err(|_| ApplicationError::unauthenticated("unknown actor role"))?;
    Ok(Actor::new(id, role))
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        resolve(parts).map(Self).map_err(HttpError::from_error)
    }
}

fn malformed(detail: String) -> HttpError {
    HttpError::from_error(ApplicationError::validation(detail))
}

/// JSON body whose rejections are reported as validation errors.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| Self(value))
            .map_err(|rejection| malformed(rejection.body_text()))
    }
}

#[derive(Debug)]
pub struct ValidQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| Self(value))
            .map_err(|rejection| malformed(rejection.body_text()))
    }
}

#[derive(Debug)]
pub struct ValidPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| Self(value))
            .map_err(|rejection| malformed(rejection.body_text()))
    }
}
