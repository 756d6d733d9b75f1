use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Optimistic concurrency token. Starts at 1 and grows by one per accepted transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleVersion(i64);

impl ArticleVersion {
    pub const INITIAL: Self = Self(1);

    pub fn new(value: i64) -> DomainResult<Self> {
        if value < 1 {
            return Err(DomainError::Validation(
                "article version must be at least 1".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn next(self) -> DomainResult<Self> {
        self.0
            .checked_add(1)
            .map(Self)
            .ok_or_else(|| DomainError::Persistence("article version exhausted".into()))
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl From<ArticleVersion> for i64 {
    fn from(value: ArticleVersion) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArticleStatus {
    Draft,
    InReview,
    NeedsRevision,
    JournalistRevising,
    Revised,
    Published,
    Rejected,
}

impl ArticleStatus {
    pub const ALL: [ArticleStatus; 7] = [
        ArticleStatus::Draft,
        ArticleStatus::InReview,
        ArticleStatus::NeedsRevision,
        ArticleStatus::JournalistRevising,
        ArticleStatus::Revised,
        ArticleStatus::Published,
        ArticleStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "DRAFT",
            ArticleStatus::InReview => "IN_REVIEW",
            ArticleStatus::NeedsRevision => "NEEDS_REVISION",
            ArticleStatus::JournalistRevising => "JOURNALIST_REVISING",
            ArticleStatus::Revised => "REVISED",
            ArticleStatus::Published => "PUBLISHED",
            ArticleStatus::Rejected => "REJECTED",
        }
    }

    /// `PUBLISHED` and `REJECTED` have no outgoing workflow transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ArticleStatus::Published | ArticleStatus::Rejected)
    }

    /// Statuses an admin moderates and in which edit access may be negotiated.
    pub fn is_under_moderation(&self) -> bool {
        matches!(self, ArticleStatus::InReview | ArticleStatus::Revised)
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArticleStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::Validation(format!("unknown article status '{s}'")))
    }
}

/// Sub-state of the admin edit-access negotiation, layered on the primary status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdminEditRequest {
    #[default]
    None,
    Pending,
    Approved,
    Denied,
}

impl AdminEditRequest {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminEditRequest::None => "NONE",
            AdminEditRequest::Pending => "PENDING",
            AdminEditRequest::Approved => "APPROVED",
            AdminEditRequest::Denied => "DENIED",
        }
    }
}

impl fmt::Display for AdminEditRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdminEditRequest {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NONE" => Ok(AdminEditRequest::None),
            "PENDING" => Ok(AdminEditRequest::Pending),
            "APPROVED" => Ok(AdminEditRequest::Approved),
            "DENIED" => Ok(AdminEditRequest::Denied),
            other => Err(DomainError::Validation(format!(
                "unknown edit request state '{other}'"
            ))),
        }
    }
}

/// The author's answer to a pending edit-access request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EditDecision {
    Approved,
    Denied,
}

impl From<EditDecision> for AdminEditRequest {
    fn from(value: EditDecision) -> Self {
        match value {
            EditDecision::Approved => AdminEditRequest::Approved,
            EditDecision::Denied => AdminEditRequest::Denied,
        }
    }
}

/// Narrative note an admin attaches when sending an article back for revision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feedback(String);

impl Feedback {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("feedback cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
