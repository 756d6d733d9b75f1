use crate::domain::errors::DomainError;

const CNT_ARTICLE_STATUS_CHECK: &str = "articles_status_chk";
const CNT_ARTICLE_EDIT_REQUEST_CHECK: &str = "articles_edit_request_chk";
const CNT_ARTICLE_EDIT_REQUEST_SCOPE: &str = "articles_edit_request_scope_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_STATUS_CHECK => {
                        DomainError::Validation("unknown article status".into())
                    }
                    CNT_ARTICLE_EDIT_REQUEST_CHECK => {
                        DomainError::Validation("unknown edit request state".into())
                    }
                    CNT_ARTICLE_EDIT_REQUEST_SCOPE => DomainError::IllegalTransition(
                        "edit requests only exist while an article is under moderation".into(),
                    ),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    // serialization_failure
                    "40001" => {
                        return DomainError::Conflict("concurrent update detected".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
