use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

/// Closed error taxonomy. Callers (and tests) discriminate on the variant,
/// never on the message text; the wire code from `kind()` is the stable
/// contract with HTTP clients.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("team_name already exists")]
    TeamExists,
    #[error("pull_request_id already exists")]
    PrExists,
    #[error("not found")]
    NotFound,
    #[error("author team not found")]
    AuthorTeamNotFound,
    #[error("cannot reassign on merged PR")]
    PrMerged,
    #[error("reviewer is not assigned to this PR")]
    NotAssigned,
    #[error("no active replacement candidate in team")]
    NoCandidate,
    #[error("validation error: {0}")]
    Validation(String),

    // infra things
    #[error(transparent)]
    Db(sea_orm::DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        match &e {
            DbErr::RecordNotFound(_) => AppError::NotFound,
            _ => AppError::Db(e),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: ErrorDetail<'a>,
}

#[derive(Serialize)]
struct ErrorDetail<'a> {
    code: &'a str,
    message: String,
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TeamExists => "TEAM_EXISTS",
            Self::PrExists => "PR_EXISTS",
            Self::NotFound | Self::AuthorTeamNotFound => "NOT_FOUND",
            Self::PrMerged => "PR_MERGED",
            Self::NotAssigned => "NOT_ASSIGNED",
            Self::NoCandidate => "NO_CANDIDATE",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Db(_) => "DB_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::TeamExists
            | Self::PrExists
            | Self::PrMerged
            | Self::NotAssigned
            | Self::NoCandidate => StatusCode::CONFLICT,
            Self::NotFound | Self::AuthorTeamNotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: ErrorDetail {
                code: self.kind(),
                message: self.to_string(),
            },
        })
    }
}
