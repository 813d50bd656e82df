use crate::routes::error::{ErrorData, ErrorDataProvider, GetStatusCode, error_to_axum_response};
use axum::extract::multipart::MultipartError;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use inninglog_core::journal::error::{CreateJournalError, QueryJournalError};
use inninglog_core::upload::UploadError;
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub(crate) enum JournalError {
    #[error(transparent)]
    Create(#[from] CreateJournalError),

    #[error(transparent)]
    Query(#[from] QueryJournalError),

    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error(transparent)]
    Multipart(#[from] MultipartError),

    #[error("Multipart field `file` is missing")]
    MissingFile,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub(crate) enum JournalErrorType {
    Validation,
    NotFound,
    Upload,
    VisitedGameRegistrationFailed,
    DuplicateVisitedGame,
    StorageUnavailable,
    Storage,
}

impl GetStatusCode for JournalErrorType {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Upload => StatusCode::BAD_GATEWAY,
            Self::DuplicateVisitedGame => StatusCode::CONFLICT,
            Self::StorageUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::VisitedGameRegistrationFailed | Self::Storage => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl GetStatusCode for JournalError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Multipart(error) => error.status(),
            Self::MissingFile => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn storage_error_data(error: &DbErr) -> ErrorData<JournalErrorType> {
    match error {
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => {
            ErrorData::new(JournalErrorType::StorageUnavailable, "storage is unavailable")
        }
        _ => ErrorData::new(JournalErrorType::Storage, "storage error"),
    }
}

impl ErrorDataProvider<JournalErrorType> for JournalError {
    fn error_data(self) -> Option<ErrorData<JournalErrorType>> {
        let description = self.to_string();
        let data = match self {
            Self::Create(error) => match error {
                CreateJournalError::Validation(_) => ErrorData::new(JournalErrorType::Validation, description),
                CreateJournalError::TeamNotFound(_) | CreateJournalError::StadiumNotFound(_) => {
                    ErrorData::new(JournalErrorType::NotFound, description)
                }
                CreateJournalError::Storage(error) => storage_error_data(&error),
                CreateJournalError::VisitedGameRegistrationFailed { journal_id, .. } => {
                    ErrorData::new(JournalErrorType::VisitedGameRegistrationFailed, description)
                        .with_data("journal_id", journal_id.to_string())
                }
                CreateJournalError::DuplicateVisitedGame { journal_id, .. } => {
                    ErrorData::new(JournalErrorType::DuplicateVisitedGame, description)
                        .with_data("journal_id", journal_id.to_string())
                }
            },
            Self::Query(QueryJournalError::Validation(_)) => ErrorData::new(JournalErrorType::Validation, description),
            Self::Query(QueryJournalError::Storage(error)) => storage_error_data(&error),
            Self::Upload(UploadError::EmptyFile | UploadError::UnsupportedContentType(_)) => {
                ErrorData::new(JournalErrorType::Validation, description)
            }
            Self::Upload(UploadError::Storage(_)) => ErrorData::new(JournalErrorType::Upload, "image upload failed"),
            Self::MissingFile => ErrorData::new(JournalErrorType::Validation, description),
            Self::Multipart(_) => return None,
        };
        Some(data)
    }
}

impl IntoResponse for JournalError {
    fn into_response(self) -> Response {
        error_to_axum_response(self)
    }
}
