use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseCode {
    S3UploadSuccess,
    JournalCreated,
    JournalEmpty,
    JournalListFetched,
}

impl ResponseCode {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::S3UploadSuccess => "Image uploaded",
            Self::JournalCreated => "Journal created",
            Self::JournalEmpty => "No journals found",
            Self::JournalListFetched => "Journals fetched",
        }
    }
}

/// Envelope around every successful response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub code: ResponseCode,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(code: ResponseCode, data: T) -> Self {
        Self {
            code,
            message: code.message().to_owned(),
            data,
        }
    }
}
