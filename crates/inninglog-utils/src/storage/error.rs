use aws_sdk_s3::error::SdkError;
use std::error::Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    S3(Box<dyn Error + Send + Sync>),
    #[error("Invalid key: {0}")]
    InvalidKey(String),
    #[error(transparent)]
    Url(#[from] url::ParseError),
}

impl<E: 'static, R: 'static> From<SdkError<E, R>> for StorageError
where
    SdkError<E, R>: Error + Send + Sync,
{
    fn from(error: SdkError<E, R>) -> Self {
        StorageError::S3(Box::new(error))
    }
}
