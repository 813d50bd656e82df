use crate::storage::error::StorageError;
use crate::storage::public_url;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, SharedCredentialsProvider};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::{Client, config::Region};
use clap::Args;
use std::error::Error;
use url::Url;

#[derive(Debug, Clone, Args)]
#[allow(clippy::struct_field_names)]
pub struct S3Config {
    #[arg(long = "s3-endpoint", env = "S3_ENDPOINT", required = false)]
    pub endpoint: Url,
    #[arg(long = "s3-region", env = "S3_REGION", required = false)]
    pub region: String,
    #[arg(long = "s3-access-key", env = "S3_ACCESS_KEY", required = false)]
    pub access_key: String,
    #[arg(long = "s3-secret-key", env = "S3_SECRET_KEY", required = false)]
    pub secret_key: String,
    #[arg(long = "s3-bucket", env = "S3_BUCKET", required = false)]
    pub bucket: String,
    /// Base url under which stored objects are publicly reachable
    #[arg(long = "s3-public-url", env = "S3_PUBLIC_URL", required = false)]
    pub public_url: Url,
}

#[derive(Clone, Debug)]
pub struct S3Storage {
    client: Client,
    bucket: String,
    public_url: Url,
}

impl S3Storage {
    #[must_use]
    pub fn new(client: Client, bucket: String, public_url: Url) -> Self {
        Self {
            client,
            bucket,
            public_url,
        }
    }

    #[must_use]
    pub fn from_config(config: S3Config) -> Self {
        let bucket = config.bucket.clone();
        let public_url = config.public_url.clone();
        Self::new(build_client(config), bucket, public_url)
    }

    pub async fn store(&self, key: &str, content_type: Option<&str>, content: Vec<u8>) -> Result<Url, StorageError> {
        tracing::debug!(bucket = &self.bucket, key, size = content.len(), "storing object");
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .set_content_type(content_type.map(ToOwned::to_owned))
            .body(ByteStream::from(content))
            .send()
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, key, "failed to put object"))?;
        public_url(&self.public_url, key)
    }
}

pub(crate) fn build_client(config: S3Config) -> Client {
    let region = Region::new(config.region);
    let credentials = Credentials::new(config.access_key, config.secret_key, None, None, "s3");

    let s3_config = aws_config::SdkConfig::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(region)
        .endpoint_url(config.endpoint.as_str())
        .credentials_provider(SharedCredentialsProvider::new(credentials))
        .build();

    Client::new(&s3_config)
}
