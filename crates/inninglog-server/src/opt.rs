use clap::{Args, Parser, Subcommand};
use inninglog_utils::storage::s3::S3Config;
use std::net::IpAddr;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "inninglog", about = "Keep a journal of the ball games you attended")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    Run(Run),
}

#[derive(Debug, Clone, Args)]
#[group(multiple = true, required = false)]
pub(crate) struct Db {
    #[arg(long, help = "Min connections")]
    pub(crate) db_min_connections: Option<u32>,

    #[arg(long, help = "Max connections")]
    pub(crate) db_max_connections: Option<u32>,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct Media {
    #[arg(
        long,
        default_value = "media",
        help = "Directory for uploaded images, used when no s3 storage is configured"
    )]
    pub(crate) media_dir: PathBuf,

    #[arg(
        long,
        default_value = "http://localhost:3030/media/",
        help = "Public url of the media directory"
    )]
    pub(crate) media_url: Url,
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct Run {
    #[arg(long)]
    pub(crate) host: Option<IpAddr>,

    #[arg(short, long)]
    pub(crate) port: Option<u16>,

    #[arg(long = "db-url", env = "DATABASE_URL", help = "sqlite:// or postgres:// connection url")]
    pub(crate) db_url: String,

    #[command(flatten)]
    pub(crate) db: Db,

    #[command(flatten)]
    pub(crate) s3: Option<S3Config>,

    #[command(flatten)]
    pub(crate) media: Media,

    #[arg(long, help = "Yaml file with the teams and stadiums to upsert on startup")]
    pub(crate) reference_data: Option<PathBuf>,

    #[arg(long, value_delimiter = ',', help = "Origins allowed to call the api")]
    pub(crate) origins: Vec<String>,

    #[arg(long = "sentry-dsn", help = "Sentry url")]
    pub(crate) sentry_dsn: Option<String>,

    #[arg(
        long,
        default_value = "dev",
        help = "Set the environment used by sentry and prometheus"
    )]
    pub(crate) env: String,

    #[arg(long)]
    pub(crate) otlp_endpoint: Option<String>,
}
