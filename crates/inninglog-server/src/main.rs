use crate::opt::{Commands, Db, Run};
use anyhow::Result;
use axum::serve;
use clap::Parser;
use inninglog_db::migration;
use inninglog_utils::net::create_listener;
use inninglog_utils::storage::Storage;
use inninglog_utils::storage::file_system::FileSystemStorage;
use inninglog_utils::storage::s3::S3Storage;
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

mod app;
mod member;
mod opt;
mod reference;
mod routes;

const DEFAULT_ADDRESS: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3030);

#[derive(Debug)]
pub(crate) struct InnerAppConfig {
    storage: Storage,
}

#[derive(Clone, Debug)]
pub(crate) struct AppConfig(Arc<InnerAppConfig>);

impl AppConfig {
    pub(crate) fn new(storage: Storage) -> Self {
        Self(Arc::new(InnerAppConfig { storage }))
    }

    pub fn storage(&self) -> &Storage {
        &self.0.storage
    }
}

async fn run(opt: Run) -> Result<()> {
    let _guard = inninglog_utils::tracing::setup(
        inninglog_utils::tracing::TracingConfig::builder()
            .package(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .otlp_endpoint(opt.otlp_endpoint.clone())
            .sentry_dsn(opt.sentry_dsn.clone())
            .env(opt.env.clone())
            .build(),
    )?;

    let seaorm_pool = Database::connect(build_connect_options(&opt.db, opt.db_url.clone())).await?;
    migration::run(&seaorm_pool)
        .await
        .inspect_err(|error| tracing::error!(error = error as &dyn std::error::Error, "failed to run migrations"))?;

    if let Some(path) = &opt.reference_data {
        let data = reference::load(path).await?;
        reference::seed(&seaorm_pool, data).await?;
    }

    let Run {
        host,
        port,
        s3,
        media,
        origins,
        ..
    } = opt;

    let (storage, media_dir): (Storage, Option<PathBuf>) = match s3 {
        Some(s3) => {
            tracing::info!(bucket = s3.bucket, "storing images in s3");
            (Storage::S3(S3Storage::from_config(s3)), None)
        }
        None => {
            tracing::info!(dir = ?media.media_dir, "storing images on the local file system");
            let storage = FileSystemStorage::new(media.media_dir.clone(), media.media_url);
            (Storage::FileSystem(storage), Some(media.media_dir))
        }
    };

    let app = app::create_app(AppConfig::new(storage), &origins, media_dir, seaorm_pool)?;

    let listener = create_listener(host, port, DEFAULT_ADDRESS).await?;

    let service = app.into_make_service();
    tracing::info!(local_addr = %listener.local_addr()?, "starting app");
    serve::serve(listener, service).await?;
    Ok(())
}

fn build_connect_options(db_options: &Db, db_url: String) -> ConnectOptions {
    let mut seaorm_pool_options = ConnectOptions::new(db_url);
    if let Some(min_connections) = db_options.db_min_connections {
        seaorm_pool_options.min_connections(min_connections);
    }
    if let Some(max_connections) = db_options.db_max_connections {
        seaorm_pool_options.max_connections(max_connections);
    }
    seaorm_pool_options.sqlx_logging_level(log::LevelFilter::Debug);
    seaorm_pool_options
}

fn main() -> Result<()> {
    if env::var_os("RUST_BACKTRACE").is_none() {
        unsafe { env::set_var("RUST_BACKTRACE", "1") };
    }

    let main = async {
        let opt = opt::Cli::parse();

        match opt.command {
            Commands::Run(o) => run(o).await?,
        }
        Ok(())
    };

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(main)
}
