use crate::{AppConfig, routes};
use axum::routing::get;
use axum::{Extension, Router};
use axum_prometheus::PrometheusMetricLayerBuilder;
use http::{Method, header};
use sea_orm::DatabaseConnection;
use sentry_tower::NewSentryLayer;
use std::path::PathBuf;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// The `/api/v0` routes with everything they need to run, without the observability layers.
pub(crate) fn api_router(app_config: AppConfig, seaorm_pool: DatabaseConnection) -> Router {
    Router::new()
        .nest(
            "/api/v0",
            Router::new()
                .nest("/status", routes::api::v0::status::create_router())
                .nest("/journals", routes::api::v0::journal::create_router()),
        )
        .layer(
            ServiceBuilder::new()
                .layer(Extension(app_config))
                .layer(Extension(seaorm_pool)),
        )
        .with_state(())
}

pub fn create_app(
    app_config: AppConfig,
    origins: &[String],
    media_dir: Option<PathBuf>,
    seaorm_pool: DatabaseConnection,
) -> anyhow::Result<Router> {
    let (prometheus_layer, metric_handle) = PrometheusMetricLayerBuilder::new()
        .with_prefix("api")
        .with_default_metrics()
        .build_pair();

    let api_cors = CorsLayer::new()
        .allow_origin(
            origins
                .iter()
                .map(|origin| origin.parse())
                .collect::<Result<Vec<_>, _>>()?,
        )
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE, header::AUTHORIZATION, header::ORIGIN])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .max_age(Duration::from_secs(3600));

    let mut app = Router::new()
        .merge(routes::swagger::create_router())
        .merge(api_router(app_config, seaorm_pool).layer(api_cors));

    if let Some(media_dir) = media_dir {
        app = app.nest_service("/media", ServeDir::new(media_dir));
    }

    let app = app
        .route("/metrics", get(|| async move { metric_handle.render() }))
        .layer(
            // Router layers are called bottom to top
            // ServiceBuilder layers are called top to bottom
            ServiceBuilder::new()
                .layer(NewSentryLayer::new_from_top())
                .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
                .layer(prometheus_layer)
                .layer(TraceLayer::new_for_http()),
        );
    Ok(app)
}
