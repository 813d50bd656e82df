use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use http::StatusCode;
use inninglog_core::status::get_db_status;
use inninglog_model::status::{ComponentStatus, ServiceStatus};
use sea_orm::DatabaseConnection;
use serde_json::json;
use tracing::instrument;

pub fn create_router<S>() -> Router<S> {
    Router::new().route("/", get(get_status)).with_state(())
}

#[derive(Debug, Clone)]
struct Status {
    database: ComponentStatus,
}

impl Status {
    pub(crate) fn status_code(&self) -> StatusCode {
        if self.database.is_ok() {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

impl From<Status> for ServiceStatus {
    fn from(val: Status) -> Self {
        ServiceStatus {
            database: val.database.into_value(),
        }
    }
}

impl IntoResponse for Status {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let status: ServiceStatus = self.into();
        (status_code, Json(status)).into_response()
    }
}

#[utoipa::path(
    get,
    path = "/api/v0/status",
    responses(
        (status = OK, description = "Database reachable", body = ServiceStatus, example = json!({ "database": "ok" })),
        (status = SERVICE_UNAVAILABLE, description = "Database is not reachable", body = ServiceStatus),
    ),
    tag = "v0/status"
)]
#[instrument(skip_all)]
pub(crate) async fn get_status(Extension(conn): Extension<DatabaseConnection>) -> impl IntoResponse {
    Status {
        database: get_db_status(&conn, None).await,
    }
}
