pub(crate) mod error;

use crate::AppConfig;
use crate::member::ExtractMemberId;
use crate::routes::api::v0::journal::error::JournalError;
use axum::extract::{DefaultBodyLimit, Multipart, Query};
use axum::response::IntoResponse;
use axum::routing::{Router, get, post};
use axum::{Extension, Json};
use inninglog_core::journal::create::JournalCreationCoordinator;
use inninglog_core::journal::query::JournalQueryService;
use inninglog_core::journal::store::DbStore;
use inninglog_core::upload::ImageUploader;
use inninglog_db::journal::PageRequest;
use inninglog_model::journal::query::{CalendarQuery, DEFAULT_PAGE_SIZE, SummaryQuery};
use inninglog_model::journal::{CalendarJournal, JournalId, NewJournal, SummaryJournal, UploadedImage};
use inninglog_model::page::Page;
use inninglog_model::response::{ApiResponse, ResponseCode};
use inninglog_model_tools::convert::{IntoDbModel, IntoModel};
use sea_orm::DatabaseConnection;
use tracing::instrument;

const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/upload-image", post(upload_image))
        .route("/contents", post(create_contents))
        .route("/calendar", get(get_calendar))
        .route("/summary", get(get_summary))
        .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE))
        .with_state(())
}

fn list_code(is_empty: bool) -> ResponseCode {
    if is_empty {
        ResponseCode::JournalEmpty
    } else {
        ResponseCode::JournalListFetched
    }
}

#[utoipa::path(
    post,
    path = "/api/v0/journals/upload-image",
    request_body(content_type = "multipart/form-data", description = "Image in the field `file`"),
    responses(
        (status = OK, description = "Image stored", body = ApiResponse<UploadedImage>),
        (status = BAD_REQUEST, description = "File missing, empty or not an image"),
        (status = BAD_GATEWAY, description = "Image storage failed"),
    ),
    tag = "v0/journals",
    security(
        ("token" = [])
    )
)]
#[instrument(skip_all, fields(%member_id))]
pub(crate) async fn upload_image(
    ExtractMemberId(member_id): ExtractMemberId,
    Extension(app_config): Extension<AppConfig>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, JournalError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().map(ToOwned::to_owned);
        let content_type = field.content_type().map(ToOwned::to_owned);
        let bytes = field.bytes().await?;

        let uploader = ImageUploader::new(app_config.storage().clone());
        let url = uploader
            .upload(file_name.as_deref(), content_type.as_deref(), bytes.to_vec())
            .await?;
        return Ok(Json(ApiResponse::new(ResponseCode::S3UploadSuccess, UploadedImage { url })));
    }
    Err(JournalError::MissingFile)
}

#[utoipa::path(
    post,
    path = "/api/v0/journals/contents",
    request_body = NewJournal,
    responses(
        (status = OK, description = "Journal created", body = ApiResponse<JournalId>),
        (status = BAD_REQUEST, description = "Invalid journal"),
        (status = NOT_FOUND, description = "Unknown team or stadium"),
        (status = CONFLICT, description = "Journal saved, the game was already registered as visited"),
        (status = INTERNAL_SERVER_ERROR, description = "Journal saved, registering the visited game failed"),
    ),
    tag = "v0/journals",
    security(
        ("token" = [])
    )
)]
#[instrument(skip_all, fields(%member_id))]
pub(crate) async fn create_contents(
    ExtractMemberId(member_id): ExtractMemberId,
    Extension(conn): Extension<DatabaseConnection>,
    Json(request): Json<NewJournal>,
) -> Result<impl IntoResponse, JournalError> {
    let store = DbStore::new(conn);
    let coordinator = JournalCreationCoordinator::new(store.clone(), store.clone(), store);
    let id = coordinator.create_journal(member_id, request).await?;
    Ok(Json(ApiResponse::new(ResponseCode::JournalCreated, JournalId { id })))
}

#[utoipa::path(
    get,
    path = "/api/v0/journals/calendar",
    params(CalendarQuery),
    responses(
        (status = OK, description = "All journals of the member, oldest game first", body = ApiResponse<Vec<CalendarJournal>>),
    ),
    tag = "v0/journals",
    security(
        ("token" = [])
    )
)]
#[instrument(skip_all, fields(%member_id))]
pub(crate) async fn get_calendar(
    ExtractMemberId(member_id): ExtractMemberId,
    Extension(conn): Extension<DatabaseConnection>,
    Query(query): Query<CalendarQuery>,
) -> Result<impl IntoResponse, JournalError> {
    let service = JournalQueryService::new(DbStore::new(conn));
    let journals = service
        .list_for_calendar(member_id, query.result_score.map(IntoDbModel::into_db_model))
        .await?
        .into_iter()
        .map(IntoModel::into_model)
        .collect::<Vec<CalendarJournal>>();
    Ok(Json(ApiResponse::new(list_code(journals.is_empty()), journals)))
}

#[utoipa::path(
    get,
    path = "/api/v0/journals/summary",
    params(SummaryQuery),
    responses(
        (status = OK, description = "One page of the member's journals", body = ApiResponse<Page<SummaryJournal>>),
        (status = BAD_REQUEST, description = "Invalid page size"),
    ),
    tag = "v0/journals",
    security(
        ("token" = [])
    )
)]
#[instrument(skip_all, fields(%member_id))]
pub(crate) async fn get_summary(
    ExtractMemberId(member_id): ExtractMemberId,
    Extension(conn): Extension<DatabaseConnection>,
    Query(query): Query<SummaryQuery>,
) -> Result<impl IntoResponse, JournalError> {
    let request = PageRequest {
        page: query.page.unwrap_or_default(),
        page_size: query.size.unwrap_or(DEFAULT_PAGE_SIZE),
        sort_key: query.sort.unwrap_or_default().into_db_model(),
        direction: query.direction.unwrap_or_default().into_db_model(),
    };
    let service = JournalQueryService::new(DbStore::new(conn));
    let page: Page<SummaryJournal> = service
        .list_for_summary(member_id, request, query.result_score.map(IntoDbModel::into_db_model))
        .await?
        .into_model();
    Ok(Json(ApiResponse::new(list_code(page.is_empty()), page)))
}
