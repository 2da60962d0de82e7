use axum::{
    body::Body,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Json},
};
use tokio_util::io::ReaderStream;

use crate::{
    dto::kpr_dto::{KprProgramPage, KprProgramSummary},
    error::{Error, Result},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/kpr/programs",
    responses(
        (status = 200, description = "KPR information pages", body = Vec<KprProgramSummary>)
    )
)]
#[axum::debug_handler]
pub async fn list_programs(State(state): State<AppState>) -> Json<Vec<KprProgramSummary>> {
    Json(state.kpr_service.list())
}

#[utoipa::path(
    get,
    path = "/api/kpr/programs/{slug}",
    params(
        ("slug" = String, Path, description = "Page slug")
    ),
    responses(
        (status = 200, description = "Page content", body = KprProgramPage),
        (status = 404, description = "Unknown page")
    )
)]
#[axum::debug_handler]
pub async fn get_program(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<KprProgramPage>> {
    Ok(Json(state.kpr_service.page(&slug)?))
}

#[utoipa::path(
    get,
    path = "/api/kpr/programs/{slug}/document",
    params(
        ("slug" = String, Path, description = "Page slug")
    ),
    responses(
        (status = 200, description = "Program PDF"),
        (status = 404, description = "Unknown page or missing document")
    )
)]
#[axum::debug_handler]
pub async fn download_document(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse> {
    let (path, file_name) = state.kpr_service.document(&slug)?;
    let file = tokio::fs::File::open(&path).await.map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            tracing::warn!(path = %path.display(), "KPR document missing on disk");
            Error::NotFound(format!("Document for '{}' is not available", slug))
        } else {
            Error::Io(err)
        }
    })?;
    let body = Body::from_stream(ReaderStream::new(file));
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        body,
    ))
}
