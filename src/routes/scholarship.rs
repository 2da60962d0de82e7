use axum::{
    extract::{Path, RawQuery, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::scholarship_dto::{
        CreateScholarshipPayload, ScholarshipResponse, UpdateScholarshipPayload,
    },
    error::Result,
    query::ScholarshipParams,
    utils::time::today,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/scholarships",
    params(
        ("search" = Option<String>, Query, description = "Substring of name or description"),
        ("educationLevel" = Option<String>, Query, description = "Exact education level; `all` disables"),
        ("status" = Option<String>, Query, description = "active or inactive"),
        ("amountMin" = Option<String>, Query, description = "Inclusive lower amount bound"),
        ("amountMax" = Option<String>, Query, description = "Inclusive upper amount bound"),
        ("deadlineFrom" = Option<String>, Query, description = "Inclusive earliest deadline, YYYY-MM-DD"),
        ("deadlineTo" = Option<String>, Query, description = "Inclusive latest deadline, YYYY-MM-DD"),
        ("community" = Option<Vec<String>>, Query, description = "Repeatable; any tag may match"),
        ("genderRequirement" = Option<String>, Query, description = "Records open to all genders always match"),
        ("sortBy" = Option<String>, Query, description = "name, amount, applicationEndDate, createdAt, educationLevel"),
        ("sortOrder" = Option<String>, Query, description = "asc or desc")
    ),
    responses(
        (status = 200, description = "Matching scholarships", body = Vec<ScholarshipResponse>)
    )
)]
#[axum::debug_handler]
pub async fn list_scholarships(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<impl IntoResponse> {
    let params = ScholarshipParams::parse(raw.as_deref().unwrap_or_default());
    let items = state.scholarship_service.search(&params).await?;
    let today = today();
    let body: Vec<ScholarshipResponse> = items
        .into_iter()
        .map(|s| ScholarshipResponse::new(s, today))
        .collect();
    Ok(Json(body))
}

#[utoipa::path(
    get,
    path = "/api/scholarships/{id}",
    params(
        ("id" = Uuid, Path, description = "Scholarship ID")
    ),
    responses(
        (status = 200, description = "Scholarship found", body = ScholarshipResponse),
        (status = 404, description = "Scholarship not found")
    )
)]
#[axum::debug_handler]
pub async fn get_scholarship(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let scholarship = state.scholarship_service.get_by_id(id).await?;
    Ok(Json(ScholarshipResponse::new(scholarship, today())))
}

#[utoipa::path(
    get,
    path = "/api/scholarships/{id}/logo",
    params(
        ("id" = Uuid, Path, description = "Scholarship ID")
    ),
    responses(
        (status = 200, description = "Organization logo bytes"),
        (status = 404, description = "No logo uploaded")
    )
)]
#[axum::debug_handler]
pub async fn get_logo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let logo = state.scholarship_service.logo(id).await?;
    Ok(([(header::CONTENT_TYPE, logo.content_type)], logo.bytes))
}

#[utoipa::path(
    get,
    path = "/api/scholarships/{id}/application-form",
    params(
        ("id" = Uuid, Path, description = "Scholarship ID")
    ),
    responses(
        (status = 200, description = "Application form PDF"),
        (status = 404, description = "No application form uploaded")
    )
)]
#[axum::debug_handler]
pub async fn download_application_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let (scholarship, form) = state.scholarship_service.application_form(id).await?;
    let disposition = format!(
        "attachment; filename=\"{}-application-form.pdf\"",
        file_stem(&scholarship.name)
    );
    Ok((
        [
            (header::CONTENT_TYPE, form.content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        form.bytes,
    ))
}

#[utoipa::path(
    post,
    path = "/api/scholarships",
    request_body = CreateScholarshipPayload,
    responses(
        (status = 201, description = "Scholarship created", body = ScholarshipResponse),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Not an admin")
    ),
    security(("bearer" = []))
)]
#[axum::debug_handler]
pub async fn create_scholarship(
    State(state): State<AppState>,
    Json(payload): Json<CreateScholarshipPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let scholarship = state.scholarship_service.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ScholarshipResponse::new(scholarship, today())),
    ))
}

#[utoipa::path(
    put,
    path = "/api/scholarships/{id}",
    params(
        ("id" = Uuid, Path, description = "Scholarship ID")
    ),
    request_body = UpdateScholarshipPayload,
    responses(
        (status = 200, description = "Scholarship updated", body = ScholarshipResponse),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Scholarship not found")
    ),
    security(("bearer" = []))
)]
#[axum::debug_handler]
pub async fn update_scholarship(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateScholarshipPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let scholarship = state.scholarship_service.update(id, payload).await?;
    Ok(Json(ScholarshipResponse::new(scholarship, today())))
}

#[utoipa::path(
    delete,
    path = "/api/scholarships/{id}",
    params(
        ("id" = Uuid, Path, description = "Scholarship ID")
    ),
    responses(
        (status = 204, description = "Scholarship deleted"),
        (status = 404, description = "Scholarship not found")
    ),
    security(("bearer" = []))
)]
#[axum::debug_handler]
pub async fn delete_scholarship(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.scholarship_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn file_stem(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    let stem = stem
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if stem.is_empty() {
        "scholarship".to_string()
    } else {
        stem
    }
}
