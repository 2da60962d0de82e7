use axum::{
    extract::State,
    response::{IntoResponse, Json},
    Extension,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::auth_dto::{UpdateProfilePayload, UserProfile},
    error::{Error, Result},
    utils::token::Claims,
    AppState,
};

fn subject(claims: &Claims) -> Result<Uuid> {
    Uuid::parse_str(&claims.sub).map_err(|_| Error::Unauthorized("invalid_token".into()))
}

#[utoipa::path(
    get,
    path = "/api/users/me",
    responses(
        (status = 200, description = "Signed-in user's profile", body = UserProfile),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer" = []))
)]
#[axum::debug_handler]
pub async fn get_me(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let user = state.user_service.profile(subject(&claims)?).await?;
    Ok(Json(UserProfile::from(user)))
}

#[utoipa::path(
    patch,
    path = "/api/users/me",
    request_body = UpdateProfilePayload,
    responses(
        (status = 200, description = "Profile updated", body = UserProfile),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing token or wrong current password")
    ),
    security(("bearer" = []))
)]
#[axum::debug_handler]
pub async fn update_me(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<UpdateProfilePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state
        .user_service
        .update_profile(subject(&claims)?, payload)
        .await?;
    Ok(Json(UserProfile::from(user)))
}
