use axum::Json;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::dto::{
    auth_dto::{AuthResponse, LoginPayload, RegisterPayload, UpdateProfilePayload, UserProfile},
    kpr_dto::{KprProgramPage, KprProgramSummary, KprSection},
    scholarship_dto::{CreateScholarshipPayload, ScholarshipResponse, UpdateScholarshipPayload},
};
use crate::models::scholarship::{EducationLevel, GenderRequirement, Scholarship, ScholarshipStatus};

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::scholarship::list_scholarships,
        crate::routes::scholarship::get_scholarship,
        crate::routes::scholarship::get_logo,
        crate::routes::scholarship::download_application_form,
        crate::routes::scholarship::create_scholarship,
        crate::routes::scholarship::update_scholarship,
        crate::routes::scholarship::delete_scholarship,
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::users::get_me,
        crate::routes::users::update_me,
        crate::routes::kpr::list_programs,
        crate::routes::kpr::get_program,
        crate::routes::kpr::download_document,
    ),
    components(schemas(
        Scholarship,
        ScholarshipResponse,
        CreateScholarshipPayload,
        UpdateScholarshipPayload,
        EducationLevel,
        GenderRequirement,
        ScholarshipStatus,
        RegisterPayload,
        LoginPayload,
        UpdateProfilePayload,
        UserProfile,
        AuthResponse,
        KprProgramSummary,
        KprProgramPage,
        KprSection,
    )),
    modifiers(&BearerAuth),
    tags((name = "scholarships", description = "Scholarship catalog"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
