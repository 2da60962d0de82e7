use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::scholarship::{
    EducationLevel, GenderRequirement, NewScholarship, Scholarship, ScholarshipChanges,
    ScholarshipStatus,
};
use crate::utils::{
    blob,
    money::{format_amount, parse_amount},
    time::{days_left, parse_date},
};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateScholarshipPayload {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(custom(function = "validate_amount"))]
    pub amount: String,
    #[validate(custom(function = "validate_education_level"))]
    pub education_level: String,
    #[validate(custom(function = "validate_date"))]
    pub application_end_date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub eligibility: String,
    #[serde(default)]
    pub community: String,
    #[validate(custom(function = "validate_gender_requirement"))]
    pub gender_requirement: Option<String>,
    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
    #[validate(url)]
    pub application_link: Option<String>,
    #[validate(custom(function = "validate_blob"))]
    pub organization_logo: Option<String>,
    #[validate(custom(function = "validate_blob"))]
    pub application_form_data: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScholarshipPayload {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(custom(function = "validate_amount"))]
    pub amount: Option<String>,
    #[validate(custom(function = "validate_education_level"))]
    pub education_level: Option<String>,
    #[validate(custom(function = "validate_date"))]
    pub application_end_date: Option<String>,
    pub description: Option<String>,
    pub eligibility: Option<String>,
    pub community: Option<String>,
    #[validate(custom(function = "validate_gender_requirement"))]
    pub gender_requirement: Option<String>,
    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
    #[validate(url)]
    pub application_link: Option<String>,
    #[validate(custom(function = "validate_blob"))]
    pub organization_logo: Option<String>,
    #[validate(custom(function = "validate_blob"))]
    pub application_form_data: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScholarshipResponse {
    #[serde(flatten)]
    pub scholarship: Scholarship,
    /// Days until the application deadline; `null` when the stored date is unreadable.
    pub days_left: Option<i64>,
    pub formatted_amount: Option<String>,
}

impl ScholarshipResponse {
    pub fn new(scholarship: Scholarship, today: NaiveDate) -> Self {
        let remaining = parse_date(&scholarship.application_end_date).map(|end| days_left(end, today));
        let formatted_amount = parse_amount(&scholarship.amount).map(format_amount);
        Self {
            scholarship,
            days_left: remaining,
            formatted_amount,
        }
    }
}

impl From<CreateScholarshipPayload> for NewScholarship {
    fn from(value: CreateScholarshipPayload) -> Self {
        Self {
            name: value.name.trim().to_string(),
            amount: value.amount.trim().to_string(),
            education_level: value.education_level,
            application_end_date: value.application_end_date.trim().to_string(),
            description: value.description,
            eligibility: value.eligibility,
            community: value.community,
            gender_requirement: value
                .gender_requirement
                .unwrap_or_else(|| GenderRequirement::DEFAULT.to_string()),
            status: value
                .status
                .unwrap_or_else(|| ScholarshipStatus::default().as_str().to_string()),
            application_link: value.application_link,
            organization_logo: value.organization_logo,
            application_form_data: value.application_form_data,
        }
    }
}

impl From<UpdateScholarshipPayload> for ScholarshipChanges {
    fn from(value: UpdateScholarshipPayload) -> Self {
        Self {
            name: value.name.map(|v| v.trim().to_string()),
            amount: value.amount.map(|v| v.trim().to_string()),
            education_level: value.education_level,
            application_end_date: value.application_end_date.map(|v| v.trim().to_string()),
            description: value.description,
            eligibility: value.eligibility,
            community: value.community,
            gender_requirement: value.gender_requirement,
            status: value.status,
            application_link: value.application_link,
            organization_logo: value.organization_logo,
            application_form_data: value.application_form_data,
        }
    }
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

fn validate_amount(value: &str) -> Result<(), ValidationError> {
    parse_amount(value)
        .map(|_| ())
        .ok_or_else(|| invalid("amount", "amount must be a number"))
}

fn validate_education_level(value: &str) -> Result<(), ValidationError> {
    EducationLevel::parse(value)
        .map(|_| ())
        .ok_or_else(|| invalid("education_level", "unknown education level"))
}

fn validate_date(value: &str) -> Result<(), ValidationError> {
    parse_date(value)
        .map(|_| ())
        .ok_or_else(|| invalid("date", "expected a YYYY-MM-DD date"))
}

fn validate_gender_requirement(value: &str) -> Result<(), ValidationError> {
    GenderRequirement::parse(value)
        .map(|_| ())
        .ok_or_else(|| invalid("gender_requirement", "unknown gender requirement"))
}

fn validate_status(value: &str) -> Result<(), ValidationError> {
    ScholarshipStatus::parse(value)
        .map(|_| ())
        .ok_or_else(|| invalid("status", "status must be active or inactive"))
}

fn validate_blob(value: &str) -> Result<(), ValidationError> {
    blob::decode(value)
        .map(|_| ())
        .map_err(|_| invalid("blob", "expected base64 data"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create(body: serde_json::Value) -> CreateScholarshipPayload {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn accepts_a_complete_payload_and_fills_defaults() {
        let payload = create(json!({
            "name": " Robotics Excellence Award ",
            "amount": "5000",
            "educationLevel": "Bachelor's",
            "applicationEndDate": "2025-06-01",
            "community": "STEM"
        }));
        assert!(payload.validate().is_ok());
        let record = NewScholarship::from(payload);
        assert_eq!(record.name, "Robotics Excellence Award");
        assert_eq!(record.status, "active");
        assert_eq!(record.gender_requirement, "All Genders");
    }

    #[test]
    fn rejects_values_outside_the_closed_sets() {
        let payload = create(json!({
            "name": "x",
            "amount": "N/A",
            "educationLevel": "Kindergarten",
            "applicationEndDate": "tomorrow",
            "status": "archived",
            "applicationLink": "not a url"
        }));
        let errors = payload.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 5);
    }

    #[test]
    fn empty_update_is_valid() {
        assert!(UpdateScholarshipPayload::default().validate().is_ok());
    }

    #[test]
    fn response_carries_display_values() {
        let record = crate::query::predicate::fixtures::with("a", |s| {
            s.amount = "1250.5".into();
            s.application_end_date = "2025-01-11".into();
        });
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let response = ScholarshipResponse::new(record, today);
        assert_eq!(response.days_left, Some(10));
        assert_eq!(response.formatted_amount.as_deref(), Some("$1,250.50"));

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["applicationEndDate"], "2025-01-11");
        assert_eq!(value["daysLeft"], 10);
    }
}
