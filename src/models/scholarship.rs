use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Scholarship {
    pub id: Uuid,
    pub name: String,
    /// Numeric value kept as text, see `utils::money::parse_amount`.
    pub amount: String,
    pub education_level: String,
    /// Calendar date kept as text, see `utils::time::parse_date`.
    pub application_end_date: String,
    pub description: String,
    pub eligibility: String,
    pub community: String,
    pub gender_requirement: String,
    pub status: String,
    pub application_link: Option<String>,
    pub organization_logo: Option<String>,
    pub application_form_data: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum EducationLevel {
    #[serde(rename = "High School")]
    HighSchool,
    #[serde(rename = "Bachelor's")]
    Bachelors,
    #[serde(rename = "Master's")]
    Masters,
    #[serde(rename = "PhD")]
    PhD,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 4] = [
        EducationLevel::HighSchool,
        EducationLevel::Bachelors,
        EducationLevel::Masters,
        EducationLevel::PhD,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "High School",
            EducationLevel::Bachelors => "Bachelor's",
            EducationLevel::Masters => "Master's",
            EducationLevel::PhD => "PhD",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScholarshipStatus {
    #[default]
    Active,
    Inactive,
}

impl ScholarshipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScholarshipStatus::Active => "active",
            ScholarshipStatus::Inactive => "inactive",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(ScholarshipStatus::Active),
            "inactive" => Some(ScholarshipStatus::Inactive),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum GenderRequirement {
    #[default]
    #[serde(rename = "All Genders")]
    AllGenders,
    Male,
    Female,
}

impl GenderRequirement {
    /// Text stored for records open to every applicant.
    pub const DEFAULT: &'static str = "All Genders";

    pub fn as_str(&self) -> &'static str {
        match self {
            GenderRequirement::AllGenders => Self::DEFAULT,
            GenderRequirement::Male => "Male",
            GenderRequirement::Female => "Female",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        [
            GenderRequirement::AllGenders,
            GenderRequirement::Male,
            GenderRequirement::Female,
        ]
        .into_iter()
        .find(|g| g.as_str() == value)
    }
}

/// Fields required to insert a scholarship; produced from a validated payload.
#[derive(Debug, Clone)]
pub struct NewScholarship {
    pub name: String,
    pub amount: String,
    pub education_level: String,
    pub application_end_date: String,
    pub description: String,
    pub eligibility: String,
    pub community: String,
    pub gender_requirement: String,
    pub status: String,
    pub application_link: Option<String>,
    pub organization_logo: Option<String>,
    pub application_form_data: Option<String>,
}

/// Partial update; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct ScholarshipChanges {
    pub name: Option<String>,
    pub amount: Option<String>,
    pub education_level: Option<String>,
    pub application_end_date: Option<String>,
    pub description: Option<String>,
    pub eligibility: Option<String>,
    pub community: Option<String>,
    pub gender_requirement: Option<String>,
    pub status: Option<String>,
    pub application_link: Option<String>,
    pub organization_logo: Option<String>,
    pub application_form_data: Option<String>,
}

impl ScholarshipChanges {
    pub fn apply_to(self, target: &mut Scholarship) {
        fn set(slot: &mut String, value: Option<String>) {
            if let Some(v) = value {
                *slot = v;
            }
        }
        fn set_opt(slot: &mut Option<String>, value: Option<String>) {
            if value.is_some() {
                *slot = value;
            }
        }

        set(&mut target.name, self.name);
        set(&mut target.amount, self.amount);
        set(&mut target.education_level, self.education_level);
        set(&mut target.application_end_date, self.application_end_date);
        set(&mut target.description, self.description);
        set(&mut target.eligibility, self.eligibility);
        set(&mut target.community, self.community);
        set(&mut target.gender_requirement, self.gender_requirement);
        set(&mut target.status, self.status);
        set_opt(&mut target.application_link, self.application_link);
        set_opt(&mut target.organization_logo, self.organization_logo);
        set_opt(&mut target.application_form_data, self.application_form_data);
    }
}
