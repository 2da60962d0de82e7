use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct KprProgramSummary {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub document_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct KprSection {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct KprProgramPage {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub sections: Vec<KprSection>,
    pub document_url: String,
}
