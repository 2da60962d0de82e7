//! Typed consumer of the catalog API, as used by the frontend and by tools.

use reqwest::{Client, StatusCode};
use uuid::Uuid;

use crate::dto::scholarship_dto::ScholarshipResponse;
use crate::error::{Error, Result};
use crate::query::FilterState;

#[derive(Clone)]
pub struct ScholarshipClient {
    http: Client,
    base_url: String,
}

impl ScholarshipClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Lists scholarships for `state`; default fields are not sent.
    pub fn list_url(&self, state: &FilterState) -> String {
        let query = state.to_query_string();
        if query.is_empty() {
            format!("{}/api/scholarships", self.base_url)
        } else {
            format!("{}/api/scholarships?{}", self.base_url, query)
        }
    }

    pub async fn list(&self, state: &FilterState) -> Result<Vec<ScholarshipResponse>> {
        let url = self.list_url(state);
        tracing::debug!(%url, "fetching scholarships");
        let items = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<ScholarshipResponse>>()
            .await?;
        Ok(items)
    }

    pub async fn get(&self, id: Uuid) -> Result<ScholarshipResponse> {
        let resp = self
            .http
            .get(format!("{}/api/scholarships/{}", self.base_url, id))
            .send()
            .await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(format!("Scholarship {} not found", id)));
        }
        Ok(resp.error_for_status()?.json().await?)
    }
}
