use std::sync::Arc;

use uuid::Uuid;

use crate::database::ScholarshipStore;
use crate::dto::scholarship_dto::{CreateScholarshipPayload, UpdateScholarshipPayload};
use crate::error::{Error, Result};
use crate::models::scholarship::Scholarship;
use crate::query::{ScholarshipParams, ScholarshipQuery};
use crate::utils::blob::{self, DecodedBlob};

#[derive(Clone)]
pub struct ScholarshipService {
    store: Arc<dyn ScholarshipStore>,
}

impl ScholarshipService {
    pub fn new(store: Arc<dyn ScholarshipStore>) -> Self {
        Self { store }
    }

    pub async fn search(&self, params: &ScholarshipParams) -> Result<Vec<Scholarship>> {
        let query = ScholarshipQuery::from_params(params);
        let items = self.store.find(&query).await?;
        tracing::debug!(
            clauses = query.filter.clauses().len(),
            sort_by = query.sort.field.as_str(),
            sort_order = query.sort.order.as_str(),
            results = items.len(),
            "scholarship search resolved"
        );
        Ok(items)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Scholarship> {
        self.store.get(id).await
    }

    pub async fn create(&self, payload: CreateScholarshipPayload) -> Result<Scholarship> {
        let created = self.store.create(payload.into()).await?;
        tracing::info!(id = %created.id, name = %created.name, "scholarship created");
        Ok(created)
    }

    pub async fn update(&self, id: Uuid, payload: UpdateScholarshipPayload) -> Result<Scholarship> {
        let updated = self.store.update(id, payload.into()).await?;
        tracing::info!(id = %id, "scholarship updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.store.delete(id).await?;
        tracing::info!(id = %id, "scholarship deleted");
        Ok(())
    }

    pub async fn logo(&self, id: Uuid) -> Result<DecodedBlob> {
        let record = self.store.get(id).await?;
        decode_attachment(record.organization_logo.as_deref(), "logo")
    }

    pub async fn application_form(&self, id: Uuid) -> Result<(Scholarship, DecodedBlob)> {
        let record = self.store.get(id).await?;
        let form = decode_attachment(record.application_form_data.as_deref(), "application form")?;
        Ok((record, form))
    }
}

fn decode_attachment(raw: Option<&str>, what: &str) -> Result<DecodedBlob> {
    let raw = raw
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| Error::NotFound(format!("No {} uploaded", what)))?;
    blob::decode(raw).map_err(|err| {
        tracing::warn!(error = %err, "stored {} is not valid base64", what);
        Error::Internal(format!("Stored {} is unreadable", what))
    })
}
