//! Lock-guarded in-process stores for tests and `STORAGE=memory` runs.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::{ScholarshipStore, UserStore};
use crate::error::{Error, Result};
use crate::models::scholarship::{NewScholarship, Scholarship, ScholarshipChanges};
use crate::models::user::{NewUser, User};
use crate::query::ScholarshipQuery;
use crate::utils::time::now;

#[derive(Default)]
pub struct MemoryScholarshipStore {
    records: RwLock<Vec<Scholarship>>,
}

impl MemoryScholarshipStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from existing rows, keeping their ids and timestamps.
    pub fn with_records(records: Vec<Scholarship>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

fn not_found(id: Uuid) -> Error {
    Error::NotFound(format!("Scholarship {} not found", id))
}

#[async_trait]
impl ScholarshipStore for MemoryScholarshipStore {
    async fn find(&self, query: &ScholarshipQuery) -> Result<Vec<Scholarship>> {
        let snapshot = self.records.read().await.clone();
        Ok(query.apply(snapshot))
    }

    async fn get(&self, id: Uuid) -> Result<Scholarship> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn create(&self, record: NewScholarship) -> Result<Scholarship> {
        let stamp = now();
        let created = Scholarship {
            id: Uuid::new_v4(),
            name: record.name,
            amount: record.amount,
            education_level: record.education_level,
            application_end_date: record.application_end_date,
            description: record.description,
            eligibility: record.eligibility,
            community: record.community,
            gender_requirement: record.gender_requirement,
            status: record.status,
            application_link: record.application_link,
            organization_logo: record.organization_logo,
            application_form_data: record.application_form_data,
            created_at: stamp,
            updated_at: stamp,
        };
        self.records.write().await.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: Uuid, changes: ScholarshipChanges) -> Result<Scholarship> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found(id))?;
        changes.apply_to(record);
        record.updated_at = now();
        Ok(record.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn get(&self, id: Uuid) -> Result<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("User {} not found", id)))
    }

    async fn create(&self, user: NewUser) -> Result<User> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email.eq_ignore_ascii_case(&user.email)) {
            return Err(Error::Conflict(format!(
                "Email {} is already registered",
                user.email
            )));
        }
        let stamp = now();
        let created = User {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
            is_active: true,
            created_at: stamp,
            updated_at: stamp,
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn update_profile(
        &self,
        id: Uuid,
        name: Option<String>,
        password_hash: Option<String>,
    ) -> Result<User> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| Error::NotFound(format!("User {} not found", id)))?;
        if let Some(name) = name {
            user.name = name;
        }
        if let Some(hash) = password_hash {
            user.password_hash = hash;
        }
        user.updated_at = now();
        Ok(user.clone())
    }
}
