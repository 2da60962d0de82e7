pub mod client;
pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod query;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::config::{Config, StorageBackend};
use crate::database::{
    pool::{create_pool, run_migrations},
    MemoryScholarshipStore, MemoryUserStore, PgScholarshipStore, PgUserStore, ScholarshipStore,
    UserStore,
};
use crate::error::Result;
use crate::services::{
    kpr_service::KprService, scholarship_service::ScholarshipService, user_service::UserService,
};
use crate::utils::token::JwtKeys;

#[derive(Clone)]
pub struct AppState {
    pub scholarship_service: ScholarshipService,
    pub user_service: UserService,
    pub kpr_service: KprService,
    pub jwt: JwtKeys,
}

impl AppState {
    pub fn new(
        scholarships: Arc<dyn ScholarshipStore>,
        users: Arc<dyn UserStore>,
        jwt: JwtKeys,
        kpr_documents_dir: &str,
    ) -> Self {
        Self {
            scholarship_service: ScholarshipService::new(scholarships),
            user_service: UserService::new(users),
            kpr_service: KprService::new(kpr_documents_dir),
            jwt,
        }
    }

    /// In-process stores; nothing survives a restart.
    pub fn in_memory(jwt: JwtKeys, kpr_documents_dir: &str) -> Self {
        Self::new(
            Arc::new(MemoryScholarshipStore::new()),
            Arc::new(MemoryUserStore::new()),
            jwt,
            kpr_documents_dir,
        )
    }

    /// Builds the state for the configured storage backend, running
    /// migrations when it is Postgres.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let jwt = JwtKeys::new(&config.jwt_secret, config.jwt_ttl_minutes);
        match config.storage {
            StorageBackend::Postgres => {
                let pool = create_pool(config).await?;
                run_migrations(&pool).await?;
                Ok(Self::new(
                    Arc::new(PgScholarshipStore::new(pool.clone())),
                    Arc::new(PgUserStore::new(pool)),
                    jwt,
                    &config.kpr_documents_dir,
                ))
            }
            StorageBackend::Memory => {
                tracing::warn!("using in-memory storage; data is lost on restart");
                Ok(Self::in_memory(jwt, &config.kpr_documents_dir))
            }
        }
    }
}
