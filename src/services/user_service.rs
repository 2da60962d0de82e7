use std::sync::Arc;

use uuid::Uuid;

use crate::database::UserStore;
use crate::dto::auth_dto::{LoginPayload, RegisterPayload, UpdateProfilePayload};
use crate::error::{Error, Result};
use crate::models::user::{NewUser, User, ROLE_ADMIN, ROLE_USER};
use crate::utils::crypto::{hash_password, verify_password};

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

fn hash(plain: &str) -> Result<String> {
    hash_password(plain).map_err(|e| Error::Internal(format!("Password hashing failed: {}", e)))
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub async fn register(&self, payload: RegisterPayload) -> Result<User> {
        let email = payload.email.trim().to_lowercase();
        if self.store.find_by_email(&email).await?.is_some() {
            return Err(Error::Conflict(format!("Email {} is already registered", email)));
        }
        let user = self
            .store
            .create(NewUser {
                name: payload.name.trim().to_string(),
                email,
                password_hash: hash(&payload.password)?,
                role: ROLE_USER.to_string(),
            })
            .await?;
        tracing::info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    pub async fn login(&self, payload: LoginPayload) -> Result<User> {
        let email = payload.email.trim().to_lowercase();
        let Some(user) = self.store.find_by_email(&email).await? else {
            return Err(Error::Unauthorized("Invalid email or password".into()));
        };
        if !user.is_active || !verify_password(&payload.password, &user.password_hash) {
            tracing::warn!(user_id = %user.id, "rejected login");
            return Err(Error::Unauthorized("Invalid email or password".into()));
        }
        Ok(user)
    }

    pub async fn profile(&self, id: Uuid) -> Result<User> {
        self.store.get(id).await
    }

    pub async fn update_profile(&self, id: Uuid, payload: UpdateProfilePayload) -> Result<User> {
        let password_hash = match payload.new_password.as_deref() {
            Some(new_password) => {
                let current = self.store.get(id).await?;
                let confirmed = payload
                    .current_password
                    .as_deref()
                    .is_some_and(|p| verify_password(p, &current.password_hash));
                if !confirmed {
                    return Err(Error::Unauthorized("Current password is incorrect".into()));
                }
                Some(hash(new_password)?)
            }
            None => None,
        };
        let name = payload.name.map(|n| n.trim().to_string());
        self.store.update_profile(id, name, password_hash).await
    }

    /// Creates the configured admin account on first start.
    pub async fn ensure_admin(&self, email: &str, password: &str) -> Result<()> {
        let email = email.trim().to_lowercase();
        if let Some(existing) = self.store.find_by_email(&email).await? {
            if !existing.is_admin() {
                tracing::warn!(%email, "configured admin email belongs to a non-admin account");
            }
            return Ok(());
        }
        self.store
            .create(NewUser {
                name: "Administrator".to_string(),
                email: email.clone(),
                password_hash: hash(password)?,
                role: ROLE_ADMIN.to_string(),
            })
            .await?;
        tracing::info!(%email, "admin account bootstrapped");
        Ok(())
    }
}
