//! Account operations over the user and profile stores.
//!
//! Every write that touches `users` runs inside one transaction together with
//! its profile step, so a failure leaves neither row behind.

use crate::error::{DUPLICATE_EMAIL_MESSAGE, DUPLICATE_USERNAME_MESSAGE};
use crate::{
    AccountError, IdentityWrite, RegistrationRequest, Result as AccountErrorResult, project,
    sync_profile,
};

use hd_auth::{AuthError, CredentialHasher, PasswordPolicy};
use hd_core::validation::{validate_email, validate_name};
use hd_core::{ErrorLocation, IdentityProjection, User};
use hd_db::{ProfileRepository, UserRepository};

use std::panic::Location;
use std::sync::Arc;

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct AccountService {
    pool: SqlitePool,
    users: UserRepository,
    profiles: ProfileRepository,
    hasher: Arc<dyn CredentialHasher>,
    policy: PasswordPolicy,
}

impl AccountService {
    pub fn new(pool: SqlitePool, hasher: Arc<dyn CredentialHasher>, policy: PasswordPolicy) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            profiles: ProfileRepository::new(pool.clone()),
            pool,
            hasher,
            policy,
        }
    }

    /// Validate and persist a new account plus its profile.
    ///
    /// Store lookups for duplicates happen before the transaction opens; a
    /// race lost after that surfaces as [`AccountError::Duplicate`].
    pub async fn register(&self, request: RegistrationRequest) -> AccountErrorResult<User> {
        let candidate = request.validate(&self.policy)?;

        if self.users.email_exists(&candidate.email).await? {
            return Err(AccountError::validation("email", DUPLICATE_EMAIL_MESSAGE));
        }
        if self.users.username_exists(&candidate.username).await? {
            return Err(AccountError::validation("username", DUPLICATE_USERNAME_MESSAGE));
        }

        let password_hash = self.hash_password(candidate.password).await?;
        let user = User::new(
            candidate.username,
            candidate.email,
            candidate.first_name,
            candidate.last_name,
            password_hash,
        );

        let mut tx = self.pool.begin().await?;

        UserRepository::create(&mut *tx, &user).await?;
        match candidate.role {
            Some(role) => ProfileRepository::upsert_role(&mut *tx, user.id, role).await?,
            None => {
                sync_profile(&mut tx, user.id, IdentityWrite::Created).await?;
            }
        }

        tx.commit().await?;

        log::info!("Registered user '{}' ({})", user.username, user.id);
        Ok(user)
    }

    /// Check a username/password pair. Unknown usernames and wrong passwords
    /// are indistinguishable to the caller. The username is trimmed the same
    /// way registration trims it.
    pub async fn authenticate(&self, username: &str, password: &str) -> AccountErrorResult<User> {
        let Some(user) = self.users.find_by_username(username.trim()).await? else {
            log::debug!("Login rejected: unknown username");
            return Err(AccountError::invalid_credentials());
        };

        if !self
            .verify_password(password.to_string(), user.password_hash.clone())
            .await?
        {
            log::debug!("Login rejected: wrong password for user {}", user.id);
            return Err(AccountError::invalid_credentials());
        }

        if !user.is_active {
            return Err(AccountError::InactiveAccount {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(user)
    }

    /// Persist changed identity fields, then run the profile sync rule in the
    /// same transaction.
    pub async fn update_identity(&self, user: &User) -> AccountErrorResult<User> {
        validate_email(&user.email)?;
        validate_name("first_name", &user.first_name)?;
        validate_name("last_name", &user.last_name)?;

        let mut updated = user.clone();
        updated.updated_at = Utc::now();

        let mut tx = self.pool.begin().await?;

        if !UserRepository::update(&mut *tx, &updated).await? {
            return Err(AccountError::NotFound {
                user_id: user.id,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        sync_profile(&mut tx, updated.id, IdentityWrite::Updated).await?;

        tx.commit().await?;

        log::info!("Updated user '{}' ({})", updated.username, updated.id);
        Ok(updated)
    }

    /// Load a user that may still hold a session
    pub async fn find_active_user(&self, user_id: Uuid) -> AccountErrorResult<User> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AccountError::NotFound {
                user_id,
                location: ErrorLocation::from(Location::caller()),
            })?;

        if !user.is_active {
            return Err(AccountError::InactiveAccount {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(user)
    }

    pub async fn project(&self, user: &User) -> AccountErrorResult<IdentityProjection> {
        Ok(project(&self.profiles, user).await?)
    }

    async fn hash_password(&self, password: String) -> AccountErrorResult<String> {
        let hasher = Arc::clone(&self.hasher);
        let hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthError::Hashing {
                message: format!("hashing task failed: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })??;
        Ok(hash)
    }

    async fn verify_password(&self, password: String, stored_hash: String) -> AccountErrorResult<bool> {
        let hasher = Arc::clone(&self.hasher);
        let matches = tokio::task::spawn_blocking(move || hasher.verify(&password, &stored_hash))
            .await
            .map_err(|e| AuthError::Hashing {
                message: format!("verification task failed: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })??;
        Ok(matches)
    }
}
