use std::sync::Arc;

use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::auth::dto::PublicUser;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::repo::{StoreError, UserStore};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("User already exists")]
    DuplicateCredential,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateKey => AuthError::DuplicateCredential,
            StoreError::Other(err) => AuthError::Internal(err.into()),
        }
    }
}

/// Validates signup/signin requests against the credential store.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn UserStore>,
}

impl AuthService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Hash the password and insert a new user. A duplicate email is
    /// reported by the store's unique constraint, so concurrent signups
    /// for the same email resolve without a pre-check.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn signup(&self, email: &str, password: &str) -> Result<PublicUser, AuthError> {
        let password_hash = hash_password(password)?;

        let user = self.store.create_user(email, &password_hash).await?;

        info!(user_id = %user.id, "user signed up");
        Ok(PublicUser::from(user))
    }

    /// Look the user up and verify the password. Unknown email and wrong
    /// password collapse into the same error so callers cannot tell
    /// which half of the credential failed.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn signin(&self, email: &str, password: &str) -> Result<PublicUser, AuthError> {
        let user = match self.store.find_by_email(email).await? {
            Some(user) => user,
            None => {
                warn!("signin unknown email");
                return Err(AuthError::InvalidCredentials);
            }
        };

        if !verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "signin invalid password");
            return Err(AuthError::InvalidCredentials);
        }

        info!(user_id = %user.id, "user signed in");
        Ok(PublicUser::from(user))
    }
}
