use crate::{AuthError, Result as AuthErrorResult};

use hd_core::ErrorLocation;

use std::panic::Location;

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, Version};

/// One-way password hashing. Stored hashes are self-describing PHC strings.
pub trait CredentialHasher: Send + Sync {
    fn hash(&self, plaintext: &str) -> AuthErrorResult<String>;

    /// `Ok(false)` for a wrong password, `Err` only for an unusable stored hash
    fn verify(&self, plaintext: &str, stored_hash: &str) -> AuthErrorResult<bool>;
}

/// Argon2id cost parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingParams {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    #[track_caller]
    pub fn new(params: HashingParams) -> AuthErrorResult<Self> {
        let params = Params::new(params.memory_kib, params.iterations, params.parallelism, None)
            .map_err(|e| AuthError::Hashing {
                message: format!("invalid argon2 parameters: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

impl CredentialHasher for Argon2Hasher {
    #[track_caller]
    fn hash(&self, plaintext: &str) -> AuthErrorResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::Hashing {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    #[track_caller]
    fn verify(&self, plaintext: &str, stored_hash: &str) -> AuthErrorResult<bool> {
        let parsed = PasswordHash::new(stored_hash).map_err(|e| AuthError::Hashing {
            message: format!("stored hash is malformed: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        match self.argon2.verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AuthError::Hashing {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
