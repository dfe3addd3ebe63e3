pub mod account_service;
pub mod error;
pub mod identity_projection;
pub mod profile_sync;
pub mod registration;

pub use account_service::AccountService;
pub use error::{AccountError, Result};
pub use identity_projection::project;
pub use profile_sync::{IdentityWrite, sync_profile};
pub use registration::{RegistrationRequest, ValidatedRegistration};
