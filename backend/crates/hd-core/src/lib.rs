pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::identity_projection::IdentityProjection;
pub use models::profile::Profile;
pub use models::role::Role;
pub use models::user::User;

#[cfg(test)]
mod tests;
