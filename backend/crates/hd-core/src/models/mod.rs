pub mod identity_projection;
pub mod profile;
pub mod role;
pub mod user;
