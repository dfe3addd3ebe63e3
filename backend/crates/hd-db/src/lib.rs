pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{MIGRATOR, open_pool};
pub use error::{DbError, Result};
pub use repositories::profile_repository::ProfileRepository;
pub use repositories::user_repository::UserRepository;
