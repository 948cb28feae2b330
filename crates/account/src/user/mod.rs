pub mod password;
pub mod repository;

pub use password::{generate_temp_password, HashedCredential, PasswordHasher};
pub use repository::{PostgresUserRepository, User, UserRepository};
