pub mod envelope;
pub mod error;
pub mod handlers;
pub mod mail;
pub mod server;
pub mod token;
pub mod user;

pub use envelope::Envelope;
pub use error::{AccountError, Result};
pub use handlers::{
    check_email, find_password, signin, signup, CheckEmailRequest, FindPasswordRequest,
    SigninRequest, SignupRequest,
};
pub use mail::{
    ConsoleProvider, MailConfig, MailMessage, MailProviderConfig, Mailer, SendGridProvider,
};
pub use server::{start_server, AppState};
pub use token::{Claims, TokenIssuer};
pub use user::{
    generate_temp_password, HashedCredential, PasswordHasher, PostgresUserRepository, User,
    UserRepository,
};
