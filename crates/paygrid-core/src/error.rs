use thiserror::Error;

/// Business failures raised by an account shard.
///
/// These never cross the wire as transport errors; services fold them into
/// reply fields so the caller sees a message, not a broken channel.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("username '{username}' is already registered at this bank")]
    UsernameTaken { username: String },

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("login request for '{requested}' reached bank '{expected}'")]
    WrongBank { expected: String, requested: String },

    #[error("account not found")]
    NotFound,

    #[error("unauthorized")]
    Unauthorized,
}
