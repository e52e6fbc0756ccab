use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use sha2::{Digest, Sha256};

/// Length of a session key in characters.
pub const SESSION_KEY_LEN: usize = 32;

/// Derives the session key for a (username, password) pair: the URL-safe
/// base64 form of SHA-256(username + password), truncated to
/// [`SESSION_KEY_LEN`] characters.
///
/// The key is deterministic and carries no lifetime of its own; possession
/// authorizes operations on the account, so it is treated with the same
/// sensitivity as the password and never logged.
pub fn derive_session_key(username: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(username.as_bytes());
    hasher.update(password.as_bytes());
    let encoded = URL_SAFE.encode(hasher.finalize());
    encoded[..SESSION_KEY_LEN].to_string()
}
