// Password hashing utilities (bcrypt)

use bcrypt::{hash, verify, DEFAULT_COST};

/// Shortest password accepted at registration
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Hashes a password using bcrypt with a random salt
///
/// # Example
/// ```
/// use promptdeck_api::auth::password::hash_password;
///
/// let hash = hash_password("my_password").expect("valid hash");
/// assert!(hash.starts_with("$2"));
/// ```
pub fn hash_password(password: &str) -> Result<String, String> {
    hash(password, DEFAULT_COST).map_err(|e| e.to_string())
}

/// Checks a plaintext password against a stored bcrypt hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, String> {
    verify(password, hash).map_err(|e| e.to_string())
}
