// JWT token creation and verification
// Stateless session tokens with 8-hour expiry

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Lifetime of an issued token, in hours
pub const TOKEN_TTL_HOURS: i64 = 8;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID (subject), as a decimal string
    pub sub: String,
    /// Expiry timestamp (seconds since epoch)
    pub exp: usize,
}

impl Claims {
    /// Numeric user id carried in `sub`
    pub fn user_id(&self) -> Result<i64, String> {
        self.sub
            .parse()
            .map_err(|_| format!("Invalid subject: {}", self.sub))
    }
}

/// Creates a signed HS256 token whose subject is `user_id`
///
/// # Example
/// ```
/// use promptdeck_api::auth::jwt::create_token;
///
/// let token = create_token(1, "your-secret-key").expect("valid token");
/// assert_eq!(token.split('.').count(), 3);
/// ```
pub fn create_token(user_id: i64, secret: &str) -> Result<String, String> {
    let expiry = Utc::now() + Duration::hours(TOKEN_TTL_HOURS);
    let claims = Claims {
        sub: user_id.to_string(),
        exp: expiry.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| e.to_string())
}

/// Verifies signature and expiry, returning the decoded claims
///
/// # Example
/// ```
/// use promptdeck_api::auth::jwt::{create_token, verify_token};
///
/// let token = create_token(42, "your-secret-key").unwrap();
/// let claims = verify_token(&token, "your-secret-key").expect("valid token");
/// assert_eq!(claims.user_id(), Ok(42));
/// ```
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test-secret-key-for-unit-tests";

    #[test]
    fn create_and_verify_token() {
        let token = create_token(7, TEST_SECRET).expect("valid token");

        let claims = verify_token(&token, TEST_SECRET).expect("valid verification");
        assert_eq!(claims.user_id(), Ok(7));
    }

    #[test]
    fn wrong_secret_fails() {
        let token = create_token(1, TEST_SECRET).expect("valid token");
        assert!(verify_token(&token, "wrong-secret").is_err());
    }

    #[test]
    fn invalid_token_fails() {
        assert!(verify_token("invalid.token.string", TEST_SECRET).is_err());
    }

    #[test]
    fn expired_token_fails() {
        let claims = Claims {
            sub: "1".to_string(),
            exp: (Utc::now() - Duration::hours(1)).timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(TEST_SECRET.as_ref()),
        )
        .unwrap();

        assert!(verify_token(&token, TEST_SECRET).is_err());
    }

    #[test]
    fn non_numeric_subject_is_rejected() {
        let claims = Claims {
            sub: "alice".to_string(),
            exp: 0,
        };
        assert!(claims.user_id().is_err());
    }

    #[test]
    fn token_expiry_set() {
        let token = create_token(3, TEST_SECRET).expect("valid token");

        let claims = verify_token(&token, TEST_SECRET).expect("valid verification");
        let expiry_time = claims.exp as i64;
        let now = Utc::now().timestamp();
        let latest = (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp();

        assert!(expiry_time > now);
        assert!(expiry_time <= latest + 10);
    }
}
