use serde::{Deserialize, Serialize};
use std::fmt;

/// Shortest accepted username, in characters
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Longest accepted username, in characters
pub const MAX_USERNAME_LENGTH: usize = 64;

/// Username value object
///
/// # Invariants
/// - Surrounding whitespace is stripped
/// - Between 3 and 64 characters long
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Creates a new Username value object
    ///
    /// # Returns
    /// * `Ok(Username)` - If the trimmed name satisfies the length rules
    /// * `Err(String)` - Otherwise
    ///
    /// # Example
    /// ```
    /// use promptdeck_api::domain::user::value_objects::Username;
    ///
    /// let name = Username::new("  alice ").expect("valid username");
    /// assert_eq!(name.as_str(), "alice");
    /// ```
    pub fn new(username: impl AsRef<str>) -> Result<Self, String> {
        let trimmed = username.as_ref().trim();
        let length = trimmed.chars().count();

        if length < MIN_USERNAME_LENGTH {
            return Err(format!(
                "Username must be at least {} characters",
                MIN_USERNAME_LENGTH
            ));
        }
        if length > MAX_USERNAME_LENGTH {
            return Err(format!(
                "Username must be at most {} characters",
                MAX_USERNAME_LENGTH
            ));
        }

        Ok(Username(trimmed.to_string()))
    }

    /// Returns the username as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Username::new(value)
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_username() {
        assert!(Username::new("alice").is_ok());
    }

    #[test]
    fn username_is_trimmed() {
        let name = Username::new("  bob  ").unwrap();
        assert_eq!(name.as_str(), "bob");
    }

    #[test]
    fn valid_username_minimum_length() {
        assert!(Username::new("abc").is_ok());
    }

    #[test]
    fn invalid_username_too_short() {
        assert!(Username::new("ab").is_err());
    }

    #[test]
    fn invalid_username_only_whitespace() {
        assert!(Username::new("      ").is_err());
    }

    #[test]
    fn invalid_username_too_long() {
        let long = "x".repeat(MAX_USERNAME_LENGTH + 1);
        assert!(Username::new(long).is_err());
    }

    #[test]
    fn username_deserialize_validates() {
        let ok: Result<Username, _> = serde_json::from_str("\"carol\"");
        assert!(ok.is_ok());

        let err: Result<Username, _> = serde_json::from_str("\"c\"");
        assert!(err.is_err());
    }

    #[test]
    fn username_display() {
        let name = Username::new("dave").unwrap();
        assert_eq!(format!("{}", name), "dave");
    }
}
