//! Owner email used by the my-list lookup

use super::ValidationError;

/// Trimmed, non-empty owner email.
///
/// Matching is exact after trimming; no case folding or format checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnerEmail(String);

impl OwnerEmail {
    /// Trim surrounding whitespace and reject blank input.
    ///
    /// # Example
    /// ```
    /// use tripnest_server::models::OwnerEmail;
    ///
    /// assert_eq!(OwnerEmail::new("  a@x.com ").unwrap().as_str(), "a@x.com");
    /// assert!(OwnerEmail::new("   ").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "email" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OwnerEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
