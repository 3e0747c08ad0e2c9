// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Password policy validation.
//!
//! This module enforces password requirements for console credentials.

use thiserror::Error;

/// Password policy errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    /// Password is too short.
    #[error("Password must be at least {min_length} characters long")]
    TooShort { min_length: usize },

    /// Password matches a forbidden value.
    #[error("Password must not match {field}")]
    MatchesForbiddenField { field: String },

    /// Password and confirmation do not match.
    #[error("New passwords do not match")]
    ConfirmationMismatch,
}

/// Password policy configuration.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    /// Minimum password length, in characters.
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self { min_length: 8 }
    }
}

impl PasswordPolicy {
    /// Creates a policy with the given minimum length.
    #[must_use]
    pub const fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Validates a new password against the policy.
    ///
    /// # Arguments
    ///
    /// * `password` - The new password
    /// * `confirmation` - The password typed a second time
    /// * `email` - The user's email address (password must not match)
    /// * `name` - The user's display name (password must not match)
    ///
    /// # Errors
    ///
    /// Returns a `PasswordPolicyError` if the password does not meet policy requirements.
    pub fn validate(
        &self,
        password: &str,
        confirmation: &str,
        email: &str,
        name: &str,
    ) -> Result<(), PasswordPolicyError> {
        if password != confirmation {
            return Err(PasswordPolicyError::ConfirmationMismatch);
        }

        if password.chars().count() < self.min_length {
            return Err(PasswordPolicyError::TooShort {
                min_length: self.min_length,
            });
        }

        // Case-insensitive
        let password_lower: String = password.to_lowercase();
        if password_lower == email.to_lowercase() {
            return Err(PasswordPolicyError::MatchesForbiddenField {
                field: String::from("email"),
            });
        }
        if password_lower == name.to_lowercase() {
            return Err(PasswordPolicyError::MatchesForbiddenField {
                field: String::from("name"),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        let policy: PasswordPolicy = PasswordPolicy::default();

        assert!(
            policy
                .validate("bench-tester", "bench-tester", "tech@example.com", "Tech")
                .is_ok()
        );
        assert!(
            policy
                .validate("exactly8", "exactly8", "tech@example.com", "Tech")
                .is_ok()
        );
    }

    #[test]
    fn test_password_too_short() {
        let policy: PasswordPolicy = PasswordPolicy::default();

        let result: Result<(), PasswordPolicyError> =
            policy.validate("tech123", "tech123", "tech@example.com", "Tech");

        assert_eq!(
            result.unwrap_err(),
            PasswordPolicyError::TooShort { min_length: 8 }
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let policy: PasswordPolicy = PasswordPolicy::new(4);

        assert!(policy.validate("ñññ", "ñññ", "a@b.c", "N").is_err());
        assert!(policy.validate("ññññ", "ññññ", "a@b.c", "N").is_ok());
    }

    #[test]
    fn test_confirmation_mismatch_is_checked_first() {
        let policy: PasswordPolicy = PasswordPolicy::default();

        let result: Result<(), PasswordPolicyError> =
            policy.validate("short", "other", "tech@example.com", "Tech");

        assert_eq!(result.unwrap_err(), PasswordPolicyError::ConfirmationMismatch);
    }

    #[test]
    fn test_password_matching_email_is_rejected() {
        let policy: PasswordPolicy = PasswordPolicy::default();

        let result: Result<(), PasswordPolicyError> = policy.validate(
            "Tech@Example.com",
            "Tech@Example.com",
            "tech@example.com",
            "Tech",
        );

        assert_eq!(
            result.unwrap_err(),
            PasswordPolicyError::MatchesForbiddenField {
                field: String::from("email"),
            }
        );
    }

    #[test]
    fn test_password_matching_name_is_rejected() {
        let policy: PasswordPolicy = PasswordPolicy::default();

        let result: Result<(), PasswordPolicyError> = policy.validate(
            "technician user",
            "technician user",
            "tech@example.com",
            "Technician User",
        );

        assert!(matches!(
            result,
            Err(PasswordPolicyError::MatchesForbiddenField { .. })
        ));
    }
}
