// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use repair_shop::CoreError;
use repair_shop_domain::DomainError;
use repair_shop_persistence::PersistenceError;
use thiserror::Error;

use crate::password_policy::PasswordPolicyError;

/// Authentication and session errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The credentials did not match any known user.
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// The operation needs a signed-in user and there is none.
    #[error("Sign in required to {action}")]
    Unauthenticated {
        /// The operation that was attempted.
        action: String,
    },
    /// The credential table or session storage failed.
    #[error("Credential store error: {message}")]
    CredentialStore {
        /// A description of the failure.
        message: String,
    },
}

impl From<PersistenceError> for AuthError {
    fn from(err: PersistenceError) -> Self {
        Self::CredentialStore {
            message: err.to_string(),
        }
    }
}

impl From<bcrypt::BcryptError> for AuthError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::CredentialStore {
            message: format!("Password hashing failed: {err}"),
        }
    }
}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// No user is signed in.
    #[error("Sign in required to {action}")]
    Unauthenticated {
        /// The operation that was attempted.
        action: String,
    },
    /// One or more request fields were missing or invalid.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// The offending fields, using their wire names.
        fields: Vec<String>,
        /// A human-readable description of the failure.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// Password policy violation.
    #[error("Password policy violation: {message}")]
    PasswordPolicyViolation {
        /// A human-readable description of the policy violation.
        message: String,
    },
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Builds a validation error for a single field.
    #[must_use]
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            fields: vec![field.to_string()],
            message: message.into(),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthenticated { action } => Self::Unauthenticated { action },
            AuthError::CredentialStore { message } => Self::Internal { message },
        }
    }
}

impl From<PasswordPolicyError> for ApiError {
    fn from(err: PasswordPolicyError) -> Self {
        Self::PasswordPolicyViolation {
            message: err.to_string(),
        }
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        Self::Internal {
            message: format!("Storage failure: {err}"),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::MissingRequiredFields { fields } => {
            ApiError::ValidationFailed { fields, message }
        }
        DomainError::MissingTicketReference | DomainError::InvalidTicketId(_) => {
            ApiError::invalid_field("ticketId", message)
        }
        DomainError::EmptyNote => ApiError::invalid_field("text", message),
        DomainError::InvalidTicketStatus(_) => ApiError::invalid_field("status", message),
        DomainError::InvalidRepairType(_) => ApiError::invalid_field("repairType", message),
        DomainError::InvalidUserRole(_) => ApiError::invalid_field("role", message),
        DomainError::InvalidTagNumber(_) | DomainError::DuplicateTagNumber(_) => {
            ApiError::invalid_field("tagNumber", message)
        }
        DomainError::DuplicateCustomerId(_) | DomainError::DuplicateEquipmentId(_) => {
            ApiError::invalid_field("id", message)
        }
        DomainError::TicketNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Ticket"),
            message,
        },
        DomainError::CustomerNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Customer"),
            message,
        },
        DomainError::EquipmentNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Equipment"),
            message,
        },
        DomainError::InvalidStatusHistory { .. }
        | DomainError::DuplicateNoteId { .. }
        | DomainError::DuplicateTicketId(_)
        | DomainError::TicketSequenceExhausted(_) => ApiError::Internal { message },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}
