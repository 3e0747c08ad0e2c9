// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// The role of a signed-in console user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Shop administrator.
    Admin,
    /// Bench technician.
    Technician,
}

impl UserRole {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Technician => "technician",
        }
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "technician" => Ok(Self::Technician),
            _ => Err(DomainError::InvalidUserRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A console user identity.
///
/// This is the shape persisted in the session storage. It never carries a
/// password; credentials live only in the credential table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable user identifier.
    pub id: String,
    /// Display name, recorded as `changedBy` / `createdBy` on ticket activity.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Login email address.
    pub email: String,
    /// Access role.
    pub role: UserRole,
    /// Optional avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Creates a new `User` without an avatar.
    #[must_use]
    pub fn new(id: &str, name: &str, phone: &str, email: &str, role: UserRole) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            role,
            avatar: None,
        }
    }

    /// Returns this user with the given avatar URL.
    #[must_use]
    pub fn with_avatar(mut self, avatar: &str) -> Self {
        self.avatar = Some(avatar.to_string());
        self
    }

    /// Returns whether this user holds the admin role.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }
}

/// A customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Customer identifier.
    pub id: String,
    /// Full name.
    pub name: String,
    /// The agency (branch) the customer works at.
    pub agency: String,
    /// Job position within the agency.
    pub position: String,
    /// When the customer record was created.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Customer {
    /// Creates a new `Customer`.
    #[must_use]
    pub fn new(
        id: &str,
        name: &str,
        agency: &str,
        position: &str,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            agency: agency.to_string(),
            position: position.to_string(),
            created_at,
        }
    }
}

/// An equipment inventory item.
///
/// Equipment is identified for ticket intake by its tag number, which is
/// unique across the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    /// Equipment identifier.
    pub id: String,
    /// Asset tag number (e.g. `05-04545`).
    pub tag_number: String,
    /// Device category (e.g. Desktop, Laptop, Printer).
    #[serde(rename = "type")]
    pub equipment_type: String,
    /// Manufacturer.
    pub brand: String,
    /// Model name.
    pub model: String,
    /// Manufacturer serial number.
    pub serial_number: String,
    /// When the item entered the inventory.
    #[serde(with = "time::serde::rfc3339")]
    pub entry_date: OffsetDateTime,
}

impl Equipment {
    /// Returns whether `tag` names this item.
    ///
    /// Matching is exact but case-insensitive, and ignores surrounding whitespace.
    #[must_use]
    pub fn matches_tag(&self, tag: &str) -> bool {
        self.tag_number.trim().to_lowercase() == tag.trim().to_lowercase()
    }
}
