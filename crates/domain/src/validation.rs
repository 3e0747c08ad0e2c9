// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Equipment;
use std::collections::HashSet;

/// Returns whether `text` is empty or contains only whitespace.
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Validates the required fields of a ticket intake form.
///
/// The customer and equipment must already be resolved against the entity
/// store; pass `None` for either when the lookup failed. Every missing field
/// is reported, not just the first.
///
/// # Arguments
///
/// * `customer_id` - The resolved customer identifier, if any
/// * `equipment_id` - The resolved equipment identifier, if any
/// * `repair_details` - The problem description
///
/// # Errors
///
/// Returns `DomainError::MissingRequiredFields` naming each of
/// `customerId`, `equipmentId` and `repairDetails` that is missing or blank.
pub fn validate_ticket_fields(
    customer_id: Option<&str>,
    equipment_id: Option<&str>,
    repair_details: &str,
) -> Result<(), DomainError> {
    let mut missing: Vec<String> = Vec::new();

    if customer_id.is_none_or(is_blank) {
        missing.push(String::from("customerId"));
    }
    if equipment_id.is_none_or(is_blank) {
        missing.push(String::from("equipmentId"));
    }
    if is_blank(repair_details) {
        missing.push(String::from("repairDetails"));
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DomainError::MissingRequiredFields { fields: missing })
    }
}

/// Validates that an equipment tag number is usable for lookups.
///
/// # Errors
///
/// Returns an error if the tag number is empty or whitespace-only.
pub fn validate_tag_number(tag_number: &str) -> Result<(), DomainError> {
    if is_blank(tag_number) {
        return Err(DomainError::InvalidTagNumber(String::from(
            "Tag number cannot be empty",
        )));
    }
    Ok(())
}

/// Validates that no two equipment items share a tag number.
///
/// Tag numbers are compared case-insensitively, the same way lookups match them.
///
/// # Errors
///
/// Returns an error naming the first duplicated tag number.
pub fn validate_tag_numbers_unique(equipment: &[Equipment]) -> Result<(), DomainError> {
    let mut seen: HashSet<String> = HashSet::new();
    for item in equipment {
        validate_tag_number(&item.tag_number)?;
        if !seen.insert(item.tag_number.trim().to_lowercase()) {
            return Err(DomainError::DuplicateTagNumber(item.tag_number.clone()));
        }
    }
    Ok(())
}
