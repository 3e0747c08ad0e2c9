// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The ticket lifecycle engine.
//!
//! These functions take a ticket by reference and return the updated copy.
//! They never touch the entity store; committing the result is the caller's job.

use crate::error::CoreError;
use crate::store::EntityStore;
use repair_shop_audit::Actor;
use repair_shop_domain::{
    Customer, CustomerRef, DomainError, Equipment, EquipmentRef, NewTicket, Note, RepairTicket,
    RepairType, StatusChange, TechnicianRef, TicketId, TicketStatus, is_blank,
    validate_ticket_fields,
};
use time::OffsetDateTime;

/// The contents of a ticket intake form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketDraft {
    /// When the equipment was received. Defaults to the creation time.
    pub date_time: Option<OffsetDateTime>,
    /// The selected customer.
    pub customer_id: Option<String>,
    /// The equipment resolved from the tag number.
    pub equipment_id: Option<String>,
    /// The kind of work.
    pub repair_type: RepairType,
    /// Description of the problem.
    pub repair_details: String,
}

/// One row of a ticket's status timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    /// The status the ticket moved to.
    pub status: TicketStatus,
    /// Who moved it.
    pub changed_by: String,
    /// When it moved.
    pub timestamp: OffsetDateTime,
    /// Whether this is the most recent entry.
    pub is_current: bool,
}

/// Opens a new ticket from an intake form.
///
/// The customer and equipment are resolved against `store`. The ticket gets
/// the next free identifier for the year of its `date_time`, starts out
/// `pending` with a single system history entry stamped `now`, and has no
/// notes. The store is not modified.
///
/// # Errors
///
/// Returns an error if:
/// - The customer or equipment is missing or unknown, or the repair details
///   are blank (all such fields are reported together)
/// - No ticket identifier can be allocated for the year
pub fn create_ticket(
    store: &EntityStore,
    draft: TicketDraft,
    technician: TechnicianRef,
    now: OffsetDateTime,
) -> Result<RepairTicket, CoreError> {
    let customer: Option<&Customer> = draft
        .customer_id
        .as_deref()
        .and_then(|id| store.find_customer(id));
    let equipment: Option<&Equipment> = draft
        .equipment_id
        .as_deref()
        .and_then(|id| store.find_equipment(id));

    validate_ticket_fields(
        customer.map(|c| c.id.as_str()),
        equipment.map(|e| e.id.as_str()),
        &draft.repair_details,
    )?;

    let (Some(customer), Some(equipment)) = (customer, equipment) else {
        return Err(CoreError::DomainViolation(
            DomainError::MissingRequiredFields {
                fields: vec![String::from("customerId"), String::from("equipmentId")],
            },
        ));
    };

    let date_time: OffsetDateTime = draft.date_time.unwrap_or(now);
    let year: u16 = u16::try_from(date_time.year())
        .map_err(|_| DomainError::InvalidTicketId(format!("RT-{}-", date_time.year())))?;
    let id: TicketId = store.next_ticket_id(year)?;

    let new_ticket: NewTicket = NewTicket {
        id,
        date_time,
        technician,
        customer: CustomerRef::from(customer),
        equipment: EquipmentRef::from(equipment),
        repair_type: draft.repair_type,
        repair_details: draft.repair_details,
    };

    Ok(RepairTicket::open(new_ticket, now))
}

/// Moves a ticket to `new_status`.
///
/// Every status is reachable from every other status, including itself, and
/// every call appends exactly one history entry attributed to `actor`.
#[must_use]
pub fn change_status(
    ticket: &RepairTicket,
    new_status: TicketStatus,
    actor: &Actor,
    now: OffsetDateTime,
) -> RepairTicket {
    let mut updated: RepairTicket = ticket.clone();
    updated.push_status_change(StatusChange {
        status: new_status,
        changed_by: actor.name.clone(),
        timestamp: now,
    });
    updated
}

/// Appends a note written by `actor`.
///
/// Blank text is ignored and the ticket is returned unchanged.
///
/// # Errors
///
/// Returns an error if the generated note identifier collides with an
/// existing note.
pub fn add_note(
    ticket: &RepairTicket,
    text: &str,
    actor: &Actor,
    now: OffsetDateTime,
) -> Result<RepairTicket, CoreError> {
    if is_blank(text) {
        return Ok(ticket.clone());
    }

    let mut updated: RepairTicket = ticket.clone();
    updated.push_note(Note {
        id: next_note_id(ticket, now),
        text: text.to_string(),
        created_by: actor.name.clone(),
        created_at: now,
    })?;
    Ok(updated)
}

/// Derives a note identifier from the millisecond timestamp.
///
/// If an earlier note already used the same or a later millisecond, the id
/// is bumped past it so identifiers stay unique and increasing.
#[must_use]
pub fn next_note_id(ticket: &RepairTicket, now: OffsetDateTime) -> String {
    let millis: i128 = now.unix_timestamp_nanos() / 1_000_000;
    let floor: Option<i128> = ticket
        .notes()
        .iter()
        .filter_map(|note| note.id.parse::<i128>().ok())
        .max()
        .map(|last| last + 1);

    floor.map_or(millis, |floor| millis.max(floor)).to_string()
}

/// Builds the status timeline for display, oldest first.
#[must_use]
pub fn timeline(ticket: &RepairTicket) -> Vec<TimelineEntry> {
    let last_index: usize = ticket.status_history().len().saturating_sub(1);
    ticket
        .status_history()
        .iter()
        .enumerate()
        .map(|(index, change)| TimelineEntry {
            status: change.status,
            changed_by: change.changed_by.clone(),
            timestamp: change.timestamp,
            is_current: index == last_index,
        })
        .collect()
}
