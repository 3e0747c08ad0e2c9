// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Customer, Equipment};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// The name recorded on the opening status history entry of every ticket.
pub const SYSTEM_ACTOR_NAME: &str = "System";

/// The status of a repair ticket.
///
/// Any status may follow any other status. Technicians can reopen completed
/// or cancelled tickets, so no state is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    /// Received, no work started.
    #[default]
    Pending,
    /// Work underway.
    InProgress,
    /// Work finished.
    Completed,
    /// Waiting on ordered parts.
    PendingParts,
    /// Abandoned.
    Cancelled,
}

impl TicketStatus {
    /// Every status, in display order.
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::InProgress,
        Self::Completed,
        Self::PendingParts,
        Self::Cancelled,
    ];

    /// Converts this status to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::PendingParts => "pending_parts",
            Self::Cancelled => "cancelled",
        }
    }

    /// Human-readable label for badges and toasts.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::PendingParts => "Pending Parts",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl FromStr for TicketStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "pending_parts" => Ok(Self::PendingParts),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidTicketStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The kind of work a ticket was opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RepairType {
    /// Scheduled maintenance and cleaning.
    Maintenance,
    /// General repair.
    #[default]
    Repair,
    /// Equipment assignment to a customer.
    Assignment,
    /// Operating system or application fault.
    SoftwareIssue,
    /// Component fault.
    HardwareIssue,
    /// Anything else.
    Other,
}

impl RepairType {
    /// Converts this repair type to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Maintenance => "maintenance",
            Self::Repair => "repair",
            Self::Assignment => "assignment",
            Self::SoftwareIssue => "software_issue",
            Self::HardwareIssue => "hardware_issue",
            Self::Other => "other",
        }
    }
}

impl FromStr for RepairType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "maintenance" => Ok(Self::Maintenance),
            "repair" => Ok(Self::Repair),
            "assignment" => Ok(Self::Assignment),
            "software_issue" => Ok(Self::SoftwareIssue),
            "hardware_issue" => Ok(Self::HardwareIssue),
            "other" => Ok(Self::Other),
            _ => Err(DomainError::InvalidRepairType(s.to_string())),
        }
    }
}

impl std::fmt::Display for RepairType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A repair ticket identifier of the form `RT-<year>-<sequence>`.
///
/// The sequence is rendered zero-padded to four digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TicketId {
    year: u16,
    sequence: u32,
}

impl TicketId {
    /// Creates a new `TicketId`.
    #[must_use]
    pub const fn new(year: u16, sequence: u32) -> Self {
        Self { year, sequence }
    }

    /// Returns the year component.
    #[must_use]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the sequence component.
    #[must_use]
    pub const fn sequence(&self) -> u32 {
        self.sequence
    }
}

impl FromStr for TicketId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidTicketId(s.to_string());

        let rest: &str = s.strip_prefix("RT-").ok_or_else(invalid)?;
        let (year, sequence) = rest.split_once('-').ok_or_else(invalid)?;
        if year.is_empty()
            || sequence.is_empty()
            || !year.bytes().all(|b| b.is_ascii_digit())
            || !sequence.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let year: u16 = year.parse().map_err(|_| invalid())?;
        let sequence: u32 = sequence.parse().map_err(|_| invalid())?;
        let id: Self = Self::new(year, sequence);

        // Only the formatted spelling is accepted, so each ticket has one id.
        if id.to_string() != s {
            return Err(invalid());
        }
        Ok(id)
    }
}

impl TryFrom<String> for TicketId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TicketId> for String {
    fn from(id: TicketId) -> Self {
        id.to_string()
    }
}

impl std::fmt::Display for TicketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RT-{}-{:04}", self.year, self.sequence)
    }
}

/// The technician a ticket was opened by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicianRef {
    /// User identifier.
    pub id: String,
    /// Display name at the time the ticket was opened.
    pub name: String,
}

/// Snapshot of the customer fields copied onto a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRef {
    /// Customer identifier.
    pub id: String,
    /// Customer name.
    pub name: String,
    /// Customer agency.
    pub agency: String,
    /// Customer position.
    pub position: String,
}

impl From<&Customer> for CustomerRef {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id.clone(),
            name: customer.name.clone(),
            agency: customer.agency.clone(),
            position: customer.position.clone(),
        }
    }
}

/// Snapshot of the equipment fields copied onto a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentRef {
    /// Equipment identifier.
    pub id: String,
    /// Asset tag number.
    pub tag_number: String,
    /// Device category.
    #[serde(rename = "type")]
    pub equipment_type: String,
    /// Manufacturer.
    pub brand: String,
    /// Model name.
    pub model: String,
}

impl From<&Equipment> for EquipmentRef {
    fn from(equipment: &Equipment) -> Self {
        Self {
            id: equipment.id.clone(),
            tag_number: equipment.tag_number.clone(),
            equipment_type: equipment.equipment_type.clone(),
            brand: equipment.brand.clone(),
            model: equipment.model.clone(),
        }
    }
}

/// A free-text note attached to a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Identifier, unique within the ticket.
    pub id: String,
    /// The note body.
    pub text: String,
    /// Name of the user who wrote the note.
    pub created_by: String,
    /// When the note was written.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// One entry in a ticket's status history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    /// The status the ticket moved to.
    pub status: TicketStatus,
    /// Name of the actor who changed the status.
    pub changed_by: String,
    /// When the change happened.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// The immutable fields of a ticket, fixed when it is opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTicket {
    /// The ticket identifier.
    pub id: TicketId,
    /// When the equipment was received.
    pub date_time: OffsetDateTime,
    /// The technician opening the ticket.
    pub technician: TechnicianRef,
    /// The customer the work is for.
    pub customer: CustomerRef,
    /// The equipment being worked on.
    pub equipment: EquipmentRef,
    /// The kind of work.
    pub repair_type: RepairType,
    /// Description of the problem.
    pub repair_details: String,
}

/// A repair ticket.
///
/// The creation fields never change. Status changes and notes are only ever
/// appended, and the status history always starts with a `pending` entry
/// recorded by [`SYSTEM_ACTOR_NAME`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepairTicket {
    id: TicketId,
    #[serde(with = "time::serde::rfc3339")]
    date_time: OffsetDateTime,
    technician: TechnicianRef,
    customer: CustomerRef,
    equipment: EquipmentRef,
    repair_type: RepairType,
    repair_details: String,
    status: TicketStatus,
    notes: Vec<Note>,
    status_history: Vec<StatusChange>,
}

impl RepairTicket {
    /// Opens a new ticket in the `pending` state.
    ///
    /// The status history is seeded with a single `pending` entry recorded by
    /// the system at `opened_at`; the notes start empty.
    #[must_use]
    pub fn open(new: NewTicket, opened_at: OffsetDateTime) -> Self {
        Self {
            id: new.id,
            date_time: new.date_time,
            technician: new.technician,
            customer: new.customer,
            equipment: new.equipment,
            repair_type: new.repair_type,
            repair_details: new.repair_details,
            status: TicketStatus::Pending,
            notes: Vec::new(),
            status_history: vec![StatusChange {
                status: TicketStatus::Pending,
                changed_by: String::from(SYSTEM_ACTOR_NAME),
                timestamp: opened_at,
            }],
        }
    }

    /// Rebuilds a ticket from previously recorded activity.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The status history is empty
    /// - The first history entry is not a system-recorded `pending` entry
    /// - History timestamps go backwards
    /// - The current status differs from the last history entry
    /// - Two notes share an identifier
    pub fn restore(
        new: NewTicket,
        status: TicketStatus,
        notes: Vec<Note>,
        status_history: Vec<StatusChange>,
    ) -> Result<Self, DomainError> {
        let ticket_id: String = new.id.to_string();
        let reject = |reason: &str| DomainError::InvalidStatusHistory {
            ticket_id: ticket_id.clone(),
            reason: reason.to_string(),
        };

        let first: &StatusChange = status_history
            .first()
            .ok_or_else(|| reject("history is empty"))?;
        if first.status != TicketStatus::Pending || first.changed_by != SYSTEM_ACTOR_NAME {
            return Err(reject("history must open with a system pending entry"));
        }
        if status_history
            .windows(2)
            .any(|pair| pair[1].timestamp < pair[0].timestamp)
        {
            return Err(reject("history timestamps must not decrease"));
        }
        if status_history.last().map(|change| change.status) != Some(status) {
            return Err(reject("current status must match the last history entry"));
        }

        let mut ticket: Self = Self::open(new, first.timestamp);
        ticket.status = status;
        ticket.status_history = status_history;
        for note in notes {
            ticket.push_note(note)?;
        }
        Ok(ticket)
    }

    /// Records a status change, overwriting the current status.
    ///
    /// A timestamp earlier than the previous entry is clamped to it so the
    /// history stays chronological.
    pub fn push_status_change(&mut self, mut change: StatusChange) {
        if let Some(last) = self.status_history.last() {
            change.timestamp = change.timestamp.max(last.timestamp);
        }
        self.status = change.status;
        self.status_history.push(change);
    }

    /// Appends a note.
    ///
    /// # Errors
    ///
    /// Returns an error if a note with the same identifier already exists.
    pub fn push_note(&mut self, note: Note) -> Result<(), DomainError> {
        if self.notes.iter().any(|existing| existing.id == note.id) {
            return Err(DomainError::DuplicateNoteId {
                ticket_id: self.id.to_string(),
                note_id: note.id,
            });
        }
        self.notes.push(note);
        Ok(())
    }

    /// Returns the ticket identifier.
    #[must_use]
    pub const fn id(&self) -> TicketId {
        self.id
    }

    /// Returns when the equipment was received.
    #[must_use]
    pub const fn date_time(&self) -> OffsetDateTime {
        self.date_time
    }

    /// Returns the technician who opened the ticket.
    #[must_use]
    pub const fn technician(&self) -> &TechnicianRef {
        &self.technician
    }

    /// Returns the customer snapshot.
    #[must_use]
    pub const fn customer(&self) -> &CustomerRef {
        &self.customer
    }

    /// Returns the equipment snapshot.
    #[must_use]
    pub const fn equipment(&self) -> &EquipmentRef {
        &self.equipment
    }

    /// Returns the kind of work.
    #[must_use]
    pub const fn repair_type(&self) -> RepairType {
        self.repair_type
    }

    /// Returns the problem description.
    #[must_use]
    pub fn repair_details(&self) -> &str {
        &self.repair_details
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TicketStatus {
        self.status
    }

    /// Returns the notes in the order they were added.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Returns the status history in chronological order.
    #[must_use]
    pub fn status_history(&self) -> &[StatusChange] {
        &self.status_history
    }
}
