// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more required ticket fields were missing or unresolved.
    MissingRequiredFields {
        /// The names of the missing fields, in form order.
        fields: Vec<String>,
    },
    /// A status change or note was requested without naming a ticket.
    MissingTicketReference,
    /// A note command carried no text.
    EmptyNote,
    /// Ticket identifier does not follow the `RT-<year>-<sequence>` format.
    InvalidTicketId(String),
    /// Ticket status value is not recognized.
    InvalidTicketStatus(String),
    /// Repair type value is not recognized.
    InvalidRepairType(String),
    /// User role value is not recognized.
    InvalidUserRole(String),
    /// Equipment tag number is empty or invalid.
    InvalidTagNumber(String),
    /// A restored ticket carries a status history that breaks the lifecycle rules.
    InvalidStatusHistory {
        /// The ticket whose history was rejected.
        ticket_id: String,
        /// Description of the broken rule.
        reason: String,
    },
    /// A note with the same identifier already exists on the ticket.
    DuplicateNoteId {
        /// The ticket the note was appended to.
        ticket_id: String,
        /// The duplicate note identifier.
        note_id: String,
    },
    /// A ticket with this identifier already exists.
    DuplicateTicketId(String),
    /// A customer with this identifier already exists.
    DuplicateCustomerId(String),
    /// An equipment item with this identifier already exists.
    DuplicateEquipmentId(String),
    /// An equipment item with this tag number already exists.
    DuplicateTagNumber(String),
    /// Ticket does not exist.
    TicketNotFound(String),
    /// Customer does not exist.
    CustomerNotFound(String),
    /// Equipment does not exist.
    EquipmentNotFound(String),
    /// Ticket sequence space for a year is exhausted.
    TicketSequenceExhausted(u16),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequiredFields { fields } => {
                write!(f, "Missing required fields: {}", fields.join(", "))
            }
            Self::MissingTicketReference => write!(f, "No ticket was specified"),
            Self::EmptyNote => write!(f, "Note text cannot be empty"),
            Self::InvalidTicketId(id) => write!(f, "Invalid ticket id: '{id}'"),
            Self::InvalidTicketStatus(status) => write!(f, "Invalid ticket status: '{status}'"),
            Self::InvalidRepairType(repair_type) => {
                write!(f, "Invalid repair type: '{repair_type}'")
            }
            Self::InvalidUserRole(role) => write!(f, "Invalid user role: '{role}'"),
            Self::InvalidTagNumber(msg) => write!(f, "Invalid tag number: {msg}"),
            Self::InvalidStatusHistory { ticket_id, reason } => {
                write!(f, "Invalid status history for ticket {ticket_id}: {reason}")
            }
            Self::DuplicateNoteId { ticket_id, note_id } => {
                write!(f, "Note '{note_id}' already exists on ticket {ticket_id}")
            }
            Self::DuplicateTicketId(id) => write!(f, "Ticket {id} already exists"),
            Self::DuplicateCustomerId(id) => write!(f, "Customer '{id}' already exists"),
            Self::DuplicateEquipmentId(id) => write!(f, "Equipment '{id}' already exists"),
            Self::DuplicateTagNumber(tag) => {
                write!(f, "Equipment with tag number '{tag}' already exists")
            }
            Self::TicketNotFound(id) => write!(f, "Ticket {id} not found"),
            Self::CustomerNotFound(id) => write!(f, "Customer '{id}' not found"),
            Self::EquipmentNotFound(id) => write!(f, "Equipment '{id}' not found"),
            Self::TicketSequenceExhausted(year) => {
                write!(f, "No ticket sequence numbers left for year {year}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
