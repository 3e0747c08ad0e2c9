// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod ticket;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use ticket::{
    CustomerRef, EquipmentRef, NewTicket, Note, RepairTicket, RepairType, SYSTEM_ACTOR_NAME,
    StatusChange, TechnicianRef, TicketId, TicketStatus,
};
pub use types::{Customer, Equipment, User, UserRole};
pub use validation::{
    is_blank, validate_tag_number, validate_tag_numbers_unique, validate_ticket_fields,
};
