// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::lifecycle::{add_note, change_status, create_ticket};
use crate::state::{TransitionResult, ticket_snapshot};
use crate::store::EntityStore;
use repair_shop_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use repair_shop_domain::{DomainError, RepairTicket, TechnicianRef, is_blank};
use time::OffsetDateTime;

/// Applies a command to the entity store, producing the updated ticket and
/// its audit event.
///
/// The store is only read. Call [`EntityStore::commit`] with the result to
/// make the change visible.
///
/// # Arguments
///
/// * `store` - The current entity store (immutable)
/// * `command` - The command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
/// * `now` - The time the command is applied
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new ticket and audit event
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - A ticket intake form is missing required fields
/// - The referenced ticket does not exist
/// - A note command carries blank text
pub fn apply(
    store: &EntityStore,
    command: Command,
    actor: Actor,
    cause: Cause,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    let action_name: String = command.name().to_string();

    match command {
        Command::CreateTicket { draft } => {
            let technician: TechnicianRef = TechnicianRef::from(&actor);
            let new_ticket: RepairTicket = create_ticket(store, draft, technician, now)?;

            let action: Action = Action::new(
                action_name,
                Some(format!(
                    "Opened ticket {} for customer '{}' on equipment {}",
                    new_ticket.id(),
                    new_ticket.customer().name,
                    new_ticket.equipment().tag_number
                )),
            );
            let audit_event: AuditEvent = AuditEvent::new(
                actor,
                cause,
                action,
                StateSnapshot::absent(),
                ticket_snapshot(&new_ticket),
                new_ticket.id(),
                now,
            );

            Ok(TransitionResult {
                new_ticket,
                audit_event,
            })
        }
        Command::ChangeStatus { ticket_id, status } => {
            let ticket: &RepairTicket = store.ticket(ticket_id)?;
            let new_ticket: RepairTicket = change_status(ticket, status, &actor, now);

            let action: Action = Action::new(
                action_name,
                Some(format!(
                    "Changed status of ticket {ticket_id} from {} to {status}",
                    ticket.status()
                )),
            );
            let audit_event: AuditEvent = AuditEvent::new(
                actor,
                cause,
                action,
                ticket_snapshot(ticket),
                ticket_snapshot(&new_ticket),
                ticket_id,
                now,
            );

            Ok(TransitionResult {
                new_ticket,
                audit_event,
            })
        }
        Command::AddNote { ticket_id, text } => {
            if is_blank(&text) {
                return Err(CoreError::DomainViolation(DomainError::EmptyNote));
            }

            let ticket: &RepairTicket = store.ticket(ticket_id)?;
            let new_ticket: RepairTicket = add_note(ticket, &text, &actor, now)?;

            let action: Action = Action::new(
                action_name,
                Some(format!(
                    "Added note to ticket {ticket_id} ({} characters)",
                    text.chars().count()
                )),
            );
            let audit_event: AuditEvent = AuditEvent::new(
                actor,
                cause,
                action,
                ticket_snapshot(ticket),
                ticket_snapshot(&new_ticket),
                ticket_id,
                now,
            );

            Ok(TransitionResult {
                new_ticket,
                audit_event,
            })
        }
    }
}
