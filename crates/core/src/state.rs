// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use repair_shop_audit::{AuditEvent, StateSnapshot};
use repair_shop_domain::RepairTicket;

/// The result of a successful ticket transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects. Nothing is stored until the result is committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The ticket after the transition.
    pub new_ticket: RepairTicket,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
}

/// Converts a ticket's mutable state to a snapshot for audit purposes.
#[must_use]
pub fn ticket_snapshot(ticket: &RepairTicket) -> StateSnapshot {
    StateSnapshot::new(format!(
        "ticket={},status={},notes_count={},history_count={}",
        ticket.id(),
        ticket.status(),
        ticket.notes().len(),
        ticket.status_history().len()
    ))
}
