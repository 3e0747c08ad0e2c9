// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::lifecycle::TicketDraft;
use repair_shop_domain::{TicketId, TicketStatus};

/// A command represents user intent as data only.
///
/// Commands are the only way to request ticket mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open a new repair ticket.
    CreateTicket {
        /// The intake form contents.
        draft: TicketDraft,
    },
    /// Move a ticket to a new status.
    ChangeStatus {
        /// The ticket to update.
        ticket_id: TicketId,
        /// The status to record.
        status: TicketStatus,
    },
    /// Append a note to a ticket.
    AddNote {
        /// The ticket to annotate.
        ticket_id: TicketId,
        /// The note body. Must not be blank.
        text: String,
    },
}

impl Command {
    /// Returns the audit action name for this command.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateTicket { .. } => "CreateTicket",
            Self::ChangeStatus { .. } => "ChangeStatus",
            Self::AddNote { .. } => "AddNote",
        }
    }
}
