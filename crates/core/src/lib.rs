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

mod apply;
mod command;
mod error;
mod lifecycle;
mod seed;
mod state;
mod store;
mod views;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use error::CoreError;
pub use lifecycle::{
    TicketDraft, TimelineEntry, add_note, change_status, create_ticket, next_note_id, timeline,
};
pub use seed::{sample_customers, sample_equipment, sample_tickets};
pub use state::{TransitionResult, ticket_snapshot};
pub use store::EntityStore;
pub use views::{
    CUSTOMER_SUGGESTION_LIMIT, CustomerQuery, CustomerRow, CustomerSortField, CustomerSummary,
    DashboardStats, InventoryQuery, InventorySortField, RECENT_TICKET_LIMIT, SortOrder, SortState,
    StatusFilter, TicketFilter, customer_suggestions, customer_summary, inventory_categories,
    list_customers, list_inventory, recent_tickets,
};
