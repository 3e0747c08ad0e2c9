// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use repair_shop::{CustomerRow, CustomerSummary, DashboardStats, TimelineEntry};
use repair_shop_domain::{Customer, Equipment, RepairTicket, RepairType, TicketStatus, User};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// API request to sign in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// The account email.
    pub email: String,
    /// The account password.
    pub password: String,
}

/// API response for a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// The signed-in user.
    pub user: User,
}

/// API request to open a repair ticket.
///
/// This DTO is distinct from domain types and represents the intake form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateTicketRequest {
    /// When the equipment was received, as RFC 3339 or `YYYY-MM-DDTHH:MM`
    /// (UTC). Defaults to now.
    pub date_time: Option<String>,
    /// The selected customer's id.
    pub customer_id: Option<String>,
    /// The id of the equipment found by tag number.
    pub equipment_id: Option<String>,
    /// The kind of work (snake case). Defaults to `repair`.
    pub repair_type: Option<String>,
    /// Description of the problem.
    pub repair_details: String,
}

/// API request to move a ticket to a new status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeStatusRequest {
    /// The ticket id, e.g. `RT-2023-0004`.
    pub ticket_id: String,
    /// The new status (snake case).
    pub status: String,
}

/// API request to add a note to a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddNoteRequest {
    /// The ticket id.
    pub ticket_id: String,
    /// The note body.
    pub text: String,
}

/// API request to list tickets.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TicketListRequest {
    /// `all` or one status (snake case). Absent means `all`.
    pub status: Option<String>,
    /// Free-text search.
    pub search: String,
}

/// API request to update the signed-in user's profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    /// The new display name.
    pub name: String,
    /// The new email.
    pub email: String,
}

/// API request to change the signed-in user's password.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    /// The current password.
    pub current_password: String,
    /// The new password.
    pub new_password: String,
    /// The new password, typed again.
    pub confirm_password: String,
}

/// API response for a password change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangePasswordResponse {
    /// A success message.
    pub message: String,
}

/// One row of a ticket table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketSummary {
    pub id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date_time: OffsetDateTime,
    pub customer_name: String,
    pub equipment_type: String,
    pub equipment_tag_number: String,
    pub repair_type: RepairType,
    pub status: TicketStatus,
    /// Human-readable status, e.g. `In Progress`.
    pub status_label: String,
    pub technician_name: String,
}

impl From<&RepairTicket> for TicketSummary {
    fn from(ticket: &RepairTicket) -> Self {
        Self {
            id: ticket.id().to_string(),
            date_time: ticket.date_time(),
            customer_name: ticket.customer().name.clone(),
            equipment_type: ticket.equipment().equipment_type.clone(),
            equipment_tag_number: ticket.equipment().tag_number.clone(),
            repair_type: ticket.repair_type(),
            status: ticket.status(),
            status_label: ticket.status().label().to_string(),
            technician_name: ticket.technician().name.clone(),
        }
    }
}

/// API response for a ticket listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketListResponse {
    /// The matching tickets, in store order.
    pub tickets: Vec<TicketSummary>,
    /// How many tickets matched.
    pub total: usize,
}

/// One entry of a ticket's status timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntryInfo {
    pub status: TicketStatus,
    pub status_label: String,
    pub changed_by: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub is_current: bool,
}

impl From<TimelineEntry> for TimelineEntryInfo {
    fn from(entry: TimelineEntry) -> Self {
        Self {
            status: entry.status,
            status_label: entry.status.label().to_string(),
            changed_by: entry.changed_by,
            timestamp: entry.timestamp,
            is_current: entry.is_current,
        }
    }
}

/// API response carrying one ticket in full.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDetailsResponse {
    /// The ticket.
    pub ticket: RepairTicket,
    /// The ticket's status history, oldest first.
    pub timeline: Vec<TimelineEntryInfo>,
}

/// Ticket counts per status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsInfo {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub pending_parts: usize,
    pub cancelled: usize,
}

impl From<DashboardStats> for DashboardStatsInfo {
    fn from(stats: DashboardStats) -> Self {
        Self {
            total: stats.total,
            pending: stats.pending,
            in_progress: stats.in_progress,
            completed: stats.completed,
            pending_parts: stats.pending_parts,
            cancelled: stats.cancelled,
        }
    }
}

/// API response for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    /// Ticket counts.
    pub stats: DashboardStatsInfo,
    /// The most recently received tickets, newest first.
    pub recent_tickets: Vec<TicketSummary>,
}

/// One row of the customer table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRowInfo {
    pub customer: Customer,
    pub ticket_count: usize,
}

impl From<CustomerRow<'_>> for CustomerRowInfo {
    fn from(row: CustomerRow<'_>) -> Self {
        Self {
            customer: row.customer.clone(),
            ticket_count: row.ticket_count,
        }
    }
}

/// API response for the customer table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerListResponse {
    /// The matching customers, sorted as requested.
    pub customers: Vec<CustomerRowInfo>,
}

/// API response for a customer's detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetailsResponse {
    pub customer: Customer,
    pub tickets: Vec<TicketSummary>,
    pub completed: usize,
    pub in_progress: usize,
    pub pending: usize,
}

impl From<CustomerSummary<'_>> for CustomerDetailsResponse {
    fn from(summary: CustomerSummary<'_>) -> Self {
        Self {
            customer: summary.customer.clone(),
            tickets: summary
                .tickets
                .into_iter()
                .map(TicketSummary::from)
                .collect(),
            completed: summary.completed,
            in_progress: summary.in_progress,
            pending: summary.pending,
        }
    }
}

/// API response for the inventory page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryResponse {
    /// The matching equipment, sorted as requested.
    pub items: Vec<Equipment>,
    /// Every distinct equipment type in the inventory.
    pub categories: Vec<String>,
}
