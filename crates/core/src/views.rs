// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Derived, read-only views over the entity store: ticket filtering,
//! dashboard statistics, and customer and inventory listings.

use crate::error::CoreError;
use crate::store::EntityStore;
use repair_shop_domain::{Customer, DomainError, Equipment, RepairTicket, TicketStatus};
use std::cmp::Ordering;
use std::str::FromStr;

/// How many tickets the dashboard lists as recent.
pub const RECENT_TICKET_LIMIT: usize = 5;

/// How many customers the intake form suggests before a search is typed.
pub const CUSTOMER_SUGGESTION_LIMIT: usize = 5;

/// Restricts a ticket listing to one status, or to none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Every status.
    #[default]
    All,
    /// Exactly this status.
    Only(TicketStatus),
}

impl StatusFilter {
    /// Returns whether `status` passes this filter.
    #[must_use]
    pub fn accepts(&self, status: TicketStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

/// A ticket listing filter: a status predicate plus free-text search.
///
/// The search text matches, case-insensitively, as a substring of the ticket
/// id, the customer name, the equipment type or the repair details. An empty
/// search matches every ticket.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TicketFilter {
    /// The status restriction.
    pub status: StatusFilter,
    /// The search text.
    pub search: String,
}

impl TicketFilter {
    /// Creates a new filter.
    #[must_use]
    pub fn new(status: StatusFilter, search: &str) -> Self {
        Self {
            status,
            search: search.to_string(),
        }
    }

    /// Returns whether `ticket` passes this filter.
    #[must_use]
    pub fn matches(&self, ticket: &RepairTicket) -> bool {
        if !self.status.accepts(ticket.status()) {
            return false;
        }

        let needle: String = self.search.to_lowercase();
        let id: String = ticket.id().to_string();
        [
            id.as_str(),
            ticket.customer().name.as_str(),
            ticket.equipment().equipment_type.as_str(),
            ticket.repair_details(),
        ]
        .iter()
        .any(|haystack| haystack.to_lowercase().contains(&needle))
    }
}

/// Ticket counts per status, as shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    /// All tickets.
    pub total: usize,
    /// Tickets in `pending`.
    pub pending: usize,
    /// Tickets in `in_progress`.
    pub in_progress: usize,
    /// Tickets in `completed`.
    pub completed: usize,
    /// Tickets in `pending_parts`.
    pub pending_parts: usize,
    /// Tickets in `cancelled`.
    pub cancelled: usize,
}

impl DashboardStats {
    /// Counts `tickets` by status.
    #[must_use]
    pub fn from_tickets(tickets: &[RepairTicket]) -> Self {
        tickets
            .iter()
            .fold(Self::default(), |mut stats, ticket| {
                stats.total += 1;
                match ticket.status() {
                    TicketStatus::Pending => stats.pending += 1,
                    TicketStatus::InProgress => stats.in_progress += 1,
                    TicketStatus::Completed => stats.completed += 1,
                    TicketStatus::PendingParts => stats.pending_parts += 1,
                    TicketStatus::Cancelled => stats.cancelled += 1,
                }
                stats
            })
    }
}

/// Returns up to `limit` tickets, newest `date_time` first.
#[must_use]
pub fn recent_tickets(store: &EntityStore, limit: usize) -> Vec<&RepairTicket> {
    let mut tickets: Vec<&RepairTicket> = store.tickets().iter().collect();
    tickets.sort_by(|a, b| b.date_time().cmp(&a.date_time()));
    tickets.truncate(limit);
    tickets
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortOrder {
    /// Applies this direction to an ascending comparison.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// The active sort column and direction of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState<F> {
    /// The column being sorted on.
    pub field: F,
    /// The direction.
    pub order: SortOrder,
}

impl<F: Copy + PartialEq> SortState<F> {
    /// Creates an ascending sort on `field`.
    #[must_use]
    pub const fn ascending(field: F) -> Self {
        Self {
            field,
            order: SortOrder::Ascending,
        }
    }

    /// Handles a click on a column header.
    ///
    /// Clicking the active column flips the direction; clicking another
    /// column sorts on it ascending.
    #[must_use]
    pub fn toggle(self, field: F) -> Self {
        if self.field == field {
            Self {
                field,
                order: self.order.flipped(),
            }
        } else {
            Self::ascending(field)
        }
    }
}

/// Sortable customer table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CustomerSortField {
    /// Customer name.
    #[default]
    Name,
    /// Agency.
    Agency,
    /// Position.
    Position,
    /// Number of tickets opened for the customer.
    TicketCount,
    /// Record creation date.
    CreatedAt,
}

/// A customer listing query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomerQuery {
    /// Case-insensitive search over name, agency and position.
    pub search: String,
    /// The sort column and direction.
    pub sort: SortState<CustomerSortField>,
}

/// One row of the customer table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRow<'a> {
    /// The customer.
    pub customer: &'a Customer,
    /// How many tickets were opened for the customer.
    pub ticket_count: usize,
}

/// Lists customers matching `query`, sorted as requested.
///
/// Text columns compare case-insensitively.
#[must_use]
pub fn list_customers<'a>(store: &'a EntityStore, query: &CustomerQuery) -> Vec<CustomerRow<'a>> {
    let needle: String = query.search.to_lowercase();
    let mut rows: Vec<CustomerRow<'a>> = store
        .customers()
        .iter()
        .filter(|customer| {
            [&customer.name, &customer.agency, &customer.position]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .map(|customer| CustomerRow {
            customer,
            ticket_count: store.tickets_for_customer(&customer.id).len(),
        })
        .collect();

    rows.sort_by(|a, b| {
        let ordering: Ordering = match query.sort.field {
            CustomerSortField::Name => compare_text(&a.customer.name, &b.customer.name),
            CustomerSortField::Agency => compare_text(&a.customer.agency, &b.customer.agency),
            CustomerSortField::Position => {
                compare_text(&a.customer.position, &b.customer.position)
            }
            CustomerSortField::TicketCount => a.ticket_count.cmp(&b.ticket_count),
            CustomerSortField::CreatedAt => a.customer.created_at.cmp(&b.customer.created_at),
        };
        query.sort.order.apply(ordering)
    });
    rows
}

/// Suggests customers for the intake form.
///
/// An empty search returns the first few customers; otherwise customers
/// whose name or agency contains the search text.
#[must_use]
pub fn customer_suggestions<'a>(store: &'a EntityStore, search: &str) -> Vec<&'a Customer> {
    if search.is_empty() {
        return store
            .customers()
            .iter()
            .take(CUSTOMER_SUGGESTION_LIMIT)
            .collect();
    }

    let needle: String = search.to_lowercase();
    store
        .customers()
        .iter()
        .filter(|customer| {
            customer.name.to_lowercase().contains(&needle)
                || customer.agency.to_lowercase().contains(&needle)
        })
        .collect()
}

/// A customer together with their ticket history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerSummary<'a> {
    /// The customer.
    pub customer: &'a Customer,
    /// Every ticket opened for the customer.
    pub tickets: Vec<&'a RepairTicket>,
    /// Tickets in `completed`.
    pub completed: usize,
    /// Tickets in `in_progress`.
    pub in_progress: usize,
    /// Tickets in `pending`.
    pub pending: usize,
}

/// Builds the detail summary for one customer.
///
/// # Errors
///
/// Returns an error if the customer does not exist.
pub fn customer_summary<'a>(
    store: &'a EntityStore,
    customer_id: &str,
) -> Result<CustomerSummary<'a>, CoreError> {
    let customer: &Customer = store
        .find_customer(customer_id)
        .ok_or_else(|| DomainError::CustomerNotFound(customer_id.to_string()))?;
    let tickets: Vec<&RepairTicket> = store.tickets_for_customer(customer_id);
    let count =
        |status: TicketStatus| tickets.iter().filter(|t| t.status() == status).count();

    Ok(CustomerSummary {
        customer,
        completed: count(TicketStatus::Completed),
        in_progress: count(TicketStatus::InProgress),
        pending: count(TicketStatus::Pending),
        tickets,
    })
}

/// Sortable inventory table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InventorySortField {
    /// Manufacturer.
    #[default]
    Brand,
    /// Device category.
    Type,
    /// Model name.
    Model,
}

/// An inventory listing query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InventoryQuery {
    /// Case-insensitive search over brand, type and model.
    pub search: String,
    /// Restrict to one device category; `None` shows all categories.
    pub category: Option<String>,
    /// The sort column and direction.
    pub sort: SortState<InventorySortField>,
}

/// Lists equipment matching `query`, sorted as requested.
#[must_use]
pub fn list_inventory<'a>(store: &'a EntityStore, query: &InventoryQuery) -> Vec<&'a Equipment> {
    let needle: String = query.search.to_lowercase();
    let mut items: Vec<&Equipment> = store
        .equipment()
        .iter()
        .filter(|item| {
            [&item.brand, &item.equipment_type, &item.model]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .filter(|item| {
            query
                .category
                .as_ref()
                .is_none_or(|category| item.equipment_type == *category)
        })
        .collect();

    items.sort_by(|a, b| {
        let ordering: Ordering = match query.sort.field {
            InventorySortField::Brand => compare_text(&a.brand, &b.brand),
            InventorySortField::Type => compare_text(&a.equipment_type, &b.equipment_type),
            InventorySortField::Model => compare_text(&a.model, &b.model),
        };
        query.sort.order.apply(ordering)
    });
    items
}

/// Returns the distinct device categories, in order of first appearance.
#[must_use]
pub fn inventory_categories(store: &EntityStore) -> Vec<&str> {
    let mut categories: Vec<&str> = Vec::new();
    for item in store.equipment() {
        if !categories.contains(&item.equipment_type.as_str()) {
            categories.push(&item.equipment_type);
        }
    }
    categories
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
