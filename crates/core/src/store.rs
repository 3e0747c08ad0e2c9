// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::state::TransitionResult;
use crate::views::TicketFilter;
use repair_shop_audit::AuditEvent;
use repair_shop_domain::{
    Customer, DomainError, Equipment, RepairTicket, TicketId, validate_tag_number,
    validate_tag_numbers_unique,
};

/// In-memory collections of customers, equipment and repair tickets.
///
/// The store owns every record. Customers and equipment are only ever added;
/// tickets are replaced wholesale when a committed transition updates them.
/// Every committed transition's audit event is kept in order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntityStore {
    customers: Vec<Customer>,
    equipment: Vec<Equipment>,
    tickets: Vec<RepairTicket>,
    audit_log: Vec<AuditEvent>,
}

impl EntityStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            customers: Vec::new(),
            equipment: Vec::new(),
            tickets: Vec::new(),
            audit_log: Vec::new(),
        }
    }

    /// Creates a store pre-populated with records.
    ///
    /// # Errors
    ///
    /// Returns an error if any identifier or tag number is duplicated.
    pub fn with_records(
        customers: Vec<Customer>,
        equipment: Vec<Equipment>,
        tickets: Vec<RepairTicket>,
    ) -> Result<Self, DomainError> {
        validate_tag_numbers_unique(&equipment)?;

        let mut store: Self = Self::new();
        for customer in customers {
            store.add_customer(customer)?;
        }
        for item in equipment {
            store.add_equipment(item)?;
        }
        for ticket in tickets {
            store.insert_ticket(ticket)?;
        }
        Ok(store)
    }

    /// Adds a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if a customer with the same id exists.
    pub fn add_customer(&mut self, customer: Customer) -> Result<(), DomainError> {
        if self.find_customer(&customer.id).is_some() {
            return Err(DomainError::DuplicateCustomerId(customer.id));
        }
        self.customers.push(customer);
        Ok(())
    }

    /// Adds an equipment item.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag number is blank, or if an item with the
    /// same id or tag number exists.
    pub fn add_equipment(&mut self, equipment: Equipment) -> Result<(), DomainError> {
        validate_tag_number(&equipment.tag_number)?;
        if self.find_equipment(&equipment.id).is_some() {
            return Err(DomainError::DuplicateEquipmentId(equipment.id));
        }
        if self.find_equipment_by_tag(&equipment.tag_number).is_some() {
            return Err(DomainError::DuplicateTagNumber(equipment.tag_number));
        }
        self.equipment.push(equipment);
        Ok(())
    }

    /// Inserts a new ticket.
    ///
    /// # Errors
    ///
    /// Returns an error if a ticket with the same id exists.
    pub fn insert_ticket(&mut self, ticket: RepairTicket) -> Result<(), DomainError> {
        if self.find_ticket(ticket.id()).is_some() {
            return Err(DomainError::DuplicateTicketId(ticket.id().to_string()));
        }
        self.tickets.push(ticket);
        Ok(())
    }

    /// Replaces an existing ticket with an updated copy.
    ///
    /// # Errors
    ///
    /// Returns an error if no ticket with the same id exists.
    pub fn replace_ticket(&mut self, ticket: RepairTicket) -> Result<(), DomainError> {
        let slot: &mut RepairTicket = self
            .tickets
            .iter_mut()
            .find(|existing| existing.id() == ticket.id())
            .ok_or_else(|| DomainError::TicketNotFound(ticket.id().to_string()))?;
        *slot = ticket;
        Ok(())
    }

    /// Commits a transition: stores the new ticket and records its audit event.
    ///
    /// A ticket the store has not seen is inserted; a known one is replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticket cannot be stored. Nothing is recorded
    /// in that case.
    pub fn commit(&mut self, result: TransitionResult) -> Result<(), CoreError> {
        let TransitionResult {
            new_ticket,
            audit_event,
        } = result;

        if self.find_ticket(new_ticket.id()).is_some() {
            self.replace_ticket(new_ticket)?;
        } else {
            self.insert_ticket(new_ticket)?;
        }
        self.audit_log.push(audit_event);
        Ok(())
    }

    /// Finds a customer by id.
    #[must_use]
    pub fn find_customer(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.id == id)
    }

    /// Finds an equipment item by id.
    #[must_use]
    pub fn find_equipment(&self, id: &str) -> Option<&Equipment> {
        self.equipment.iter().find(|item| item.id == id)
    }

    /// Finds an equipment item by tag number (exact, case-insensitive).
    #[must_use]
    pub fn find_equipment_by_tag(&self, tag: &str) -> Option<&Equipment> {
        self.equipment.iter().find(|item| item.matches_tag(tag))
    }

    /// Finds a ticket by id.
    #[must_use]
    pub fn find_ticket(&self, id: TicketId) -> Option<&RepairTicket> {
        self.tickets.iter().find(|ticket| ticket.id() == id)
    }

    /// Looks up a ticket that must exist.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TicketNotFound` if there is no such ticket.
    pub fn ticket(&self, id: TicketId) -> Result<&RepairTicket, DomainError> {
        self.find_ticket(id)
            .ok_or_else(|| DomainError::TicketNotFound(id.to_string()))
    }

    /// Lists the tickets matching `filter`, in store order.
    #[must_use]
    pub fn list_tickets(&self, filter: &TicketFilter) -> Vec<&RepairTicket> {
        self.tickets
            .iter()
            .filter(|ticket| filter.matches(ticket))
            .collect()
    }

    /// Lists the tickets opened for a customer, in store order.
    #[must_use]
    pub fn tickets_for_customer(&self, customer_id: &str) -> Vec<&RepairTicket> {
        self.tickets
            .iter()
            .filter(|ticket| ticket.customer().id == customer_id)
            .collect()
    }

    /// Allocates the next ticket id for `year`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sequence space for the year is used up.
    pub fn next_ticket_id(&self, year: u16) -> Result<TicketId, DomainError> {
        let highest: u32 = self
            .tickets
            .iter()
            .map(RepairTicket::id)
            .filter(|id| id.year() == year)
            .map(|id| id.sequence())
            .max()
            .unwrap_or(0);

        highest
            .checked_add(1)
            .map(|sequence| TicketId::new(year, sequence))
            .ok_or(DomainError::TicketSequenceExhausted(year))
    }

    /// Returns every customer.
    #[must_use]
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Returns every equipment item.
    #[must_use]
    pub fn equipment(&self) -> &[Equipment] {
        &self.equipment
    }

    /// Returns every ticket.
    #[must_use]
    pub fn tickets(&self) -> &[RepairTicket] {
        &self.tickets
    }

    /// Returns the audit events of every committed transition, oldest first.
    #[must_use]
    pub fn audit_log(&self) -> &[AuditEvent] {
        &self.audit_log
    }
}
