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
    clippy::all
)]

use repair_shop_domain::{TechnicianRef, TicketId, User};
use time::OffsetDateTime;

/// Represents the entity performing an action.
///
/// An actor is either a signed-in console user or the system itself. The
/// actor's name is what ticket activity records as `changedBy` / `createdBy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The display name recorded on ticket activity.
    pub name: String,
    /// The type of actor (e.g., "admin", "technician", "system").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `name` - The display name for this actor
    /// * `actor_type` - The type of actor
    #[must_use]
    pub const fn new(id: String, name: String, actor_type: String) -> Self {
        Self {
            id,
            name,
            actor_type,
        }
    }
}

impl From<&User> for Actor {
    fn from(user: &User) -> Self {
        Self::new(
            user.id.clone(),
            user.name.clone(),
            user.role.as_str().to_string(),
        )
    }
}

/// The actor opening a ticket becomes its technician.
impl From<&Actor> for TechnicianRef {
    fn from(actor: &Actor) -> Self {
        Self {
            id: actor.id.clone(),
            name: actor.name.clone(),
        }
    }
}

/// Represents the reason or trigger for an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cause {
    /// A unique identifier for this cause (e.g., request ID).
    pub id: String,
    /// A description of the cause.
    pub description: String,
}

impl Cause {
    /// Creates a new Cause.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this cause
    /// * `description` - A description of what triggered this action
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// Represents the specific action performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The name of the action (e.g., "`CreateTicket`", "`ChangeStatus`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the action
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A compact description of a ticket's mutable state at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    /// A string representation of the state.
    pub data: String,
}

impl StateSnapshot {
    /// Creates a new `StateSnapshot`.
    ///
    /// # Arguments
    ///
    /// * `data` - A string representation of the state
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }

    /// The snapshot used as `before` when a ticket is first opened.
    #[must_use]
    pub fn absent() -> Self {
        Self::new(String::from("absent"))
    }
}

/// An immutable audit event representing one ticket mutation.
///
/// Every successful mutation produces exactly one audit event, capturing:
/// - Who performed the action (actor)
/// - Why it was performed (cause)
/// - What action was performed (action)
/// - The ticket state before and after
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// The actor who initiated this state change.
    pub actor: Actor,
    /// The cause or reason for this state change.
    pub cause: Cause,
    /// The action that was performed.
    pub action: Action,
    /// The state before the transition.
    pub before: StateSnapshot,
    /// The state after the transition.
    pub after: StateSnapshot,
    /// The ticket this event belongs to.
    pub ticket_id: TicketId,
    /// When the mutation was applied.
    pub occurred_at: OffsetDateTime,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`.
    ///
    /// # Arguments
    ///
    /// * `actor` - The actor who initiated the change
    /// * `cause` - The reason for the change
    /// * `action` - The action that was performed
    /// * `before` - The state before the transition
    /// * `after` - The state after the transition
    /// * `ticket_id` - The ticket that changed
    /// * `occurred_at` - When the change was applied
    #[must_use]
    pub const fn new(
        actor: Actor,
        cause: Cause,
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
        ticket_id: TicketId,
        occurred_at: OffsetDateTime,
    ) -> Self {
        Self {
            actor,
            cause,
            action,
            before,
            after,
            ticket_id,
            occurred_at,
        }
    }
}
