// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.

use std::time::Duration;

use repair_shop::{
    Command, CustomerQuery, CustomerRow, CustomerSummary, DashboardStats, InventoryQuery,
    RECENT_TICKET_LIMIT, StatusFilter, TicketDraft, TicketFilter, TransitionResult, apply,
    customer_suggestions, customer_summary, inventory_categories, list_customers, list_inventory,
    recent_tickets, timeline,
};
use repair_shop_audit::{Actor, AuditEvent, Cause};
use repair_shop_domain::{
    Customer, DomainError, Equipment, RepairTicket, RepairType, TicketId, TicketStatus, User,
    is_blank,
};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};
use tracing::{debug, info, warn};

use crate::context::AppContext;
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::password_policy::PasswordPolicyError;
use crate::request_response::{
    AddNoteRequest, ChangePasswordRequest, ChangePasswordResponse, ChangeStatusRequest,
    CreateTicketRequest, CustomerDetailsResponse, CustomerListResponse, CustomerRowInfo,
    DashboardResponse, InventoryResponse, LoginRequest, LoginResponse, TicketDetailsResponse,
    TicketListRequest, TicketListResponse, TicketSummary, UpdateProfileRequest,
};

/// The result of an API operation that includes both the response and the audit event.
///
/// This ensures that successful API operations always produce an audit trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The audit event generated by this operation.
    pub audit_event: AuditEvent,
}

async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

/// Parses a ticket id from a request.
///
/// # Errors
///
/// Returns a validation error if the id is blank or malformed.
fn parse_ticket_id(raw: &str) -> Result<TicketId, ApiError> {
    if is_blank(raw) {
        return Err(translate_domain_error(DomainError::MissingTicketReference));
    }
    raw.trim().parse().map_err(translate_domain_error)
}

/// Parses the intake form's received-at time.
///
/// Accepts RFC 3339, or the minute-precision `YYYY-MM-DDTHH:MM` form taken
/// as UTC.
fn parse_date_time(raw: &str) -> Result<OffsetDateTime, ApiError> {
    let raw: &str = raw.trim();
    if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Ok(parsed);
    }
    PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day]T[hour]:[minute]"))
        .map(PrimitiveDateTime::assume_utc)
        .map_err(|e| ApiError::invalid_field("dateTime", format!("Invalid date '{raw}': {e}")))
}

fn ticket_details(ticket: &RepairTicket) -> TicketDetailsResponse {
    TicketDetailsResponse {
        ticket: ticket.clone(),
        timeline: timeline(ticket).into_iter().map(Into::into).collect(),
    }
}

/// Applies a command and commits it once the simulated latency has passed.
///
/// The command is checked against the store up front so a rejection returns
/// without waiting. It is applied again after the delay, so timestamps and
/// note ids reflect when the change completed. Nothing is stored if the
/// command is rejected.
async fn apply_and_commit(
    ctx: &mut AppContext,
    command: Command,
    actor: Actor,
    cause: Cause,
    delay: Duration,
) -> Result<ApiResult<TicketDetailsResponse>, ApiError> {
    let command_name: &'static str = command.name();
    apply(
        &ctx.store,
        command.clone(),
        actor.clone(),
        cause.clone(),
        OffsetDateTime::now_utc(),
    )
    .map_err(|err| {
        warn!(command = command_name, %err, "Command rejected");
        translate_core_error(err)
    })?;

    simulate_latency(delay).await;

    let result: TransitionResult =
        apply(&ctx.store, command, actor, cause, OffsetDateTime::now_utc())
            .map_err(translate_core_error)?;
    let response: TicketDetailsResponse = ticket_details(&result.new_ticket);
    let audit_event: AuditEvent = result.audit_event.clone();
    ctx.store.commit(result).map_err(translate_core_error)?;

    Ok(ApiResult {
        response,
        audit_event,
    })
}

/// Signs a user in after the configured login latency.
///
/// # Errors
///
/// Returns an error if the credentials do not match or the session cannot
/// be stored.
pub async fn login(
    ctx: &mut AppContext,
    request: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    simulate_latency(ctx.config.login_latency()).await;
    let user: User = ctx.session.login(&request.email, &request.password)?;
    Ok(LoginResponse { user })
}

/// Signs the current user out.
///
/// # Errors
///
/// Returns an error if the stored session cannot be removed.
pub fn logout(ctx: &mut AppContext) -> Result<(), ApiError> {
    ctx.session.logout()?;
    Ok(())
}

/// Returns the signed-in user.
///
/// # Errors
///
/// Returns an error if nobody is signed in.
pub fn whoami(ctx: &AppContext) -> Result<User, ApiError> {
    Ok(ctx.session.require_user("view the profile")?.clone())
}

/// Opens a new repair ticket.
///
/// The form is validated before the simulated latency, and the ticket is
/// stored after it.
///
/// # Arguments
///
/// * `ctx` - The console context
/// * `request` - The intake form
/// * `cause` - The cause or reason for this action
///
/// # Returns
///
/// * `Ok(ApiResult<TicketDetailsResponse>)` with the new ticket
/// * `Err(ApiError)` if the form is invalid
///
/// # Errors
///
/// Returns an error if:
/// - Nobody is signed in
/// - The customer, equipment or repair details are missing (all reported together)
/// - The repair type or date is malformed
pub async fn create_ticket(
    ctx: &mut AppContext,
    request: &CreateTicketRequest,
    cause: Cause,
) -> Result<ApiResult<TicketDetailsResponse>, ApiError> {
    let actor: Actor = ctx.session.require_actor("create a ticket")?;

    let repair_type: RepairType = match request.repair_type.as_deref() {
        Some(raw) if !is_blank(raw) => raw.trim().parse().map_err(translate_domain_error)?,
        _ => RepairType::default(),
    };
    let date_time: Option<OffsetDateTime> = request
        .date_time
        .as_deref()
        .filter(|raw| !is_blank(raw))
        .map(parse_date_time)
        .transpose()?;

    let draft: TicketDraft = TicketDraft {
        date_time,
        customer_id: request.customer_id.clone(),
        equipment_id: request.equipment_id.clone(),
        repair_type,
        repair_details: request.repair_details.clone(),
    };

    let delay: Duration = ctx.config.create_ticket_latency();
    let result: ApiResult<TicketDetailsResponse> =
        apply_and_commit(ctx, Command::CreateTicket { draft }, actor, cause, delay).await?;

    info!(
        ticket_id = %result.response.ticket.id(),
        customer = %result.response.ticket.customer().name,
        "Ticket created"
    );
    Ok(result)
}

/// Moves a ticket to a new status.
///
/// Any status may follow any other, including itself.
///
/// # Errors
///
/// Returns an error if:
/// - Nobody is signed in
/// - The ticket id is blank or malformed, or the status is unknown
/// - The ticket does not exist
pub async fn change_status(
    ctx: &mut AppContext,
    request: &ChangeStatusRequest,
    cause: Cause,
) -> Result<ApiResult<TicketDetailsResponse>, ApiError> {
    let actor: Actor = ctx.session.require_actor("change a ticket status")?;
    let ticket_id: TicketId = parse_ticket_id(&request.ticket_id)?;
    let status: TicketStatus = request
        .status
        .trim()
        .parse()
        .map_err(translate_domain_error)?;

    let delay: Duration = ctx.config.status_change_latency();
    let result: ApiResult<TicketDetailsResponse> = apply_and_commit(
        ctx,
        Command::ChangeStatus { ticket_id, status },
        actor,
        cause,
        delay,
    )
    .await?;

    info!(%ticket_id, status = %status, "Ticket status changed");
    Ok(result)
}

/// Adds a note to a ticket.
///
/// # Returns
///
/// * `Ok(None)` if the text is blank; the ticket is left unchanged
/// * `Ok(Some(ApiResult))` with the updated ticket otherwise
///
/// # Errors
///
/// Returns an error if:
/// - Nobody is signed in
/// - The ticket id is blank or malformed
/// - The ticket does not exist
pub async fn add_note(
    ctx: &mut AppContext,
    request: &AddNoteRequest,
    cause: Cause,
) -> Result<Option<ApiResult<TicketDetailsResponse>>, ApiError> {
    let actor: Actor = ctx.session.require_actor("add a note")?;
    let ticket_id: TicketId = parse_ticket_id(&request.ticket_id)?;
    ctx.store.ticket(ticket_id).map_err(translate_domain_error)?;

    if is_blank(&request.text) {
        debug!(%ticket_id, "Ignoring blank note");
        return Ok(None);
    }

    let delay: Duration = ctx.config.add_note_latency();
    let command: Command = Command::AddNote {
        ticket_id,
        text: request.text.clone(),
    };
    let result: ApiResult<TicketDetailsResponse> =
        apply_and_commit(ctx, command, actor, cause, delay).await?;

    info!(%ticket_id, notes = result.response.ticket.notes().len(), "Note added");
    Ok(Some(result))
}

/// Returns one ticket with its timeline.
///
/// # Errors
///
/// Returns an error if nobody is signed in, or the ticket id is invalid or
/// unknown.
pub fn get_ticket(ctx: &AppContext, ticket_id: &str) -> Result<TicketDetailsResponse, ApiError> {
    ctx.session.require_user("view a ticket")?;
    let ticket_id: TicketId = parse_ticket_id(ticket_id)?;
    let ticket: &RepairTicket = ctx.store.ticket(ticket_id).map_err(translate_domain_error)?;
    Ok(ticket_details(ticket))
}

/// Lists tickets matching a status and search text.
///
/// # Errors
///
/// Returns an error if nobody is signed in or the status is unknown.
pub fn list_tickets(
    ctx: &AppContext,
    request: &TicketListRequest,
) -> Result<TicketListResponse, ApiError> {
    ctx.session.require_user("list tickets")?;
    let status: StatusFilter = match request.status.as_deref() {
        Some(raw) if !is_blank(raw) => raw.trim().parse().map_err(translate_domain_error)?,
        _ => StatusFilter::All,
    };

    let tickets: Vec<TicketSummary> = ctx
        .store
        .list_tickets(&TicketFilter::new(status, &request.search))
        .into_iter()
        .map(TicketSummary::from)
        .collect();

    Ok(TicketListResponse {
        total: tickets.len(),
        tickets,
    })
}

/// Returns the dashboard statistics and most recent tickets.
///
/// # Errors
///
/// Returns an error if nobody is signed in.
pub fn get_dashboard(ctx: &AppContext) -> Result<DashboardResponse, ApiError> {
    ctx.session.require_user("view the dashboard")?;
    let stats: DashboardStats = DashboardStats::from_tickets(ctx.store.tickets());
    Ok(DashboardResponse {
        stats: stats.into(),
        recent_tickets: recent_tickets(&ctx.store, RECENT_TICKET_LIMIT)
            .into_iter()
            .map(TicketSummary::from)
            .collect(),
    })
}

/// Lists customers for the customer table.
///
/// # Errors
///
/// Returns an error if nobody is signed in.
pub fn get_customers(
    ctx: &AppContext,
    query: &CustomerQuery,
) -> Result<CustomerListResponse, ApiError> {
    ctx.session.require_user("list customers")?;
    let rows: Vec<CustomerRow<'_>> = list_customers(&ctx.store, query);
    Ok(CustomerListResponse {
        customers: rows.into_iter().map(CustomerRowInfo::from).collect(),
    })
}

/// Returns a customer with their ticket history.
///
/// # Errors
///
/// Returns an error if nobody is signed in or the customer does not exist.
pub fn get_customer(
    ctx: &AppContext,
    customer_id: &str,
) -> Result<CustomerDetailsResponse, ApiError> {
    ctx.session.require_user("view a customer")?;
    let summary: CustomerSummary<'_> =
        customer_summary(&ctx.store, customer_id).map_err(translate_core_error)?;
    Ok(summary.into())
}

/// Suggests customers for the intake form.
///
/// # Errors
///
/// Returns an error if nobody is signed in.
pub fn suggest_customers(ctx: &AppContext, search: &str) -> Result<Vec<Customer>, ApiError> {
    ctx.session.require_user("search customers")?;
    Ok(customer_suggestions(&ctx.store, search.trim())
        .into_iter()
        .cloned()
        .collect())
}

/// Finds the equipment with a tag number, for the intake form.
///
/// # Errors
///
/// Returns an error if nobody is signed in, the tag is blank, or no
/// equipment carries it.
pub fn lookup_equipment(ctx: &AppContext, tag_number: &str) -> Result<Equipment, ApiError> {
    ctx.session.require_user("look up equipment")?;
    if is_blank(tag_number) {
        return Err(ApiError::invalid_field("tagNumber", "Tag number is required"));
    }
    ctx.store
        .find_equipment_by_tag(tag_number)
        .cloned()
        .ok_or_else(|| {
            translate_domain_error(DomainError::EquipmentNotFound(tag_number.trim().to_string()))
        })
}

/// Lists equipment for the inventory page.
///
/// # Errors
///
/// Returns an error if nobody is signed in.
pub fn get_inventory(
    ctx: &AppContext,
    query: &InventoryQuery,
) -> Result<InventoryResponse, ApiError> {
    ctx.session.require_user("view the inventory")?;
    Ok(InventoryResponse {
        items: list_inventory(&ctx.store, query)
            .into_iter()
            .cloned()
            .collect(),
        categories: inventory_categories(&ctx.store)
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}

/// Updates the signed-in user's name and email.
///
/// # Errors
///
/// Returns an error if nobody is signed in, a field is blank, or the email
/// is taken.
pub async fn update_profile(
    ctx: &mut AppContext,
    request: &UpdateProfileRequest,
) -> Result<User, ApiError> {
    ctx.session.require_user("update the profile")?;
    simulate_latency(ctx.config.profile_latency()).await;
    ctx.session.update_profile(&request.name, &request.email)
}

/// Changes the signed-in user's password.
///
/// # Errors
///
/// Returns an error if:
/// - Nobody is signed in
/// - The new password and its confirmation differ
/// - The current password is incorrect
/// - The new password does not meet policy requirements
pub async fn change_password(
    ctx: &mut AppContext,
    request: &ChangePasswordRequest,
) -> Result<ChangePasswordResponse, ApiError> {
    ctx.session.require_user("change the password")?;
    if request.new_password != request.confirm_password {
        return Err(PasswordPolicyError::ConfirmationMismatch.into());
    }

    simulate_latency(ctx.config.profile_latency()).await;
    ctx.session.change_password(
        &request.current_password,
        &request.new_password,
        &request.confirm_password,
    )?;

    Ok(ChangePasswordResponse {
        message: String::from("Password changed successfully"),
    })
}
