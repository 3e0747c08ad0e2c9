// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The request boundary of the repair shop console.
//!
//! Handlers take an [`AppContext`] holding the entity store and the
//! session store, check that someone is signed in, translate request DTOs
//! into core commands, and translate core errors into [`ApiError`]s.
//! Mutating handlers are `async` and wait out a configurable simulated
//! latency before committing.

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
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod config;
mod context;
mod error;
mod handlers;
mod password_policy;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{CredentialTable, SessionStore};
pub use config::{ConsoleConfig, DEFAULT_SESSION_KEY};
pub use context::AppContext;
pub use error::{ApiError, AuthError, translate_core_error, translate_domain_error};
pub use handlers::{
    ApiResult, add_note, change_password, change_status, create_ticket, get_customer,
    get_customers, get_dashboard, get_inventory, get_ticket, list_tickets, login, logout,
    lookup_equipment, suggest_customers, update_profile, whoami,
};
pub use password_policy::{PasswordPolicy, PasswordPolicyError};
pub use request_response::{
    AddNoteRequest, ChangePasswordRequest, ChangePasswordResponse, ChangeStatusRequest,
    CreateTicketRequest, CustomerDetailsResponse, CustomerListResponse, CustomerRowInfo,
    DashboardResponse, DashboardStatsInfo, InventoryResponse, LoginRequest, LoginResponse,
    TicketDetailsResponse, TicketListRequest, TicketListResponse, TicketSummary,
    TimelineEntryInfo, UpdateProfileRequest,
};
