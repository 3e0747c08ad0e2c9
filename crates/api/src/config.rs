// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Console configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Storage key the signed-in user is kept under.
pub const DEFAULT_SESSION_KEY: &str = "repairShopUser";

/// Tunables for the console.
///
/// Latencies are in milliseconds and simulate the round trip of a remote
/// backend. Every field has a default, so a partial JSON document is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConsoleConfig {
    /// Delay before a login attempt is answered.
    pub login_latency_ms: u64,
    /// Delay before a new ticket is stored.
    pub create_ticket_latency_ms: u64,
    /// Delay before a status change is stored.
    pub status_change_latency_ms: u64,
    /// Delay before a note is stored.
    pub add_note_latency_ms: u64,
    /// Delay before profile and password changes are stored.
    pub profile_latency_ms: u64,
    /// Storage key for the session record.
    pub session_key: String,
    /// Shortest accepted password.
    pub min_password_length: usize,
    /// bcrypt work factor for stored password hashes.
    pub bcrypt_cost: u32,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            login_latency_ms: 800,
            create_ticket_latency_ms: 1000,
            status_change_latency_ms: 800,
            add_note_latency_ms: 0,
            profile_latency_ms: 1000,
            session_key: String::from(DEFAULT_SESSION_KEY),
            min_password_length: 8,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl ConsoleConfig {
    /// The default configuration with every simulated latency removed.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            login_latency_ms: 0,
            create_ticket_latency_ms: 0,
            status_change_latency_ms: 0,
            add_note_latency_ms: 0,
            profile_latency_ms: 0,
            ..Self::default()
        }
    }

    /// Parses a configuration from JSON, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not a valid configuration document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub const fn login_latency(&self) -> Duration {
        Duration::from_millis(self.login_latency_ms)
    }

    #[must_use]
    pub const fn create_ticket_latency(&self) -> Duration {
        Duration::from_millis(self.create_ticket_latency_ms)
    }

    #[must_use]
    pub const fn status_change_latency(&self) -> Duration {
        Duration::from_millis(self.status_change_latency_ms)
    }

    #[must_use]
    pub const fn add_note_latency(&self) -> Duration {
        Duration::from_millis(self.add_note_latency_ms)
    }

    #[must_use]
    pub const fn profile_latency(&self) -> Duration {
        Duration::from_millis(self.profile_latency_ms)
    }
}
