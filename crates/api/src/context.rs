// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use repair_shop::EntityStore;
use repair_shop_persistence::Persistence;
use tracing::info;

use crate::auth::{CredentialTable, SessionStore};
use crate::config::ConsoleConfig;
use crate::error::{ApiError, translate_core_error};

/// Everything a console session works on.
///
/// The context is passed by `&mut` reference to every handler; there is no
/// global state and one operation runs at a time.
#[derive(Debug)]
pub struct AppContext {
    pub(crate) config: ConsoleConfig,
    pub(crate) store: EntityStore,
    pub(crate) session: SessionStore,
}

impl AppContext {
    /// Starts a console over the sample data.
    ///
    /// The built-in accounts are loaded into the credential table and any
    /// session left in `persistence` is restored.
    ///
    /// # Errors
    ///
    /// Returns an error if the sample data or the credential table cannot be
    /// built.
    pub fn new(config: ConsoleConfig, persistence: Persistence) -> Result<Self, ApiError> {
        let store: EntityStore = EntityStore::seeded().map_err(translate_core_error)?;
        let credentials: CredentialTable = CredentialTable::seeded(config.bcrypt_cost)?;
        Ok(Self::with_parts(config, store, persistence, credentials))
    }

    /// Assembles a console from explicit parts, restoring any stored session.
    #[must_use]
    pub fn with_parts(
        config: ConsoleConfig,
        store: EntityStore,
        persistence: Persistence,
        credentials: CredentialTable,
    ) -> Self {
        let mut session: SessionStore = SessionStore::new(persistence, credentials, &config);
        session.restore_session();

        info!(
            tickets = store.tickets().len(),
            customers = store.customers().len(),
            equipment = store.equipment().len(),
            signed_in = session.is_authenticated(),
            "Console ready"
        );

        Self {
            config,
            store,
            session,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// The entity store, including its audit log.
    #[must_use]
    pub const fn store(&self) -> &EntityStore {
        &self.store
    }

    #[must_use]
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }
}
