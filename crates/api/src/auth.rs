// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and session services.

use repair_shop_audit::Actor;
use repair_shop_domain::{User, UserRole, is_blank};
use repair_shop_persistence::{KeyValueStore, Persistence, PersistenceError};
use tracing::{info, warn};

use crate::config::ConsoleConfig;
use crate::error::{ApiError, AuthError};
use crate::password_policy::PasswordPolicy;

/// A user record together with its password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Credential {
    user: User,
    password_hash: String,
}

/// The users allowed to sign in to the console.
///
/// Passwords are only ever held as bcrypt hashes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialTable {
    entries: Vec<Credential>,
}

impl CredentialTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates the table holding the built-in admin and technician accounts.
    ///
    /// # Arguments
    ///
    /// * `cost` - The bcrypt work factor for the stored hashes
    ///
    /// # Errors
    ///
    /// Returns an error if hashing fails.
    pub fn seeded(cost: u32) -> Result<Self, AuthError> {
        let mut table: Self = Self::new();
        table.add(
            User::new(
                "1",
                "Admin User",
                "123-456-7890",
                "admin@example.com",
                UserRole::Admin,
            ),
            "admin123",
            cost,
        )?;
        table.add(
            User::new(
                "2",
                "Technician User",
                "098-765-4321",
                "tech@example.com",
                UserRole::Technician,
            ),
            "tech123",
            cost,
        )?;
        Ok(table)
    }

    /// Adds an account, hashing its password.
    ///
    /// # Errors
    ///
    /// Returns an error if the id or email is already taken, or if hashing fails.
    pub fn add(&mut self, user: User, password: &str, cost: u32) -> Result<(), AuthError> {
        if self.entries.iter().any(|entry| entry.user.id == user.id) {
            return Err(AuthError::CredentialStore {
                message: format!("User '{}' already exists", user.id),
            });
        }
        if self.find_by_email(&user.email).is_some() {
            return Err(AuthError::CredentialStore {
                message: format!("Email '{}' is already registered", user.email),
            });
        }

        let password_hash: String = bcrypt::hash(password, cost)?;
        self.entries.push(Credential {
            user,
            password_hash,
        });
        Ok(())
    }

    /// Checks an email/password pair.
    ///
    /// The email must match exactly. Unknown emails and wrong passwords fail
    /// the same way.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AuthenticationFailed` if the pair does not match.
    pub fn verify(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let invalid = || AuthError::AuthenticationFailed {
            reason: String::from("Invalid email or password"),
        };

        let credential: &Credential = self.find_by_email(email).ok_or_else(invalid)?;
        if bcrypt::verify(password, &credential.password_hash)? {
            Ok(credential.user.clone())
        } else {
            Err(invalid())
        }
    }

    fn find_by_email(&self, email: &str) -> Option<&Credential> {
        self.entries.iter().find(|entry| entry.user.email == email)
    }

    fn find_by_id_mut(&mut self, user_id: &str) -> Result<&mut Credential, AuthError> {
        self.entries
            .iter_mut()
            .find(|entry| entry.user.id == user_id)
            .ok_or_else(|| AuthError::CredentialStore {
                message: format!("User '{user_id}' has no credentials"),
            })
    }
}

/// The signed-in user and the durable record of it.
///
/// At most one user is signed in at a time. The user is written to storage
/// as JSON on login so a later [`SessionStore::restore_session`] can pick
/// it up again; the password never is.
#[derive(Debug)]
pub struct SessionStore {
    persistence: Persistence,
    credentials: CredentialTable,
    session_key: String,
    bcrypt_cost: u32,
    policy: PasswordPolicy,
    current: Option<User>,
}

impl SessionStore {
    /// Creates a session store with no signed-in user.
    ///
    /// Call [`Self::restore_session`] to pick up a previously stored user.
    #[must_use]
    pub fn new(
        persistence: Persistence,
        credentials: CredentialTable,
        config: &ConsoleConfig,
    ) -> Self {
        Self {
            persistence,
            credentials,
            session_key: config.session_key.clone(),
            bcrypt_cost: config.bcrypt_cost,
            policy: PasswordPolicy::new(config.min_password_length),
            current: None,
        }
    }

    /// Loads the stored user, if any, and makes it current.
    ///
    /// An unreadable or malformed entry is logged, removed, and treated as
    /// no session.
    pub fn restore_session(&mut self) -> Option<User> {
        let stored: Result<Option<User>, PersistenceError> =
            self.persistence.read_json(&self.session_key);

        self.current = match stored {
            Ok(Some(user)) => {
                info!(user_id = %user.id, role = %user.role, "Restored session");
                Some(user)
            }
            Ok(None) => None,
            Err(PersistenceError::SerializationError(reason)) => {
                warn!(key = %self.session_key, %reason, "Discarding malformed stored session");
                if let Err(err) = self.persistence.remove(&self.session_key) {
                    warn!(key = %self.session_key, %err, "Failed to remove malformed session");
                }
                None
            }
            Err(err) => {
                warn!(key = %self.session_key, %err, "Failed to read stored session");
                None
            }
        };
        self.current.clone()
    }

    /// Signs a user in.
    ///
    /// # Arguments
    ///
    /// * `email` - The account email, matched exactly
    /// * `password` - The account password
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials do not match or the session
    /// cannot be stored. The previous session is kept in either case.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        let user: User = match self.credentials.verify(email, password) {
            Ok(user) => user,
            Err(err) => {
                warn!(email, "Login failed");
                return Err(err);
            }
        };

        self.persistence.write_json(&self.session_key, &user)?;
        info!(user_id = %user.id, role = %user.role, "User logged in");
        self.current = Some(user.clone());
        Ok(user)
    }

    /// Signs the current user out and clears the stored session.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored session cannot be removed.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        self.persistence.remove(&self.session_key)?;
        if let Some(user) = self.current.take() {
            info!(user_id = %user.id, "User logged out");
        }
        Ok(())
    }

    /// The signed-in user, if any.
    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Returns the signed-in user or fails.
    ///
    /// # Arguments
    ///
    /// * `action` - What the caller is about to do, for the error message
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthenticated` if nobody is signed in.
    pub fn require_user(&self, action: &str) -> Result<&User, AuthError> {
        self.current.as_ref().ok_or_else(|| AuthError::Unauthenticated {
            action: action.to_string(),
        })
    }

    /// The signed-in user as an audit actor.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthenticated` if nobody is signed in.
    pub fn require_actor(&self, action: &str) -> Result<Actor, AuthError> {
        self.require_user(action).map(Actor::from)
    }

    /// Changes the signed-in user's name and email.
    ///
    /// Both the credential table and the stored session are rewritten.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Nobody is signed in
    /// - The name or email is blank
    /// - The email belongs to another account
    /// - The session cannot be stored
    pub fn update_profile(&mut self, name: &str, email: &str) -> Result<User, ApiError> {
        let mut user: User = self.require_user("update the profile")?.clone();

        let missing: Vec<String> = [("name", name), ("email", email)]
            .into_iter()
            .filter(|(_, value)| is_blank(value))
            .map(|(field, _)| field.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ApiError::ValidationFailed {
                message: format!("Missing required fields: {}", missing.join(", ")),
                fields: missing,
            });
        }

        let email: &str = email.trim();
        if self
            .credentials
            .find_by_email(email)
            .is_some_and(|entry| entry.user.id != user.id)
        {
            return Err(ApiError::invalid_field(
                "email",
                format!("Email '{email}' is already in use"),
            ));
        }

        user.name = name.trim().to_string();
        user.email = email.to_string();

        let credential: &mut Credential = self.credentials.find_by_id_mut(&user.id)?;
        self.persistence.write_json(&self.session_key, &user)?;
        credential.user = user.clone();
        self.current = Some(user.clone());
        info!(user_id = %user.id, "Profile updated");
        Ok(user)
    }

    /// Changes the signed-in user's password.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Nobody is signed in
    /// - The current password is wrong
    /// - The new password and its confirmation differ
    /// - The new password fails the password policy
    pub fn change_password(
        &mut self,
        current_password: &str,
        new_password: &str,
        confirmation: &str,
    ) -> Result<(), ApiError> {
        let user: User = self.require_user("change the password")?.clone();

        if self.credentials.verify(&user.email, current_password).is_err() {
            warn!(user_id = %user.id, "Password change rejected: wrong current password");
            return Err(ApiError::AuthenticationFailed {
                reason: String::from("Current password is incorrect"),
            });
        }

        self.policy
            .validate(new_password, confirmation, &user.email, &user.name)?;

        let password_hash: String =
            bcrypt::hash(new_password, self.bcrypt_cost).map_err(AuthError::from)?;
        self.credentials.find_by_id_mut(&user.id)?.password_hash = password_hash;
        info!(user_id = %user.id, "Password changed");
        Ok(())
    }
}
