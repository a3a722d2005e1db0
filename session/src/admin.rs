//! Admin dashboard operations: user listing and admin provisioning.
//!
//! Both calls go straight to the remote API with the stored bearer token. The
//! backend enforces the admin role; views only hide what a non-admin cannot
//! use.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use crate::env::Notice;
use crate::error::{SessionError, ValidationError};
use crate::manager::SessionManager;
use crate::types::{RegisterRequest, UserListing};

/// Check a registration form (self-service or admin) before any request is made.
///
/// Names and email are trimmed; passwords are compared verbatim.
///
/// # Errors
///
/// Returns [`ValidationError::MissingField`] for a blank field and
/// [`ValidationError::PasswordMismatch`] when the confirmation differs.
pub fn validate_registration(form: &RegisterRequest) -> Result<RegisterRequest, ValidationError> {
    let first_name = required("First name", &form.first_name)?;
    let last_name = required("Last name", &form.last_name)?;
    let email = required("Email", &form.email)?;
    if form.password.is_empty() {
        return Err(ValidationError::MissingField("Password"));
    }
    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(RegisterRequest {
        first_name,
        last_name,
        email,
        password: form.password.clone(),
        confirm_password: form.confirm_password.clone(),
    })
}

fn required(label: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(label));
    }
    Ok(trimmed.to_owned())
}

impl SessionManager {
    /// Fetch the user listing with the stored token.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotAuthenticated`] without a stored token, otherwise the
    /// API failure. An "Error" notice is raised in both cases.
    pub async fn list_users(&self) -> Result<UserListing, SessionError> {
        let result = match self.tokens.get() {
            Some(bearer) => self.api.list_users(&bearer).await.map_err(SessionError::from),
            None => Err(SessionError::NotAuthenticated),
        };
        match result {
            Ok(listing) => {
                tracing::debug!(count = listing.users.len(), "fetched user listing");
                Ok(listing)
            }
            Err(e) => {
                tracing::warn!(error = %e, "user listing failed");
                self.notifier.notify(Notice::error("Error", e.to_string()));
                Err(e)
            }
        }
    }

    /// Validate and submit a new admin account.
    ///
    /// # Errors
    ///
    /// [`SessionError::Validation`] without any request when the form is
    /// invalid ("Passwords don't match" / "Missing information" notices);
    /// otherwise [`SessionError::NotAuthenticated`] or the API failure with a
    /// "Registration Failed" notice.
    pub async fn register_admin(&self, form: &RegisterRequest) -> Result<(), SessionError> {
        let admin = match validate_registration(form) {
            Ok(admin) => admin,
            Err(e) => {
                self.notifier.notify(e.notice());
                return Err(e.into());
            }
        };

        let result = match self.tokens.get() {
            Some(bearer) => self
                .api
                .register_admin(&bearer, &admin)
                .await
                .map_err(SessionError::from),
            None => Err(SessionError::NotAuthenticated),
        };
        match result {
            Ok(()) => {
                tracing::info!(email = %admin.email, "admin registered");
                self.notifier
                    .notify(Notice::info("Admin Registered", "A new admin has been created."));
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "admin registration failed");
                self.notifier.notify(Notice::error("Registration Failed", e.to_string()));
                Err(e)
            }
        }
    }
}
