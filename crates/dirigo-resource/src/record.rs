//! The declarative attribute record for a directory user.
//!
//! One record is instantiated per reconciliation invocation from the host's
//! persisted state and written back when the invocation completes. Required
//! fields are plain types, so a record that exists is structurally valid;
//! optional fields are `Option` and absent values stay absent through the
//! translation layer.

use serde::{Deserialize, Serialize};

use crate::error::{ResourceError, ResourceResult};

/// Declarative desired/observed state of a directory user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Remote-assigned object identity. `None` until a create succeeds, and
    /// cleared again when the remote object is reported gone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// User principal name (must be unique in the directory).
    pub user_principal_name: String,

    /// Display name.
    pub display_name: String,

    /// Given (first) name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,

    /// Surname (last name).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,

    /// Mail nickname (username portion before @).
    pub mail_nickname: String,

    /// Primary email address. Remote-derived; never sent on writes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail: Option<String>,

    /// Additional email addresses, order preserved on round-trip.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub other_mails: Vec<String>,

    /// Whether the account is enabled.
    pub account_enabled: bool,
}

impl UserRecord {
    /// Create a record with the required fields set and all optionals absent.
    pub fn new(
        user_principal_name: impl Into<String>,
        display_name: impl Into<String>,
        mail_nickname: impl Into<String>,
        account_enabled: bool,
    ) -> Self {
        Self {
            id: None,
            user_principal_name: user_principal_name.into(),
            display_name: display_name.into(),
            given_name: None,
            surname: None,
            mail_nickname: mail_nickname.into(),
            mail: None,
            other_mails: Vec::new(),
            account_enabled,
        }
    }

    /// Set the given name.
    #[must_use]
    pub fn with_given_name(mut self, given_name: impl Into<String>) -> Self {
        self.given_name = Some(given_name.into());
        self
    }

    /// Set the surname.
    #[must_use]
    pub fn with_surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = Some(surname.into());
        self
    }

    /// Set the additional email addresses.
    #[must_use]
    pub fn with_other_mails<I, S>(mut self, mails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.other_mails = mails.into_iter().map(Into::into).collect();
        self
    }

    /// Check if the record refers to an existing remote object.
    pub fn is_present(&self) -> bool {
        self.id.is_some()
    }

    /// Get the remote identity, or fail with the operation that needed it.
    pub fn require_id(&self, operation: &'static str) -> ResourceResult<&str> {
        self.id
            .as_deref()
            .ok_or(ResourceError::MissingIdentity { operation })
    }

    /// Mark the record as absent from the remote system.
    pub fn clear_id(&mut self) {
        self.id = None;
    }
}
