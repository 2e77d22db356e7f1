//! Graph user object and the record translation layer.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use dirigo_resource::UserRecord;

/// User fields to select on reads. Covers the declared schema plus the
/// remote-derived `companyName`; the password profile is never selected.
pub const USER_SELECT_FIELDS: &str = "id,userPrincipalName,displayName,givenName,surname,\
    mailNickname,mail,otherMails,accountEnabled,companyName";

/// Number of random bytes behind a generated password.
const PASSWORD_ENTROPY_BYTES: usize = 24;

/// Password profile attached to a user at creation time only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordProfile {
    /// The password.
    pub password: String,
    /// Whether the user must change the password on next sign-in.
    pub force_change_password_next_sign_in: bool,
}

impl PasswordProfile {
    /// Generates a one-time profile with a random password.
    ///
    /// Uses `OsRng` directly from the operating system's CSPRNG. The secret
    /// is never read back; a directory admin resets it out of band.
    pub fn generate() -> Self {
        let mut random_bytes = [0u8; PASSWORD_ENTROPY_BYTES];
        OsRng.fill_bytes(&mut random_bytes);

        Self {
            password: URL_SAFE_NO_PAD.encode(random_bytes),
            force_change_password_next_sign_in: false,
        }
    }
}

/// The directory service's representation of a user.
///
/// Doubles as request body and response shape: on writes, unset fields are
/// omitted so the remote object keeps whatever value it had; on reads,
/// fields outside the `$select` projection simply stay `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GraphUser {
    /// Remote object ID. Response-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// User principal name (must be unique in tenant).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_principal_name: Option<String>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Given (first) name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,

    /// Surname (last name).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,

    /// Mail nickname (username portion before @).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mail_nickname: Option<String>,

    /// Primary email address. Remote-derived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mail: Option<String>,

    /// Additional email addresses, order significant for display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_mails: Option<Vec<String>>,

    /// Whether the account is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_enabled: Option<bool>,

    /// Company name. Remote-derived, not part of the record schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    /// Password profile, set at creation time only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_profile: Option<PasswordProfile>,
}

impl GraphUser {
    /// Builds the remote object for a create or update request.
    ///
    /// Present scalar fields copy 1:1 and `other_mails` copies element-wise;
    /// absent optionals stay unset so partial updates never clobber remote
    /// values. Identity, remote-derived fields, and the password profile are
    /// never taken from the record.
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            user_principal_name: Some(record.user_principal_name.clone()),
            display_name: Some(record.display_name.clone()),
            given_name: record.given_name.clone(),
            surname: record.surname.clone(),
            mail_nickname: Some(record.mail_nickname.clone()),
            other_mails: if record.other_mails.is_empty() {
                None
            } else {
                Some(record.other_mails.clone())
            },
            account_enabled: Some(record.account_enabled),
            ..Default::default()
        }
    }

    /// Writes every fetched field back onto the record, overwriting what it
    /// held. The record identity is owned by the lifecycle layer and is not
    /// touched here.
    pub fn apply_to(&self, record: &mut UserRecord) {
        record.user_principal_name = self.user_principal_name.clone().unwrap_or_default();
        record.display_name = self.display_name.clone().unwrap_or_default();
        record.given_name = self.given_name.clone();
        record.surname = self.surname.clone();
        record.mail_nickname = self.mail_nickname.clone().unwrap_or_default();
        record.mail = self.mail.clone();
        record.other_mails = self.other_mails.clone().unwrap_or_default();
        record.account_enabled = self.account_enabled.unwrap_or_default();
    }
}
