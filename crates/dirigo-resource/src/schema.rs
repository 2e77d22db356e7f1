//! Fixed field schema for the directory user resource.
//!
//! Declared once; hosts use it to classify fields when diffing declarative
//! state, and backends use the remote names to build fetch projections.

use serde::{Deserialize, Serialize};

/// Required/optional/computed classification of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Must be set in the declarative record before create/update.
    Required,
    /// May be absent; absent values are never written to the remote object.
    Optional,
    /// Remote-derived and read-only; populated on fetch, never written.
    Computed,
}

/// One field of the user schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Field name in the declarative record.
    pub name: &'static str,
    /// Field name in the remote object.
    pub remote_name: &'static str,
    /// Classification.
    pub kind: FieldKind,
    /// Whether the field holds an ordered sequence of values.
    pub multi_valued: bool,
}

/// The user resource schema.
pub struct UserSchema;

/// The eight declared fields, in declaration order.
const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "user_principal_name",
        remote_name: "userPrincipalName",
        kind: FieldKind::Required,
        multi_valued: false,
    },
    FieldSpec {
        name: "display_name",
        remote_name: "displayName",
        kind: FieldKind::Required,
        multi_valued: false,
    },
    FieldSpec {
        name: "given_name",
        remote_name: "givenName",
        kind: FieldKind::Optional,
        multi_valued: false,
    },
    FieldSpec {
        name: "surname",
        remote_name: "surname",
        kind: FieldKind::Optional,
        multi_valued: false,
    },
    FieldSpec {
        name: "mail_nickname",
        remote_name: "mailNickname",
        kind: FieldKind::Required,
        multi_valued: false,
    },
    FieldSpec {
        name: "mail",
        remote_name: "mail",
        kind: FieldKind::Computed,
        multi_valued: false,
    },
    FieldSpec {
        name: "other_mails",
        remote_name: "otherMails",
        kind: FieldKind::Optional,
        multi_valued: true,
    },
    FieldSpec {
        name: "account_enabled",
        remote_name: "accountEnabled",
        kind: FieldKind::Required,
        multi_valued: false,
    },
];

impl UserSchema {
    /// All declared fields.
    pub fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    /// Look up a field by its record name.
    pub fn field(name: &str) -> Option<&'static FieldSpec> {
        FIELDS.iter().find(|f| f.name == name)
    }

    /// Remote names of all declared fields, in declaration order.
    pub fn remote_names() -> impl Iterator<Item = &'static str> {
        FIELDS.iter().map(|f| f.remote_name)
    }
}
