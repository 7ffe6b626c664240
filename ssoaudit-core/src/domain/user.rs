//! User domain model and the raw identity-store wire shape

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};
use crate::domain::time;

/// A user record from the identity store, flattened for export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub active: bool,
    pub user_id: String,
    pub user_name: String,
    pub display_name: String,
    pub email: String,
    pub email_verification_status: String,
    #[serde(with = "time::rfc3339_utc")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "time::rfc3339_utc")]
    pub updated_at: DateTime<Utc>,
}

/// Raw user record as returned by `SearchUsers`
#[derive(Debug, Deserialize)]
pub struct RawUser {
    #[serde(rename = "Active")]
    pub active: bool,
    #[serde(rename = "UserId")]
    pub user_id: String,
    #[serde(rename = "UserName")]
    pub user_name: String,
    #[serde(rename = "UserAttributes")]
    pub attributes: RawUserAttributes,
    #[serde(rename = "Meta")]
    pub meta: RawUserMeta,
}

#[derive(Debug, Deserialize)]
pub struct RawUserAttributes {
    #[serde(rename = "displayName")]
    pub display_name: RawStringValue,
    pub emails: RawEmailList,
}

#[derive(Debug, Deserialize)]
pub struct RawEmailList {
    #[serde(rename = "ComplexListValue")]
    pub entries: Vec<RawEmail>,
}

#[derive(Debug, Deserialize)]
pub struct RawEmail {
    pub value: RawStringValue,
    #[serde(rename = "verificationStatus")]
    pub verification_status: RawStringValue,
    pub primary: RawBooleanValue,
}

#[derive(Debug, Deserialize)]
pub struct RawUserMeta {
    #[serde(rename = "CreatedAt")]
    pub created_at: f64,
    #[serde(rename = "UpdatedAt")]
    pub updated_at: f64,
}

/// Attribute wrapper used throughout the identity-store response shape
#[derive(Debug, Deserialize)]
pub struct RawStringValue {
    #[serde(rename = "StringValue")]
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct RawBooleanValue {
    #[serde(rename = "BooleanValue")]
    pub value: bool,
}

impl User {
    /// Map a raw record to the flat domain form
    ///
    /// The record must carry exactly one email flagged primary; zero or
    /// more than one is a data-shape error, never a silent pick.
    pub fn from_raw(raw: RawUser) -> Result<Self> {
        let mut primaries = raw
            .attributes
            .emails
            .entries
            .iter()
            .filter(|email| email.primary.value);

        let primary = match (primaries.next(), primaries.next()) {
            (Some(email), None) => email,
            (None, _) => {
                return Err(Error::decode(format!(
                    "user {}: no email flagged primary",
                    raw.user_id
                )))
            }
            (Some(_), Some(_)) => {
                return Err(Error::decode(format!(
                    "user {}: multiple emails flagged primary",
                    raw.user_id
                )))
            }
        };

        Ok(Self {
            active: raw.active,
            user_id: raw.user_id.clone(),
            user_name: raw.user_name.clone(),
            display_name: raw.attributes.display_name.value.clone(),
            email: primary.value.value.clone(),
            email_verification_status: primary.verification_status.value.clone(),
            created_at: time::from_epoch_seconds(raw.meta.created_at)?,
            updated_at: time::from_epoch_seconds(raw.meta.updated_at)?,
        })
    }
}
