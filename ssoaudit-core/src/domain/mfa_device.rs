//! MFA device domain models and the batch-lookup wire shape

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::result::Result;
use crate::domain::time;

/// A registered MFA device
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MfaDevice {
    pub device_id: String,
    pub device_name: String,
    pub display_name: Option<String>,
    pub mfa_type: String,
    #[serde(with = "time::rfc3339_utc")]
    pub registered_date: DateTime<Utc>,
}

/// One batch-lookup result entry: a user and their registered devices
#[derive(Debug, Clone, PartialEq)]
pub struct UserMfa {
    pub user_id: String,
    pub mfa_devices: Vec<MfaDevice>,
}

/// Raw device record as returned by `BatchListMfaDevicesForUser`
#[derive(Debug, Deserialize)]
pub struct RawMfaDevice {
    #[serde(rename = "deviceId")]
    pub device_id: String,
    #[serde(rename = "deviceName")]
    pub device_name: String,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(rename = "mfaType")]
    pub mfa_type: String,
    #[serde(rename = "registeredDate")]
    pub registered_date: f64,
}

/// Raw per-user entry in the batch-lookup response
#[derive(Debug, Deserialize)]
pub struct RawUserMfaEntry {
    pub user: RawUserRef,
    #[serde(rename = "mfaDevices")]
    pub mfa_devices: Vec<RawMfaDevice>,
}

#[derive(Debug, Deserialize)]
pub struct RawUserRef {
    #[serde(rename = "userId")]
    pub user_id: String,
}

impl MfaDevice {
    pub fn from_raw(raw: RawMfaDevice) -> Result<Self> {
        Ok(Self {
            device_id: raw.device_id,
            device_name: raw.device_name,
            display_name: raw.display_name,
            mfa_type: raw.mfa_type,
            registered_date: time::from_epoch_seconds(raw.registered_date)?,
        })
    }
}

impl UserMfa {
    pub fn from_raw(raw: RawUserMfaEntry) -> Result<Self> {
        Ok(Self {
            user_id: raw.user.user_id,
            mfa_devices: raw
                .mfa_devices
                .into_iter()
                .map(MfaDevice::from_raw)
                .collect::<Result<Vec<_>>>()?,
        })
    }
}
