//! ssoaudit core - collect and export IAM Identity Center users with MFA devices
//!
//! This crate implements the audit pipeline following hexagonal architecture:
//!
//! - **domain**: flat user/device records, the joined export record, errors
//! - **ports**: the signed-JSON-caller seam the fetch services depend on
//! - **services**: pagination, batching, join, CSV/JSON export
//! - **adapters**: the SigV4-signing blocking HTTP caller
//!
//! A run is one pass: fetch all users (paged), fetch their MFA devices
//! (batched), join by user id, export. Nothing persists between runs and
//! every failure is fatal.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types at crate root
pub use adapters::SigV4Caller;
pub use domain::result::{Error, Result};
pub use domain::{MfaDevice, User, UserMfa, UserWithMfaDevice};
pub use ports::{ServiceTarget, SignedJsonCaller};
pub use services::{
    export_csv, export_json, fetch_all_mfa_devices, fetch_all_users,
    fetch_all_users_with_mfa_devices,
};
