//! Core domain entities
//!
//! Flat records decoded from the identity-store and MFA APIs, the joined
//! export record, and the error taxonomy. No I/O happens here; raw wire
//! shapes are mapped into immutable domain structs at the boundary.

mod joined;
mod mfa_device;
pub mod result;
pub mod time;
mod user;

pub use joined::{join_users_with_mfa, UserWithMfaDevice};
pub use mfa_device::{MfaDevice, RawMfaDevice, RawUserMfaEntry, UserMfa};
pub use user::{RawUser, User};
