//! Service layer
//!
//! Each service covers one stage of the run: user listing, MFA batch
//! lookup, the joined pipeline, and the two export formats.

mod export;
mod mfa;
mod pipeline;
mod users;

pub use export::{export_csv, export_json};
pub use mfa::fetch_all_mfa_devices;
pub use pipeline::fetch_all_users_with_mfa_devices;
pub use users::fetch_all_users;
