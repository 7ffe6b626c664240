//! Fetch-paginate-join pipeline
//!
//! Strictly sequential: all user pages, then all MFA batches (ids in
//! user-list order), then the join.

use crate::domain::result::Result;
use crate::domain::{join_users_with_mfa, UserWithMfaDevice};
use crate::ports::SignedJsonCaller;
use crate::services::{fetch_all_mfa_devices, fetch_all_users};

/// Fetch every user in the store, enriched with their MFA devices
pub fn fetch_all_users_with_mfa_devices(
    caller: &dyn SignedJsonCaller,
    identity_store_id: &str,
    region: &str,
) -> Result<Vec<UserWithMfaDevice>> {
    let users = fetch_all_users(caller, identity_store_id, region)?;

    let user_ids: Vec<String> = users.iter().map(|user| user.user_id.clone()).collect();
    let user_mfas = fetch_all_mfa_devices(caller, identity_store_id, region, &user_ids)?;

    join_users_with_mfa(users, user_mfas)
}
