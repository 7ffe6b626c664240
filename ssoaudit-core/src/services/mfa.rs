//! MFA device listing service
//!
//! The batch-lookup API accepts at most 25 users per call and returns one
//! entry per requested user, in no guaranteed order.

use serde::Deserialize;
use serde_json::json;

use crate::domain::result::{Error, Result};
use crate::domain::{RawUserMfaEntry, UserMfa};
use crate::ports::{ServiceTarget, SignedJsonCaller};

const BATCH_SIZE: usize = 25;

#[derive(Debug, Deserialize)]
struct BatchListMfaDevicesResponse {
    #[serde(rename = "userMfaDevicesEntryList")]
    entries: Vec<RawUserMfaEntry>,
}

/// Fetch MFA device lists for the given user ids
///
/// Issues one call per chunk of 25 ids and concatenates results in chunk
/// order. Ids are not deduplicated; callers pass each id at most once.
pub fn fetch_all_mfa_devices(
    caller: &dyn SignedJsonCaller,
    identity_store_id: &str,
    region: &str,
    user_ids: &[String],
) -> Result<Vec<UserMfa>> {
    let target = ServiceTarget::batch_list_mfa_devices(region);
    let mut user_mfas = Vec::with_capacity(user_ids.len());

    for chunk in user_ids.chunks(BATCH_SIZE) {
        let user_list: Vec<_> = chunk
            .iter()
            .map(|user_id| {
                json!({"directoryId": identity_store_id, "userId": user_id})
            })
            .collect();
        let body = json!({"userList": user_list});

        let response = caller.call(&target, &body)?;
        let batch: BatchListMfaDevicesResponse = serde_json::from_value(response)
            .map_err(|e| {
                Error::decode(format!("malformed BatchListMfaDevicesForUser response: {e}"))
            })?;

        for entry in batch.entries {
            user_mfas.push(UserMfa::from_raw(entry)?);
        }
    }

    Ok(user_mfas)
}
