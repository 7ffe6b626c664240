//! User listing service
//!
//! Pages through `SearchUsers` with a continuation token until the store
//! is exhausted, mapping each raw record into a flat [`User`].

use serde::Deserialize;
use serde_json::json;

use crate::domain::result::{Error, Result};
use crate::domain::{RawUser, User};
use crate::ports::{ServiceTarget, SignedJsonCaller};

const PAGE_SIZE: u32 = 100;

#[derive(Debug, Deserialize)]
struct SearchUsersResponse {
    #[serde(rename = "Users")]
    users: Vec<RawUser>,
    #[serde(rename = "NextToken")]
    next_token: Option<String>,
}

/// Fetch the complete ordered user list for one identity store
///
/// Issues one call per page of 100, in page order; stops when the response
/// carries no continuation token. The first call sends `NextToken: null`.
pub fn fetch_all_users(
    caller: &dyn SignedJsonCaller,
    identity_store_id: &str,
    region: &str,
) -> Result<Vec<User>> {
    let target = ServiceTarget::search_users(region);
    let mut users = Vec::new();
    let mut next_token: Option<String> = None;

    loop {
        let body = json!({
            "IdentityStoreId": identity_store_id,
            "MaxResults": PAGE_SIZE,
            "NextToken": next_token,
        });

        let response = caller.call(&target, &body)?;
        let page: SearchUsersResponse = serde_json::from_value(response)
            .map_err(|e| Error::decode(format!("malformed SearchUsers response: {e}")))?;

        for raw in page.users {
            users.push(User::from_raw(raw)?);
        }

        match page.next_token {
            Some(token) if !token.is_empty() => next_token = Some(token),
            _ => break,
        }
    }

    Ok(users)
}
