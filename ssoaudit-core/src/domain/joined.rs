//! Users joined with their MFA device lists

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::mfa_device::{MfaDevice, UserMfa};
use crate::domain::result::{Error, Result};
use crate::domain::time;
use crate::domain::user::User;

/// A user with their registered MFA devices, the unit of export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserWithMfaDevice {
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
    pub mfa_devices: Vec<MfaDevice>,
}

impl UserWithMfaDevice {
    fn merge(user: User, user_mfa: UserMfa) -> Self {
        Self {
            active: user.active,
            user_id: user.user_id,
            user_name: user.user_name,
            display_name: user.display_name,
            email: user.email,
            email_verification_status: user.email_verification_status,
            created_at: user.created_at,
            updated_at: user.updated_at,
            mfa_devices: user_mfa.mfa_devices,
        }
    }
}

/// Inner-join users with their MFA entries by user id
///
/// Output preserves the order of `users`. Every user must have a matching
/// entry; a miss means the two API calls saw different populations, which
/// fails the run rather than silently dropping or defaulting.
pub fn join_users_with_mfa(
    users: Vec<User>,
    user_mfas: Vec<UserMfa>,
) -> Result<Vec<UserWithMfaDevice>> {
    // Last-write-wins on duplicate ids, though the API should not emit them
    let by_user_id: HashMap<String, UserMfa> = user_mfas
        .into_iter()
        .map(|user_mfa| (user_mfa.user_id.clone(), user_mfa))
        .collect();

    users
        .into_iter()
        .map(|user| {
            let user_mfa = by_user_id.get(&user.user_id).cloned().ok_or_else(|| {
                Error::join(format!("no MFA entry for user {}", user.user_id))
            })?;
            Ok(UserWithMfaDevice::merge(user, user_mfa))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_user(user_id: &str, email: &str) -> User {
        let ts = Utc.with_ymd_and_hms(2000, 1, 23, 4, 56, 0).unwrap();
        User {
            active: true,
            user_id: user_id.to_string(),
            user_name: email.to_string(),
            display_name: "John Doe".to_string(),
            email: email.to_string(),
            email_verification_status: "VERIFIED".to_string(),
            created_at: ts,
            updated_at: ts,
        }
    }

    fn test_device(device_id: &str) -> MfaDevice {
        MfaDevice {
            device_id: device_id.to_string(),
            device_name: format!("{device_id}_name"),
            display_name: Some("MFA Device".to_string()),
            mfa_type: "WEBAUTHN".to_string(),
            registered_date: Utc.with_ymd_and_hms(2000, 1, 23, 4, 56, 0).unwrap(),
        }
    }

    #[test]
    fn test_join_preserves_user_order() {
        let users = vec![
            test_user("01234567-89ab-cdef-0123-456789abcde1", "user1@example.com"),
            test_user("01234567-89ab-cdef-0123-456789abcde2", "user2@example.com"),
        ];
        // MFA entries deliberately out of user order
        let user_mfas = vec![
            UserMfa {
                user_id: "01234567-89ab-cdef-0123-456789abcde2".to_string(),
                mfa_devices: vec![],
            },
            UserMfa {
                user_id: "01234567-89ab-cdef-0123-456789abcde1".to_string(),
                mfa_devices: vec![test_device("m-0123456789abcdef_id1")],
            },
        ];

        let joined = join_users_with_mfa(users, user_mfas).unwrap();

        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0].user_id, "01234567-89ab-cdef-0123-456789abcde1");
        assert_eq!(joined[0].mfa_devices.len(), 1);
        assert_eq!(joined[0].mfa_devices[0].device_id, "m-0123456789abcdef_id1");
        assert_eq!(joined[1].user_id, "01234567-89ab-cdef-0123-456789abcde2");
        assert!(joined[1].mfa_devices.is_empty());
    }

    #[test]
    fn test_join_carries_all_user_fields() {
        let users = vec![test_user(
            "01234567-89ab-cdef-0123-456789abcdef",
            "user@example.com",
        )];
        let user_mfas = vec![UserMfa {
            user_id: "01234567-89ab-cdef-0123-456789abcdef".to_string(),
            mfa_devices: vec![test_device("m-0123456789abcdef_id")],
        }];

        let joined = join_users_with_mfa(users, user_mfas).unwrap();
        let user = &joined[0];

        assert!(user.active);
        assert_eq!(user.user_name, "user@example.com");
        assert_eq!(user.display_name, "John Doe");
        assert_eq!(user.email, "user@example.com");
        assert_eq!(user.email_verification_status, "VERIFIED");
        assert_eq!(user.mfa_devices[0].mfa_type, "WEBAUTHN");
    }

    #[test]
    fn test_join_fails_on_missing_mfa_entry() {
        let users = vec![
            test_user("01234567-89ab-cdef-0123-456789abcde1", "user1@example.com"),
            test_user("01234567-89ab-cdef-0123-456789abcde2", "user2@example.com"),
        ];
        let user_mfas = vec![UserMfa {
            user_id: "01234567-89ab-cdef-0123-456789abcde1".to_string(),
            mfa_devices: vec![],
        }];

        let err = join_users_with_mfa(users, user_mfas).unwrap_err();
        assert!(err
            .to_string()
            .contains("no MFA entry for user 01234567-89ab-cdef-0123-456789abcde2"));
    }

    #[test]
    fn test_join_empty_inputs() {
        let joined = join_users_with_mfa(vec![], vec![]).unwrap();
        assert!(joined.is_empty());
    }
}
