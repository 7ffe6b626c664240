//! Signed JSON caller port
//!
//! The fetch services depend on this trait instead of a concrete HTTP
//! client, so pagination and batching are testable without network calls.

use serde_json::Value as JsonValue;

use crate::domain::result::Result;

/// One AWS-internal JSON-RPC operation: endpoint, signing scope, and headers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceTarget {
    /// Full endpoint URL
    pub url: String,
    /// SigV4 service name the request is signed for
    pub service: &'static str,
    /// `X-Amz-Target` header value
    pub operation: &'static str,
    /// `Content-Type` header value
    pub content_type: &'static str,
}

impl ServiceTarget {
    /// `AWSIdentityStoreService.SearchUsers` on the identity-store endpoint
    pub fn search_users(region: &str) -> Self {
        Self {
            url: format!("https://up.sso.{region}.amazonaws.com/identitystore/"),
            service: "identitystore",
            operation: "AWSIdentityStoreService.SearchUsers",
            content_type: "application/x-amz-json-1.1",
        }
    }

    /// `AppsAuthControlPlaneService.BatchListMfaDevicesForUser` on the
    /// apps-auth control-plane endpoint
    pub fn batch_list_mfa_devices(region: &str) -> Self {
        Self {
            url: format!("https://auth-control.{region}.prod.apps-auth.aws.a2z.com/"),
            service: "appsauth",
            operation: "AppsAuthControlPlaneService.BatchListMfaDevicesForUser",
            content_type: "application/x-amz-json-1.0",
        }
    }
}

/// Sign and send a JSON POST, return the parsed JSON response
pub trait SignedJsonCaller: Send + Sync {
    fn call(&self, target: &ServiceTarget, body: &JsonValue) -> Result<JsonValue>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_users_target() {
        let target = ServiceTarget::search_users("us-east-1");
        assert_eq!(target.url, "https://up.sso.us-east-1.amazonaws.com/identitystore/");
        assert_eq!(target.service, "identitystore");
        assert_eq!(target.operation, "AWSIdentityStoreService.SearchUsers");
        assert_eq!(target.content_type, "application/x-amz-json-1.1");
    }

    #[test]
    fn test_batch_list_mfa_devices_target() {
        let target = ServiceTarget::batch_list_mfa_devices("eu-west-1");
        assert_eq!(
            target.url,
            "https://auth-control.eu-west-1.prod.apps-auth.aws.a2z.com/"
        );
        assert_eq!(target.service, "appsauth");
        assert_eq!(
            target.operation,
            "AppsAuthControlPlaneService.BatchListMfaDevicesForUser"
        );
        assert_eq!(target.content_type, "application/x-amz-json-1.0");
    }
}
