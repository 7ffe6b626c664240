//! SigV4-signed JSON caller
//!
//! Implements the [`SignedJsonCaller`] port with a blocking reqwest client.
//! Credentials come from the standard AWS default chain (environment,
//! profile files, instance/role credentials); each caller resolves its own
//! credentials once, scoped to the run's region.

use std::time::{Duration, SystemTime};

use aws_config::{BehaviorVersion, Region};
use aws_credential_types::provider::ProvideCredentials;
use aws_credential_types::Credentials;
use aws_sigv4::http_request::{sign, SignableBody, SignableRequest, SigningSettings};
use aws_sigv4::sign::v4;
use aws_smithy_runtime_api::client::identity::Identity;
use reqwest::blocking::Client;
use serde_json::Value as JsonValue;

use crate::domain::result::{Error, Result};
use crate::ports::{ServiceTarget, SignedJsonCaller};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// SigV4-signing HTTP caller for the AWS JSON-RPC endpoints
pub struct SigV4Caller {
    http: Client,
    identity: Identity,
    region: String,
}

impl SigV4Caller {
    /// Create a caller for one region, resolving default-chain credentials
    pub fn new(region: &str) -> Result<Self> {
        let credentials = load_default_credentials(region)?;
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            identity: credentials.into(),
            region: region.to_string(),
        })
    }

    /// Sign one POST and return the headers to attach to it
    ///
    /// `content-type` and `x-amz-target` are part of the signed headers,
    /// matching what the service endpoints validate.
    fn signature_headers(
        &self,
        target: &ServiceTarget,
        payload: &str,
    ) -> Result<Vec<(String, String)>> {
        let params: aws_sigv4::http_request::SigningParams = v4::SigningParams::builder()
            .identity(&self.identity)
            .region(self.region.as_str())
            .name(target.service)
            .time(SystemTime::now())
            .settings(SigningSettings::default())
            .build()
            .map_err(|e| Error::auth(format!("failed to build signing parameters: {e}")))?
            .into();

        let headers = [
            ("content-type", target.content_type),
            ("x-amz-target", target.operation),
        ];
        let signable = SignableRequest::new(
            "POST",
            target.url.as_str(),
            headers.into_iter(),
            SignableBody::Bytes(payload.as_bytes()),
        )
        .map_err(|e| Error::auth(format!("failed to build signable request: {e}")))?;

        let (instructions, _signature) = sign(signable, &params)
            .map_err(|e| Error::auth(format!("request signing failed: {e}")))?
            .into_parts();

        Ok(instructions
            .headers()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect())
    }

    /// Map request errors to user-facing messages
    fn map_request_error(&self, error: reqwest::Error) -> Error {
        if error.is_timeout() {
            Error::transport("connection timed out after 30 seconds")
        } else if error.is_connect() {
            Error::transport(format!("unable to connect: {error}"))
        } else {
            Error::transport(format!("request failed: {error}"))
        }
    }
}

impl SignedJsonCaller for SigV4Caller {
    fn call(&self, target: &ServiceTarget, body: &JsonValue) -> Result<JsonValue> {
        let payload = serde_json::to_string(body)?;
        let signature_headers = self.signature_headers(target, &payload)?;

        let mut request = self
            .http
            .post(&target.url)
            .header("Content-Type", target.content_type)
            .header("X-Amz-Target", target.operation);
        for (name, value) in &signature_headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request
            .body(payload)
            .send()
            .map_err(|e| self.map_request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let detail = truncate(&response.text().unwrap_or_default(), 256);
            return Err(match status.as_u16() {
                401 | 403 => Error::auth(format!(
                    "{} rejected the request (HTTP {}): {detail}",
                    target.operation,
                    status.as_u16()
                )),
                _ => Error::transport(format!(
                    "{} failed (HTTP {}): {detail}",
                    target.operation,
                    status.as_u16()
                )),
            });
        }

        response
            .json()
            .map_err(|e| Error::decode(format!("invalid JSON from {}: {e}", target.operation)))
    }
}

/// Resolve credentials through the AWS default chain
///
/// The SDK loader is async; this tool is otherwise blocking, so the load
/// runs once on a current-thread runtime at caller construction.
fn load_default_credentials(region: &str) -> Result<Credentials> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::auth(format!("failed to start credential runtime: {e}")))?;

    runtime.block_on(async {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;

        let provider = config
            .credentials_provider()
            .ok_or_else(|| Error::auth("no AWS credentials provider configured"))?;

        provider
            .provide_credentials()
            .await
            .map_err(|e| Error::auth(format!("failed to resolve AWS credentials: {e}")))
    })
}

fn truncate(text: &str, limit: usize) -> String {
    if text.len() <= limit {
        text.to_string()
    } else {
        let mut end = limit;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &text[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_body_unchanged() {
        assert_eq!(truncate("AccessDeniedException", 256), "AccessDeniedException");
    }

    #[test]
    fn test_truncate_long_body() {
        let long = "x".repeat(500);
        let result = truncate(&long, 256);
        assert_eq!(result.len(), 259);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let text = "é".repeat(200);
        let result = truncate(&text, 256);
        assert!(result.ends_with("..."));
    }
}
