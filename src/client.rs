//! GoDaddy Domains API client.

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::path::{RecordFilter, records_path};
use crate::types::{DnsRecord, PROD_API_BASE};

/// Longest request/response body echoed to the debug log.
const LOG_BODY_LIMIT: usize = 256;

/// Client for the GoDaddy domain-management endpoints.
///
/// Holds the credentials and base URL for its whole lifetime; every call is
/// a single synchronous round trip with no shared mutable state, so the
/// client can be used from multiple tasks concurrently.
pub struct DomainsClient {
    client: Client,
    api_key: String,
    secret: String,
    base_url: String,
}

impl DomainsClient {
    /// Client against the production environment
    /// ([`PROD_API_BASE`]).
    ///
    /// Fails with [`ClientError::Configuration`] when `api_key` or `secret`
    /// is empty.
    pub fn new(api_key: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, secret, PROD_API_BASE)
    }

    /// Client against an explicit base URL, e.g. [`OTE_API_BASE`] or a local
    /// test server.
    ///
    /// TLS is used exactly when the base URL scheme is `https`.
    ///
    /// [`OTE_API_BASE`]: crate::OTE_API_BASE
    pub fn with_base_url(
        api_key: impl Into<String>,
        secret: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let api_key = api_key.into();
        let secret = secret.into();
        if api_key.is_empty() {
            return Err(ClientError::Configuration {
                detail: "api_key must not be empty".to_string(),
            });
        }
        if secret.is_empty() {
            return Err(ClientError::Configuration {
                detail: "secret must not be empty".to_string(),
            });
        }

        Ok(Self {
            client: Client::new(),
            api_key,
            secret,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Retrieve details for the specified domain.
    ///
    /// Issues `GET {base}/v1/domains/{domain}`. The domain string is
    /// forwarded verbatim into the URL path; the caller is responsible for
    /// any escaping.
    pub async fn get_domain_details(&self, domain: &str) -> Result<Value> {
        self.get(domain).await
    }

    /// List DNS records for a domain, optionally narrowed by `filter`.
    ///
    /// Issues `GET {base}/v1/domains/{domain}/records[/{type}][/{name}]`.
    /// A filter with a name but no type narrows to type `A`.
    pub async fn list_dns_records(&self, domain: &str, filter: &RecordFilter) -> Result<Value> {
        self.get(&records_path(domain, filter)).await
    }

    /// Replace DNS records for a domain, optionally narrowed by `filter`.
    ///
    /// Issues `PUT {base}/v1/domains/{domain}/records[/{type}][/{name}]`
    /// with `records` as the JSON body.
    ///
    /// This is a full replace of everything the path selects, not a merge:
    /// with an empty filter it replaces **all** records of the domain, and
    /// records missing from the payload are deleted. The API returns an
    /// empty body on success, which decodes to [`Value::Null`].
    pub async fn replace_dns_records(
        &self,
        domain: &str,
        records: &[DnsRecord],
        filter: &RecordFilter,
    ) -> Result<Value> {
        self.put(&records_path(domain, filter), records).await
    }

    fn auth_header(&self) -> String {
        format!("sso-key {}:{}", self.api_key, self.secret)
    }

    fn domains_url(&self, path: &str) -> String {
        format!("{}/v1/domains/{}", self.base_url, path)
    }

    /// Execute a GET against a `/v1/domains/` path.
    async fn get(&self, path: &str) -> Result<Value> {
        let url = self.domains_url(path);
        log::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .header("Authorization", self.auth_header())
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        log::debug!("Response Status: {status}");

        let response_text = response.text().await.map_err(|e| ClientError::Network {
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        decode_body(&response_text)
    }

    /// Execute a PUT with a JSON body against a `/v1/domains/` path.
    async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        let url = self.domains_url(path);
        let body_json =
            serde_json::to_string(body).map_err(|e| ClientError::Serialization {
                detail: e.to_string(),
            })?;
        log::debug!("PUT {url}");
        log::debug!("Request Body: {}", truncate_for_log(&body_json));

        let response = self
            .client
            .put(&url)
            .header("Accept", "application/json")
            .header("Authorization", self.auth_header())
            .header("Content-Type", "application/json")
            .body(body_json)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        log::debug!("Response Status: {status}");

        let response_text = response.text().await.map_err(|e| ClientError::Network {
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        decode_body(&response_text)
    }
}

fn map_transport_error(e: reqwest::Error) -> ClientError {
    if e.is_timeout() {
        ClientError::Timeout {
            detail: e.to_string(),
        }
    } else {
        ClientError::Network {
            detail: e.to_string(),
        }
    }
}

/// Decode a response body as JSON.
///
/// The HTTP status is not inspected: GoDaddy serves a JSON error body
/// (`code`/`message`) on non-2xx responses, and the caller inspects it.
/// An empty body (the usual PUT success response) decodes to `Value::Null`.
fn decode_body(response_text: &str) -> Result<Value> {
    if response_text.is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(response_text).map_err(|e| {
        log::error!("JSON parse failed: {e}");
        log::error!("Raw response: {}", truncate_for_log(response_text));
        ClientError::Parse {
            detail: e.to_string(),
        }
    })
}

/// Truncate a body for safe logging.
fn truncate_for_log(s: &str) -> String {
    if s.len() <= LOG_BODY_LIMIT {
        return s.to_string();
    }
    let cut = (0..=LOG_BODY_LIMIT)
        .rev()
        .find(|&i| s.is_char_boundary(i))
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_empty_api_key() {
        let result = DomainsClient::new("", "secret");
        assert!(matches!(
            result,
            Err(ClientError::Configuration { detail }) if detail.contains("api_key")
        ));
    }

    #[test]
    fn new_rejects_empty_secret() {
        let result = DomainsClient::new("key", "");
        assert!(matches!(
            result,
            Err(ClientError::Configuration { detail }) if detail.contains("secret")
        ));
    }

    #[test]
    fn auth_header_format() {
        let client = DomainsClient::new("key", "secret").unwrap();
        assert_eq!(client.auth_header(), "sso-key key:secret");
    }

    #[test]
    fn default_base_is_production() {
        let client = DomainsClient::new("key", "secret").unwrap();
        assert_eq!(
            client.domains_url("example.com"),
            "https://api.godaddy.com/v1/domains/example.com"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_trimmed() {
        let client =
            DomainsClient::with_base_url("key", "secret", "https://api.ote-godaddy.com/").unwrap();
        assert_eq!(
            client.domains_url("example.com"),
            "https://api.ote-godaddy.com/v1/domains/example.com"
        );
    }

    #[test]
    fn decode_body_valid_json() {
        let value = decode_body(r#"{"domain":"example.com"}"#).unwrap();
        assert_eq!(value["domain"], "example.com");
    }

    #[test]
    fn decode_body_empty_is_null() {
        assert_eq!(decode_body("").unwrap(), Value::Null);
    }

    #[test]
    fn decode_body_non_json_is_parse_error() {
        let result = decode_body("<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(ClientError::Parse { .. })));
    }

    #[test]
    fn truncate_short_body_unchanged() {
        assert_eq!(truncate_for_log("ok"), "ok");
    }

    #[test]
    fn truncate_long_body() {
        let s = "a".repeat(LOG_BODY_LIMIT + 50);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
        assert!(result.len() < s.len());
    }

    #[test]
    fn truncate_does_not_split_multibyte_chars() {
        let s = "你".repeat(200);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
    }
}
