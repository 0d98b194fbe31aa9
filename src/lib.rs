//! # godaddy-domains
//!
//! A minimal client for the [GoDaddy domain-management REST API](https://developer.godaddy.com/doc/endpoint/domains).
//!
//! The client holds an API key/secret pair and a base URL, builds request
//! paths from method arguments, attaches the `sso-key` authorization header,
//! and decodes JSON responses into [`serde_json::Value`]. There is no
//! pagination, no retry policy and no caching; every operation is one HTTP
//! round trip.
//!
//! ## Environments
//!
//! | Environment | Base URL |
//! |-------------|----------|
//! | Production | `https://api.godaddy.com` |
//! | OTE (test) | `https://api.ote-godaddy.com` |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use godaddy_domains::{DomainsClient, RecordFilter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DomainsClient::new("api-key", "secret")?;
//!
//!     // Domain details
//!     let details = client.get_domain_details("example.com").await?;
//!     println!("{details}");
//!
//!     // All A records named "www"
//!     let records = client
//!         .list_dns_records("example.com", &RecordFilter::by_type_and_name("A", "www"))
//!         .await?;
//!     println!("{records}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Replacing Records
//!
//! ```rust,no_run
//! # use godaddy_domains::{DnsRecord, DomainsClient, RecordFilter};
//! # async fn example(client: DomainsClient) -> godaddy_domains::Result<()> {
//! let records = vec![DnsRecord::new("1.2.3.4", 600)];
//! client
//!     .replace_dns_records("example.com", &records, &RecordFilter::by_type_and_name("A", "www"))
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! **Caution**: [`replace_dns_records`](DomainsClient::replace_dns_records)
//! replaces everything its path selects. With an empty
//! [`RecordFilter`] that is every record of the domain — records not in the
//! payload are silently deleted.
//!
//! ## Error Handling
//!
//! Operations return [`Result<T, ClientError>`](ClientError). Transport
//! failures and undecodable bodies are errors; an HTTP error status is not.
//! The API's JSON error body is decoded and returned like any other
//! response, so callers inspect its `code`/`message` fields.

mod client;
mod error;
mod path;
mod types;

pub use client::DomainsClient;
pub use error::{ClientError, Result};
pub use path::{RecordFilter, records_path};
pub use types::{DnsRecord, OTE_API_BASE, PROD_API_BASE};
