//! GoDaddy API types and endpoint constants.

use serde::{Deserialize, Serialize};

/// Production API base URL.
pub const PROD_API_BASE: &str = "https://api.godaddy.com";

/// OTE (operational test environment) API base URL.
///
/// A separate environment mirroring production, for safe testing with OTE
/// credentials.
pub const OTE_API_BASE: &str = "https://api.ote-godaddy.com";

/// A single DNS record in a replace payload.
///
/// `data` and `ttl` are required by the API. The remaining fields are
/// record-type specific: `priority` for MX and SRV, `port`/`protocol`/
/// `service`/`weight` for SRV. Absent fields are omitted from the JSON
/// body entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Record data, e.g. an IPv4 address for an A record.
    pub data: String,
    /// Time to live in seconds.
    pub ttl: u32,
    /// Record name. Only needed when the records path does not already
    /// carry one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Record type. Only needed when the records path does not already
    /// carry one.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
    /// MX/SRV priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    /// SRV port.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// SRV protocol, e.g. `"_tcp"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// SRV service, e.g. `"_sip"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// SRV weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u16>,
}

impl DnsRecord {
    /// Record with only the required fields set.
    pub fn new(data: impl Into<String>, ttl: u32) -> Self {
        Self {
            data: data.into(),
            ttl,
            name: None,
            record_type: None,
            priority: None,
            port: None,
            protocol: None,
            service: None,
            weight: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_record_serializes_required_fields_only() {
        let record = DnsRecord::new("1.2.3.4", 600);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"data":"1.2.3.4","ttl":600}"#);
    }

    #[test]
    fn record_type_uses_type_key() {
        let record = DnsRecord {
            record_type: Some("MX".to_string()),
            priority: Some(10),
            ..DnsRecord::new("mail.example.com", 3600)
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""type":"MX""#));
        assert!(json.contains(r#""priority":10"#));
    }

    #[test]
    fn deserialize_api_record() {
        let record: DnsRecord = serde_json::from_str(
            r#"{"data":"1.2.3.4","ttl":600,"name":"www","type":"A"}"#,
        )
        .unwrap();
        assert_eq!(record.data, "1.2.3.4");
        assert_eq!(record.ttl, 600);
        assert_eq!(record.name.as_deref(), Some("www"));
        assert_eq!(record.record_type.as_deref(), Some("A"));
    }
}
