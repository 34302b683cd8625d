// API boundary: endpoint catalog, error type, envelope validation and the
// native HTTP client.

#[cfg(feature = "native")]
pub mod client;
pub mod schema;

#[cfg(feature = "native")]
pub use client::ApiClient;
pub use schema::{decode, decode_value, warn_if_unordered};

use crate::domain::TimeRange;

/// Failure to obtain a validated record list from the impact API.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("{endpoint} returned a body that is not JSON: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{endpoint} response does not match the expected schema: {reason}")]
    Schema {
        endpoint: &'static str,
        reason: String,
    },
}

/// Every API route the dashboard reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Locations,
    Vessels,
    Attestations { partner_id: Option<String> },
    Impact {
        range: TimeRange,
        partner_id: Option<String>,
    },
    Traces { product_id: String },
}

impl Endpoint {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Locations => "locations",
            Self::Vessels => "vessels",
            Self::Attestations { .. } => "attestations",
            Self::Impact { .. } => "impact",
            Self::Traces { .. } => "traces",
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Locations => "locations".to_string(),
            Self::Vessels => "vessels".to_string(),
            Self::Attestations { partner_id: None } => "attestations".to_string(),
            Self::Attestations {
                partner_id: Some(id),
            } => format!("attestations?partner={}", encode_component(id)),
            Self::Impact { range, partner_id } => {
                let mut path = format!("impact?range={}", range.query_value());
                if let Some(id) = partner_id {
                    path.push_str("&partner=");
                    path.push_str(&encode_component(id));
                }
                path
            }
            Self::Traces { product_id } => {
                format!("products/{}/traces", encode_component(product_id))
            }
        }
    }

    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.path())
    }
}

/// Percent-encode everything outside the URL unreserved set.
fn encode_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    encoded
}
