use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::api::{decode, warn_if_unordered, Endpoint, FetchError};
use crate::domain::{Attestation, ChartRecord, Record, TimeRange, TraceItem};

/// Thin reqwest wrapper that returns schema-validated record lists.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let base_url = base_url.into();
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| FetchError::Transport {
                url: base_url.clone(),
                message: error.to_string(),
            })?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<Vec<T>, FetchError> {
        let url = endpoint.url(&self.base_url);
        tracing::debug!(%url, "fetching");

        let transport = |error: reqwest::Error| FetchError::Transport {
            url: url.clone(),
            message: error.to_string(),
        };

        let response = self.http.get(&url).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(transport)?;
        let records = decode(endpoint.name(), &body)?;
        tracing::info!(endpoint = endpoint.name(), count = records.len(), "fetched");
        Ok(records)
    }

    /// Locations and vessels together, as shown in the partner table.
    pub async fn partners(&self) -> Result<Vec<Record>, FetchError> {
        let mut records: Vec<Record> = self.fetch(&Endpoint::Locations).await?;
        let vessels: Vec<Record> = self.fetch(&Endpoint::Vessels).await?;
        records.extend(vessels);
        Ok(records)
    }

    pub async fn attestations(&self, partner_id: Option<&str>) -> Result<Vec<Attestation>, FetchError> {
        self.fetch(&Endpoint::Attestations {
            partner_id: partner_id.map(str::to_string),
        })
        .await
    }

    pub async fn impact(
        &self,
        range: TimeRange,
        partner_id: Option<&str>,
    ) -> Result<Vec<ChartRecord>, FetchError> {
        let records = self
            .fetch(&Endpoint::Impact {
                range,
                partner_id: partner_id.map(str::to_string),
            })
            .await?;
        warn_if_unordered(&records);
        Ok(records)
    }

    pub async fn traces(&self, product_id: &str) -> Result<Vec<TraceItem>, FetchError> {
        self.fetch(&Endpoint::Traces {
            product_id: product_id.to_string(),
        })
        .await
    }
}
