use color_eyre::Result;
use impact_dashboard::api::ApiClient;
use impact_dashboard::{DashboardConfig, DashboardState};

#[derive(Debug)]
pub struct AppActions {
    pub config: DashboardConfig,
    pub client: Option<ApiClient>,
}

impl AppActions {
    pub const fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            client: None,
        }
    }

    pub fn initialize(&mut self) -> Result<()> {
        let client = ApiClient::new(&self.config.api_base_url, self.config.request_timeout)?;
        tracing::info!(base_url = client.base_url(), "impact API client ready");
        self.client = Some(client);
        Ok(())
    }

    /// Refresh every panel. Partners and the chart are required; attestation
    /// and trace failures are logged and leave those panels empty.
    pub async fn load_all(
        &self,
        dashboard: &mut DashboardState,
        product_id: Option<&str>,
        partner_id: Option<&str>,
    ) -> Result<()> {
        let client = self.client()?;

        dashboard.set_partners(client.partners().await?);
        self.load_chart(dashboard, partner_id).await?;

        dashboard.attestations = match client.attestations(partner_id).await {
            Ok(attestations) => attestations,
            Err(error) => {
                tracing::warn!(%error, "attestations unavailable");
                Vec::new()
            }
        };

        dashboard.traces = match product_id {
            Some(product_id) => match client.traces(product_id).await {
                Ok(traces) => traces,
                Err(error) => {
                    tracing::warn!(%error, product_id, "product trace unavailable");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        Ok(())
    }

    pub async fn load_chart(
        &self,
        dashboard: &mut DashboardState,
        partner_id: Option<&str>,
    ) -> Result<()> {
        let client = self.client()?;
        dashboard.chart = client.impact(dashboard.time_range(), partner_id).await?;
        Ok(())
    }

    fn client(&self) -> Result<&ApiClient> {
        self.client
            .as_ref()
            .ok_or_else(|| color_eyre::eyre::eyre!("API client not initialized"))
    }
}
