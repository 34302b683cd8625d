use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(name = "impact-dashboard", version, about = "Waste-collection impact dashboard")]
pub struct CliArgs {
    /// Print a summary and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the impact API base URL
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Rows per table page
    #[arg(long = "items-per-page", value_name = "N")]
    pub items_per_page: Option<usize>,

    /// Product whose supply-chain trace is drawn on the map
    #[arg(long, value_name = "ID")]
    pub product: Option<String>,

    /// Scope attestations and the impact chart to one partner
    #[arg(long, value_name = "ID")]
    pub partner: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(url) = &self.api_url {
            std::env::set_var("IMPACT_API_URL", url);
        }
        if let Some(items) = self.items_per_page {
            std::env::set_var("ITEMS_PER_PAGE", items.to_string());
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}
