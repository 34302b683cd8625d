mod app;
mod cli;
mod event;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;
use impact_dashboard::DashboardConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    dotenv::dotenv().ok();

    let headless = args.headless || !is_terminal();
    init_tracing(headless, std::env::var_os("DEBUG").is_some());

    let config = DashboardConfig::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    let mut app = App::new(config);
    app.product_id = args.product;
    app.partner_id = args.partner;

    if headless {
        return event::run_headless(&mut app, args.json).await;
    }

    // Setup terminal
    let mut terminal = terminal::setup()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app).await;

    // Restore terminal
    terminal::cleanup(true, true);

    result
}

/// Logs go to stderr. While the TUI owns the screen they are silenced unless
/// `DEBUG` (set by `--debug`) or `RUST_LOG` asks for them.
fn init_tracing(headless: bool, debug: bool) {
    let default_level = match (debug, headless) {
        (true, _) => "debug",
        (false, true) => "warn",
        (false, false) => "off",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
