// Export our modules for use in binaries, the web dashboard and tests
pub mod api;
pub mod charts;
pub mod config;
pub mod domain;
pub mod map;
pub mod state;
pub mod view;

pub use config::DashboardConfig;
pub use domain::{Attestation, ChartRecord, PartnerType, Record, TimeRange, TraceItem};
pub use state::{DashboardState, DashboardSummary, PartnerPage};
