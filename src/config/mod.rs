pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use std::time::Duration;

pub const DEFAULT_API_ENDPOINT: &str =
    "https://interview-task-api.mca.dev/qr-scanner-codes/alpha-qr-gFpwhsQ8fkY1";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Where to fetch products from. Built once at startup and never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSettings {
    pub endpoint: String,
    pub timeout_seconds: u64,
}

impl SourceSettings {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self::new(DEFAULT_API_ENDPOINT)
    }
}

impl ConfigProvider for SourceSettings {
    fn api_endpoint(&self) -> &str {
        &self.endpoint
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for SourceSettings {
    fn validate(&self) -> Result<()> {
        validate_url("source.endpoint", &self.endpoint)?;
        validate_range(
            "source.timeout_seconds",
            self.timeout_seconds,
            1,
            MAX_TIMEOUT_SECONDS,
        )
    }
}

#[cfg(feature = "cli")]
mod cli {
    use super::toml_config::FileConfig;
    use super::{SourceSettings, DEFAULT_API_ENDPOINT, DEFAULT_TIMEOUT_SECONDS};
    use crate::utils::error::Result;
    use clap::Parser;
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "product-report")]
    #[command(about = "Prints domestic and imported products with per-group totals")]
    pub struct CliConfig {
        /// Endpoint returning the JSON array of products
        #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
        pub api_endpoint: String,

        /// Timeout for the single HTTP request
        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
        pub timeout_seconds: u64,

        /// TOML file with a [source] section; overrides the endpoint flags
        #[arg(short, long)]
        pub config: Option<PathBuf>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub log_json: bool,
    }

    impl CliConfig {
        pub fn source_settings(&self) -> Result<SourceSettings> {
            match &self.config {
                Some(path) => {
                    tracing::info!("Loading configuration from: {}", path.display());
                    Ok(FileConfig::from_file(path)?.into_settings())
                }
                None => Ok(SourceSettings::new(self.api_endpoint.clone())
                    .with_timeout_seconds(self.timeout_seconds)),
            }
        }
    }
}

#[cfg(feature = "cli")]
pub use cli::CliConfig;
