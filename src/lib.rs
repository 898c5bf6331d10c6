pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::stdout::StdoutWriter;
pub use crate::app::pipelines::ProductReportPipeline;
pub use crate::config::SourceSettings;
pub use crate::core::engine::ReportEngine;
pub use crate::utils::error::{ReportError, Result};
