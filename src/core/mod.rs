pub mod catalog;
pub mod engine;
pub mod format;

pub use crate::domain::model::{GroupSummary, Origin, Product, ProductGroup, Report};
pub use crate::domain::ports::{ConfigProvider, Pipeline, ReportWriter};
pub use crate::utils::error::Result;
