use crate::domain::model::{Product, Report};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Destination for the rendered report.
pub trait ReportWriter: Send + Sync {
    fn write_report(&self, report: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn timeout(&self) -> Duration;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Product>>;
    async fn transform(&self, products: Vec<Product>) -> Result<Report>;
    async fn load(&self, report: Report) -> Result<String>;
}
