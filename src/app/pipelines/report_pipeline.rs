use crate::adapters::http::{build_client, fetch_products};
use crate::core::catalog::build_report;
use crate::core::format::render_report;
use crate::core::{ConfigProvider, Pipeline, Product, Report, ReportWriter};
use crate::utils::error::Result;
use reqwest::Client;

/// Fetches products from the configured endpoint and writes the grouped report to `writer`.
pub struct ProductReportPipeline<W: ReportWriter, C: ConfigProvider> {
    pub(crate) writer: W,
    pub(crate) config: C,
    pub(crate) client: Client,
}

impl<W: ReportWriter, C: ConfigProvider> ProductReportPipeline<W, C> {
    pub fn new(writer: W, config: C) -> Result<Self> {
        let client = build_client(config.timeout())?;
        Ok(Self {
            writer,
            config,
            client,
        })
    }
}

#[async_trait::async_trait]
impl<W: ReportWriter, C: ConfigProvider> Pipeline for ProductReportPipeline<W, C> {
    async fn extract(&self) -> Result<Vec<Product>> {
        tracing::info!("Fetching products from: {}", self.config.api_endpoint());
        fetch_products(&self.client, self.config.api_endpoint()).await
    }

    async fn transform(&self, products: Vec<Product>) -> Result<Report> {
        build_report(&products)
    }

    async fn load(&self, report: Report) -> Result<String> {
        let rendered = render_report(&report);
        self.writer.write_report(&rendered).await?;
        Ok(rendered)
    }
}
