use crate::core::Pipeline;
use crate::utils::error::Result;

/// Runs a pipeline once: extract, then transform, then load.
/// The first failing stage ends the run, so nothing is loaded after a failed extract.
pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Fetching products...");
        let products = self.pipeline.extract().await?;
        tracing::info!("Fetched {} products", products.len());

        let report = self.pipeline.transform(products).await?;
        tracing::info!(
            "Grouped {} products: {} domestic, {} imported",
            report.total_count(),
            report.domestic.summary.count,
            report.imported.summary.count
        );

        let rendered = self.pipeline.load(report).await?;
        tracing::debug!("Report written ({} bytes)", rendered.len());

        Ok(rendered)
    }
}
