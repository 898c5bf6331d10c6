use clap::Parser;
use product_report::utils::{logger, validation::Validate};
use product_report::{
    CliConfig, ProductReportPipeline, ReportEngine, ReportError, SourceSettings, StdoutWriter,
};

fn build_engine(
    config: &CliConfig,
) -> product_report::Result<ReportEngine<ProductReportPipeline<StdoutWriter, SourceSettings>>> {
    let settings = config.source_settings()?;
    settings.validate()?;
    tracing::debug!("Source settings: {:?}", settings);

    let pipeline = ProductReportPipeline::new(StdoutWriter::new(), settings)?;
    Ok(ReportEngine::new(pipeline))
}

fn fail(e: ReportError) -> ! {
    tracing::error!(
        "Report failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("{}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    let engine = match build_engine(&config) {
        Ok(engine) => engine,
        Err(e) => fail(e),
    };

    if let Err(e) = engine.run().await {
        fail(e);
    }

    tracing::debug!("Report completed");
}
