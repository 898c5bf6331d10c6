use httpmock::prelude::*;
use product_report::core::ReportWriter;
use product_report::{ProductReportPipeline, ReportEngine, ReportError, SourceSettings};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone, Default)]
struct CapturingWriter {
    output: Arc<Mutex<String>>,
}

impl CapturingWriter {
    async fn contents(&self) -> String {
        self.output.lock().await.clone()
    }
}

impl ReportWriter for CapturingWriter {
    async fn write_report(&self, report: &str) -> product_report::Result<()> {
        self.output.lock().await.push_str(report);
        Ok(())
    }
}

fn engine_for(
    server: &MockServer,
    path: &str,
    writer: CapturingWriter,
) -> ReportEngine<ProductReportPipeline<CapturingWriter, SourceSettings>> {
    let settings = SourceSettings::new(server.url(path)).with_timeout_seconds(5);
    ReportEngine::new(ProductReportPipeline::new(writer, settings).unwrap())
}

#[tokio::test]
async fn test_end_to_end_report() -> anyhow::Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/products");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"name": "Banana", "domestic": true, "price": 2, "description": "Yellow fruit", "weight": 120},
                {"name": "Espresso beans", "domestic": false, "price": 10.35, "description": "Dark roasted arabica", "weight": 250},
                {"name": "apple", "domestic": true, "price": 1.5, "description": "Red"},
                {"name": "Cheddar", "domestic": false, "price": 4.2, "description": "Aged 12 months", "weight": 500}
            ]));
    });

    let writer = CapturingWriter::default();
    let engine = engine_for(&server, "/products", writer.clone());

    let rendered = engine.run().await?;

    api_mock.assert();
    let expected = "\
. Domestic
... apple
   Price: $1,5
   Red...
   Weight: N/A
... Banana
   Price: $2,0
   Yellow fru...
   Weight: 120g
. Imported
... Cheddar
   Price: $4,2
   Aged 12 mo...
   Weight: 500g
... Espresso beans
   Price: $10,4
   Dark roast...
   Weight: 250g
Domestic cost: $3,5
Imported cost: $14,6
Domestic count: 2
Imported count: 2
";
    assert_eq!(rendered, expected);
    assert_eq!(writer.contents().await, expected);
    Ok(())
}

#[tokio::test]
async fn test_empty_product_list() -> anyhow::Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/empty");
        then.status(200).json_body(serde_json::json!([]));
    });

    let writer = CapturingWriter::default();
    engine_for(&server, "/empty", writer.clone()).run().await?;

    let output = writer.contents().await;
    assert!(output.contains("Domestic cost: $0,0\n"));
    assert!(output.contains("Imported count: 0\n"));
    Ok(())
}

#[tokio::test]
async fn test_error_status_is_fetch_error_and_writes_nothing() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/failed");
        then.status(500);
    });

    let writer = CapturingWriter::default();
    let result = engine_for(&server, "/failed", writer.clone()).run().await;

    api_mock.assert_hits(1);
    match result {
        Err(ReportError::FetchError { status, .. }) => assert_eq!(status, Some(500)),
        other => panic!("expected FetchError, got {:?}", other),
    }
    assert!(writer.contents().await.is_empty());
}

#[tokio::test]
async fn test_not_found_is_not_retried() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/missing");
        then.status(404);
    });

    let result = engine_for(&server, "/missing", CapturingWriter::default())
        .run()
        .await;

    api_mock.assert_hits(1);
    assert!(matches!(result, Err(ReportError::FetchError { .. })));
}

#[tokio::test]
async fn test_malformed_body_is_parse_error_and_writes_nothing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/object");
        then.status(200)
            .json_body(serde_json::json!({"products": []}));
    });

    let writer = CapturingWriter::default();
    let result = engine_for(&server, "/object", writer.clone()).run().await;

    assert!(matches!(result, Err(ReportError::ParseError { .. })));
    assert!(writer.contents().await.is_empty());
}

#[tokio::test]
async fn test_missing_required_field_is_parse_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/products");
        then.status(200).json_body(serde_json::json!([
            {"name": "Banana", "price": 2, "description": "Yellow fruit"}
        ]));
    });

    let result = engine_for(&server, "/products", CapturingWriter::default())
        .run()
        .await;

    assert!(matches!(result, Err(ReportError::ParseError { .. })));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_fetch_error() {
    // Nothing listens on port 1.
    let settings = SourceSettings::new("http://127.0.0.1:1/products").with_timeout_seconds(2);
    let writer = CapturingWriter::default();
    let engine = ReportEngine::new(ProductReportPipeline::new(writer.clone(), settings).unwrap());

    let result = engine.run().await;

    assert!(matches!(
        result,
        Err(ReportError::FetchError { status: None, .. })
    ));
    assert!(writer.contents().await.is_empty());
}

#[tokio::test]
async fn test_price_total_overflow_is_parse_error_and_writes_nothing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/products");
        then.status(200).json_body(serde_json::json!([
            {"name": "Yacht", "domestic": true, "price": 7e28, "description": "Very large"},
            {"name": "Island", "domestic": true, "price": 7e28, "description": "Also large"}
        ]));
    });

    let writer = CapturingWriter::default();
    let result = engine_for(&server, "/products", writer.clone()).run().await;

    assert!(matches!(result, Err(ReportError::ParseError { .. })));
    assert!(writer.contents().await.is_empty());
}

#[tokio::test]
async fn test_negative_zero_weight_renders_as_zero() -> anyhow::Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/products");
        then.status(200).json_body(serde_json::json!([
            {"name": "Feather", "domestic": false, "price": 1, "description": "Light", "weight": -0.0}
        ]));
    });

    let rendered = engine_for(&server, "/products", CapturingWriter::default())
        .run()
        .await?;

    assert!(rendered.contains("   Weight: 0g\n"));
    assert!(!rendered.contains("-0g"));
    Ok(())
}
