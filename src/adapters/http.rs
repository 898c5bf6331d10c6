use crate::domain::model::Product;
use crate::utils::error::{ReportError, Result};
use reqwest::Client;
use std::time::Duration;

pub fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ReportError::ConfigError {
            message: format!("Failed to build HTTP client: {}", e),
        })
}

/// Performs the single GET against `endpoint`. There is no retry.
pub async fn fetch_products(client: &Client, endpoint: &str) -> Result<Vec<Product>> {
    tracing::debug!("Making API request to: {}", endpoint);

    let response = client
        .get(endpoint)
        .send()
        .await
        .map_err(|e| ReportError::fetch(format!("request to {} failed: {}", endpoint, e)))?;

    let status = response.status();
    tracing::debug!("API response status: {}", status);

    if !status.is_success() {
        return Err(ReportError::FetchError {
            status: Some(status.as_u16()),
            message: format!("endpoint responded with {}", status),
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| ReportError::fetch(format!("failed to read response body: {}", e)))?;

    decode_products(&body)
}

/// Decodes a JSON array of products and checks every record.
pub fn decode_products(body: &[u8]) -> Result<Vec<Product>> {
    let products: Vec<Product> = serde_json::from_slice(body).map_err(|e| {
        ReportError::parse(format!("response is not a JSON array of products: {}", e))
    })?;

    for (index, product) in products.iter().enumerate() {
        product.validate(index)?;
    }

    Ok(products)
}
