use crate::domain::model::{GroupSummary, Origin, Product, ProductGroup, Report};
use crate::utils::error::{ReportError, Result};
use rust_decimal::Decimal;

/// Returns the products whose `domestic` flag equals `domestic`, in their original order.
pub fn partition(products: &[Product], domestic: bool) -> Vec<Product> {
    products
        .iter()
        .filter(|product| product.domestic == domestic)
        .cloned()
        .collect()
}

/// Sorts by name, case-insensitively. Products whose lower-cased names are equal keep
/// their relative order (`sort_by_cached_key` is a stable sort).
pub fn sort_by_name(products: &mut [Product]) {
    products.sort_by_cached_key(|product| product.name.to_lowercase());
}

/// Totals the group's prices. Fails instead of overflowing when the sum exceeds `Decimal::MAX`.
pub fn summarize(products: &[Product]) -> Result<GroupSummary> {
    let total_cost = products
        .iter()
        .try_fold(Decimal::ZERO, |total, product| total.checked_add(product.price))
        .ok_or_else(|| {
            ReportError::parse(format!(
                "total price of {} products exceeds {}",
                products.len(),
                Decimal::MAX
            ))
        })?;

    Ok(GroupSummary {
        total_cost,
        count: products.len(),
    })
}

fn build_group(origin: Origin, products: &[Product]) -> Result<ProductGroup> {
    let mut members = partition(products, origin.is_domestic());
    let summary = summarize(&members)?;
    sort_by_name(&mut members);

    tracing::debug!(
        "{} group: {} products, total cost {}",
        origin,
        summary.count,
        summary.total_cost
    );

    Ok(ProductGroup {
        origin,
        products: members,
        summary,
    })
}

/// Splits the fetched products into the domestic and imported groups, each sorted for display
/// and summarized in fetch order.
pub fn build_report(products: &[Product]) -> Result<Report> {
    Ok(Report {
        domestic: build_group(Origin::Domestic, products)?,
        imported: build_group(Origin::Imported, products)?,
    })
}
