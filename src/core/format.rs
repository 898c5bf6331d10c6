use crate::domain::model::{Product, ProductGroup, Report};
use rust_decimal::{Decimal, RoundingStrategy};

const MARKER: &str = "...";
const INDENT: &str = "   ";
const DESCRIPTION_PREVIEW_CHARS: usize = 10;

/// Formats a monetary amount with one fractional digit and a comma separator.
///
/// Midpoints round away from zero: `12.05` becomes `12,1`, `12.04` becomes `12,0`.
pub fn format_price(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(1);
    rounded.to_string().replace('.', ",")
}

/// Weight in grams in plain numeric form. Negative zero prints as `0g`.
pub fn format_weight(weight: Option<f64>) -> String {
    match weight {
        Some(grams) if grams == 0.0 => "0g".to_string(),
        Some(grams) => format!("{}g", grams),
        None => "N/A".to_string(),
    }
}

/// First ten characters of the description (not bytes), or all of it when shorter.
pub fn truncate_description(description: &str) -> &str {
    match description.char_indices().nth(DESCRIPTION_PREVIEW_CHARS) {
        Some((end, _)) => &description[..end],
        None => description,
    }
}

pub fn product_lines(product: &Product) -> [String; 4] {
    [
        format!("{} {}", MARKER, product.name),
        format!("{}Price: ${}", INDENT, format_price(product.price)),
        format!(
            "{}{}{}",
            INDENT,
            truncate_description(&product.description),
            MARKER
        ),
        format!("{}Weight: {}", INDENT, format_weight(product.weight)),
    ]
}

fn group_lines(group: &ProductGroup) -> Vec<String> {
    let mut lines = vec![format!(". {}", group.origin)];
    lines.extend(group.products.iter().flat_map(product_lines));
    lines
}

/// Renders the full report, one `\n`-terminated line at a time.
pub fn render_report(report: &Report) -> String {
    let mut lines = group_lines(&report.domestic);
    lines.extend(group_lines(&report.imported));

    for group in [&report.domestic, &report.imported] {
        lines.push(format!(
            "{} cost: ${}",
            group.origin,
            format_price(group.summary.total_cost)
        ));
    }
    for group in [&report.domestic, &report.imported] {
        lines.push(format!("{} count: {}", group.origin, group.summary.count));
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}
