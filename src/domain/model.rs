use crate::utils::error::{ReportError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;

/// A product record as delivered by the endpoint.
///
/// `price` is kept as a decimal so group totals are summed exactly.
/// `weight` is in grams; `None` means "not applicable", which is not the same as zero.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub name: String,
    pub domestic: bool,
    pub price: Decimal,
    pub weight: Option<f64>,
    pub description: String,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        domestic: bool,
        price: Decimal,
        weight: Option<f64>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            domestic,
            price,
            weight,
            description: description.into(),
        }
    }

    /// Checks the field constraints that JSON decoding alone cannot express.
    /// `index` is the record's position in the response, used in the error message.
    pub fn validate(&self, index: usize) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ReportError::parse(format!(
                "record {}: name cannot be empty",
                index
            )));
        }

        if self.price < Decimal::ZERO {
            return Err(ReportError::parse(format!(
                "record {} ({}): price cannot be negative, got {}",
                index, self.name, self.price
            )));
        }

        if let Some(weight) = self.weight {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ReportError::parse(format!(
                    "record {} ({}): weight must be a non-negative number, got {}",
                    index, self.name, weight
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    Domestic,
    Imported,
}

impl Origin {
    pub fn is_domestic(self) -> bool {
        matches!(self, Origin::Domestic)
    }

    pub fn label(self) -> &'static str {
        match self {
            Origin::Domestic => "Domestic",
            Origin::Imported => "Imported",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroupSummary {
    pub total_cost: Decimal,
    pub count: usize,
}

/// One side of the partition, already in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductGroup {
    pub origin: Origin,
    pub products: Vec<Product>,
    pub summary: GroupSummary,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub domestic: ProductGroup,
    pub imported: ProductGroup,
}

impl Report {
    pub fn total_count(&self) -> usize {
        self.domestic.summary.count + self.imported.summary.count
    }
}
