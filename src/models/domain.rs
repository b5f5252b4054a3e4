use serde::{Deserialize, Serialize};
use std::fmt;

/// Product category. The platform trades a closed set of categories; buyers
/// declare one preferred category plus any accepted alternatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "raw materials")]
    RawMaterials,
    #[serde(rename = "electronics")]
    Electronics,
    #[serde(rename = "packaging")]
    Packaging,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::RawMaterials => "raw materials",
            Category::Electronics => "electronics",
            Category::Packaging => "packaging",
        };
        write!(f, "{}", label)
    }
}

/// Why a stock item sits idle. Carried on products and buyer preferences but
/// not consulted by scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Surplus,
    Obsolete,
    Underused,
}

/// Market demand level for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemandLevel {
    High,
    Medium,
    Low,
}

/// Estimated time-to-sale bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "< 1 month")]
    UnderOneMonth,
    #[serde(rename = "1-3 months")]
    OneToThreeMonths,
    #[serde(rename = "3-6 months")]
    ThreeToSixMonths,
    #[serde(rename = "> 6 months")]
    OverSixMonths,
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Timeframe::UnderOneMonth => "< 1 month",
            Timeframe::OneToThreeMonths => "1-3 months",
            Timeframe::ThreeToSixMonths => "3-6 months",
            Timeframe::OverSixMonths => "> 6 months",
        };
        write!(f, "{}", label)
    }
}

/// A dormant stock item offered on the platform.
///
/// Price and quantity share a unit convention that depends on the category
/// (per-kg for raw materials, per-unit otherwise). Location is an open
/// string resolved through the geo index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub price: f64,
    pub quantity: f64,
    pub location: String,
    pub status: StockStatus,
}

/// A registered buyer profile with its acquisition constraints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Buyer {
    pub id: u32,
    pub name: String,
    #[serde(rename = "preferredCategory")]
    pub preferred_category: Category,
    #[serde(rename = "alternativeCategories", default)]
    pub alternative_categories: Vec<Category>,
    #[serde(rename = "minPrice")]
    pub min_price: f64,
    #[serde(rename = "maxPrice")]
    pub max_price: f64,
    #[serde(rename = "minQuantity")]
    pub min_quantity: f64,
    pub location: String,
    #[serde(rename = "preferredStatuses", default)]
    pub preferred_statuses: Vec<StockStatus>,
}

/// Market reference data for a category.
///
/// `growth_rate` is carried for reporting consumers; prediction only reads
/// demand level and average price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketTrend {
    #[serde(rename = "demandLevel")]
    pub demand_level: DemandLevel,
    #[serde(rename = "averagePrice")]
    pub average_price: f64,
    #[serde(rename = "growthRate", default)]
    pub growth_rate: f64,
}

impl Default for MarketTrend {
    /// Fallback trend for categories without market data
    fn default() -> Self {
        Self {
            demand_level: DemandLevel::Medium,
            average_price: 30.0,
            growth_rate: 0.0,
        }
    }
}

/// Sales prediction derived from a match score and market trend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesPrediction {
    pub probability: u8,
    #[serde(rename = "estimatedTimeframe")]
    pub estimated_timeframe: Timeframe,
    #[serde(rename = "potentialValue")]
    pub potential_value: f64,
}

/// Scored product-buyer pair with its prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "productId")]
    pub product_id: u32,
    #[serde(rename = "productName")]
    pub product_name: String,
    #[serde(rename = "buyerId")]
    pub buyer_id: u32,
    #[serde(rename = "buyerName")]
    pub buyer_name: String,
    #[serde(rename = "matchScore")]
    pub score: u8,
    #[serde(rename = "matchReasons")]
    pub reasons: Vec<String>,
    pub prediction: SalesPrediction,
}

/// Named coordinates used by the geo index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_trend() {
        let trend = MarketTrend::default();
        assert_eq!(trend.demand_level, DemandLevel::Medium);
        assert_eq!(trend.average_price, 30.0);
        assert_eq!(trend.growth_rate, 0.0);
    }

    #[test]
    fn test_category_wire_labels() {
        let json = serde_json::to_string(&Category::RawMaterials).unwrap();
        assert_eq!(json, "\"raw materials\"");

        let parsed: Category = serde_json::from_str("\"electronics\"").unwrap();
        assert_eq!(parsed, Category::Electronics);
    }

    #[test]
    fn test_timeframe_wire_labels() {
        let json = serde_json::to_string(&Timeframe::ThreeToSixMonths).unwrap();
        assert_eq!(json, "\"3-6 months\"");
        assert_eq!(Timeframe::UnderOneMonth.to_string(), "< 1 month");
    }
}
