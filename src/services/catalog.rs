use crate::models::{Buyer, Category, DemandLevel, MarketTrend, Product, StockStatus};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Errors raised when a catalog is built from invalid records
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate product id {0}")]
    DuplicateProduct(u32),

    #[error("duplicate buyer id {0}")]
    DuplicateBuyer(u32),

    #[error("product {id}: {field} must not be negative")]
    NegativeProductValue { id: u32, field: &'static str },

    #[error("buyer {id}: {field} must not be negative")]
    NegativeBuyerValue { id: u32, field: &'static str },

    #[error("buyer {id}: min price {min} exceeds max price {max}")]
    InvalidPriceRange { id: u32, min: f64, max: f64 },
}

/// In-memory catalog of products, buyers and market trends.
///
/// Records are validated once at construction and immutable afterwards, so
/// the matching core can treat every stored record as well-formed. The
/// catalog is the layer that owns the missing-trend fallback: [`Catalog::trend`]
/// substitutes the default trend for categories without market data.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    buyers: Vec<Buyer>,
    trends: HashMap<Category, MarketTrend>,
}

impl Catalog {
    /// Build a catalog, rejecting malformed records.
    ///
    /// Buyers with an inverted price range or negative bounds would make
    /// scoring silently permissive or impossible, so they are refused here
    /// rather than tolerated downstream.
    pub fn new(
        products: Vec<Product>,
        buyers: Vec<Buyer>,
        trends: HashMap<Category, MarketTrend>,
    ) -> Result<Self, CatalogError> {
        let mut product_ids = HashSet::new();
        for product in &products {
            if !product_ids.insert(product.id) {
                return Err(CatalogError::DuplicateProduct(product.id));
            }
            if product.price < 0.0 {
                return Err(CatalogError::NegativeProductValue { id: product.id, field: "price" });
            }
            if product.quantity < 0.0 {
                return Err(CatalogError::NegativeProductValue { id: product.id, field: "quantity" });
            }
        }

        let mut buyer_ids = HashSet::new();
        for buyer in &buyers {
            if !buyer_ids.insert(buyer.id) {
                return Err(CatalogError::DuplicateBuyer(buyer.id));
            }
            if buyer.min_price < 0.0 {
                return Err(CatalogError::NegativeBuyerValue { id: buyer.id, field: "min price" });
            }
            if buyer.max_price < 0.0 {
                return Err(CatalogError::NegativeBuyerValue { id: buyer.id, field: "max price" });
            }
            if buyer.min_quantity < 0.0 {
                return Err(CatalogError::NegativeBuyerValue { id: buyer.id, field: "min quantity" });
            }
            if buyer.min_price > buyer.max_price {
                return Err(CatalogError::InvalidPriceRange {
                    id: buyer.id,
                    min: buyer.min_price,
                    max: buyer.max_price,
                });
            }
        }

        Ok(Self { products, buyers, trends })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn buyers(&self) -> &[Buyer] {
        &self.buyers
    }

    /// Look up a product by id
    pub fn product(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a buyer by id
    pub fn buyer(&self, id: u32) -> Option<&Buyer> {
        self.buyers.iter().find(|b| b.id == id)
    }

    /// Market trend for a category.
    ///
    /// Categories without an entry get the default trend (medium demand,
    /// reference price 30) so prediction always has data to work with.
    pub fn trend(&self, category: Category) -> MarketTrend {
        self.trends.get(&category).cloned().unwrap_or_default()
    }

    /// The platform's built-in demo dataset
    pub fn sample() -> Self {
        let products = vec![
            Product {
                id: 1,
                name: "304 stainless steel".to_string(),
                category: Category::RawMaterials,
                description: "Industrial-grade surplus stock".to_string(),
                price: 50.0,
                quantity: 250.0,
                location: "Lyon".to_string(),
                status: StockStatus::Surplus,
            },
            Product {
                id: 2,
                name: "XB42 electronic components".to_string(),
                category: Category::Electronics,
                description: "Obsolete components from a discontinued product line".to_string(),
                price: 40.0,
                quantity: 180.0,
                location: "Paris".to_string(),
                status: StockStatus::Obsolete,
            },
            Product {
                id: 3,
                name: "Reinforced RJ45 connectors".to_string(),
                category: Category::Electronics,
                description: "Surplus stock from network rollouts".to_string(),
                price: 5.0,
                quantity: 750.0,
                location: "Marseille".to_string(),
                status: StockStatus::Surplus,
            },
            Product {
                id: 4,
                name: "Triple-wall corrugated cardboard".to_string(),
                category: Category::Packaging,
                description: "Barely used packaging stock".to_string(),
                price: 6.0,
                quantity: 500.0,
                location: "Bordeaux".to_string(),
                status: StockStatus::Underused,
            },
            Product {
                id: 5,
                name: "Recycled plastic pellets".to_string(),
                category: Category::RawMaterials,
                description: "High-quality recycled plastic".to_string(),
                price: 25.0,
                quantity: 400.0,
                location: "Lille".to_string(),
                status: StockStatus::Surplus,
            },
        ];

        let buyers = vec![
            Buyer {
                id: 1,
                name: "Enterprise SA".to_string(),
                preferred_category: Category::RawMaterials,
                alternative_categories: vec![Category::Packaging],
                min_price: 20.0,
                max_price: 60.0,
                min_quantity: 100.0,
                location: "Lyon".to_string(),
                preferred_statuses: vec![StockStatus::Surplus, StockStatus::Underused],
            },
            Buyer {
                id: 2,
                name: "Ressourceco".to_string(),
                preferred_category: Category::Electronics,
                alternative_categories: vec![],
                min_price: 0.0,
                max_price: 50.0,
                min_quantity: 150.0,
                location: "Paris".to_string(),
                preferred_statuses: vec![StockStatus::Obsolete, StockStatus::Surplus],
            },
            Buyer {
                id: 3,
                name: "ValorEco".to_string(),
                preferred_category: Category::RawMaterials,
                alternative_categories: vec![Category::Electronics],
                min_price: 10.0,
                max_price: 30.0,
                min_quantity: 200.0,
                location: "Marseille".to_string(),
                preferred_statuses: vec![StockStatus::Surplus],
            },
            Buyer {
                id: 4,
                name: "EcoCircular".to_string(),
                preferred_category: Category::Packaging,
                alternative_categories: vec![Category::RawMaterials],
                min_price: 0.0,
                max_price: 15.0,
                min_quantity: 300.0,
                location: "Bordeaux".to_string(),
                preferred_statuses: vec![StockStatus::Underused, StockStatus::Surplus],
            },
            Buyer {
                id: 5,
                name: "GreenRecycl".to_string(),
                preferred_category: Category::RawMaterials,
                alternative_categories: vec![Category::Packaging, Category::Electronics],
                min_price: 0.0,
                max_price: 40.0,
                min_quantity: 100.0,
                location: "Lille".to_string(),
                preferred_statuses: vec![
                    StockStatus::Obsolete,
                    StockStatus::Surplus,
                    StockStatus::Underused,
                ],
            },
        ];

        let trends = HashMap::from([
            (
                Category::RawMaterials,
                MarketTrend { demand_level: DemandLevel::High, average_price: 45.0, growth_rate: 5.0 },
            ),
            (
                Category::Electronics,
                MarketTrend { demand_level: DemandLevel::Medium, average_price: 35.0, growth_rate: 2.0 },
            ),
            (
                Category::Packaging,
                MarketTrend { demand_level: DemandLevel::Low, average_price: 8.0, growth_rate: -1.0 },
            ),
        ]);

        Self::new(products, buyers, trends).expect("built-in sample catalog is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_buyer(id: u32) -> Buyer {
        Buyer {
            id,
            name: format!("Buyer {}", id),
            preferred_category: Category::RawMaterials,
            alternative_categories: vec![],
            min_price: 10.0,
            max_price: 50.0,
            min_quantity: 100.0,
            location: "Lyon".to_string(),
            preferred_statuses: vec![],
        }
    }

    fn valid_product(id: u32) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            category: Category::RawMaterials,
            description: "Surplus".to_string(),
            price: 25.0,
            quantity: 200.0,
            location: "Lyon".to_string(),
            status: StockStatus::Surplus,
        }
    }

    #[test]
    fn test_sample_catalog_loads() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.products().len(), 5);
        assert_eq!(catalog.buyers().len(), 5);
        assert!(catalog.product(1).is_some());
        assert!(catalog.buyer(5).is_some());
        assert!(catalog.product(9999).is_none());
    }

    #[test]
    fn test_trend_lookup() {
        let catalog = Catalog::sample();
        let trend = catalog.trend(Category::RawMaterials);
        assert_eq!(trend.demand_level, DemandLevel::High);
        assert_eq!(trend.average_price, 45.0);
    }

    #[test]
    fn test_missing_trend_falls_back_to_default() {
        let catalog =
            Catalog::new(vec![valid_product(1)], vec![valid_buyer(1)], HashMap::new()).unwrap();

        let trend = catalog.trend(Category::Electronics);
        assert_eq!(trend.demand_level, DemandLevel::Medium);
        assert_eq!(trend.average_price, 30.0);
    }

    #[test]
    fn test_rejects_inverted_price_range() {
        let mut buyer = valid_buyer(1);
        buyer.min_price = 60.0;
        buyer.max_price = 20.0;

        let result = Catalog::new(vec![], vec![buyer], HashMap::new());
        assert!(matches!(result, Err(CatalogError::InvalidPriceRange { id: 1, .. })));
    }

    #[test]
    fn test_rejects_negative_min_quantity() {
        let mut buyer = valid_buyer(2);
        buyer.min_quantity = -5.0;

        let result = Catalog::new(vec![], vec![buyer], HashMap::new());
        assert!(matches!(
            result,
            Err(CatalogError::NegativeBuyerValue { id: 2, field: "min quantity" })
        ));
    }

    #[test]
    fn test_rejects_negative_product_price() {
        let mut product = valid_product(3);
        product.price = -1.0;

        let result = Catalog::new(vec![product], vec![], HashMap::new());
        assert!(matches!(
            result,
            Err(CatalogError::NegativeProductValue { id: 3, field: "price" })
        ));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result =
            Catalog::new(vec![valid_product(1), valid_product(1)], vec![], HashMap::new());
        assert!(matches!(result, Err(CatalogError::DuplicateProduct(1))));

        let result =
            Catalog::new(vec![], vec![valid_buyer(7), valid_buyer(7)], HashMap::new());
        assert!(matches!(result, Err(CatalogError::DuplicateBuyer(7))));
    }
}
