//! Valoris Algo - matching and sales-prediction service for the Valoris
//! dormant-stock valorization platform
//!
//! This library provides the matching engine used by the Valoris dashboard.
//! It scores product-buyer pairs across category, location, price and
//! quantity criteria, and derives sales predictions from market trends.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, calculate_match_score, predict_sale, distance::{haversine_distance, GeoIndex, UNKNOWN_DISTANCE_KM}};
pub use crate::models::{Buyer, Category, DemandLevel, MarketTrend, MatchResult, Product, SalesPrediction, StockStatus, Timeframe};
pub use crate::services::Catalog;
