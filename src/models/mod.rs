// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Buyer, Category, Coordinates, DemandLevel, MarketTrend, MatchResult, Product, SalesPrediction, StockStatus, Timeframe};
pub use requests::TopMatchesQuery;
pub use responses::{ErrorResponse, HealthResponse, MatchListResponse};
