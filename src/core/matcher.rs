use crate::core::{distance::GeoIndex, prediction::predict_sale, scoring::calculate_match_score};
use crate::models::{Buyer, MatchResult, Product};
use crate::services::Catalog;

/// Scores at or below this threshold are not meaningful enough for the
/// cross-catalog ranking.
pub const DEFAULT_MIN_SCORE: u8 = 40;

/// Entries returned by `top_matches` when the caller gives no limit
pub const DEFAULT_TOP_LIMIT: usize = 5;

/// Main matching orchestrator.
///
/// Pairs products with buyers, scores each pair, enriches it with a sales
/// prediction and ranks the results. All entry points are read-only over the
/// catalog; unknown ids produce empty result lists rather than errors.
#[derive(Debug, Clone)]
pub struct Matcher {
    geo: GeoIndex,
    min_score: u8,
}

impl Matcher {
    pub fn new(geo: GeoIndex, min_score: u8) -> Self {
        Self { geo, min_score }
    }

    pub fn with_defaults() -> Self {
        Self::new(GeoIndex::default(), DEFAULT_MIN_SCORE)
    }

    /// Score one product against every buyer in the catalog
    ///
    /// Returns one result per buyer, sorted descending by score. The sort is
    /// stable, so tied scores keep the buyer enumeration order. An unknown
    /// product id yields an empty list.
    pub fn matches_for_product(&self, catalog: &Catalog, product_id: u32) -> Vec<MatchResult> {
        let product = match catalog.product(product_id) {
            Some(p) => p,
            None => return Vec::new(),
        };

        let mut results: Vec<MatchResult> = catalog
            .buyers()
            .iter()
            .map(|buyer| self.score_pair(product, buyer, catalog))
            .collect();

        sort_by_score(&mut results);
        results
    }

    /// Score every product in the catalog against one buyer
    ///
    /// Symmetric counterpart of [`Matcher::matches_for_product`].
    pub fn matches_for_buyer(&self, catalog: &Catalog, buyer_id: u32) -> Vec<MatchResult> {
        let buyer = match catalog.buyer(buyer_id) {
            Some(b) => b,
            None => return Vec::new(),
        };

        let mut results: Vec<MatchResult> = catalog
            .products()
            .iter()
            .map(|product| self.score_pair(product, buyer, catalog))
            .collect();

        sort_by_score(&mut results);
        results
    }

    /// Rank the full product × buyer cross-product.
    ///
    /// Pairs scoring at or below the meaningful-match threshold are dropped
    /// before ranking. Ties keep enumeration order (products outer, buyers
    /// inner). At most `limit` entries are returned.
    pub fn top_matches(&self, catalog: &Catalog, limit: usize) -> Vec<MatchResult> {
        let mut results = Vec::new();

        for product in catalog.products() {
            for buyer in catalog.buyers() {
                let result = self.score_pair(product, buyer, catalog);
                if result.score > self.min_score {
                    results.push(result);
                }
            }
        }

        sort_by_score(&mut results);
        results.truncate(limit);
        results
    }

    fn score_pair(&self, product: &Product, buyer: &Buyer, catalog: &Catalog) -> MatchResult {
        let (score, reasons) = calculate_match_score(product, buyer, &self.geo);
        let trend = catalog.trend(product.category);
        let prediction = predict_sale(score, &trend);

        MatchResult {
            product_id: product.id,
            product_name: product.name.clone(),
            buyer_id: buyer.id,
            buyer_name: buyer.name.clone(),
            score,
            reasons,
            prediction,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Descending by score. `sort_by` is stable, which keeps enumeration order
/// for tied scores.
fn sort_by_score(results: &mut [MatchResult]) {
    results.sort_by(|a, b| b.score.cmp(&a.score));
}
