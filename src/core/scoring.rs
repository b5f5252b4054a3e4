use crate::core::distance::GeoIndex;
use crate::models::{Buyer, Product};

/// Per-criterion point budgets. The four full-match budgets sum to 100,
/// which bounds every score; partial points never exceed the full budget of
/// their criterion.
pub const CATEGORY_FULL_POINTS: u8 = 40;
pub const CATEGORY_PARTIAL_POINTS: u8 = 20;
pub const LOCATION_FULL_POINTS: u8 = 20;
pub const LOCATION_PARTIAL_POINTS: u8 = 10;
pub const PRICE_FULL_POINTS: u8 = 30;
pub const PRICE_PARTIAL_POINTS: u8 = 15;
pub const QUANTITY_FULL_POINTS: u8 = 10;
pub const QUANTITY_PARTIAL_POINTS: u8 = 5;

/// Distinct locations closer than this still earn partial location points.
pub const NEARBY_THRESHOLD_KM: f64 = 100.0;

/// A price may exceed the buyer's maximum by this factor and still earn
/// partial points.
const PRICE_TOLERANCE: f64 = 1.2;

/// A quantity may fall short of the buyer's minimum by this factor and still
/// earn partial points.
const QUANTITY_TOLERANCE: f64 = 0.8;

/// Reason labels, one per satisfiable criterion outcome. Stable identifiers
/// for the dashboard to localize.
pub const REASON_CATEGORY_FULL: &str = "Exact category match";
pub const REASON_CATEGORY_PARTIAL: &str = "Acceptable alternative category";
pub const REASON_LOCATION_FULL: &str = "Same location";
pub const REASON_LOCATION_PARTIAL: &str = "Within delivery distance";
pub const REASON_PRICE_FULL: &str = "Price inside buyer range";
pub const REASON_PRICE_PARTIAL: &str = "Price slightly above buyer budget";
pub const REASON_QUANTITY_FULL: &str = "Quantity meets buyer minimum";
pub const REASON_QUANTITY_PARTIAL: &str = "Quantity close to buyer minimum";

/// Calculate a match score (0-100) between a product and a buyer profile
///
/// Four criteria are evaluated in fixed order; each contributes either its
/// full points, its partial points, or nothing, plus a reason label when it
/// fires. Full and partial are mutually exclusive with full checked first.
/// The result is the unweighted sum, so the score range holds by
/// construction and scoring never fails.
pub fn calculate_match_score(
    product: &Product,
    buyer: &Buyer,
    geo: &GeoIndex,
) -> (u8, Vec<String>) {
    let criteria = [
        category_points(product, buyer),
        location_points(product, buyer, geo),
        price_points(product, buyer),
        quantity_points(product, buyer),
    ];

    let mut score = 0u8;
    let mut reasons = Vec::new();

    for (points, reason) in criteria.into_iter().flatten() {
        score += points;
        reasons.push(reason.to_string());
    }

    (score, reasons)
}

/// Category criterion: full points for the preferred category, partial for
/// an accepted alternative
#[inline]
fn category_points(product: &Product, buyer: &Buyer) -> Option<(u8, &'static str)> {
    if product.category == buyer.preferred_category {
        Some((CATEGORY_FULL_POINTS, REASON_CATEGORY_FULL))
    } else if buyer.alternative_categories.contains(&product.category) {
        Some((CATEGORY_PARTIAL_POINTS, REASON_CATEGORY_PARTIAL))
    } else {
        None
    }
}

/// Location criterion: full points for the same named location, partial when
/// the resolved distance is under the nearby threshold
#[inline]
fn location_points(product: &Product, buyer: &Buyer, geo: &GeoIndex) -> Option<(u8, &'static str)> {
    if product.location == buyer.location {
        Some((LOCATION_FULL_POINTS, REASON_LOCATION_FULL))
    } else if geo.distance_km(&product.location, &buyer.location) < NEARBY_THRESHOLD_KM {
        Some((LOCATION_PARTIAL_POINTS, REASON_LOCATION_PARTIAL))
    } else {
        None
    }
}

/// Price criterion: full points inside the buyer's range, partial up to the
/// tolerance above the maximum. Prices below the minimum still pass the
/// tolerance check.
#[inline]
fn price_points(product: &Product, buyer: &Buyer) -> Option<(u8, &'static str)> {
    if product.price >= buyer.min_price && product.price <= buyer.max_price {
        Some((PRICE_FULL_POINTS, REASON_PRICE_FULL))
    } else if product.price <= buyer.max_price * PRICE_TOLERANCE {
        Some((PRICE_PARTIAL_POINTS, REASON_PRICE_PARTIAL))
    } else {
        None
    }
}

/// Quantity criterion: full points at or above the buyer's minimum, partial
/// down to the tolerance below it
#[inline]
fn quantity_points(product: &Product, buyer: &Buyer) -> Option<(u8, &'static str)> {
    if product.quantity >= buyer.min_quantity {
        Some((QUANTITY_FULL_POINTS, REASON_QUANTITY_FULL))
    } else if product.quantity >= buyer.min_quantity * QUANTITY_TOLERANCE {
        Some((QUANTITY_PARTIAL_POINTS, REASON_QUANTITY_PARTIAL))
    } else {
        None
    }
}
