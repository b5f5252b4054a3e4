use crate::models::{DemandLevel, MarketTrend, SalesPrediction, Timeframe};

/// Probability shift applied for high or low market demand
const DEMAND_ADJUSTMENT: i16 = 15;

/// Predict sales outcome for a match score under the given market trend
///
/// The match score is taken as the base probability (score-as-percentage),
/// shifted by market demand and clamped to [0, 100]. The clamped probability
/// drives the timeframe bucket and the potential value.
///
/// Callers must resolve the trend before invoking this function; categories
/// without market data get [`MarketTrend::default`] from the catalog, so the
/// predictor itself never deals with missing data.
pub fn predict_sale(match_score: u8, trend: &MarketTrend) -> SalesPrediction {
    let adjustment = match trend.demand_level {
        DemandLevel::High => DEMAND_ADJUSTMENT,
        DemandLevel::Medium => 0,
        DemandLevel::Low => -DEMAND_ADJUSTMENT,
    };

    let probability = (i16::from(match_score) + adjustment).clamp(0, 100) as u8;

    SalesPrediction {
        probability,
        estimated_timeframe: estimate_timeframe(probability),
        potential_value: trend.average_price * f64::from(probability) / 100.0,
    }
}

/// Map a clamped probability to its time-to-sale bucket
#[inline]
fn estimate_timeframe(probability: u8) -> Timeframe {
    if probability > 80 {
        Timeframe::UnderOneMonth
    } else if probability > 60 {
        Timeframe::OneToThreeMonths
    } else if probability > 40 {
        Timeframe::ThreeToSixMonths
    } else {
        Timeframe::OverSixMonths
    }
}
