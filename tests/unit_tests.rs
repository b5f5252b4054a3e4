// Unit tests for Valoris Algo

use valoris_algo::core::{
    distance::{haversine_distance, GeoIndex, UNKNOWN_DISTANCE_KM},
    prediction::predict_sale,
    scoring::{self, calculate_match_score},
};
use valoris_algo::models::{
    Buyer, Category, DemandLevel, MarketTrend, Product, StockStatus, Timeframe,
};

fn create_product(category: Category, price: f64, quantity: f64, location: &str) -> Product {
    Product {
        id: 1,
        name: "Test product".to_string(),
        category,
        description: "Surplus stock".to_string(),
        price,
        quantity,
        location: location.to_string(),
        status: StockStatus::Surplus,
    }
}

fn create_buyer(
    preferred: Category,
    alternatives: Vec<Category>,
    min_price: f64,
    max_price: f64,
    min_quantity: f64,
    location: &str,
) -> Buyer {
    Buyer {
        id: 1,
        name: "Test buyer".to_string(),
        preferred_category: preferred,
        alternative_categories: alternatives,
        min_price,
        max_price,
        min_quantity,
        location: location.to_string(),
        preferred_statuses: vec![],
    }
}

#[test]
fn test_haversine_distance_zero() {
    let distance = haversine_distance(48.8566, 2.3522, 48.8566, 2.3522);
    assert!(distance < 0.01);
}

#[test]
fn test_haversine_paris_to_lyon() {
    // Paris to Lyon is approximately 392 km
    let distance = haversine_distance(48.8566, 2.3522, 45.7578, 4.8320);
    assert!((distance - 392.0).abs() < 5.0, "Expected ~392km, got {}", distance);
}

#[test]
fn test_geo_index_known_cities() {
    let geo = GeoIndex::default();

    for city in ["Paris", "Lyon", "Marseille", "Bordeaux", "Lille"] {
        // Self-distance is zero for every known city
        assert!(geo.distance_km(city, city) < 0.01, "{} should be 0km from itself", city);
    }

    // Symmetry
    for (a, b) in [("Paris", "Lyon"), ("Marseille", "Lille"), ("Bordeaux", "Paris")] {
        let there = geo.distance_km(a, b);
        let back = geo.distance_km(b, a);
        assert!((there - back).abs() < 1e-9, "distance {} <-> {} not symmetric", a, b);
    }
}

#[test]
fn test_geo_index_unknown_location_sentinel() {
    let geo = GeoIndex::default();
    assert_eq!(geo.distance_km("Paris", "Toulouse"), UNKNOWN_DISTANCE_KM);
    assert_eq!(geo.distance_km("Toulouse", "Toulouse"), UNKNOWN_DISTANCE_KM);
}

#[test]
fn test_perfect_match_concrete_scenario() {
    // raw materials / 50 / 250 / Lyon vs raw materials / 20-60 / 100 / Lyon
    let product = create_product(Category::RawMaterials, 50.0, 250.0, "Lyon");
    let buyer = create_buyer(Category::RawMaterials, vec![], 20.0, 60.0, 100.0, "Lyon");
    let geo = GeoIndex::default();

    let (score, reasons) = calculate_match_score(&product, &buyer, &geo);

    assert_eq!(score, 100);
    assert_eq!(reasons.len(), 4);
}

#[test]
fn test_preferred_category_guarantees_minimum_score() {
    let geo = GeoIndex::default();
    let buyer = create_buyer(Category::Electronics, vec![], 10.0, 20.0, 1000.0, "Paris");

    // Hostile on every other criterion; the category criterion alone must
    // still put the score at its full budget.
    let product = create_product(Category::Electronics, 900.0, 0.0, "Marseille");

    let (score, reasons) = calculate_match_score(&product, &buyer, &geo);

    assert!(score >= 40);
    assert!(reasons.contains(&scoring::REASON_CATEGORY_FULL.to_string()));
}

#[test]
fn test_score_bounds_over_input_grid() {
    let geo = GeoIndex::default();
    let categories = [Category::RawMaterials, Category::Electronics, Category::Packaging];
    let locations = ["Paris", "Lyon", "Marseille", "Unknown city"];

    for product_cat in categories {
        for buyer_cat in categories {
            for product_loc in locations {
                for buyer_loc in locations {
                    let product = create_product(product_cat, 35.0, 150.0, product_loc);
                    let buyer =
                        create_buyer(buyer_cat, vec![product_cat], 0.0, 40.0, 100.0, buyer_loc);

                    let (score, _) = calculate_match_score(&product, &buyer, &geo);
                    assert!(score <= 100, "Score {} out of range", score);
                }
            }
        }
    }
}

#[test]
fn test_prediction_concrete_scenario() {
    // score 70, low demand, average price 45 -> probability 55,
    // three-to-six months, potential value 24.75
    let trend = MarketTrend {
        demand_level: DemandLevel::Low,
        average_price: 45.0,
        growth_rate: 0.0,
    };

    let prediction = predict_sale(70, &trend);

    assert_eq!(prediction.probability, 55);
    assert_eq!(prediction.estimated_timeframe, Timeframe::ThreeToSixMonths);
    assert!((prediction.potential_value - 24.75).abs() < 1e-9);
}

#[test]
fn test_prediction_probability_bounds() {
    for demand in [DemandLevel::High, DemandLevel::Medium, DemandLevel::Low] {
        let trend = MarketTrend {
            demand_level: demand,
            average_price: 45.0,
            growth_rate: 0.0,
        };

        for score in 0..=100u8 {
            let prediction = predict_sale(score, &trend);
            assert!(prediction.probability <= 100, "Probability out of range");
        }
    }
}

#[test]
fn test_prediction_demand_monotonicity() {
    for score in 0..=100u8 {
        let high = predict_sale(
            score,
            &MarketTrend { demand_level: DemandLevel::High, average_price: 45.0, growth_rate: 0.0 },
        );
        let low = predict_sale(
            score,
            &MarketTrend { demand_level: DemandLevel::Low, average_price: 45.0, growth_rate: 0.0 },
        );

        assert!(high.probability >= low.probability, "Demand effect not monotonic at {}", score);
    }
}
