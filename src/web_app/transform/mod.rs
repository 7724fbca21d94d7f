// web_app/transform/mod.rs - Pure data shaping for the table and charts
//
// Everything here is a pure function of the current product list. The page
// recomputes these inside derived signals on every change; nothing is cached.

use std::cmp::Ordering;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::web_app::model::{
    PriceBucket, PriceHistogram, PriceRange, ProductRecord, ScatterPoint, SortDirection, SortKey,
    SortState,
};

/// Discounted price when it carries a value, otherwise the list price.
///
/// The marketplace reports a missing sale price as 0, so zero counts as absent.
pub fn effective_price(record: &ProductRecord) -> Decimal {
    sale_price(record).unwrap_or(record.price)
}

fn sale_price(record: &ProductRecord) -> Option<Decimal> {
    record.discounted_price.filter(|d| *d > Decimal::ZERO)
}

/// Rating when the product has been rated; 0 means no reviews yet.
fn known_rating(record: &ProductRecord) -> Option<f64> {
    record.rating.filter(|r| *r > 0.0)
}

/// Sorted copy of `records` according to `state`.
///
/// The sort is stable: records with equal keys keep their input order in
/// both directions. An unsorted state returns the records unchanged.
pub fn sort_products(records: &[ProductRecord], state: &SortState) -> Vec<ProductRecord> {
    let mut sorted = records.to_vec();
    if let Some(key) = state.key {
        sorted.sort_by(|a, b| {
            let ordering = compare_by(key, a, b);
            match state.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
    sorted
}

fn compare_by(key: SortKey, a: &ProductRecord, b: &ProductRecord) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Price => a.price.cmp(&b.price),
        // Unrated products sort before rated ones
        SortKey::Rating => match (a.rating, b.rating) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortKey::ReviewsCount => a.reviews_count.cmp(&b.reviews_count),
    }
}

/// Bucket a single effective price. Bounds are inclusive on the upper side.
pub fn price_range(price: Decimal) -> PriceRange {
    PriceRange::ALL
        .into_iter()
        .find(|range| match range.upper_bound() {
            Some(upper) => price <= upper,
            None => true,
        })
        .unwrap_or(PriceRange::Above20000)
}

/// Count records per price range, in fixed bucket order.
pub fn bucket_by_price(records: &[ProductRecord]) -> PriceHistogram {
    let mut counts = [0usize; PriceRange::ALL.len()];
    for record in records {
        let range = price_range(effective_price(record));
        if let Some(idx) = PriceRange::ALL.iter().position(|r| *r == range) {
            counts[idx] += 1;
        }
    }

    tracing::debug!(records = records.len(), "bucketed products by price");

    PriceHistogram {
        buckets: PriceRange::ALL
            .into_iter()
            .zip(counts)
            .map(|(range, count)| PriceBucket { range, count })
            .collect(),
    }
}

/// Discount as a percentage of `price`.
///
/// Zero when the price is not positive or the discounted price exceeds it.
pub fn discount_percent(price: Decimal, discounted: Decimal) -> f64 {
    if price <= Decimal::ZERO || discounted > price {
        return 0.0;
    }
    ((price - discounted) / price * Decimal::ONE_HUNDRED)
        .to_f64()
        .unwrap_or(0.0)
}

/// Scatter points for records carrying both a discounted price and a rating.
/// Zero values of either count as missing.
pub fn discount_vs_rating(records: &[ProductRecord]) -> Vec<ScatterPoint> {
    records
        .iter()
        .filter_map(|record| {
            let discounted = sale_price(record)?;
            let rating = known_rating(record)?;
            Some(ScatterPoint {
                x: discount_percent(record.price, discounted),
                y: rating,
            })
        })
        .collect()
}

/// Arrow for the active sort column, empty for the others.
pub fn sort_indicator(state: &SortState, key: SortKey) -> &'static str {
    if state.is_sorted_by(key) {
        state.direction.arrow()
    } else {
        ""
    }
}

/// Ruble amount with space-grouped thousands and a comma decimal separator,
/// e.g. `12 345,5 ₽`. Trailing zero decimals are dropped.
pub fn format_rub(amount: Decimal) -> String {
    let normalized = amount.round_dp(2).normalize();
    let text = normalized.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    let sign = if normalized.is_sign_negative() && !normalized.is_zero() {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(frac) => format!("{sign}{grouped},{frac} ₽"),
        None => format!("{sign}{grouped} ₽"),
    }
}

/// Price cell text; a missing amount shows a dash.
pub fn format_price(amount: Option<Decimal>) -> String {
    amount.map(format_rub).unwrap_or_else(|| "-".to_string())
}

/// Rating cell text; missing or zero ratings show a dash.
pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) if r > 0.0 => format!("{:.1}", r),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, price: i64, discounted: Option<i64>, rating: Option<f64>) -> ProductRecord {
        ProductRecord {
            id,
            wb_id: None,
            name: format!("Product {id}"),
            price: Decimal::from(price),
            discounted_price: discounted.map(Decimal::from),
            rating,
            reviews_count: 0,
            url: format!("https://www.wildberries.ru/catalog/{id}/detail.aspx"),
            query: None,
            created_at: None,
        }
    }

    #[test]
    fn test_effective_price_prefers_discount() {
        assert_eq!(effective_price(&record(1, 500, Some(400), None)), Decimal::from(400));
        assert_eq!(effective_price(&record(1, 500, None, None)), Decimal::from(500));
    }

    #[test]
    fn test_zero_sale_price_falls_back_to_list_price() {
        let product = record(1, 25_000, Some(0), Some(4.5));
        assert_eq!(effective_price(&product), Decimal::from(25_000));

        let histogram = bucket_by_price(&[product]);
        assert_eq!(histogram.count(PriceRange::Above20000), 1);
        assert_eq!(histogram.count(PriceRange::UpTo1000), 0);
    }

    #[test]
    fn test_scatter_ignores_zero_values() {
        // Zero sale price would otherwise plot at a 100 % discount
        assert!(discount_vs_rating(&[record(1, 2000, Some(0), Some(4.5))]).is_empty());
        // Zero rating means unrated
        assert!(discount_vs_rating(&[record(2, 2000, Some(1500), Some(0.0))]).is_empty());

        let points = discount_vs_rating(&[record(3, 2000, Some(1500), Some(4.5))]);
        assert_eq!(points, vec![ScatterPoint { x: 25.0, y: 4.5 }]);
    }

    #[test]
    fn test_unsorted_state_keeps_order() {
        let records = vec![record(1, 300, None, None), record(2, 100, None, None)];
        let sorted = sort_products(&records, &SortState::default());
        assert_eq!(sorted, records);
    }

    #[test]
    fn test_sort_by_rating_puts_unrated_first() {
        let records = vec![
            record(1, 1, None, Some(4.0)),
            record(2, 1, None, None),
            record(3, 1, None, Some(3.5)),
        ];
        let sorted = sort_products(&records, &SortState::new(SortKey::Rating, SortDirection::Ascending));
        let ids: Vec<_> = sorted.iter().map(|r| r.id).collect();
        assert_eq!(ids, [2, 3, 1]);
    }

    #[test]
    fn test_price_range_boundaries() {
        let cases = [
            (0, PriceRange::UpTo1000),
            (1000, PriceRange::UpTo1000),
            (1001, PriceRange::UpTo5000),
            (5000, PriceRange::UpTo5000),
            (10000, PriceRange::UpTo10000),
            (20000, PriceRange::UpTo20000),
            (20001, PriceRange::Above20000),
        ];
        for (price, expected) in cases {
            assert_eq!(price_range(Decimal::from(price)), expected, "price {}", price);
        }
        assert_eq!(price_range(Decimal::new(100001, 2)), PriceRange::UpTo5000);
    }

    #[test]
    fn test_discount_percent_guards() {
        assert_eq!(discount_percent(Decimal::ZERO, Decimal::ZERO), 0.0);
        assert_eq!(discount_percent(Decimal::from(100), Decimal::from(150)), 0.0);
        assert_eq!(discount_percent(Decimal::from(200), Decimal::from(150)), 25.0);
    }

    #[test]
    fn test_sort_indicator() {
        let state = SortState::new(SortKey::Price, SortDirection::Descending);
        assert_eq!(sort_indicator(&state, SortKey::Price), "↓");
        assert_eq!(sort_indicator(&state, SortKey::Name), "");
    }

    #[test]
    fn test_format_rub() {
        let cases = [
            (Decimal::from(0), "0 ₽"),
            (Decimal::from(999), "999 ₽"),
            (Decimal::from(1000), "1 000 ₽"),
            (Decimal::new(123456700, 2), "1 234 567 ₽"),
            (Decimal::new(189950, 2), "1 899,5 ₽"),
            (Decimal::new(-25000, 0), "-25 000 ₽"),
        ];
        for (amount, expected) in cases {
            assert_eq!(format_rub(amount), expected);
        }
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(None), "-");
        assert_eq!(format_price(Some(Decimal::from(2990))), "2 990 ₽");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(Some(4.76)), "4.8");
        assert_eq!(format_rating(Some(0.0)), "-");
        assert_eq!(format_rating(None), "-");
    }
}
