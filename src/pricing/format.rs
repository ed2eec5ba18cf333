use rust_decimal::prelude::*;

use super::types::{FormattedPrice, PricingEntry, QuotaType};

/// Converts a model ratio into USD per 1M tokens.
const PER_MILLION_SCALE: f64 = 2.0;

/// Turn a pricing entry into display strings for the given group ratio.
pub(crate) fn format_price(entry: &PricingEntry, group_ratio: f64) -> FormattedPrice {
    match entry.quota_type {
        QuotaType::Metered => {
            let input = entry.model_ratio * PER_MILLION_SCALE * group_ratio;
            let completion =
                entry.model_ratio * entry.completion_ratio * PER_MILLION_SCALE * group_ratio;
            FormattedPrice::Metered {
                input: format!("${} / 1M tokens", round_price(input)),
                completion: format!("${} / 1M tokens", round_price(completion)),
            }
        }
        QuotaType::FlatRate => {
            let price = entry.model_price.value() * group_ratio;
            FormattedPrice::FlatRate {
                price: format!("${}", round_price(price)),
            }
        }
    }
}

/// Round the exact binary value half away from zero to three decimals,
/// keeping trailing zeros.
fn round_price(value: f64) -> String {
    let Some(exact) = Decimal::from_f64_retain(value) else {
        // NaN, infinities and values past Decimal's range
        return format!("{value:.3}");
    };
    let mut rounded = exact.round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        // normalizes -0
        rounded = Decimal::ZERO;
    }
    rounded.rescale(3);
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use super::super::types::RawPrice;
    use super::*;

    fn metered(model_ratio: f64, completion_ratio: f64) -> PricingEntry {
        PricingEntry {
            model_name: "gpt-4o-mini".to_string(),
            quota_type: QuotaType::Metered,
            model_ratio,
            model_price: RawPrice::default(),
            completion_ratio,
        }
    }

    fn flat(price: RawPrice) -> PricingEntry {
        PricingEntry {
            model_name: "mj_imagine".to_string(),
            quota_type: QuotaType::FlatRate,
            model_ratio: 0.0,
            model_price: price,
            completion_ratio: 0.0,
        }
    }

    #[test]
    fn metered_prices_per_million_tokens() {
        let formatted = format_price(&metered(0.5, 2.0), 1.0);
        assert_eq!(
            formatted,
            FormattedPrice::Metered {
                input: "$1.000 / 1M tokens".to_string(),
                completion: "$2.000 / 1M tokens".to_string(),
            }
        );
    }

    #[test]
    fn flat_rate_price_from_string() {
        let formatted = format_price(&flat(RawPrice::Text("2.5".to_string())), 0.8);
        assert_eq!(
            formatted,
            FormattedPrice::FlatRate {
                price: "$2.000".to_string()
            }
        );
    }

    #[test]
    fn group_ratio_scales_both_metered_prices() {
        let formatted = format_price(&metered(1.25, 4.0), 0.5);
        assert_eq!(
            formatted,
            FormattedPrice::Metered {
                input: "$1.250 / 1M tokens".to_string(),
                completion: "$5.000 / 1M tokens".to_string(),
            }
        );
    }

    #[test]
    fn zero_inputs_render_as_zero() {
        let zero = FormattedPrice::Metered {
            input: "$0.000 / 1M tokens".to_string(),
            completion: "$0.000 / 1M tokens".to_string(),
        };
        assert_eq!(format_price(&metered(0.0, 3.0), 1.0), zero);
        assert_eq!(format_price(&metered(2.0, 3.0), 0.0), zero);
        assert_eq!(
            format_price(&metered(2.0, 0.0), 1.0),
            FormattedPrice::Metered {
                input: "$4.000 / 1M tokens".to_string(),
                completion: "$0.000 / 1M tokens".to_string(),
            }
        );
        assert_eq!(
            format_price(&flat(RawPrice::Number(0.1)), 0.0),
            FormattedPrice::FlatRate {
                price: "$0.000".to_string()
            }
        );
    }

    #[test]
    fn rounds_half_away_from_zero() {
        // 0.03125 * 2 = 0.0625 exactly
        let formatted = format_price(&metered(0.03125, 1.0), 1.0);
        assert_eq!(
            formatted,
            FormattedPrice::Metered {
                input: "$0.063 / 1M tokens".to_string(),
                completion: "$0.063 / 1M tokens".to_string(),
            }
        );
        assert_eq!(round_price(0.0004), "0.000");
        assert_eq!(round_price(1.5), "1.500");
        assert_eq!(round_price(-0.0001), "0.000");
        assert_eq!(round_price(-1.0625), "-1.063");
    }

    #[test]
    fn rounds_the_stored_binary_value_once() {
        // 1.0005 and 1.2345 are stored slightly below the tie
        assert_eq!(
            format_price(&flat(RawPrice::Text("1.0005".to_string())), 1.0),
            FormattedPrice::FlatRate {
                price: "$1.000".to_string()
            }
        );
        assert_eq!(round_price(1.2345), "1.234");
        // 2.0005 is stored slightly above
        assert_eq!(round_price(2.0005), "2.001");
        assert_eq!(round_price(1e30), format!("{:.3}", 1e30));
    }

    #[test]
    fn non_numeric_flat_price_passes_through_as_nan() {
        let formatted = format_price(&flat(RawPrice::Text("n/a".to_string())), 1.0);
        assert_eq!(
            formatted,
            FormattedPrice::FlatRate {
                price: "$NaN".to_string()
            }
        );
    }

    #[test]
    fn formatting_is_idempotent() {
        let entry = metered(0.075, 4.0);
        assert_eq!(format_price(&entry, 1.1), format_price(&entry, 1.1));
    }
}
