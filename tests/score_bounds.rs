//! Property tests: score bounds, totality, and idempotence hold for
//! arbitrary snapshots, including out-of-range and non-finite numerics.

use proptest::prelude::*;
use sigpat::prelude::*;

fn arb_signal() -> impl Strategy<Value = Signal> {
    prop_oneof![Just(Signal::Buy), Just(Signal::Sell), Just(Signal::Hold)]
}

fn arb_divergence() -> impl Strategy<Value = RsiDivergence> {
    prop_oneof![
        Just(RsiDivergence::None),
        Just(RsiDivergence::Bullish),
        Just(RsiDivergence::Bearish),
    ]
}

fn arb_adx() -> impl Strategy<Value = AdxStrength> {
    prop_oneof![
        Just(AdxStrength::Weak),
        Just(AdxStrength::Moderate),
        Just(AdxStrength::Strong),
    ]
}

fn arb_macd() -> impl Strategy<Value = MacdHistogramTrend> {
    prop_oneof![
        Just(MacdHistogramTrend::Building),
        Just(MacdHistogramTrend::Fading),
        Just(MacdHistogramTrend::Stable),
    ]
}

fn arb_volatility() -> impl Strategy<Value = VolatilityClass> {
    prop_oneof![
        Just(VolatilityClass::Low),
        Just(VolatilityClass::Normal),
        Just(VolatilityClass::High),
        Just(VolatilityClass::Extreme),
    ]
}

/// Numerics deliberately include out-of-range magnitudes and non-finite
/// values; comparisons against NaN are false, so no branch should fire.
fn arb_metric() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        -1.0e6..1.0e6f64,
    ]
}

fn arb_strategy_type() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("Short Pattern: Hanging Man".to_string()),
        Just("Bullish Pattern: Hammer".to_string()),
        Just("Bullish Pattern: Nonexistent Formation".to_string()),
        Just("Neutral Setup".to_string()),
        "[a-zA-Z: ]{0,40}",
    ]
}

fn arb_regime() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("Trending Up".to_string()),
        Just("Trending Down".to_string()),
        Just("Sideways".to_string()),
        Just("Bullish".to_string()),
        Just("Bearish".to_string()),
        Just("Unknown".to_string()),
    ]
}

fn arb_snapshot() -> impl Strategy<Value = SignalSnapshot> {
    let analysis = (
        arb_strategy_type(),
        arb_signal(),
        arb_metric(),
        arb_divergence(),
        arb_metric(),
    );
    let indicators = (arb_adx(), arb_macd(), arb_volatility(), arb_regime());
    let market = (arb_regime(), arb_metric(), arb_metric());

    (analysis, indicators, market).prop_map(
        |(
            (strategy_signal_type, signal, rsi_level, rsi_divergence, momentum_score),
            (adx_strength, macd_histogram_trend, volatility_class, market_regime),
            (nifty_regime, vix_level, advance_decline_ratio),
        )| SignalSnapshot {
            strategy_signal_type,
            candlestick_pattern_name: None,
            signal,
            rsi_level,
            rsi_divergence,
            momentum_score,
            adx_strength,
            macd_histogram_trend,
            volatility_class,
            market_regime,
            nifty_regime,
            vix_level,
            advance_decline_ratio,
        },
    )
}

proptest! {
    #[test]
    fn scores_stay_within_bounds(snapshot in arb_snapshot()) {
        let assessment = assess(&snapshot);
        prop_assert!(assessment.strength.score <= 100);
        prop_assert!(assessment.reliability.score <= 100);
    }

    #[test]
    fn classification_is_total(snapshot in arb_snapshot()) {
        let assessment = assess(&snapshot);
        prop_assert!(!assessment.pattern.pattern_name.is_empty());
        prop_assert!(!assessment.pattern.detail_text.is_empty());
    }

    #[test]
    fn assessment_is_idempotent(snapshot in arb_snapshot()) {
        prop_assert_eq!(assess(&snapshot), assess(&snapshot));
    }

    #[test]
    fn factor_counts_match_fired_categories(snapshot in arb_snapshot()) {
        // At most one branch per category can fire.
        let assessment = assess(&snapshot);
        prop_assert!(assessment.strength.factors.len() <= 4);
        prop_assert!(assessment.reliability.factors.len() <= 3);
    }
}
