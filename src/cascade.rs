//! Pattern classification cascade
//!
//! An ordered, first-match-wins rule table over [`SignalSnapshot`]. The
//! first rule whose predicate holds produces the match and every later rule
//! is skipped; overlapping predicates are resolved purely by declaration
//! order, never by specificity. A total fallback ("Technical Setup")
//! guarantees exactly one [`PatternMatch`] per snapshot.
//!
//! Rules 7/8 and 9/10 overlap: the extreme-RSI rules sit after their looser
//! counterparts, so the looser rule always wins. The order below is
//! authoritative; do not reorder.

use crate::catalog::{self, PatternDefinition};
use crate::{AdxStrength, MacdHistogramTrend, PatternMatch, RsiDivergence, Signal, SignalSnapshot};

/// Marker identifying short/bearish strategy classifications
const SHORT_PATTERN_MARKER: &str = "Short Pattern";
/// Marker identifying bullish strategy classifications
const BULLISH_PATTERN_MARKER: &str = "Bullish Pattern";
/// Prefix introducing an embedded candlestick name, e.g. "Short Pattern: Hanging Man"
const CANDLESTICK_PREFIX: &str = "Pattern: ";

type Predicate = fn(&SignalSnapshot) -> bool;

struct CascadeRule {
    pattern: &'static PatternDefinition,
    predicate: Predicate,
}

/// The classification cascade, in authoritative order.
static CASCADE: [CascadeRule; 15] = [
    CascadeRule {
        pattern: &catalog::MEAN_REVERSION,
        predicate: |s| {
            s.strategy_signal_type.contains(SHORT_PATTERN_MARKER) && s.signal == Signal::Buy
        },
    },
    CascadeRule {
        pattern: &catalog::BULLISH_DIVERGENCE,
        predicate: |s| s.rsi_divergence == RsiDivergence::Bullish,
    },
    CascadeRule {
        pattern: &catalog::BEARISH_DIVERGENCE,
        predicate: |s| s.rsi_divergence == RsiDivergence::Bearish,
    },
    CascadeRule {
        pattern: &catalog::MOMENTUM_BREAKOUT,
        predicate: |s| {
            s.strategy_signal_type.contains(BULLISH_PATTERN_MARKER) && s.momentum_score > 60.0
        },
    },
    CascadeRule {
        pattern: &catalog::MACD_MOMENTUM_BUILD,
        predicate: |s| {
            s.macd_histogram_trend == MacdHistogramTrend::Building
                && s.momentum_score > 55.0
        },
    },
    CascadeRule {
        pattern: &catalog::STRONG_TREND_CONTINUATION,
        predicate: |s| {
            s.adx_strength == AdxStrength::Strong && s.momentum_score > 65.0
        },
    },
    CascadeRule {
        pattern: &catalog::OVERSOLD_BOUNCE,
        predicate: |s| s.rsi_level < 30.0 && s.signal == Signal::Buy,
    },
    CascadeRule {
        pattern: &catalog::EXTREME_OVERSOLD_RECOVERY,
        predicate: |s| s.rsi_level < 20.0 && s.signal == Signal::Buy,
    },
    CascadeRule {
        pattern: &catalog::OVERBOUGHT_PULLBACK,
        predicate: |s| s.rsi_level > 70.0 && s.signal == Signal::Sell,
    },
    CascadeRule {
        pattern: &catalog::EXTREME_OVERBOUGHT_EXHAUSTION,
        predicate: |s| s.rsi_level > 80.0 && s.signal == Signal::Sell,
    },
    CascadeRule {
        pattern: &catalog::BULLISH_CONTINUATION,
        predicate: |s| {
            s.strategy_signal_type.contains(BULLISH_PATTERN_MARKER) && s.signal == Signal::Buy
        },
    },
    CascadeRule {
        pattern: &catalog::BEARISH_CONTINUATION,
        predicate: |s| {
            s.strategy_signal_type.contains(SHORT_PATTERN_MARKER) && s.signal == Signal::Sell
        },
    },
    CascadeRule {
        pattern: &catalog::PULLBACK_ENTRY,
        predicate: |s| {
            s.signal == Signal::Buy
                && s.momentum_score > 40.0
                && s.momentum_score < 60.0
                && s.rsi_level < 50.0
        },
    },
    CascadeRule {
        pattern: &catalog::CONSOLIDATION_BREAKOUT,
        predicate: |s| {
            s.strategy_signal_type.contains(BULLISH_PATTERN_MARKER)
                && s.adx_strength == AdxStrength::Weak
                && s.momentum_score > 50.0
        },
    },
    CascadeRule {
        pattern: &catalog::MOMENTUM_FADE,
        predicate: |s| {
            s.macd_histogram_trend == MacdHistogramTrend::Fading
                && s.signal == Signal::Sell
        },
    },
];

/// Classify a snapshot into exactly one [`PatternMatch`].
///
/// Total: when no rule fires, the match carries the neutral
/// [`catalog::TECHNICAL_SETUP`] definition.
pub fn classify(snapshot: &SignalSnapshot) -> PatternMatch {
    let definition = CASCADE
        .iter()
        .find(|rule| (rule.predicate)(snapshot))
        .map(|rule| rule.pattern)
        .unwrap_or(&catalog::TECHNICAL_SETUP);

    build_match(definition, snapshot)
}

fn build_match(definition: &'static PatternDefinition, snapshot: &SignalSnapshot) -> PatternMatch {
    let candlestick = candlestick_name(snapshot);

    PatternMatch {
        pattern_name: definition.name,
        category: definition.category,
        detail_text: candlestick
            .map(str::to_owned)
            .unwrap_or_else(|| definition.description.to_owned()),
        candlestick_pattern_name: candlestick.map(str::to_owned),
        talib_code: candlestick.and_then(catalog::talib_code),
    }
}

/// The candlestick name the snapshot carries, if any: the explicit field
/// wins; otherwise the `"Pattern: <name>"` suffix of the strategy
/// classification is parsed.
fn candlestick_name(snapshot: &SignalSnapshot) -> Option<&str> {
    if let Some(name) = snapshot.candlestick_pattern_name.as_deref() {
        let name = name.trim();
        if !name.is_empty() {
            return Some(name);
        }
    }

    snapshot
        .strategy_signal_type
        .find(CANDLESTICK_PREFIX)
        .map(|at| snapshot.strategy_signal_type[at + CANDLESTICK_PREFIX.len()..].trim())
        .filter(|name| !name.is_empty())
}

// ============================================================
// TESTS
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PatternCategory;
    use crate::{AdxStrength, MacdHistogramTrend, RsiDivergence, SignalSnapshot};

    fn snapshot() -> SignalSnapshot {
        SignalSnapshot::default()
    }

    /// One crafted snapshot per rule, in cascade order.
    #[test]
    fn test_each_rule_fires() {
        let cases: Vec<(&str, SignalSnapshot)> = vec![
            (
                "Mean Reversion",
                SignalSnapshot {
                    strategy_signal_type: "Short Pattern: Hammer".into(),
                    signal: Signal::Buy,
                    ..snapshot()
                },
            ),
            (
                "Bullish Divergence",
                SignalSnapshot {
                    rsi_divergence: RsiDivergence::Bullish,
                    ..snapshot()
                },
            ),
            (
                "Bearish Divergence",
                SignalSnapshot {
                    rsi_divergence: RsiDivergence::Bearish,
                    ..snapshot()
                },
            ),
            (
                "Momentum Breakout",
                SignalSnapshot {
                    strategy_signal_type: "Bullish Pattern: Hammer".into(),
                    momentum_score: 70.0,
                    ..snapshot()
                },
            ),
            (
                "MACD Momentum Build",
                SignalSnapshot {
                    macd_histogram_trend: MacdHistogramTrend::Building,
                    momentum_score: 60.0,
                    ..snapshot()
                },
            ),
            (
                "Strong Trend Continuation",
                SignalSnapshot {
                    adx_strength: AdxStrength::Strong,
                    momentum_score: 70.0,
                    ..snapshot()
                },
            ),
            (
                "Oversold Bounce",
                SignalSnapshot {
                    rsi_level: 25.0,
                    signal: Signal::Buy,
                    momentum_score: 65.0,
                    ..snapshot()
                },
            ),
            (
                "Overbought Pullback",
                SignalSnapshot {
                    rsi_level: 75.0,
                    signal: Signal::Sell,
                    ..snapshot()
                },
            ),
            (
                "Bullish Continuation",
                SignalSnapshot {
                    strategy_signal_type: "Bullish Pattern: Morning Star".into(),
                    signal: Signal::Buy,
                    rsi_level: 55.0,
                    ..snapshot()
                },
            ),
            (
                "Bearish Continuation",
                SignalSnapshot {
                    strategy_signal_type: "Short Pattern: Shooting Star".into(),
                    signal: Signal::Sell,
                    ..snapshot()
                },
            ),
            (
                "Pullback Entry",
                SignalSnapshot {
                    signal: Signal::Buy,
                    momentum_score: 50.0,
                    rsi_level: 45.0,
                    ..snapshot()
                },
            ),
            (
                "Consolidation Breakout",
                SignalSnapshot {
                    strategy_signal_type: "Bullish Pattern: Piercing Line".into(),
                    adx_strength: AdxStrength::Weak,
                    momentum_score: 55.0,
                    ..snapshot()
                },
            ),
            (
                "Momentum Fade",
                SignalSnapshot {
                    macd_histogram_trend: MacdHistogramTrend::Fading,
                    signal: Signal::Sell,
                    ..snapshot()
                },
            ),
        ];

        for (expected, s) in cases {
            assert_eq!(classify(&s).pattern_name, expected);
        }
    }

    #[test]
    fn test_fallback_is_total() {
        let result = classify(&snapshot());
        assert_eq!(result.pattern_name, "Technical Setup");
        assert_eq!(result.category, PatternCategory::Neutral);
        assert_eq!(result.talib_code, None);
    }

    #[test]
    fn test_mean_reversion_beats_bullish_continuation() {
        // Satisfies both rule 1 and rule 11 markers; rule 1 wins on order.
        let s = SignalSnapshot {
            strategy_signal_type: "Short Pattern + Bullish Pattern: Hammer".into(),
            signal: Signal::Buy,
            ..snapshot()
        };
        assert_eq!(classify(&s).pattern_name, "Mean Reversion");
    }

    #[test]
    fn test_mean_reversion_beats_bearish_divergence() {
        let s = SignalSnapshot {
            strategy_signal_type: "Short Pattern: Hanging Man".into(),
            signal: Signal::Buy,
            rsi_divergence: RsiDivergence::Bearish,
            ..snapshot()
        };
        assert_eq!(classify(&s).pattern_name, "Mean Reversion");

        // Without rule 1's marker the same snapshot falls to the divergence rule.
        let s = SignalSnapshot {
            strategy_signal_type: String::new(),
            ..s
        };
        assert_eq!(classify(&s).pattern_name, "Bearish Divergence");
    }

    #[test]
    fn test_loose_oversold_rule_shadows_extreme() {
        // rsi < 20 also satisfies rsi < 30, and the looser rule sits first,
        // so Extreme Oversold Recovery is unreachable.
        let s = SignalSnapshot {
            rsi_level: 12.0,
            signal: Signal::Buy,
            ..snapshot()
        };
        assert_eq!(classify(&s).pattern_name, "Oversold Bounce");
    }

    #[test]
    fn test_loose_overbought_rule_shadows_extreme() {
        let s = SignalSnapshot {
            rsi_level: 88.0,
            signal: Signal::Sell,
            ..snapshot()
        };
        assert_eq!(classify(&s).pattern_name, "Overbought Pullback");
    }

    #[test]
    fn test_candlestick_attachment() {
        let s = SignalSnapshot {
            strategy_signal_type: "Short Pattern: Hanging Man".into(),
            signal: Signal::Buy,
            ..snapshot()
        };
        let result = classify(&s);
        assert_eq!(result.pattern_name, "Mean Reversion");
        assert_eq!(result.detail_text, "Hanging Man");
        assert_eq!(result.candlestick_pattern_name.as_deref(), Some("Hanging Man"));
        assert_eq!(result.talib_code, Some("CDLHANGINGMAN"));
    }

    #[test]
    fn test_unknown_candlestick_has_no_code() {
        let s = SignalSnapshot {
            strategy_signal_type: "Short Pattern: Abandoned Baby".into(),
            signal: Signal::Buy,
            ..snapshot()
        };
        let result = classify(&s);
        assert_eq!(result.detail_text, "Abandoned Baby");
        assert_eq!(result.talib_code, None);
    }

    #[test]
    fn test_explicit_candlestick_field_wins_over_parsed() {
        let s = SignalSnapshot {
            strategy_signal_type: "Short Pattern: Hanging Man".into(),
            candlestick_pattern_name: Some("Shooting Star".into()),
            signal: Signal::Buy,
            ..snapshot()
        };
        let result = classify(&s);
        assert_eq!(result.detail_text, "Shooting Star");
        assert_eq!(result.talib_code, Some("CDLSHOOTINGSTAR"));
    }

    #[test]
    fn test_detail_text_without_candlestick_is_description() {
        let s = SignalSnapshot {
            rsi_divergence: RsiDivergence::Bullish,
            ..snapshot()
        };
        let result = classify(&s);
        assert_eq!(
            result.detail_text,
            "Price printing lower lows while RSI holds higher lows"
        );
        assert_eq!(result.candlestick_pattern_name, None);
    }

    #[test]
    fn test_pullback_entry_bounds_are_strict() {
        // momentum exactly 40 / 60 must not fire rule 13
        for momentum in [40.0, 60.0] {
            let s = SignalSnapshot {
                signal: Signal::Buy,
                momentum_score: momentum,
                rsi_level: 45.0,
                ..snapshot()
            };
            assert_ne!(classify(&s).pattern_name, "Pullback Entry");
        }
    }
}
