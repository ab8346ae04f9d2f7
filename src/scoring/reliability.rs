//! Market reliability scoring
//!
//! Measures how well the broader market context supports the signal. Unlike
//! strength, this starts from a neutral base of 50 and moves in both
//! directions: aligned context adds, hostile context subtracts.

use super::{fold_categories, Branch, ReliabilityLevel, ScoreResult};
use crate::weights::ReliabilityWeights;
use crate::{Signal, SignalSnapshot};

// Canonical regime vocabulary. Labels outside this set simply fail the
// alignment predicates; translating foreign vocabularies ("Uptrend",
// "Downtrend") is the upstream feed's data contract, not ours.
const REGIME_TRENDING_UP: &str = "Trending Up";
const REGIME_TRENDING_DOWN: &str = "Trending Down";
const REGIME_SIDEWAYS: &str = "Sideways";
const NIFTY_BULLISH: &str = "Bullish";
const NIFTY_BEARISH: &str = "Bearish";

// VIX thresholds
const CALM_VIX: f64 = 15.0;
const ELEVATED_VIX: f64 = 25.0;
const EXTREME_VIX: f64 = 30.0;

// Advance/decline breadth thresholds
const BREADTH_CONFIRM_BUY: f64 = 1.5;
const BREADTH_CONFIRM_SELL: f64 = 0.7;
const BREADTH_CONTRA_BUY: f64 = 0.8;
const BREADTH_CONTRA_SELL: f64 = 1.3;

/// Score market-context support for the snapshot's signal.
pub fn score_reliability(
    snapshot: &SignalSnapshot,
    weights: &ReliabilityWeights,
) -> ScoreResult<ReliabilityLevel> {
    let regime = [
        Branch {
            predicate: |s| {
                (s.signal == Signal::Buy
                    && (s.market_regime == REGIME_TRENDING_UP || s.nifty_regime == NIFTY_BULLISH))
                    || (s.signal == Signal::Sell
                        && (s.market_regime == REGIME_TRENDING_DOWN
                            || s.nifty_regime == NIFTY_BEARISH))
            },
            delta: weights.regime_aligned,
            label: "Market regime aligned with the signal",
        },
        Branch {
            predicate: |s| s.market_regime == REGIME_SIDEWAYS,
            delta: weights.regime_sideways,
            label: "Sideways regime dilutes conviction",
        },
    ];

    let vix = [
        Branch {
            predicate: |s| s.vix_level < CALM_VIX && s.signal == Signal::Buy,
            delta: weights.calm_vix_buy,
            label: "Calm VIX supports taking long risk",
        },
        Branch {
            predicate: |s| s.vix_level > ELEVATED_VIX && s.signal == Signal::Sell,
            delta: weights.elevated_vix_sell,
            label: "Elevated VIX rewards selling",
        },
        Branch {
            predicate: |s| s.vix_level > EXTREME_VIX,
            delta: weights.extreme_vix,
            label: "Extreme VIX undermines any signal",
        },
    ];

    let breadth = [
        Branch {
            predicate: |s| {
                (s.signal == Signal::Buy && s.advance_decline_ratio > BREADTH_CONFIRM_BUY)
                    || (s.signal == Signal::Sell
                        && s.advance_decline_ratio < BREADTH_CONFIRM_SELL)
            },
            delta: weights.breadth_aligned,
            label: "Breadth confirms the signal direction",
        },
        Branch {
            predicate: |s| {
                (s.signal == Signal::Buy && s.advance_decline_ratio < BREADTH_CONTRA_BUY)
                    || (s.signal == Signal::Sell
                        && s.advance_decline_ratio > BREADTH_CONTRA_SELL)
            },
            delta: weights.breadth_contrary,
            label: "Breadth contradicts the signal direction",
        },
    ];

    let (score, factors) =
        fold_categories(snapshot, weights.base, &[&regime, &vix, &breadth]);

    ScoreResult {
        score,
        level: ReliabilityLevel::from_score(score),
        factors,
    }
}

// ============================================================
// TESTS
// ============================================================
