//! Pattern strength scoring
//!
//! Measures how well the snapshot's own technical indicators line up with
//! the given signal. Base 0; four independent categories (momentum, RSI
//! extremity, divergence, volatility fit), each contributing at most one
//! branch.

use super::{fold_categories, Branch, ScoreResult, StrengthLevel};
use crate::weights::StrengthWeights;
use crate::{RsiDivergence, Signal, SignalSnapshot, VolatilityClass};

// Momentum thresholds
const MOMENTUM_STRONG_LEVEL: f64 = 60.0;
const MOMENTUM_MODERATE_LEVEL: f64 = 40.0;
const MOMENTUM_ROLLOVER_LEVEL: f64 = 40.0;

// RSI thresholds per direction
const RSI_EXTREME_BUY: f64 = 35.0;
const RSI_EXTREME_SELL: f64 = 65.0;
const RSI_LEAN_BUY: f64 = 45.0;
const RSI_LEAN_SELL: f64 = 55.0;

/// Score indicator alignment for the snapshot's signal.
pub fn score_strength(
    snapshot: &SignalSnapshot,
    weights: &StrengthWeights,
) -> ScoreResult<StrengthLevel> {
    let momentum = [
        Branch {
            predicate: |s| s.signal == Signal::Buy && s.momentum_score > MOMENTUM_STRONG_LEVEL,
            delta: weights.momentum_strong,
            label: "Strong momentum backing the buy signal",
        },
        Branch {
            predicate: |s| s.signal == Signal::Buy && s.momentum_score > MOMENTUM_MODERATE_LEVEL,
            delta: weights.momentum_moderate,
            label: "Moderate momentum backing the buy signal",
        },
        Branch {
            predicate: |s| s.signal == Signal::Sell && s.momentum_score < MOMENTUM_ROLLOVER_LEVEL,
            delta: weights.momentum_rollover,
            label: "Momentum rollover backing the sell signal",
        },
    ];

    let rsi = [
        Branch {
            predicate: |s| {
                (s.signal == Signal::Buy && s.rsi_level < RSI_EXTREME_BUY)
                    || (s.signal == Signal::Sell && s.rsi_level > RSI_EXTREME_SELL)
            },
            delta: weights.rsi_extreme,
            label: "RSI at an extreme for the signal direction",
        },
        Branch {
            predicate: |s| {
                (s.signal == Signal::Buy && s.rsi_level < RSI_LEAN_BUY)
                    || (s.signal == Signal::Sell && s.rsi_level > RSI_LEAN_SELL)
            },
            delta: weights.rsi_lean,
            label: "RSI leaning toward the signal direction",
        },
    ];

    let divergence = [Branch {
        predicate: |s| s.rsi_divergence != RsiDivergence::None,
        delta: weights.divergence,
        label: "RSI divergence in play",
    }];

    let volatility = [
        Branch {
            predicate: |s| {
                s.volatility_class == VolatilityClass::Low && s.signal == Signal::Buy
            },
            delta: weights.volatility_fit,
            label: "Low volatility favors the long entry",
        },
        Branch {
            predicate: |s| {
                s.volatility_class == VolatilityClass::High && s.signal == Signal::Sell
            },
            delta: weights.volatility_fit,
            label: "High volatility favors the exit",
        },
    ];

    let (score, factors) = fold_categories(
        snapshot,
        0,
        &[&momentum, &rsi, &divergence, &volatility],
    );

    ScoreResult {
        score,
        level: StrengthLevel::from_score(score),
        factors,
    }
}

// ============================================================
// TESTS
// ============================================================
