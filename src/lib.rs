//! # sigpat - Signal Pattern Classification & Confidence Scoring
//!
//! Deterministic engine turning a bundle of already-computed technical and
//! market indicators into one named trading pattern plus two independent
//! 0-100 confidence scores. Pure computation: no I/O, no persistence, no
//! shared state across calls.
//!
//! ## Quick Start
//!
//! ```rust
//! use sigpat::prelude::*;
//!
//! let snapshot = SignalSnapshot {
//!     strategy_signal_type: "Short Pattern: Hanging Man".into(),
//!     signal: Signal::Buy,
//!     ..SignalSnapshot::default()
//! };
//!
//! let assessment = assess(&snapshot);
//! assert_eq!(assessment.pattern.pattern_name, "Mean Reversion");
//! assert_eq!(assessment.pattern.talib_code, Some("CDLHANGINGMAN"));
//! assert!(assessment.strength.score <= 100);
//! ```
//!
//! Raw dashboard payloads go through [`SignalSnapshot::from_raw`] first;
//! an absent analysis object (or one with no signal) is the engine's single
//! failure mode, [`AssessError::NotApplicable`], and means "nothing to
//! render", not an error to surface.

pub mod cascade;
pub mod catalog;
pub mod context;
pub mod scoring;
pub mod weights;

pub mod prelude {
    pub use crate::{
        // Entry points
        assess,
        assess_parallel,
        // Catalog
        catalog::{CandlestickEntry, Direction, PatternCategory, PatternDefinition},
        cascade::classify,
        // Raw boundary
        context::{RawAnalysis, RawMarketContext},
        scoring::{ReliabilityLevel, ScoreResult, StrengthLevel},
        // Weights
        weights::{ReliabilityWeights, StrengthWeights},
        AdxStrength,
        // Errors
        AssessError,
        // Engine
        Assessor,
        AssessorBuilder,
        BatchAssessment,
        BatchSkip,
        MacdHistogramTrend,
        PatternAssessment,
        PatternMatch,
        Result,
        RsiDivergence,
        // Types
        Signal,
        SignalSnapshot,
        VolatilityClass,
    };
}

// ============================================================
// ERRORS
// ============================================================

pub type Result<T> = std::result::Result<T, AssessError>;

/// Errors the engine can produce
#[derive(Debug, Clone, thiserror::Error)]
pub enum AssessError {
    /// The analysis payload is absent or carries no signal. The host should
    /// skip the assessment; there is nothing to render.
    #[error("analysis payload missing or carries no signal")]
    NotApplicable,

    #[error("{field} = {value} out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

// ============================================================
// INDICATOR ENUMS
// ============================================================

/// Trade signal attached to the analysis
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Signal {
    Buy,
    Sell,
    #[default]
    Hold,
}

/// RSI divergence state
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum RsiDivergence {
    #[default]
    None,
    Bullish,
    Bearish,
}

/// ADX trend-strength band
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum AdxStrength {
    Weak,
    #[default]
    Moderate,
    Strong,
}

/// MACD histogram direction
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum MacdHistogramTrend {
    Building,
    Fading,
    #[default]
    Stable,
}

/// Volatility regime classification
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum VolatilityClass {
    Low,
    #[default]
    Normal,
    High,
    Extreme,
}

// ============================================================
// SIGNAL SNAPSHOT
// ============================================================

pub const DEFAULT_RSI_LEVEL: f64 = 50.0;
pub const DEFAULT_MOMENTUM_SCORE: f64 = 50.0;
pub const DEFAULT_VIX_LEVEL: f64 = 15.0;
pub const DEFAULT_ADVANCE_DECLINE_RATIO: f64 = 1.0;

/// Fully-populated indicator snapshot, built once per assessment.
///
/// Downstream logic works only on this type; all defaulting and label
/// normalization happens at construction (see [`SignalSnapshot::from_raw`]).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SignalSnapshot {
    /// Free-form strategy classification, e.g. `"Short Pattern: Hanging Man"`
    pub strategy_signal_type: String,
    pub candlestick_pattern_name: Option<String>,
    pub signal: Signal,
    pub rsi_level: f64,
    pub rsi_divergence: RsiDivergence,
    /// Momentum reading on a 0-100 scale
    pub momentum_score: f64,
    pub adx_strength: AdxStrength,
    pub macd_histogram_trend: MacdHistogramTrend,
    pub volatility_class: VolatilityClass,
    /// Regime label for the instrument's own market, canonical vocabulary
    /// `"Trending Up"` / `"Trending Down"` / `"Sideways"`
    pub market_regime: String,
    /// Index-level regime label, canonical vocabulary `"Bullish"` / `"Bearish"`
    pub nifty_regime: String,
    pub vix_level: f64,
    pub advance_decline_ratio: f64,
}

impl Default for SignalSnapshot {
    fn default() -> Self {
        Self {
            strategy_signal_type: String::new(),
            candlestick_pattern_name: None,
            signal: Signal::Hold,
            rsi_level: DEFAULT_RSI_LEVEL,
            rsi_divergence: RsiDivergence::None,
            momentum_score: DEFAULT_MOMENTUM_SCORE,
            adx_strength: AdxStrength::Moderate,
            macd_histogram_trend: MacdHistogramTrend::Stable,
            volatility_class: VolatilityClass::Normal,
            market_regime: String::new(),
            nifty_regime: String::new(),
            vix_level: DEFAULT_VIX_LEVEL,
            advance_decline_ratio: DEFAULT_ADVANCE_DECLINE_RATIO,
        }
    }
}

// ============================================================
// ASSESSMENT OUTPUT
// ============================================================

/// Exactly one per assessment; totality is guaranteed by the cascade's
/// fallback rule.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PatternMatch {
    pub pattern_name: &'static str,
    pub category: catalog::PatternCategory,
    /// Candlestick name when the snapshot carries one, else the pattern's
    /// catalog description
    pub detail_text: String,
    pub candlestick_pattern_name: Option<String>,
    /// Standardized TA-Lib code for the candlestick, when cataloged
    pub talib_code: Option<&'static str>,
}

/// The engine's sole output: one pattern plus both confidence scores.
/// Never persisted; recomputed on every input change.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PatternAssessment {
    pub pattern: PatternMatch,
    pub strength: scoring::ScoreResult<scoring::StrengthLevel>,
    pub reliability: scoring::ScoreResult<scoring::ReliabilityLevel>,
}

// ============================================================
// ASSESSOR
// ============================================================

/// Front object combining classifier and both scorers.
///
/// Stateless between calls; cheap to clone and safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct Assessor {
    strength: weights::StrengthWeights,
    reliability: weights::ReliabilityWeights,
}

impl Assessor {
    /// Assessor with the calibrated default weights
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify and score a snapshot. Pure and deterministic: identical
    /// snapshots yield structurally identical assessments.
    pub fn assess(&self, snapshot: &SignalSnapshot) -> PatternAssessment {
        PatternAssessment {
            pattern: cascade::classify(snapshot),
            strength: scoring::strength::score_strength(snapshot, &self.strength),
            reliability: scoring::reliability::score_reliability(snapshot, &self.reliability),
        }
    }

    /// Normalize raw payloads, then assess. Fails only with
    /// [`AssessError::NotApplicable`].
    pub fn assess_raw(
        &self,
        analysis: Option<&context::RawAnalysis>,
        market: Option<&context::RawMarketContext>,
    ) -> Result<PatternAssessment> {
        let snapshot = SignalSnapshot::from_raw(analysis, market)?;
        Ok(self.assess(&snapshot))
    }
}

/// Assess a snapshot with the calibrated default weights.
pub fn assess(snapshot: &SignalSnapshot) -> PatternAssessment {
    Assessor::default().assess(snapshot)
}

// ============================================================
// BUILDER
// ============================================================

/// Builder applying weight overrides with validation
pub struct AssessorBuilder {
    strength: weights::StrengthWeights,
    reliability: weights::ReliabilityWeights,
}

impl Default for AssessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessorBuilder {
    pub fn new() -> Self {
        Self {
            strength: weights::StrengthWeights::default(),
            reliability: weights::ReliabilityWeights::default(),
        }
    }

    /// Override the strength-scorer deltas
    pub fn strength_weights(mut self, weights: weights::StrengthWeights) -> Self {
        self.strength = weights;
        self
    }

    /// Override the reliability-scorer base and deltas
    pub fn reliability_weights(mut self, weights: weights::ReliabilityWeights) -> Self {
        self.reliability = weights;
        self
    }

    /// Validate the configured weights and build the assessor
    pub fn build(self) -> Result<Assessor> {
        self.strength.validate()?;
        self.reliability.validate()?;
        Ok(Assessor {
            strength: self.strength,
            reliability: self.reliability,
        })
    }
}

// ============================================================
// PARALLEL BATCH ASSESSMENT
// ============================================================

use rayon::prelude::*;

/// Result of assessing a single instrument in a batch
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct BatchAssessment {
    pub symbol: String,
    pub assessment: PatternAssessment,
}

/// Instrument skipped during batch assessment (no analysis/signal present)
#[derive(Debug)]
pub struct BatchSkip {
    pub symbol: String,
    pub error: AssessError,
}

/// Assess many instruments in parallel.
///
/// Instruments whose payloads are not applicable land in the skip list
/// rather than failing the batch.
pub fn assess_parallel<'a, I>(
    assessor: &Assessor,
    instruments: I,
) -> (Vec<BatchAssessment>, Vec<BatchSkip>)
where
    I: IntoParallelIterator<
        Item = (
            &'a str,
            Option<&'a context::RawAnalysis>,
            Option<&'a context::RawMarketContext>,
        ),
    >,
{
    let results: Vec<_> = instruments
        .into_par_iter()
        .map(|(symbol, analysis, market)| {
            assessor
                .assess_raw(analysis, market)
                .map(|assessment| BatchAssessment {
                    symbol: symbol.to_string(),
                    assessment,
                })
                .map_err(|error| BatchSkip {
                    symbol: symbol.to_string(),
                    error,
                })
        })
        .collect();

    let mut assessments = Vec::new();
    let mut skips = Vec::new();

    for result in results {
        match result {
            Ok(a) => assessments.push(a),
            Err(s) => skips.push(s),
        }
    }

    (assessments, skips)
}

// ============================================================
// TESTS
// ============================================================
