//! Raw payload normalization
//!
//! The upstream analysis service emits loosely-structured JSON: optional
//! sub-objects, camelCase keys, free-form enum labels. Everything funnels
//! through [`SignalSnapshot::from_raw`] here so downstream logic only ever
//! sees a fully-populated, typed snapshot. This is also where the engine's
//! single failure mode lives: an absent analysis object (or one carrying no
//! signal) yields [`AssessError::NotApplicable`].

use crate::{
    AdxStrength, AssessError, MacdHistogramTrend, Result, RsiDivergence, Signal, SignalSnapshot,
    VolatilityClass, DEFAULT_ADVANCE_DECLINE_RATIO, DEFAULT_MOMENTUM_SCORE, DEFAULT_RSI_LEVEL,
    DEFAULT_VIX_LEVEL,
};

// ============================================================
// RAW PAYLOAD SHAPES
// ============================================================

/// Momentum sub-object of the analysis payload
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct RawMomentum {
    pub score: Option<f64>,
}

/// RSI sub-object of the analysis payload
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct RawRsi {
    #[serde(alias = "level")]
    pub value: Option<f64>,
    pub divergence: Option<String>,
}

/// ADX sub-object of the analysis payload
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct RawAdx {
    pub strength: Option<String>,
}

/// MACD sub-object of the analysis payload
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct RawMacd {
    #[serde(alias = "histogramTrend")]
    pub histogram_trend: Option<String>,
}

/// Volatility-regime sub-object of the analysis payload
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct RawVolatility {
    pub classification: Option<String>,
}

/// Top-level quantitative-analysis payload. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct RawAnalysis {
    pub signal: Option<String>,
    #[serde(alias = "strategySignalType")]
    pub strategy_signal_type: Option<String>,
    #[serde(alias = "candlestickPattern", alias = "candlestick_pattern_name")]
    pub candlestick_pattern: Option<String>,
    pub momentum: Option<RawMomentum>,
    pub rsi: Option<RawRsi>,
    pub adx: Option<RawAdx>,
    pub macd: Option<RawMacd>,
    pub volatility: Option<RawVolatility>,
}

/// Market-context payload: regime labels, VIX-like index, breadth ratio.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct RawMarketContext {
    #[serde(alias = "marketRegime")]
    pub market_regime: Option<String>,
    #[serde(alias = "niftyRegime")]
    pub nifty_regime: Option<String>,
    #[serde(alias = "vixLevel", alias = "vix")]
    pub vix_level: Option<f64>,
    #[serde(alias = "advanceDeclineRatio")]
    pub advance_decline_ratio: Option<f64>,
}

// ============================================================
// LABEL PARSING
// ============================================================

impl Signal {
    /// Parse a signal label. Anything other than buy/sell normalizes to `Hold`.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case("buy") {
            Self::Buy
        } else if label.eq_ignore_ascii_case("sell") {
            Self::Sell
        } else {
            Self::Hold
        }
    }
}

impl RsiDivergence {
    /// Parse a divergence label; accepts both `"Bullish Divergence"` and bare `"Bullish"`.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case("bullish divergence") || label.eq_ignore_ascii_case("bullish")
        {
            Self::Bullish
        } else if label.eq_ignore_ascii_case("bearish divergence")
            || label.eq_ignore_ascii_case("bearish")
        {
            Self::Bearish
        } else {
            Self::None
        }
    }
}

impl AdxStrength {
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case("weak") {
            Self::Weak
        } else if label.eq_ignore_ascii_case("strong") {
            Self::Strong
        } else {
            Self::Moderate
        }
    }
}

impl MacdHistogramTrend {
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case("building") {
            Self::Building
        } else if label.eq_ignore_ascii_case("fading") {
            Self::Fading
        } else {
            Self::Stable
        }
    }
}

impl VolatilityClass {
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case("low") {
            Self::Low
        } else if label.eq_ignore_ascii_case("high") {
            Self::High
        } else if label.eq_ignore_ascii_case("extreme") {
            Self::Extreme
        } else {
            Self::Normal
        }
    }
}

// ============================================================
// SNAPSHOT CONSTRUCTION
// ============================================================

impl SignalSnapshot {
    /// Normalize raw analysis + market-context payloads into a typed snapshot.
    ///
    /// Missing fields take their documented defaults. The only failure is
    /// [`AssessError::NotApplicable`]: the analysis object is absent, or it
    /// carries no `signal` field. The host should skip the assessment in
    /// that case rather than surface an error.
    pub fn from_raw(
        analysis: Option<&RawAnalysis>,
        market: Option<&RawMarketContext>,
    ) -> Result<Self> {
        let analysis = analysis.ok_or(AssessError::NotApplicable)?;
        let signal_label = analysis
            .signal
            .as_deref()
            .ok_or(AssessError::NotApplicable)?;

        let empty_market = RawMarketContext::default();
        let market = market.unwrap_or(&empty_market);

        Ok(Self {
            strategy_signal_type: analysis.strategy_signal_type.clone().unwrap_or_default(),
            candlestick_pattern_name: analysis
                .candlestick_pattern
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_owned),
            signal: Signal::from_label(signal_label),
            rsi_level: analysis
                .rsi
                .as_ref()
                .and_then(|rsi| rsi.value)
                .unwrap_or(DEFAULT_RSI_LEVEL),
            rsi_divergence: analysis
                .rsi
                .as_ref()
                .and_then(|rsi| rsi.divergence.as_deref())
                .map(RsiDivergence::from_label)
                .unwrap_or_default(),
            momentum_score: analysis
                .momentum
                .as_ref()
                .and_then(|momentum| momentum.score)
                .unwrap_or(DEFAULT_MOMENTUM_SCORE),
            adx_strength: analysis
                .adx
                .as_ref()
                .and_then(|adx| adx.strength.as_deref())
                .map(AdxStrength::from_label)
                .unwrap_or_default(),
            macd_histogram_trend: analysis
                .macd
                .as_ref()
                .and_then(|macd| macd.histogram_trend.as_deref())
                .map(MacdHistogramTrend::from_label)
                .unwrap_or_default(),
            volatility_class: analysis
                .volatility
                .as_ref()
                .and_then(|vol| vol.classification.as_deref())
                .map(VolatilityClass::from_label)
                .unwrap_or_default(),
            market_regime: market.market_regime.clone().unwrap_or_default(),
            nifty_regime: market.nifty_regime.clone().unwrap_or_default(),
            vix_level: market.vix_level.unwrap_or(DEFAULT_VIX_LEVEL),
            advance_decline_ratio: market
                .advance_decline_ratio
                .unwrap_or(DEFAULT_ADVANCE_DECLINE_RATIO),
        })
    }
}

// ============================================================
// TESTS
// ============================================================
