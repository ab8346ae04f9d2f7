//! Static pattern catalogs
//!
//! Two lookup tables live here:
//!
//! - The trading-pattern definitions produced by the classification cascade
//!   (name, category, typical duration, historical success-rate band).
//! - The candlestick catalog mapping human-readable formation names to their
//!   standardized TA-Lib codes (e.g. "Hanging Man" -> `CDLHANGINGMAN`).

// ============================================================
// TRADING PATTERN DEFINITIONS
// ============================================================

/// Broad category of a trading pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PatternCategory {
    Reversal,
    Momentum,
    Continuation,
    Breakout,
    Neutral,
}

/// Catalog record for one named trading pattern
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PatternDefinition {
    pub name: &'static str,
    pub category: PatternCategory,
    pub description: &'static str,
    /// Expected playout horizon as (min, max) trading days
    pub typical_duration_days: (u8, u8),
    /// Historical win-rate band, display-ready
    pub success_rate_band: &'static str,
}

pub static MEAN_REVERSION: PatternDefinition = PatternDefinition {
    name: "Mean Reversion",
    category: PatternCategory::Reversal,
    description: "Bearish setup rejected by buyers, price snapping back toward its mean",
    typical_duration_days: (2, 5),
    success_rate_band: "55-65%",
};

pub static BULLISH_DIVERGENCE: PatternDefinition = PatternDefinition {
    name: "Bullish Divergence",
    category: PatternCategory::Reversal,
    description: "Price printing lower lows while RSI holds higher lows",
    typical_duration_days: (3, 10),
    success_rate_band: "60-70%",
};

pub static BEARISH_DIVERGENCE: PatternDefinition = PatternDefinition {
    name: "Bearish Divergence",
    category: PatternCategory::Reversal,
    description: "Price printing higher highs while RSI rolls over",
    typical_duration_days: (3, 10),
    success_rate_band: "60-70%",
};

pub static MOMENTUM_BREAKOUT: PatternDefinition = PatternDefinition {
    name: "Momentum Breakout",
    category: PatternCategory::Breakout,
    description: "Bullish formation confirmed by expanding momentum",
    typical_duration_days: (5, 15),
    success_rate_band: "65-75%",
};

pub static MACD_MOMENTUM_BUILD: PatternDefinition = PatternDefinition {
    name: "MACD Momentum Build",
    category: PatternCategory::Momentum,
    description: "MACD histogram expanding, momentum accelerating into the move",
    typical_duration_days: (3, 8),
    success_rate_band: "55-65%",
};

pub static STRONG_TREND_CONTINUATION: PatternDefinition = PatternDefinition {
    name: "Strong Trend Continuation",
    category: PatternCategory::Continuation,
    description: "Established trend backed by strong ADX and elevated momentum",
    typical_duration_days: (5, 20),
    success_rate_band: "65-75%",
};

pub static OVERSOLD_BOUNCE: PatternDefinition = PatternDefinition {
    name: "Oversold Bounce",
    category: PatternCategory::Reversal,
    description: "RSI washed out with buyers stepping back in",
    typical_duration_days: (2, 6),
    success_rate_band: "55-65%",
};

pub static EXTREME_OVERSOLD_RECOVERY: PatternDefinition = PatternDefinition {
    name: "Extreme Oversold Recovery",
    category: PatternCategory::Reversal,
    description: "Capitulation-level RSI met with committed buying",
    typical_duration_days: (2, 8),
    success_rate_band: "60-70%",
};

pub static OVERBOUGHT_PULLBACK: PatternDefinition = PatternDefinition {
    name: "Overbought Pullback",
    category: PatternCategory::Reversal,
    description: "Stretched RSI met with supply",
    typical_duration_days: (2, 6),
    success_rate_band: "55-65%",
};

pub static EXTREME_OVERBOUGHT_EXHAUSTION: PatternDefinition = PatternDefinition {
    name: "Extreme Overbought Exhaustion",
    category: PatternCategory::Reversal,
    description: "Blow-off RSI reading with sellers taking control",
    typical_duration_days: (2, 8),
    success_rate_band: "60-70%",
};

pub static BULLISH_CONTINUATION: PatternDefinition = PatternDefinition {
    name: "Bullish Continuation",
    category: PatternCategory::Continuation,
    description: "Bullish formation resolving with the prevailing advance",
    typical_duration_days: (3, 12),
    success_rate_band: "60-70%",
};

pub static BEARISH_CONTINUATION: PatternDefinition = PatternDefinition {
    name: "Bearish Continuation",
    category: PatternCategory::Continuation,
    description: "Bearish formation resolving with the prevailing decline",
    typical_duration_days: (3, 12),
    success_rate_band: "60-70%",
};

pub static PULLBACK_ENTRY: PatternDefinition = PatternDefinition {
    name: "Pullback Entry",
    category: PatternCategory::Continuation,
    description: "Shallow dip inside an intact advance",
    typical_duration_days: (2, 7),
    success_rate_band: "55-65%",
};

pub static CONSOLIDATION_BREAKOUT: PatternDefinition = PatternDefinition {
    name: "Consolidation Breakout",
    category: PatternCategory::Breakout,
    description: "Bullish formation escaping a low-ADX base",
    typical_duration_days: (5, 15),
    success_rate_band: "60-70%",
};

pub static MOMENTUM_FADE: PatternDefinition = PatternDefinition {
    name: "Momentum Fade",
    category: PatternCategory::Momentum,
    description: "MACD histogram contracting, confirming distribution",
    typical_duration_days: (3, 8),
    success_rate_band: "50-60%",
};

/// Fallback produced when no cascade rule fires
pub static TECHNICAL_SETUP: PatternDefinition = PatternDefinition {
    name: "Technical Setup",
    category: PatternCategory::Neutral,
    description: "Indicator mix without a dominant formation",
    typical_duration_days: (1, 5),
    success_rate_band: "45-55%",
};

/// The 15 named trading patterns, in cascade order
pub static TRADING_PATTERNS: [&PatternDefinition; 15] = [
    &MEAN_REVERSION,
    &BULLISH_DIVERGENCE,
    &BEARISH_DIVERGENCE,
    &MOMENTUM_BREAKOUT,
    &MACD_MOMENTUM_BUILD,
    &STRONG_TREND_CONTINUATION,
    &OVERSOLD_BOUNCE,
    &EXTREME_OVERSOLD_RECOVERY,
    &OVERBOUGHT_PULLBACK,
    &EXTREME_OVERBOUGHT_EXHAUSTION,
    &BULLISH_CONTINUATION,
    &BEARISH_CONTINUATION,
    &PULLBACK_ENTRY,
    &CONSOLIDATION_BREAKOUT,
    &MOMENTUM_FADE,
];

/// Look up a trading-pattern definition by its display name
pub fn definition(name: &str) -> Option<&'static PatternDefinition> {
    TRADING_PATTERNS.iter().copied().find(|def| def.name == name)
}

// ============================================================
// CANDLESTICK CATALOG
// ============================================================

/// Directional bias of a candlestick formation
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    Bullish,
    Bearish,
}

/// One candlestick catalog entry: display name, TA-Lib code, bias
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct CandlestickEntry {
    pub name: &'static str,
    pub code: &'static str,
    pub direction: Direction,
}

/// Candlestick name -> TA-Lib code table (6 bullish + 6 bearish)
pub static CANDLESTICK_CATALOG: [CandlestickEntry; 12] = [
    CandlestickEntry { name: "Hammer", code: "CDLHAMMER", direction: Direction::Bullish },
    CandlestickEntry { name: "Inverted Hammer", code: "CDLINVERTEDHAMMER", direction: Direction::Bullish },
    CandlestickEntry { name: "Bullish Engulfing", code: "CDLENGULFING", direction: Direction::Bullish },
    CandlestickEntry { name: "Piercing Line", code: "CDLPIERCING", direction: Direction::Bullish },
    CandlestickEntry { name: "Morning Star", code: "CDLMORNINGSTAR", direction: Direction::Bullish },
    CandlestickEntry { name: "Three White Soldiers", code: "CDL3WHITESOLDIERS", direction: Direction::Bullish },
    CandlestickEntry { name: "Hanging Man", code: "CDLHANGINGMAN", direction: Direction::Bearish },
    CandlestickEntry { name: "Shooting Star", code: "CDLSHOOTINGSTAR", direction: Direction::Bearish },
    CandlestickEntry { name: "Dark Cloud Cover", code: "CDLDARKCLOUDCOVER", direction: Direction::Bearish },
    CandlestickEntry { name: "Evening Star", code: "CDLEVENINGSTAR", direction: Direction::Bearish },
    CandlestickEntry { name: "Three Black Crows", code: "CDL3BLACKCROWS", direction: Direction::Bearish },
    CandlestickEntry { name: "Gravestone Doji", code: "CDLGRAVESTONEDOJI", direction: Direction::Bearish },
];

/// Resolve a candlestick display name to its TA-Lib code.
///
/// Matching ignores surrounding whitespace and ASCII case; names outside the
/// catalog resolve to `None`.
pub fn talib_code(name: &str) -> Option<&'static str> {
    let name = name.trim();
    CANDLESTICK_CATALOG
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
        .map(|entry| entry.code)
}

// ============================================================
// TESTS
// ============================================================
