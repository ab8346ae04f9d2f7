//! Confidence scoring
//!
//! Both scorers share the same shape: an ordered list of evidence branches
//! per category, folded left with only the first matching branch per
//! category firing, then clamped to [0, 100]. The branch tables are data,
//! not control flow, so the weights stay recalibratable and the tables
//! testable row by row.

pub mod reliability;
pub mod strength;

use crate::SignalSnapshot;

/// One scoring branch: predicate, signed delta, fixed evidence string.
pub(crate) struct Branch {
    pub predicate: fn(&SignalSnapshot) -> bool,
    pub delta: i32,
    pub label: &'static str,
}

/// Fold the categories over a snapshot. Within each category only the first
/// matching branch fires (if/else-if semantics); categories are independent.
/// Returns the clamped score plus the evidence trail in firing order.
pub(crate) fn fold_categories(
    snapshot: &SignalSnapshot,
    base: i32,
    categories: &[&[Branch]],
) -> (u8, Vec<String>) {
    let mut score = base;
    let mut factors = Vec::new();

    for branches in categories {
        if let Some(branch) = branches.iter().find(|b| (b.predicate)(snapshot)) {
            score += branch.delta;
            factors.push(branch.label.to_string());
        }
    }

    (score.clamp(0, 100) as u8, factors)
}

// ============================================================
// SCORE RESULT
// ============================================================

/// A 0-100 confidence score with its banded level and evidence trail.
///
/// `factors` preserves branch-evaluation order; it is an audit trail for the
/// host UI, not a set.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ScoreResult<L> {
    pub score: u8,
    pub level: L,
    pub factors: Vec<String>,
}

/// Banded level for the strength score
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum StrengthLevel {
    Strong,
    Moderate,
    Weak,
}

impl StrengthLevel {
    pub fn from_score(score: u8) -> Self {
        if score > 70 {
            Self::Strong
        } else if score > 40 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }
}

/// Banded level for the reliability score
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ReliabilityLevel {
    High,
    Moderate,
    Low,
}

impl ReliabilityLevel {
    /// The neutral base (50, no evidence either way) reads as Moderate, so
    /// the lower boundary is inclusive.
    pub fn from_score(score: u8) -> Self {
        if score > 70 {
            Self::High
        } else if score >= 50 {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}
