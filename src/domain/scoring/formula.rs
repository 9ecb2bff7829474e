//! Weighted performance score.
//!
//! Six components combine under fixed weights; missing data contributes 0
//! and weights are never re-normalized, so sparse inputs simply score lower.

use serde::{Deserialize, Serialize};

const W_RECENT_FEEDBACK: f64 = 0.35;
const W_OKR: f64 = 0.25;
const W_PEER: f64 = 0.15;
const W_MANAGER: f64 = 0.15;
const W_SELF: f64 = 0.05;
const W_TENURE: f64 = 0.05;

/// Inputs to the score formula, each on a 0-10 scale except
/// `tenure_adjustment` which lives on 0-2.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreComponents {
    pub recent_feedback: f64,
    pub okr: f64,
    pub peer: f64,
    pub manager: f64,
    pub self_assessment: f64,
    pub tenure_adjustment: f64,
}

/// Maps whole months of tenure onto the 0-2 adjustment:
/// `min(months / 12, 1) * 2`, so a full year or more earns the maximum.
pub fn tenure_adjustment(tenure_months: u32) -> f64 {
    (tenure_months as f64 / 12.0).min(1.0) * 2.0
}

/// Computes the weighted score, rounded to two decimals.
///
/// Components are clamped into their valid ranges before weighting rather
/// than trusted. With every component at its maximum (10s and a tenure
/// adjustment of 2) the result is 9.6.
pub fn calculate_ai_score(components: ScoreComponents) -> f64 {
    let c = |v: f64| v.clamp(0.0, 10.0);
    let raw = W_RECENT_FEEDBACK * c(components.recent_feedback)
        + W_OKR * c(components.okr)
        + W_PEER * c(components.peer)
        + W_MANAGER * c(components.manager)
        + W_SELF * c(components.self_assessment)
        + W_TENURE * components.tenure_adjustment.clamp(0.0, 2.0);
    (raw * 100.0).round() / 100.0
}
