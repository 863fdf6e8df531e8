// src/domain/logic.rs

use crate::config::DealConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealLabel {
    Qualified,
    Hot,
    None,
}

impl DealLabel {
    /// Badge shown in the table and written to exports.
    pub fn badge(&self) -> &'static str {
        match self {
            DealLabel::Qualified => "✅",
            DealLabel::Hot => "🔥",
            DealLabel::None => "❌",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DealLabel::Qualified => "qualified",
            DealLabel::Hot => "hot",
            DealLabel::None => "none",
        }
    }
}

/// Classifies a deal. The order of checks is the precedence.
///
/// A high enough ROI makes a deal "hot" even when it is not undervalued
/// and even when its cash flow is negative. Keep the two rules separate.
pub fn label_deal(
    undervalued: bool,
    annual_roi: f64,
    monthly_cash_flow: f64,
    cfg: &DealConfig,
) -> DealLabel {
    if undervalued && annual_roi >= cfg.qualified_min_roi && monthly_cash_flow > 0.0 {
        return DealLabel::Qualified;
    }
    if annual_roi >= cfg.hot_min_roi {
        return DealLabel::Hot;
    }
    DealLabel::None
}
