use serde::{Deserialize, Serialize};

/// Clamp an upstream raw score to `[0, 30]` and round to the nearest
/// integer, half away from zero. Total: NaN collapses to 0.
pub fn normalize(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.clamp(0.0, 30.0).round() as u8
}

/// Coarse risk bucket derived from a normalized score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn from_score(score: u8) -> Self {
        if score >= 21 {
            Self::Low
        } else if score >= 15 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Raw upstream score together with its normalized form and risk bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub raw: f64,
    pub normalized: u8,
    pub tier: RiskTier,
}

impl ScoreResult {
    pub fn from_raw(raw: f64) -> Self {
        let normalized = normalize(raw);
        Self {
            raw,
            normalized,
            tier: RiskTier::from_score(normalized),
        }
    }
}
