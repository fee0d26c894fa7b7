//! Narrative analysis derived from an ordered, data-driven rule table.

mod rules;

use serde::{Deserialize, Serialize};

use super::domain::PredictionRequest;
use rules::{AnalysisRule, Finding, OUTLET_RULES, WAREHOUSE_RULES};

/// Which rule table a deployment runs. Warehouse framing reads capacity,
/// workforce, and certification signals; outlet framing reads location and
/// site-infrastructure signals. Selected once at startup, never per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisContext {
    Warehouse,
    Outlet,
}

impl AnalysisContext {
    pub fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "outlet" | "retail" | "location" => Self::Outlet,
            _ => Self::Warehouse,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Warehouse => "warehouse",
            Self::Outlet => "outlet",
        }
    }

    fn rules(self) -> &'static [AnalysisRule] {
        match self {
            Self::Warehouse => WAREHOUSE_RULES,
            Self::Outlet => OUTLET_RULES,
        }
    }
}

/// Ordered strength/weakness/recommendation lists. List order is rule-table
/// order and duplicates are kept as emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Evaluate every rule in the context's table against the record and the
/// normalized score. Rules are independent; all of them run on every call,
/// so the output is deterministic and order-stable for identical inputs.
pub fn analyze(context: AnalysisContext, record: &PredictionRequest, score: u8) -> AnalysisReport {
    let mut report = AnalysisReport::default();

    for rule in context.rules() {
        if !(rule.applies)(record, score) {
            continue;
        }
        let bucket = match rule.finding {
            Finding::Strength => &mut report.strengths,
            Finding::Weakness => &mut report.weaknesses,
            Finding::Recommendation => &mut report.recommendations,
        };
        bucket.extend(rule.messages.iter().map(|message| (*message).to_string()));
    }

    report
}
