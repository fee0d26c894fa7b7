use super::super::domain::{
    CapacitySize, CertificateGrade, LocationType, OwnerType, PredictionRequest,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Finding {
    Strength,
    Weakness,
    Recommendation,
}

/// One entry of a rule table: an independent predicate over the record (and
/// for recommendations, the normalized score) plus the messages it emits.
pub(super) struct AnalysisRule {
    pub(super) finding: Finding,
    pub(super) applies: fn(&PredictionRequest, u8) -> bool,
    pub(super) messages: &'static [&'static str],
}

const fn strength(
    applies: fn(&PredictionRequest, u8) -> bool,
    messages: &'static [&'static str],
) -> AnalysisRule {
    AnalysisRule {
        finding: Finding::Strength,
        applies,
        messages,
    }
}

const fn weakness(
    applies: fn(&PredictionRequest, u8) -> bool,
    messages: &'static [&'static str],
) -> AnalysisRule {
    AnalysisRule {
        finding: Finding::Weakness,
        applies,
        messages,
    }
}

const fn recommendation(
    applies: fn(&PredictionRequest, u8) -> bool,
    messages: &'static [&'static str],
) -> AnalysisRule {
    AnalysisRule {
        finding: Finding::Recommendation,
        applies,
        messages,
    }
}

// Both tables close with the same score-keyed pair: a low score asks for
// metric improvements, a top-tier score emits two messages.
fn low_score(_: &PredictionRequest, score: u8) -> bool {
    score < 15
}

fn top_score(_: &PredictionRequest, score: u8) -> bool {
    score >= 21
}

const LOW_SCORE_MESSAGE: &[&str] =
    &["Focus on improving key business metrics for better performance"];
const TOP_SCORE_MESSAGES: &[&str] = &[
    "Excellent facility - consider expanding capacity and operations",
    "Use as a model for other retail locations",
];

/// Warehouse-framed table. Thresholds and message texts are part of the
/// response contract; the overlapping workforce (10/20), establishment-year
/// (2000/2015/2020), and competitor (3/5/7) bands are intentional.
pub(super) const WAREHOUSE_RULES: &[AnalysisRule] = &[
    strength(
        |r, _| r.capacity_size == Some(CapacitySize::Large),
        &["Large capacity facility supports high volume operations"],
    ),
    strength(
        |r, _| r.workers_num >= 50,
        &["Strong workforce capacity for efficient operations"],
    ),
    strength(
        |r, _| r.wh_est_year <= 2000,
        &["Well-established business with proven track record"],
    ),
    strength(
        |r, _| r.wh_owner_type == OwnerType::Franchise,
        &["Franchise model provides operational support and branding"],
    ),
    strength(
        |r, _| r.competitors_in_market <= 3,
        &["Low competition environment offers market advantages"],
    ),
    strength(
        |r, _| {
            matches!(
                r.approved_wh_govt_certificate,
                CertificateGrade::APlus | CertificateGrade::A
            )
        },
        &["High-grade government certification ensures quality standards"],
    ),
    weakness(
        |r, _| r.capacity_size == Some(CapacitySize::Small),
        &["Limited capacity may restrict growth potential"],
    ),
    weakness(
        |r, _| r.workers_num < 10,
        &["Small workforce may limit operational efficiency"],
    ),
    weakness(
        |r, _| r.wh_est_year >= 2020,
        &["Newer business may lack operational experience"],
    ),
    weakness(
        |r, _| r.approved_wh_govt_certificate == CertificateGrade::C,
        &["Lower certification grade indicates compliance concerns"],
    ),
    weakness(
        |r, _| r.competitors_in_market > 7,
        &["High competition density in the market"],
    ),
    recommendation(
        |r, _| r.capacity_size == Some(CapacitySize::Small),
        &["Consider facility expansion to increase capacity"],
    ),
    recommendation(
        |r, _| r.workers_num < 20,
        &["Invest in staff training and hiring to improve operations"],
    ),
    recommendation(
        |r, _| {
            matches!(
                r.approved_wh_govt_certificate,
                CertificateGrade::B | CertificateGrade::C
            )
        },
        &["Focus on improving certification to A+ grade"],
    ),
    recommendation(
        |r, _| r.competitors_in_market > 5,
        &["Develop competitive advantages through service differentiation"],
    ),
    recommendation(
        |r, _| r.wh_est_year >= 2015,
        &["Build operational expertise through process optimization"],
    ),
    recommendation(low_score, LOW_SCORE_MESSAGE),
    recommendation(top_score, TOP_SCORE_MESSAGES),
];

/// Outlet-framed table: same shape, location and site-infrastructure
/// signals instead of capacity and certification ones.
pub(super) const OUTLET_RULES: &[AnalysisRule] = &[
    strength(
        |r, _| r.location_type == Some(LocationType::Urban),
        &["Urban location provides strong market access and footfall"],
    ),
    strength(
        |r, _| r.electric_supply == 1,
        &["Reliable electric supply keeps operations uninterrupted"],
    ),
    strength(
        |r, _| r.flood_proof == 1,
        &["Flood-proof construction protects inventory from weather damage"],
    ),
    strength(
        |r, _| r.temp_reg_mach == 1,
        &["Temperature regulation safeguards sensitive product quality"],
    ),
    weakness(
        |r, _| r.transport_issue_l1y > 5,
        &["Frequent transport issues disrupt the supply chain"],
    ),
    weakness(
        |r, _| r.storage_issue_reported_l3m > 10,
        &["High volume of storage issues reported in recent months"],
    ),
    weakness(
        |r, _| r.wh_breakdown_l3m > 3,
        &["Recurring breakdowns reduce effective operating capacity"],
    ),
    weakness(
        |r, _| r.dist_from_hub > 500,
        &["Long distance from the distribution hub increases lead times"],
    ),
    recommendation(
        |r, _| r.transport_issue_l1y > 3,
        &["Review logistics partners to reduce transport disruptions"],
    ),
    recommendation(
        |r, _| r.flood_impacted == 1 && r.flood_proof == 0,
        &["Invest in flood protection for the flood-affected site"],
    ),
    recommendation(
        |r, _| r.temp_reg_mach == 0,
        &["Install temperature regulation to protect stored goods"],
    ),
    recommendation(low_score, LOW_SCORE_MESSAGE),
    recommendation(top_score, TOP_SCORE_MESSAGES),
];
