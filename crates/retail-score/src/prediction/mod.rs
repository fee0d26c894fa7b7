//! Prediction pipeline: intake validation, the upstream scoring call, score
//! normalization, and the narrative rule-table analysis.

pub mod analysis;
pub mod client;
pub mod domain;
pub mod router;
pub mod score;
pub mod service;

#[cfg(test)]
mod tests;

pub use analysis::{AnalysisContext, AnalysisReport};
pub use client::{
    HttpScoringClient, PincodeDetails, PincodeLookup, ScoringBackend, ScoringClientError,
    UpstreamScore, UpstreamStatus,
};
pub use domain::{
    CapacitySize, CertificateGrade, LocationType, OwnerType, PincodeQuery, Prediction,
    PredictionEnvelope, PredictionRequest, RegionalZone, Zone, SUPPORTED_MODELS,
};
pub use router::prediction_router;
pub use score::{normalize, RiskTier, ScoreResult};
pub use service::{PredictionError, PredictionService};
