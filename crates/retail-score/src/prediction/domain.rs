use serde::{Deserialize, Serialize};

use super::analysis::AnalysisReport;
use super::score::RiskTier;

/// Model identifiers accepted by the upstream scoring service.
pub const SUPPORTED_MODELS: [&str; 3] = ["fmcg_darknet", "fmcg_hashlock", "fmcg_infinity"];

/// One submitted warehouse / retail-outlet record.
///
/// Field names follow the upstream wire contract, so the record serializes
/// back out as a passthrough body for the scoring call. The three fields the
/// handler itself gates on (`model`, `Location_type`, `WH_capacity_size`)
/// deserialize as `Option` so their absence yields the 400 envelope rather
/// than an extractor rejection; every other field must be present, while
/// numeric ranges remain the submitting form's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default, rename = "Location_type")]
    pub location_type: Option<LocationType>,
    #[serde(default, rename = "WH_capacity_size")]
    pub capacity_size: Option<CapacitySize>,
    pub zone: Zone,
    #[serde(rename = "WH_regional_zone")]
    pub regional_zone: RegionalZone,
    pub num_refill_req_l3m: u32,
    pub transport_issue_l1y: u32,
    pub storage_issue_reported_l3m: u32,
    pub wh_breakdown_l3m: u32,
    pub govt_check_l3m: u32,
    #[serde(rename = "Competitor_in_mkt")]
    pub competitors_in_market: u32,
    pub retail_shop_num: u32,
    pub distributor_num: u32,
    pub wh_owner_type: OwnerType,
    pub flood_impacted: u8,
    pub flood_proof: u8,
    pub electric_supply: u8,
    pub temp_reg_mach: u8,
    pub dist_from_hub: u32,
    pub workers_num: u32,
    pub wh_est_year: u32,
    pub approved_wh_govt_certificate: CertificateGrade,
    pub product_wg_ton: u32,
    pub pincode: String,
}

impl PredictionRequest {
    /// True when one of the gate fields is absent (or the model is blank).
    pub fn missing_required_fields(&self) -> bool {
        self.model.as_deref().map_or(true, |m| m.trim().is_empty())
            || self.location_type.is_none()
            || self.capacity_size.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationType {
    Urban,
    Rural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapacitySize {
    Small,
    Mid,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Zone {
    North,
    South,
    East,
    West,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionalZone {
    #[serde(rename = "Zone 1")]
    Zone1,
    #[serde(rename = "Zone 2")]
    Zone2,
    #[serde(rename = "Zone 3")]
    Zone3,
    #[serde(rename = "Zone 4")]
    Zone4,
    #[serde(rename = "Zone 5")]
    Zone5,
    #[serde(rename = "Zone 6")]
    Zone6,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OwnerType {
    Private,
    Government,
    Franchise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CertificateGrade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
}

/// Body for the pincode lookup proxy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PincodeQuery {
    pub pincode: String,
}

/// Completed prediction returned inside the success envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub score: u8,
    pub model_used: String,
    pub prediction_id: String,
    pub analysis: AnalysisReport,
    pub risk_assessment: RiskTier,
    pub processing_time: u64,
}

/// Outer success/error wrapper for every `/predict` response. Constructed
/// once per request and discarded after the response is sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionEnvelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Prediction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PredictionEnvelope {
    pub fn completed(prediction: Prediction) -> Self {
        Self {
            success: true,
            data: Some(prediction),
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}
