use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::prediction::analysis::AnalysisContext;
use crate::prediction::client::{
    PincodeDetails, PincodeLookup, ScoringBackend, ScoringClientError, UpstreamScore,
    UpstreamStatus,
};
use crate::prediction::domain::{
    CapacitySize, CertificateGrade, LocationType, OwnerType, PredictionRequest, RegionalZone, Zone,
};
use crate::prediction::service::PredictionService;

/// How the stub backend answers the scoring call.
pub(super) enum StubBehavior {
    Score(f64),
    Rejected(Option<&'static str>),
    Timeout,
    UpstreamStatus(u16),
}

pub(super) struct StubBackend {
    behavior: StubBehavior,
    pincode_available: bool,
    pub(super) calls: AtomicUsize,
}

impl StubBackend {
    pub(super) fn new(behavior: StubBehavior) -> Self {
        Self {
            behavior,
            pincode_available: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub(super) fn without_pincode_service(mut self) -> Self {
        self.pincode_available = false;
        self
    }

    pub(super) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ScoringBackend for StubBackend {
    async fn score(
        &self,
        request: &PredictionRequest,
    ) -> Result<UpstreamScore, ScoringClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            StubBehavior::Score(value) => Ok(UpstreamScore {
                model_used: request
                    .model
                    .clone()
                    .unwrap_or_else(|| "fmcg_darknet".to_string()),
                prediction_score: *value,
                status: UpstreamStatus::Success,
                error: None,
            }),
            StubBehavior::Rejected(message) => Ok(UpstreamScore {
                model_used: "fmcg_darknet".to_string(),
                prediction_score: 0.0,
                status: UpstreamStatus::Error,
                error: message.map(str::to_string),
            }),
            StubBehavior::Timeout => Err(ScoringClientError::Timeout),
            StubBehavior::UpstreamStatus(status) => {
                Err(ScoringClientError::UpstreamStatus(*status))
            }
        }
    }

    async fn resolve_pincode(&self, pincode: &str) -> Result<PincodeLookup, ScoringClientError> {
        if !self.pincode_available {
            return Err(ScoringClientError::UpstreamStatus(503));
        }
        Ok(PincodeLookup {
            details: Some(PincodeDetails {
                landmark: "Charminar".to_string(),
                pincode: pincode.to_string(),
                population: "6,809,970".to_string(),
            }),
            status: "success".to_string(),
            error: None,
        })
    }
}

pub(super) fn build_service(
    behavior: StubBehavior,
    context: AnalysisContext,
) -> (Arc<PredictionService<StubBackend>>, Arc<StubBackend>) {
    let backend = Arc::new(StubBackend::new(behavior));
    let service = Arc::new(PredictionService::new(backend.clone(), context));
    (service, backend)
}

/// A long-running franchise warehouse with every strength signal present.
pub(super) fn strong_request() -> PredictionRequest {
    PredictionRequest {
        model: Some("fmcg_darknet".to_string()),
        location_type: Some(LocationType::Urban),
        capacity_size: Some(CapacitySize::Large),
        zone: Zone::North,
        regional_zone: RegionalZone::Zone4,
        num_refill_req_l3m: 12,
        transport_issue_l1y: 0,
        storage_issue_reported_l3m: 2,
        wh_breakdown_l3m: 0,
        govt_check_l3m: 11,
        competitors_in_market: 2,
        retail_shop_num: 4651,
        distributor_num: 42,
        wh_owner_type: OwnerType::Franchise,
        flood_impacted: 0,
        flood_proof: 1,
        electric_supply: 1,
        temp_reg_mach: 1,
        dist_from_hub: 91,
        workers_num: 60,
        wh_est_year: 1995,
        approved_wh_govt_certificate: CertificateGrade::APlus,
        product_wg_ton: 22_000,
        pincode: "500001".to_string(),
    }
}

/// A small, recent, under-staffed site triggering every weakness signal.
pub(super) fn weak_request() -> PredictionRequest {
    PredictionRequest {
        model: Some("fmcg_hashlock".to_string()),
        location_type: Some(LocationType::Rural),
        capacity_size: Some(CapacitySize::Small),
        zone: Zone::West,
        regional_zone: RegionalZone::Zone6,
        num_refill_req_l3m: 41,
        transport_issue_l1y: 6,
        storage_issue_reported_l3m: 17,
        wh_breakdown_l3m: 5,
        govt_check_l3m: 3,
        competitors_in_market: 8,
        retail_shop_num: 180,
        distributor_num: 4,
        wh_owner_type: OwnerType::Private,
        flood_impacted: 1,
        flood_proof: 0,
        electric_supply: 0,
        temp_reg_mach: 0,
        dist_from_hub: 720,
        workers_num: 5,
        wh_est_year: 2022,
        approved_wh_govt_certificate: CertificateGrade::C,
        product_wg_ton: 900,
        pincode: "533201".to_string(),
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is JSON")
}
