use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;
use tracing::{debug, info};

use super::analysis::{analyze, AnalysisContext};
use super::client::{PincodeLookup, ScoringBackend, ScoringClientError, UpstreamStatus};
use super::domain::{Prediction, PredictionRequest};
use super::score::ScoreResult;

/// Request-level failure taxonomy. Every variant is terminal: nothing here
/// is retried, and the caller decides whether to resubmit.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Request timeout - API took too long to respond")]
    Timeout,
    #[error("API request failed with status {0}")]
    Upstream(u16),
    #[error("{0}")]
    Rejected(String),
    #[error("External API unavailable")]
    Unavailable(#[source] ScoringClientError),
}

impl From<ScoringClientError> for PredictionError {
    fn from(value: ScoringClientError) -> Self {
        match value {
            ScoringClientError::Timeout => Self::Timeout,
            ScoringClientError::UpstreamStatus(status) => Self::Upstream(status),
            other => Self::Unavailable(other),
        }
    }
}

/// Orchestrates one submission: gate validation, the single upstream call,
/// normalization, and the narrative analysis. Holds no per-request state, so
/// one instance serves every request concurrently.
pub struct PredictionService<C> {
    backend: Arc<C>,
    context: AnalysisContext,
}

impl<C> PredictionService<C>
where
    C: ScoringBackend + 'static,
{
    pub fn new(backend: Arc<C>, context: AnalysisContext) -> Self {
        Self { backend, context }
    }

    pub fn context(&self) -> AnalysisContext {
        self.context
    }

    /// Run a submission through the full pipeline and assemble the response
    /// payload. Validation happens before any outbound traffic.
    pub async fn predict(&self, request: PredictionRequest) -> Result<Prediction, PredictionError> {
        let started = Instant::now();

        if request.missing_required_fields() {
            return Err(PredictionError::MissingFields);
        }

        let upstream = self.backend.score(&request).await?;

        if upstream.status != UpstreamStatus::Success {
            let message = upstream
                .error
                .unwrap_or_else(|| "Prediction failed".to_string());
            return Err(PredictionError::Rejected(message));
        }

        let score = ScoreResult::from_raw(upstream.prediction_score);
        let analysis = analyze(self.context, &request, score.normalized);
        let prediction_id = next_prediction_id();

        info!(
            model = %upstream.model_used,
            score = score.normalized,
            tier = score.tier.label(),
            context = self.context.label(),
            "prediction completed"
        );

        Ok(Prediction {
            score: score.normalized,
            model_used: upstream.model_used,
            prediction_id,
            analysis,
            risk_assessment: score.tier,
            processing_time: elapsed_millis(started),
        })
    }

    /// Resolve a postal code for display. Never fails: lookup errors come
    /// back as an error-status body so they cannot block a submission.
    pub async fn lookup_pincode(&self, pincode: &str) -> PincodeLookup {
        match self.backend.resolve_pincode(pincode).await {
            Ok(lookup) => lookup,
            Err(error) => {
                debug!(%error, "pincode lookup failed, degrading to informational error");
                PincodeLookup::unavailable(error.to_string())
            }
        }
    }
}

fn elapsed_millis(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

// Timestamp plus random suffix; uniqueness is best-effort and collisions
// are tolerated, not errors.
fn next_prediction_id() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(char::from)
        .collect();
    format!(
        "pred_{}_{}",
        Utc::now().timestamp_millis(),
        suffix.to_ascii_lowercase()
    )
}
