// Rust guideline compliant 2026-08-20

//! Prediction orchestrator -- top-level entry point of the trip-budget
//! pipeline.
//!
//! Drives `assemble -> scale -> infer` for each request and maps every
//! failure to a uniform [`PredictionResult`]. Artifact-load results are
//! consumed once by [`PredictionOrchestrator::initialize`]; a load
//! failure puts the orchestrator in `Degraded` for the remainder of the
//! process (no retry, no hot reload -- restart is the only reload
//! path).

use domain::{ArtifactLoadError, Model, PredictionResult, TripRequest};
use features::FeatureAssembler;
use inference::InferenceEngine;
use scaling::{Scaler, ScalerState};

/// Fixed diagnostic returned for every request while not `Ready`.
pub const UNAVAILABLE_DIAGNOSTIC: &str = "model/scaler not available";

/// Externally visible orchestrator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrchestratorStatus {
    /// Artifacts have not been consumed yet; no predictions are served.
    Uninitialized,
    /// Artifacts loaded and cross-validated; predictions are served.
    Ready,
    /// An artifact failed to load or validate; terminal until restart.
    Degraded,
}

#[derive(Debug)]
enum State<M: Model> {
    Uninitialized,
    Ready {
        assembler: FeatureAssembler,
        scaler: Scaler,
        engine: InferenceEngine<M>,
    },
    Degraded {
        reason: String,
    },
}

/// Top-level pipeline driver and `Uninitialized -> Ready | Degraded`
/// state machine.
///
/// Generic over the `Model` port for zero-cost static dispatch. All
/// methods take `&self`; the loaded artifacts are immutable, so the
/// orchestrator is shared read-only by concurrent callers.
#[derive(Debug)]
pub struct PredictionOrchestrator<M: Model> {
    state: State<M>,
}

impl<M: Model> PredictionOrchestrator<M> {
    /// Create an orchestrator that has not consumed artifacts yet.
    ///
    /// Until [`initialize`](Self::initialize) runs, every prediction
    /// fails closed with [`UNAVAILABLE_DIAGNOSTIC`].
    #[must_use]
    pub fn uninitialized() -> Self {
        Self { state: State::Uninitialized }
    }

    /// Consume the startup artifact-load results and transition to
    /// `Ready` or `Degraded`.
    ///
    /// Both transitions are terminal: there is no retry path out of
    /// `Degraded`, and `Ready` handles are never replaced. Beyond the
    /// load results themselves, readiness requires the deployment to be
    /// internally consistent: the assembler schema must match the model
    /// artifact's declared schema, a model trained on scaled features
    /// must come with a scaler, and a provided scaler must be fitted
    /// for exactly the model's input width.
    #[must_use]
    pub fn initialize(
        self,
        model: Result<M, ArtifactLoadError>,
        scaler: Result<Option<ScalerState>, ArtifactLoadError>,
        assembler: FeatureAssembler,
    ) -> Self {
        let model = match model {
            Ok(model) => model,
            Err(e) => return Self::degrade(format!("model load failed: {e}")),
        };
        let scaler_state = match scaler {
            Ok(state) => state,
            Err(e) => return Self::degrade(format!("scaler load failed: {e}")),
        };

        if assembler.schema() != model.schema() {
            return Self::degrade(format!(
                "schema mismatch: assembler produces {} features, model {} \"{}\" expects {}",
                assembler.schema().width(),
                model.name(),
                model.version(),
                model.input_width(),
            ));
        }

        let scaler = match scaler_state {
            Some(state) => {
                if state.width() != model.input_width() {
                    return Self::degrade(format!(
                        "schema mismatch: scaler fitted for {} features, model expects {}",
                        state.width(),
                        model.input_width(),
                    ));
                }
                Scaler::with_state(state)
            }
            None => {
                if model.expects_scaled() {
                    return Self::degrade(format!(
                        "model {} \"{}\" expects scaled input but no scaler was loaded",
                        model.name(),
                        model.version(),
                    ));
                }
                Scaler::identity()
            }
        };

        log::info!(
            "orchestrator.ready: model={} version={} width={} scaled={}",
            model.name(),
            model.version(),
            model.input_width(),
            !scaler.is_identity()
        );
        Self {
            state: State::Ready { assembler, scaler, engine: InferenceEngine::new(model) },
        }
    }

    /// Current state for observability and tests.
    #[must_use]
    pub fn status(&self) -> OrchestratorStatus {
        match self.state {
            State::Uninitialized => OrchestratorStatus::Uninitialized,
            State::Ready { .. } => OrchestratorStatus::Ready,
            State::Degraded { .. } => OrchestratorStatus::Degraded,
        }
    }

    /// The startup diagnostic, when `Degraded`.
    #[must_use]
    pub fn degraded_reason(&self) -> Option<&str> {
        match &self.state {
            State::Degraded { reason } => Some(reason),
            State::Uninitialized | State::Ready { .. } => None,
        }
    }

    /// Serve one prediction request.
    ///
    /// While not `Ready`, fails immediately with
    /// [`UNAVAILABLE_DIAGNOSTIC`] without attempting assembly or
    /// inference. While `Ready`, any stage failure is scoped to this
    /// request: the orchestrator stays `Ready` and concurrent or
    /// subsequent requests are unaffected. Successful estimates are
    /// rounded to two decimal places.
    #[must_use]
    pub fn predict(&self, request: &TripRequest) -> PredictionResult {
        let (assembler, scaler, engine) = match &self.state {
            State::Ready { assembler, scaler, engine } => (assembler, scaler, engine),
            State::Uninitialized | State::Degraded { .. } => {
                log::warn!("orchestrator.unavailable: request_id={}", request.id);
                return PredictionResult::Failure {
                    reason: UNAVAILABLE_DIAGNOSTIC.to_owned(),
                };
            }
        };

        let features = match assembler.assemble(request) {
            Ok(features) => features,
            Err(e) => {
                log::warn!("orchestrator.invalid_input: request_id={} error={e}", request.id);
                return PredictionResult::Failure { reason: format!("invalid input: {e}") };
            }
        };

        let scaled = match scaler.transform(&features) {
            Ok(scaled) => scaled,
            Err(e) => {
                log::error!("orchestrator.scaling_failed: request_id={} error={e}", request.id);
                return PredictionResult::Failure { reason: format!("scaling failed: {e}") };
            }
        };

        match engine.infer(&scaled) {
            Ok(estimate) => {
                let rounded = round2(estimate);
                log::info!(
                    "orchestrator.predicted: request_id={} estimate={rounded}",
                    request.id
                );
                PredictionResult::Value(rounded)
            }
            Err(e) => {
                log::error!("orchestrator.inference_failed: request_id={} error={e}", request.id);
                PredictionResult::Failure { reason: format!("prediction failed: {e}") }
            }
        }
    }

    fn degrade(reason: String) -> Self {
        log::error!("orchestrator.degraded: reason={reason}");
        Self { state: State::Degraded { reason } }
    }
}

/// Round to two decimal places for presentation.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
