// Rust guideline compliant 2026-08-20

//! Trip-budget prediction entry point.
//!
//! Loads the model and scaler artifacts once, wires the feature
//! assembler and orchestrator, and runs a handful of sample
//! predictions. The HTTP/form layer is an external collaborator; this
//! binary stands in for it by constructing `TripRequest`s directly.
//!
//! # Usage
//!
//! ```text
//! RUST_LOG=info cargo run
//!
//! # Point at different artifact locations
//! TRIP_MODEL_PATH=/srv/models/model.json \
//! TRIP_SCALER_PATH=/srv/models/scaler.json \
//! RUST_LOG=debug cargo run
//! ```

mod adapters;
mod artifacts;

use std::path::Path;

use anyhow::Context as _;
use domain::{Model as _, PredictionResult, SchemaVersion, TripRequest};
use features::FeatureAssembler;
use orchestrator::PredictionOrchestrator;

/// Default artifact locations, relative to the working directory.
const DEFAULT_MODEL_PATH: &str = "artifacts/model.json";
const DEFAULT_SCALER_PATH: &str = "artifacts/scaler.json";

fn main() -> anyhow::Result<()> {
    // Initialize the log facade before any work.
    env_logger::init();

    let model_path =
        std::env::var("TRIP_MODEL_PATH").unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_owned());
    let scaler_path =
        std::env::var("TRIP_SCALER_PATH").unwrap_or_else(|_| DEFAULT_SCALER_PATH.to_owned());

    // Artifacts are loaded exactly once; the orchestrator consumes the
    // typed results and settles into Ready or Degraded for the rest of
    // the process lifetime.
    let model = artifacts::load_model(Path::new(&model_path));
    let scaler = match &model {
        Ok(m) if m.expects_scaled() => {
            artifacts::load_scaler(Path::new(&scaler_path)).map(Some)
        }
        // Unscaled deployments skip the scaler file entirely.
        _ => Ok(None),
    };
    let schema = model
        .as_ref()
        .map_or(SchemaVersion::CostAware, |m| m.schema());

    let assembler = FeatureAssembler::builder(schema)
        .build()
        .context("failed to build feature assembler")?;
    let engine = PredictionOrchestrator::uninitialized().initialize(model, scaler, assembler);
    log::info!("main.startup: status={:?}", engine.status());
    if let Some(reason) = engine.degraded_reason() {
        log::error!("main.degraded: reason={reason}");
    }

    for request in sample_requests() {
        match engine.predict(&request) {
            PredictionResult::Value(estimate) => {
                println!(
                    "{} by {} ({} people, {} days): estimated budget {estimate:.2}",
                    request.destination, request.travel_mode, request.people,
                    request.duration_days
                );
            }
            PredictionResult::Failure { reason } => {
                println!(
                    "{} by {}: prediction unavailable ({reason})",
                    request.destination, request.travel_mode
                );
            }
        }
    }

    Ok(())
}

/// Sample requests covering the happy path, an unrecognized
/// destination, and malformed input.
fn sample_requests() -> Vec<TripRequest> {
    vec![
        TripRequest::new("Agra", "Flight", "2", "5").with_costs("2000", "800", "1500"),
        TripRequest::new("Goa", "Train", "4", "7").with_costs("3500", "1200", "900"),
        TripRequest::new("Timbuktu", "Flight", "2", "5").with_costs("1000", "500", "700"),
        TripRequest::new("Kerala", "Car", "abc", "3"),
    ]
}
