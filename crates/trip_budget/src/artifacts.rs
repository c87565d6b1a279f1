// Rust guideline compliant 2026-08-20

//! Artifact-loading glue for the trip-budget binary.
//!
//! Reads the serialized model and scaler files exactly once at process
//! startup and converts them into validated, immutable handles. Load
//! failures are returned as typed [`ArtifactLoadError`]s for the
//! orchestrator's state machine to consume -- there is no nullable
//! fallback and no retry.

use std::path::Path;

use domain::{ArtifactLoadError, SchemaVersion};
use scaling::{ScalerError, ScalerState};
use serde::Deserialize;

use crate::adapters::linear_model::LinearModel;

/// On-disk shape of a model artifact.
#[derive(Debug, Deserialize)]
struct ModelParams {
    name: String,
    version: String,
    schema: String,
    weights: Vec<f64>,
    intercept: f64,
    #[serde(default)]
    expects_scaled: bool,
}

/// On-disk shape of a scaler artifact.
#[derive(Debug, Deserialize)]
struct ScalerParams {
    means: Vec<f64>,
    stds: Vec<f64>,
}

/// Load and validate the regression-model artifact at `path`.
///
/// # Errors
///
/// Returns [`ArtifactLoadError::Read`] when the file cannot be read,
/// [`ArtifactLoadError::Malformed`] when it does not decode or carries
/// non-finite parameters, or [`ArtifactLoadError::SchemaMismatch`] when
/// the weight count disagrees with the declared schema.
pub fn load_model(path: &Path) -> Result<LinearModel, ArtifactLoadError> {
    let raw = read_artifact(path)?;
    let params: ModelParams = serde_json::from_str(&raw).map_err(|e| {
        ArtifactLoadError::Malformed { path: display_path(path), reason: e.to_string() }
    })?;

    let schema = parse_schema(&params.schema, path)?;
    if params.weights.iter().any(|w| !w.is_finite()) || !params.intercept.is_finite() {
        return Err(ArtifactLoadError::Malformed {
            path: display_path(path),
            reason: "model parameters must be finite".to_owned(),
        });
    }

    let model = LinearModel::new(
        params.name,
        params.version,
        schema,
        params.weights,
        params.intercept,
        params.expects_scaled,
    )?;
    log::info!("artifacts.model_loaded: path={}", display_path(path));
    Ok(model)
}

/// Load and validate the scaler artifact at `path`.
///
/// # Errors
///
/// Returns [`ArtifactLoadError::Read`] when the file cannot be read,
/// [`ArtifactLoadError::Malformed`] when it does not decode, or
/// [`ArtifactLoadError::NotFitted`] when the parameters fail the
/// fitted check.
pub fn load_scaler(path: &Path) -> Result<ScalerState, ArtifactLoadError> {
    let raw = read_artifact(path)?;
    let params: ScalerParams = serde_json::from_str(&raw).map_err(|e| {
        ArtifactLoadError::Malformed { path: display_path(path), reason: e.to_string() }
    })?;

    let state = ScalerState::new(params.means, params.stds).map_err(|e| match e {
        ScalerError::NotFitted { reason } => ArtifactLoadError::NotFitted { reason },
        ScalerError::WidthMismatch { expected, actual } => {
            ArtifactLoadError::SchemaMismatch { expected, actual }
        }
    })?;
    log::info!("artifacts.scaler_loaded: path={}", display_path(path));
    Ok(state)
}

fn read_artifact(path: &Path) -> Result<String, ArtifactLoadError> {
    std::fs::read_to_string(path).map_err(|e| ArtifactLoadError::Read {
        path: display_path(path),
        reason: e.to_string(),
    })
}

fn parse_schema(tag: &str, path: &Path) -> Result<SchemaVersion, ArtifactLoadError> {
    match tag {
        "minimal" => Ok(SchemaVersion::Minimal),
        "cost_aware" => Ok(SchemaVersion::CostAware),
        other => Err(ArtifactLoadError::Malformed {
            path: display_path(path),
            reason: format!("unknown schema tag {other:?}"),
        }),
    }
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::{load_model, load_scaler};
    use domain::{ArtifactLoadError, Model as _, SchemaVersion};
    use std::path::PathBuf;

    /// Write `contents` to a unique temp file and return its path.
    fn write_artifact(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "trip_budget_test_{}_{name}",
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn load_model_happy_path() {
        let path = write_artifact(
            "model_ok.json",
            r#"{
                "name": "TRIP-LINREG",
                "version": "v2",
                "schema": "cost_aware",
                "weights": [120.0, 310.0, 880.0, 420.0, 0.95, 1.0, 1.05],
                "intercept": 1250.0,
                "expects_scaled": false
            }"#,
        );
        let model = load_model(&path).unwrap();
        assert_eq!(model.name(), "TRIP-LINREG");
        assert_eq!(model.version(), "v2");
        assert_eq!(model.schema(), SchemaVersion::CostAware);
        assert!(!model.expects_scaled());
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_model_file_is_read_error() {
        let path = PathBuf::from("/nonexistent/model.json");
        let result = load_model(&path);
        assert!(matches!(result, Err(ArtifactLoadError::Read { .. })));
    }

    #[test]
    fn corrupt_model_json_is_malformed() {
        let path = write_artifact("model_corrupt.json", "{not json");
        let result = load_model(&path);
        assert!(matches!(result, Err(ArtifactLoadError::Malformed { .. })));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn unknown_schema_tag_is_malformed() {
        let path = write_artifact(
            "model_bad_schema.json",
            r#"{
                "name": "m", "version": "v1", "schema": "v3_wide",
                "weights": [1.0, 2.0, 3.0, 4.0], "intercept": 0.0
            }"#,
        );
        let result = load_model(&path);
        assert!(matches!(result, Err(ArtifactLoadError::Malformed { .. })));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn weight_width_disagreeing_with_schema_is_schema_mismatch() {
        let path = write_artifact(
            "model_wrong_width.json",
            r#"{
                "name": "m", "version": "v1", "schema": "cost_aware",
                "weights": [1.0, 2.0, 3.0, 4.0], "intercept": 0.0
            }"#,
        );
        let result = load_model(&path);
        assert!(
            matches!(result, Err(ArtifactLoadError::SchemaMismatch { expected: 7, actual: 4 })),
            "width defect must fail loudly at load time: {result:?}"
        );
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn load_scaler_happy_path() {
        let path = write_artifact(
            "scaler_ok.json",
            r#"{"means": [2.5, 1.5, 2.8, 5.6], "stds": [1.7, 1.1, 1.4, 3.2]}"#,
        );
        let state = load_scaler(&path).unwrap();
        assert_eq!(state.width(), 4);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn deserialized_but_unfitted_scaler_is_rejected() {
        // Deserializes fine; zero stds mean it was never actually fit.
        let path = write_artifact(
            "scaler_unfitted.json",
            r#"{"means": [0.0, 0.0], "stds": [0.0, 0.0]}"#,
        );
        let result = load_scaler(&path);
        assert!(
            matches!(result, Err(ArtifactLoadError::NotFitted { .. })),
            "successful deserialization alone must not be trusted: {result:?}"
        );
        std::fs::remove_file(path).unwrap();
    }
}
