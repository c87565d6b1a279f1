// Rust guideline compliant 2026-08-20

//! Inference engine for the trip-budget pipeline.
//!
//! [`InferenceEngine`] wraps an injected `domain::Model` adapter,
//! guarding vector shape on the way in and prediction finiteness on the
//! way out. It owns no regression logic -- all of that is in the
//! adapter.

use domain::{FeatureVector, InferenceError, Model, SchemaVersion};

/// Pipeline component that invokes the `domain::Model` port.
///
/// Generic over any `Model` adapter for zero-cost static dispatch; the
/// engine itself is stateless per call and shares the loaded model
/// read-only across all predictions.
#[derive(Debug)]
pub struct InferenceEngine<M: Model> {
    model: M,
}

impl<M: Model> InferenceEngine<M> {
    /// Create a new engine wrapping `model`.
    #[must_use]
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Borrow the wrapped model adapter.
    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Feature schema the wrapped model was trained against.
    #[must_use]
    pub fn schema(&self) -> SchemaVersion {
        self.model.schema()
    }

    /// Run the model on `features` and return the scalar estimate.
    ///
    /// A failed invocation is surfaced, never replaced by a default or
    /// zero prediction.
    ///
    /// # Errors
    ///
    /// Returns [`InferenceError::ShapeMismatch`] when the vector width
    /// differs from the model's input width,
    /// [`InferenceError::NonFinite`] when the model emits NaN or
    /// infinity, or any error the adapter itself raises.
    pub fn infer(&self, features: &FeatureVector) -> Result<f64, InferenceError> {
        let expected = self.model.input_width();
        if features.width() != expected {
            return Err(InferenceError::ShapeMismatch {
                expected,
                actual: features.width(),
            });
        }

        let prediction = self.model.predict(features)?;
        if !prediction.is_finite() {
            return Err(InferenceError::NonFinite { value: prediction });
        }

        log::debug!(
            "inference.infer: model={} version={} prediction={prediction}",
            self.model.name(),
            self.model.version()
        );
        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::InferenceEngine;
    use domain::{FeatureVector, InferenceError, Model, SchemaVersion};
    use std::cell::Cell;

    // ------------------------------------------------------------------
    // MockModel helper
    // ------------------------------------------------------------------

    struct MockModel {
        output: f64,
        fail: bool,
        predict_calls: Cell<u32>,
    }

    impl MockModel {
        fn returning(output: f64) -> Self {
            Self { output, fail: false, predict_calls: Cell::new(0) }
        }

        fn failing() -> Self {
            Self { fail: true, ..Self::returning(0.0) }
        }
    }

    impl Model for MockModel {
        fn predict(&self, _features: &FeatureVector) -> Result<f64, InferenceError> {
            self.predict_calls.set(self.predict_calls.get() + 1);
            if self.fail {
                return Err(InferenceError::Failed { reason: "mock failure".to_owned() });
            }
            Ok(self.output)
        }

        fn name(&self) -> &str {
            "MOCK"
        }

        fn version(&self) -> &str {
            "v0"
        }

        fn schema(&self) -> SchemaVersion {
            SchemaVersion::Minimal
        }

        fn expects_scaled(&self) -> bool {
            false
        }
    }

    fn minimal_vector() -> FeatureVector {
        FeatureVector::new(vec![1.0, 1.0, 2.0, 5.0])
    }

    // ------------------------------------------------------------------
    // Happy path
    // ------------------------------------------------------------------

    #[test]
    #[expect(clippy::float_cmp, reason = "mock returns the exact literal")]
    fn infer_returns_model_output() {
        let engine = InferenceEngine::new(MockModel::returning(1234.5));
        let y = engine.infer(&minimal_vector()).unwrap();
        assert_eq!(y, 1234.5);
        assert_eq!(engine.model().predict_calls.get(), 1);
    }

    #[test]
    fn engine_exposes_model_schema() {
        let engine = InferenceEngine::new(MockModel::returning(1.0));
        assert_eq!(engine.schema(), SchemaVersion::Minimal);
    }

    // ------------------------------------------------------------------
    // Guards
    // ------------------------------------------------------------------

    #[test]
    fn wrong_width_is_shape_mismatch_without_invoking_model() {
        let engine = InferenceEngine::new(MockModel::returning(1.0));
        let result = engine.infer(&FeatureVector::new(vec![1.0, 2.0]));
        assert!(
            matches!(result, Err(InferenceError::ShapeMismatch { expected: 4, actual: 2 })),
            "wrong width must be rejected: {result:?}"
        );
        assert_eq!(engine.model().predict_calls.get(), 0, "model must not be invoked");
    }

    #[test]
    fn nan_output_is_non_finite_error() {
        let engine = InferenceEngine::new(MockModel::returning(f64::NAN));
        let result = engine.infer(&minimal_vector());
        assert!(
            matches!(result, Err(InferenceError::NonFinite { .. })),
            "NaN must never surface as a prediction: {result:?}"
        );
    }

    #[test]
    fn infinite_output_is_non_finite_error() {
        let engine = InferenceEngine::new(MockModel::returning(f64::INFINITY));
        let result = engine.infer(&minimal_vector());
        assert!(matches!(result, Err(InferenceError::NonFinite { .. })));
    }

    #[test]
    fn adapter_failure_propagates() {
        let engine = InferenceEngine::new(MockModel::failing());
        let result = engine.infer(&minimal_vector());
        assert!(
            matches!(result, Err(InferenceError::Failed { .. })),
            "adapter failure must propagate, not default to zero: {result:?}"
        );
    }
}
