// Rust guideline compliant 2026-08-20

//! Linear-regression adapter for the `Model` port.
//!
//! Backed by a weight vector and intercept loaded from a model
//! artifact. The artifact declares its own feature schema, so a
//! deployment cannot silently pair a 7-feature model with a 4-feature
//! assembler.

use domain::{ArtifactLoadError, FeatureVector, InferenceError, Model, SchemaVersion};

/// Concrete adapter for the `domain::Model` port.
///
/// Immutable after construction; shared read-only by all predictions.
/// `predict` is a dot product plus intercept over the (possibly
/// scaled) feature vector, in assembler order.
#[derive(Debug)]
pub struct LinearModel {
    name: String,
    version: String,
    schema: SchemaVersion,
    weights: Vec<f64>,
    intercept: f64,
    expects_scaled: bool,
}

impl LinearModel {
    /// Build a model from artifact parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactLoadError::SchemaMismatch`] when the weight
    /// count differs from the declared schema width. This is a
    /// deployment-configuration defect and must fail at startup, not
    /// per request.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        schema: SchemaVersion,
        weights: Vec<f64>,
        intercept: f64,
        expects_scaled: bool,
    ) -> Result<Self, ArtifactLoadError> {
        if weights.len() != schema.width() {
            return Err(ArtifactLoadError::SchemaMismatch {
                expected: schema.width(),
                actual: weights.len(),
            });
        }
        Ok(Self {
            name: name.into(),
            version: version.into(),
            schema,
            weights,
            intercept,
            expects_scaled,
        })
    }
}

impl Model for LinearModel {
    /// Dot product of `features` with the loaded weights, plus intercept.
    ///
    /// # Errors
    ///
    /// Returns [`InferenceError::ShapeMismatch`] when the vector width
    /// differs from the weight count.
    fn predict(&self, features: &FeatureVector) -> Result<f64, InferenceError> {
        if features.width() != self.weights.len() {
            return Err(InferenceError::ShapeMismatch {
                expected: self.weights.len(),
                actual: features.width(),
            });
        }
        let estimate: f64 = features
            .as_slice()
            .iter()
            .zip(&self.weights)
            .map(|(x, w)| x * w)
            .sum::<f64>()
            + self.intercept;
        Ok(estimate)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn schema(&self) -> SchemaVersion {
        self.schema
    }

    fn expects_scaled(&self) -> bool {
        self.expects_scaled
    }
}
