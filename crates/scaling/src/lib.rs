// Rust guideline compliant 2026-08-20

//! Feature-normalization component -- reapplies the per-feature
//! standardization fitted at training time.
//!
//! Entry points: [`ScalerState::new`], [`Scaler::transform`]. A
//! [`Scaler`] without state is the identity transform for deployments
//! that never scaled during training.

use domain::FeatureVector;

// ---------------------------------------------------------------------------
// ScalerError
// ---------------------------------------------------------------------------

/// Errors raised by scaler construction or application.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScalerError {
    /// The parameters do not describe a scaler that was actually fitted.
    #[error("scaler not fitted: {reason}")]
    NotFitted {
        /// Human-readable description of the defect.
        reason: String,
    },
    /// The vector width does not match the fitted parameter width.
    #[error("scaler width mismatch: fitted for {expected} features, got {actual}")]
    WidthMismatch {
        /// Feature width the scaler was fitted for.
        expected: usize,
        /// Width of the vector actually submitted.
        actual: usize,
    },
}

// ---------------------------------------------------------------------------
// ScalerState
// ---------------------------------------------------------------------------

/// Immutable per-feature standardization parameters, fitted once at
/// training time and loaded once at startup. Never refit at runtime.
///
/// Construction is the "is this scaler actually fitted" gate: a scaler
/// artifact that deserializes cleanly but carries default or degenerate
/// statistics (zero or non-finite standard deviations, empty or
/// mismatched parameter lists) would silently produce meaningless
/// predictions, so it is rejected here instead.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalerState {
    means: Vec<f64>,
    stds: Vec<f64>,
}

impl ScalerState {
    /// Validate fitted parameters positionally aligned with the feature
    /// order the assembler produces.
    ///
    /// # Errors
    ///
    /// Returns [`ScalerError::NotFitted`] when the lists are empty, of
    /// unequal length, or any statistic is non-finite or any standard
    /// deviation is not strictly positive.
    pub fn new(means: Vec<f64>, stds: Vec<f64>) -> Result<Self, ScalerError> {
        if means.is_empty() {
            return Err(ScalerError::NotFitted { reason: "no fitted statistics".to_owned() });
        }
        if means.len() != stds.len() {
            return Err(ScalerError::NotFitted {
                reason: format!("{} means but {} stds", means.len(), stds.len()),
            });
        }
        if means.iter().any(|m| !m.is_finite()) {
            return Err(ScalerError::NotFitted { reason: "non-finite mean".to_owned() });
        }
        if stds.iter().any(|s| !s.is_finite() || *s <= 0.0) {
            return Err(ScalerError::NotFitted {
                reason: "standard deviations must be finite and > 0".to_owned(),
            });
        }
        Ok(Self { means, stds })
    }

    /// Feature width these parameters were fitted for.
    #[must_use]
    pub fn width(&self) -> usize {
        self.means.len()
    }
}

// ---------------------------------------------------------------------------
// Scaler
// ---------------------------------------------------------------------------

/// Applies the fitted transform to a feature vector, positionally.
///
/// With state: `(x - mean) / std` per feature, in assembler order.
/// Without state: identity -- the vector passes through unchanged.
#[derive(Debug, Clone)]
pub struct Scaler {
    state: Option<ScalerState>,
}

impl Scaler {
    /// Identity scaler for deployments that never scaled at training time.
    #[must_use]
    pub fn identity() -> Self {
        Self { state: None }
    }

    /// Scaler backed by fitted parameters.
    #[must_use]
    pub fn with_state(state: ScalerState) -> Self {
        Self { state: Some(state) }
    }

    /// `true` when no fitted state is attached.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.state.is_none()
    }

    /// Fitted width, when state is attached.
    #[must_use]
    pub fn width(&self) -> Option<usize> {
        self.state.as_ref().map(ScalerState::width)
    }

    /// Transform `features` with the fitted parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ScalerError::WidthMismatch`] when the vector width
    /// differs from the fitted width. The identity scaler never fails.
    pub fn transform(&self, features: &FeatureVector) -> Result<FeatureVector, ScalerError> {
        let Some(state) = &self.state else {
            return Ok(features.clone());
        };
        if features.width() != state.width() {
            return Err(ScalerError::WidthMismatch {
                expected: state.width(),
                actual: features.width(),
            });
        }
        let scaled: Vec<f64> = features
            .as_slice()
            .iter()
            .zip(state.means.iter().zip(&state.stds))
            .map(|(x, (mean, std))| (x - mean) / std)
            .collect();
        log::debug!("scaler.transform: width={}", scaled.len());
        Ok(FeatureVector::new(scaled))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::{Scaler, ScalerError, ScalerState};
    use domain::FeatureVector;

    fn fitted_state() -> ScalerState {
        ScalerState::new(vec![2.0, 1.0, 3.0, 6.0], vec![1.0, 0.5, 2.0, 4.0]).unwrap()
    }

    // ------------------------------------------------------------------
    // ScalerState -- fitted check
    // ------------------------------------------------------------------

    #[test]
    fn fitted_state_accepted() {
        let state = fitted_state();
        assert_eq!(state.width(), 4);
    }

    #[test]
    fn empty_parameters_rejected() {
        let result = ScalerState::new(vec![], vec![]);
        assert!(matches!(result, Err(ScalerError::NotFitted { .. })));
    }

    #[test]
    fn mismatched_parameter_lengths_rejected() {
        let result = ScalerState::new(vec![1.0, 2.0], vec![1.0]);
        assert!(matches!(result, Err(ScalerError::NotFitted { .. })));
    }

    #[test]
    fn zero_std_rejected_as_unfitted() {
        // A default-constructed scaler artifact carries zero stds.
        let result = ScalerState::new(vec![0.0, 0.0], vec![0.0, 0.0]);
        assert!(matches!(result, Err(ScalerError::NotFitted { .. })));
    }

    #[test]
    fn negative_std_rejected() {
        let result = ScalerState::new(vec![1.0], vec![-0.5]);
        assert!(matches!(result, Err(ScalerError::NotFitted { .. })));
    }

    #[test]
    fn non_finite_statistics_rejected() {
        let nan_mean = ScalerState::new(vec![f64::NAN], vec![1.0]);
        assert!(matches!(nan_mean, Err(ScalerError::NotFitted { .. })));
        let inf_std = ScalerState::new(vec![0.0], vec![f64::INFINITY]);
        assert!(matches!(inf_std, Err(ScalerError::NotFitted { .. })));
    }

    // ------------------------------------------------------------------
    // Scaler -- transform
    // ------------------------------------------------------------------

    #[test]
    fn identity_passes_vector_through_unchanged() {
        let scaler = Scaler::identity();
        assert!(scaler.is_identity());
        let vector = FeatureVector::new(vec![1.0, 1.0, 2.0, 5.0]);
        let out = scaler.transform(&vector).unwrap();
        assert_eq!(out, vector);
    }

    #[test]
    fn standardization_applies_per_feature_positionally() {
        let scaler = Scaler::with_state(fitted_state());
        let vector = FeatureVector::new(vec![3.0, 2.0, 3.0, 2.0]);
        let out = scaler.transform(&vector).unwrap();
        // (3-2)/1, (2-1)/0.5, (3-3)/2, (2-6)/4
        assert_eq!(out.as_slice(), &[1.0, 2.0, 0.0, -1.0]);
    }

    #[test]
    fn width_mismatch_rejected() {
        let scaler = Scaler::with_state(fitted_state());
        let vector = FeatureVector::new(vec![1.0, 2.0]);
        let result = scaler.transform(&vector);
        assert!(
            matches!(result, Err(ScalerError::WidthMismatch { expected: 4, actual: 2 })),
            "wrong-width vector must be rejected: {result:?}"
        );
    }

    #[test]
    fn transform_is_deterministic() {
        let scaler = Scaler::with_state(fitted_state());
        let vector = FeatureVector::new(vec![1.0, 1.0, 2.0, 5.0]);
        let first = scaler.transform(&vector).unwrap();
        let second = scaler.transform(&vector).unwrap();
        assert_eq!(first, second);
    }
}
