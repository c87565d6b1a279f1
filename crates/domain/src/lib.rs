// Rust guideline compliant 2026-08-20

//! Shared domain types for the trip-budget prediction pipeline.
//!
//! Defines `TripRequest`, `FeatureVector`, `SchemaVersion`,
//! `PredictionResult`, the error taxonomy (`ArtifactLoadError`,
//! `InputValidationError`, `InferenceError`), and the hexagonal `Model`
//! port. All pipeline components depend on this crate; no other
//! workspace crate is imported here.

/// A single incoming prediction request, carrying fields exactly as the
/// form layer supplied them (numeric fields are still text and are
/// parsed by the feature assembler).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRequest {
    /// Unique request identifier for log correlation (UUID v4).
    pub id: uuid::Uuid,
    /// Destination name, expected to come from a closed vocabulary.
    pub destination: String,
    /// Travel-mode name, expected to come from a closed vocabulary.
    pub travel_mode: String,
    /// Group size as submitted; must parse as an integer `>= 1`.
    pub people: String,
    /// Trip duration in days as submitted; must parse as an integer `>= 1`.
    pub duration_days: String,
    /// Accommodation cost (cost-aware schema only); absent means 0.
    pub accommodation_cost: Option<String>,
    /// Food cost (cost-aware schema only); absent means 0.
    pub food_cost: Option<String>,
    /// Travel cost (cost-aware schema only); absent means 0.
    pub travel_cost: Option<String>,
}

impl TripRequest {
    /// Create a minimal-schema request with a fresh request id.
    #[must_use]
    pub fn new(
        destination: impl Into<String>,
        travel_mode: impl Into<String>,
        people: impl Into<String>,
        duration_days: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            destination: destination.into(),
            travel_mode: travel_mode.into(),
            people: people.into(),
            duration_days: duration_days.into(),
            accommodation_cost: None,
            food_cost: None,
            travel_cost: None,
        }
    }

    /// Attach the three itemized cost components (cost-aware schema).
    #[must_use]
    pub fn with_costs(
        mut self,
        accommodation_cost: impl Into<String>,
        food_cost: impl Into<String>,
        travel_cost: impl Into<String>,
    ) -> Self {
        self.accommodation_cost = Some(accommodation_cost.into());
        self.food_cost = Some(food_cost.into());
        self.travel_cost = Some(travel_cost.into());
        self
    }
}

/// Feature-schema variant a model artifact was trained against.
///
/// The schema is bound to the artifact itself (the artifact file names
/// it), so a deployment cannot pair a 7-feature model with a 4-feature
/// assembler unnoticed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVersion {
    /// `[destination, travel_mode, people, duration_days]`
    Minimal,
    /// Minimal plus `[accommodation_cost, food_cost, travel_cost]`
    CostAware,
}

impl SchemaVersion {
    /// Number of features a vector of this schema carries.
    #[must_use]
    pub fn width(self) -> usize {
        match self {
            Self::Minimal => 4,
            Self::CostAware => 7,
        }
    }
}

/// Ordered, fixed-arity numeric feature vector submitted to the model.
///
/// Field order is part of the deployment contract and must equal the
/// order the model was trained against; components never reorder it.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    /// Wrap an ordered list of feature values.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Number of features in the vector.
    #[must_use]
    pub fn width(&self) -> usize {
        self.0.len()
    }

    /// Borrow the feature values in order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Consume the vector and return the underlying values.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

/// Outcome of a single prediction request.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionResult {
    /// Estimated budget, rounded to two decimal places.
    Value(f64),
    /// The request could not be served; carries a human-readable diagnostic.
    Failure {
        /// Human-readable description of what went wrong.
        reason: String,
    },
}

impl PredictionResult {
    /// Return the estimate if the prediction succeeded.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Failure { .. } => None,
        }
    }
}

/// Errors raised while loading model or scaler artifacts at startup.
///
/// Any of these is terminal for the process lifetime: the orchestrator
/// enters `Degraded` and stays there until restart.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactLoadError {
    /// The artifact file could not be read.
    #[error("artifact read failed: {path}: {reason}")]
    Read {
        /// Path of the artifact file.
        path: String,
        /// Human-readable description.
        reason: String,
    },
    /// The artifact file was read but could not be decoded.
    #[error("artifact malformed: {path}: {reason}")]
    Malformed {
        /// Path of the artifact file.
        path: String,
        /// Human-readable description.
        reason: String,
    },
    /// The scaler deserialized but fails the fitted check.
    #[error("scaler not fitted: {reason}")]
    NotFitted {
        /// Human-readable description.
        reason: String,
    },
    /// Artifact widths disagree with the declared feature schema.
    #[error("schema mismatch: expected width {expected}, found {actual}")]
    SchemaMismatch {
        /// Feature width the schema declares.
        expected: usize,
        /// Feature width actually found in the artifact.
        actual: usize,
    },
}

/// Errors raised while validating a single request's fields.
///
/// Always request-scoped; never affects orchestrator state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputValidationError {
    /// A required field was missing or empty.
    #[error("missing required field: {field}")]
    MissingField {
        /// Name of the offending field.
        field: String,
    },
    /// A numeric field did not parse as its expected type.
    #[error("field {field} is not a number: {value:?}")]
    NotANumber {
        /// Name of the offending field.
        field: String,
        /// Raw value as submitted.
        value: String,
    },
    /// A numeric field parsed but lies outside its permitted range.
    #[error("field {field} out of range: {reason}")]
    OutOfRange {
        /// Name of the offending field.
        field: String,
        /// Human-readable description of the violated bound.
        reason: String,
    },
    /// A categorical value is outside its vocabulary and the encoder is
    /// configured to reject rather than default.
    #[error("unknown {field}: {value:?}")]
    UnknownCategory {
        /// Name of the offending field.
        field: String,
        /// Raw value as submitted.
        value: String,
    },
}

/// Errors raised by model invocation.
///
/// A failed inference is reported, never replaced by a default or zero
/// prediction. Request-scoped.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    /// Feature vector arity does not match the model's input width.
    #[error("shape mismatch: model expects {expected} features, got {actual}")]
    ShapeMismatch {
        /// Input width the model was trained on.
        expected: usize,
        /// Width of the vector actually submitted.
        actual: usize,
    },
    /// The model produced a NaN or infinite output.
    #[error("non-finite prediction: {value}")]
    NonFinite {
        /// The offending output value.
        value: f64,
    },
    /// The model invocation itself failed.
    #[error("inference failed: {reason}")]
    Failed {
        /// Human-readable description.
        reason: String,
    },
}

/// Hexagonal port: pre-trained regression model.
///
/// Implemented by concrete artifact-backed adapters (e.g.
/// `LinearModel` in the binary crate). The inference engine depends
/// exclusively on this trait -- never on a concrete adapter. A loaded
/// model is immutable and shared read-only by all predictions.
pub trait Model {
    /// Predict a budget estimate for an assembled (and, if required,
    /// scaled) feature vector.
    ///
    /// # Errors
    ///
    /// Returns [`InferenceError`] if the vector shape is wrong or the
    /// invocation fails.
    fn predict(&self, features: &FeatureVector) -> Result<f64, InferenceError>;

    /// Name of this model (e.g. `"TRIP-LINREG"`).
    fn name(&self) -> &str;

    /// Version string of the loaded artifact (e.g. `"v2"`).
    fn version(&self) -> &str;

    /// Feature schema this artifact was trained against.
    fn schema(&self) -> SchemaVersion;

    /// Input width the model expects; defaults to the schema width.
    fn input_width(&self) -> usize {
        self.schema().width()
    }

    /// `true` when the artifact was trained on normalized features and
    /// therefore requires a fitted scaler in front of it.
    fn expects_scaled(&self) -> bool;
}
