// Rust guideline compliant 2026-08-20

//! Feature-encoding component -- maps categorical trip fields to stable
//! ordinals and assembles ordered, fixed-width feature vectors.
//!
//! Entry points: [`CategoryEncoder::encode`], [`FeatureAssembler::assemble`].
//! Configuration via [`FeatureAssembler::builder`].

use domain::{FeatureVector, InputValidationError, SchemaVersion, TripRequest};

/// Destination vocabulary in training order; ordinals are positions.
const DESTINATIONS: [&str; 6] = ["Goa", "Agra", "Jaipur", "Kerala", "Manali", "Shimla"];

/// Travel-mode vocabulary in training order; ordinals are positions.
const TRAVEL_MODES: [&str; 4] = ["Bus", "Flight", "Train", "Car"];

// ---------------------------------------------------------------------------
// AssemblerError
// ---------------------------------------------------------------------------

/// Errors raised while configuring the feature assembler.
#[derive(Debug, thiserror::Error)]
pub enum AssemblerError {
    /// The supplied configuration is invalid.
    #[error("invalid assembler configuration: {reason}")]
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// UnknownCategoryPolicy
// ---------------------------------------------------------------------------

/// What an encoder does with a value outside its vocabulary.
///
/// The trained model has no notion of "unknown": under
/// [`DefaultToFirst`](Self::DefaultToFirst) an unrecognized value is
/// indistinguishable from the first vocabulary entry. That is the
/// behavior the model was deployed with, so it is the default here --
/// but it is an explicit policy, not an accident, and deployments that
/// prefer to fail can pick [`Reject`](Self::Reject).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownCategoryPolicy {
    /// Encode an unrecognized value as ordinal 0 (the first entry).
    #[default]
    DefaultToFirst,
    /// Fail the request with `InputValidationError::UnknownCategory`.
    Reject,
}

// ---------------------------------------------------------------------------
// CategoryEncoder
// ---------------------------------------------------------------------------

/// Fixed vocabulary-to-ordinal table for one categorical field.
///
/// Ordinals are vocabulary positions, so they are stable and
/// reproducible as long as the vocabulary order matches training.
/// Immutable after construction; shared read-only across requests.
#[derive(Debug, Clone)]
pub struct CategoryEncoder {
    field: String,
    vocabulary: Vec<String>,
    policy: UnknownCategoryPolicy,
}

impl CategoryEncoder {
    /// Create an encoder for `field` over `vocabulary`.
    ///
    /// # Errors
    ///
    /// Returns [`AssemblerError::InvalidConfig`] when the vocabulary is
    /// empty (there would be no ordinal 0 to default to).
    pub fn new(
        field: impl Into<String>,
        vocabulary: Vec<String>,
        policy: UnknownCategoryPolicy,
    ) -> Result<Self, AssemblerError> {
        let field = field.into();
        if vocabulary.is_empty() {
            return Err(AssemblerError::InvalidConfig {
                reason: format!("vocabulary for {field} must not be empty"),
            });
        }
        Ok(Self { field, vocabulary, policy })
    }

    /// Built-in destination encoder matching the training vocabulary.
    #[must_use]
    pub fn destinations(policy: UnknownCategoryPolicy) -> Self {
        Self {
            field: "destination".to_owned(),
            vocabulary: DESTINATIONS.iter().map(|&s| s.to_owned()).collect(),
            policy,
        }
    }

    /// Built-in travel-mode encoder matching the training vocabulary.
    #[must_use]
    pub fn travel_modes(policy: UnknownCategoryPolicy) -> Self {
        Self {
            field: "travel_mode".to_owned(),
            vocabulary: TRAVEL_MODES.iter().map(|&s| s.to_owned()).collect(),
            policy,
        }
    }

    /// Name of the field this encoder serves.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Map `value` to its stable ordinal.
    ///
    /// A recognized value yields its vocabulary position. An
    /// unrecognized value follows the configured
    /// [`UnknownCategoryPolicy`].
    ///
    /// # Errors
    ///
    /// Returns [`InputValidationError::MissingField`] for an empty
    /// value, or [`InputValidationError::UnknownCategory`] under the
    /// `Reject` policy.
    pub fn encode(&self, value: &str) -> Result<u32, InputValidationError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(InputValidationError::MissingField { field: self.field.clone() });
        }
        if let Some(position) = self.vocabulary.iter().position(|entry| entry == value) {
            return Ok(u32::try_from(position).unwrap_or(u32::MAX));
        }
        match self.policy {
            UnknownCategoryPolicy::DefaultToFirst => {
                log::debug!(
                    "encoder.default: field={} value={value:?} ordinal=0",
                    self.field
                );
                Ok(0)
            }
            UnknownCategoryPolicy::Reject => Err(InputValidationError::UnknownCategory {
                field: self.field.clone(),
                value: value.to_owned(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// FeatureAssembler + builder
// ---------------------------------------------------------------------------

/// Builds ordered feature vectors from trip requests.
///
/// Field order is fixed per schema and is part of the deployment
/// contract: `[destination, travel_mode, people, duration_days]`,
/// extended with `[accommodation_cost, food_cost, travel_cost]` for
/// the cost-aware schema. Construct via [`FeatureAssembler::builder`].
#[derive(Debug)]
pub struct FeatureAssembler {
    schema: SchemaVersion,
    destination_encoder: CategoryEncoder,
    travel_mode_encoder: CategoryEncoder,
}

/// Builder for [`FeatureAssembler`].
///
/// Obtain via [`FeatureAssembler::builder`]; finalize with
/// [`build`](Self::build).
#[derive(Debug)]
pub struct FeatureAssemblerBuilder {
    schema: SchemaVersion,
    policy: UnknownCategoryPolicy,
    destinations: Option<Vec<String>>,
    travel_modes: Option<Vec<String>>,
}

impl FeatureAssembler {
    /// Create a builder for `schema`.
    ///
    /// Default values: built-in training vocabularies and
    /// `UnknownCategoryPolicy::DefaultToFirst`.
    #[must_use]
    pub fn builder(schema: SchemaVersion) -> FeatureAssemblerBuilder {
        FeatureAssemblerBuilder {
            schema,
            policy: UnknownCategoryPolicy::default(),
            destinations: None,
            travel_modes: None,
        }
    }

    /// Schema this assembler produces vectors for.
    #[must_use]
    pub fn schema(&self) -> SchemaVersion {
        self.schema
    }

    /// Assemble the ordered feature vector for `request`.
    ///
    /// Deterministic: identical input yields an identical vector. The
    /// returned width always equals `schema().width()`.
    ///
    /// # Errors
    ///
    /// Returns [`InputValidationError`] when a required field is
    /// missing, a numeric field does not parse, or a value violates its
    /// range (`people >= 1`, `duration_days >= 1`, costs finite and
    /// `>= 0`). No numeric default is ever substituted for malformed
    /// input.
    pub fn assemble(&self, request: &TripRequest) -> Result<FeatureVector, InputValidationError> {
        let destination = self.destination_encoder.encode(&request.destination)?;
        let travel_mode = self.travel_mode_encoder.encode(&request.travel_mode)?;
        let people = parse_count("people", &request.people)?;
        let duration_days = parse_count("duration_days", &request.duration_days)?;

        let mut values = Vec::with_capacity(self.schema.width());
        values.push(f64::from(destination));
        values.push(f64::from(travel_mode));
        values.push(f64::from(people));
        values.push(f64::from(duration_days));

        if self.schema == SchemaVersion::CostAware {
            values.push(parse_cost("accommodation_cost", request.accommodation_cost.as_deref())?);
            values.push(parse_cost("food_cost", request.food_cost.as_deref())?);
            values.push(parse_cost("travel_cost", request.travel_cost.as_deref())?);
        }

        log::debug!(
            "assembler.assemble: request_id={} width={}",
            request.id,
            values.len()
        );
        Ok(FeatureVector::new(values))
    }
}

impl FeatureAssemblerBuilder {
    /// Override the unknown-category policy for both encoders.
    #[must_use]
    pub fn unknown_policy(mut self, policy: UnknownCategoryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Override the destination vocabulary (training order).
    #[must_use]
    pub fn destinations(mut self, vocabulary: Vec<String>) -> Self {
        self.destinations = Some(vocabulary);
        self
    }

    /// Override the travel-mode vocabulary (training order).
    #[must_use]
    pub fn travel_modes(mut self, vocabulary: Vec<String>) -> Self {
        self.travel_modes = Some(vocabulary);
        self
    }

    /// Validate and build the assembler.
    ///
    /// # Errors
    ///
    /// Returns [`AssemblerError::InvalidConfig`] when an overridden
    /// vocabulary is empty.
    #[must_use = "the Result must be checked; use ? or unwrap"]
    pub fn build(self) -> Result<FeatureAssembler, AssemblerError> {
        let destination_encoder = match self.destinations {
            Some(vocabulary) => CategoryEncoder::new("destination", vocabulary, self.policy)?,
            None => CategoryEncoder::destinations(self.policy),
        };
        let travel_mode_encoder = match self.travel_modes {
            Some(vocabulary) => CategoryEncoder::new("travel_mode", vocabulary, self.policy)?,
            None => CategoryEncoder::travel_modes(self.policy),
        };
        Ok(FeatureAssembler {
            schema: self.schema,
            destination_encoder,
            travel_mode_encoder,
        })
    }
}

/// Parse a positive integer field (`people`, `duration_days`).
fn parse_count(field: &str, raw: &str) -> Result<u32, InputValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(InputValidationError::MissingField { field: field.to_owned() });
    }
    let value: u32 = raw.parse().map_err(|_| InputValidationError::NotANumber {
        field: field.to_owned(),
        value: raw.to_owned(),
    })?;
    if value == 0 {
        return Err(InputValidationError::OutOfRange {
            field: field.to_owned(),
            reason: "must be >= 1".to_owned(),
        });
    }
    Ok(value)
}

/// Parse an optional non-negative cost field; absent means 0.
fn parse_cost(field: &str, raw: Option<&str>) -> Result<f64, InputValidationError> {
    let Some(raw) = raw else {
        return Ok(0.0);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    let value: f64 = raw.parse().map_err(|_| InputValidationError::NotANumber {
        field: field.to_owned(),
        value: raw.to_owned(),
    })?;
    // f64::parse accepts "inf" and "NaN"; neither is a valid cost.
    if !value.is_finite() {
        return Err(InputValidationError::OutOfRange {
            field: field.to_owned(),
            reason: "must be finite".to_owned(),
        });
    }
    if value < 0.0 {
        return Err(InputValidationError::OutOfRange {
            field: field.to_owned(),
            reason: "must be >= 0".to_owned(),
        });
    }
    Ok(value)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
