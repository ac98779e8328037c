use thiserror::Error;

/// Errors raised while building or loading a generation configuration.
///
/// Generation itself never fails: once a [`crate::GenerationConfig`] exists,
/// every call produces a word.
#[derive(Debug, Error)]
pub enum GenerationError {
	#[error("weight profile must contain at least one entry")]
	EmptyProfile,

	#[error("weight profile labels must not be empty")]
	EmptyLabel,

	#[error("duplicate label '{0}' in weight profile")]
	DuplicateLabel(String),

	#[error("weight for '{label}' must be a positive finite number, got {weight}")]
	InvalidWeight { label: String, weight: f64 },

	#[error("total weight of the profile overflows to infinity")]
	TotalWeightOverflow,

	#[error("null consonant probability must be between 0.0 and 1.0, got {0}")]
	InvalidNullProbability(f64),

	#[error("syllable count bias must be a positive finite number within the Poisson sampler's range, got {0}")]
	InvalidSyllableCountBias(f64),

	#[error("failed to read generation config: {0}")]
	Io(#[from] std::io::Error),

	#[error("failed to parse generation config: {0}")]
	Parse(#[from] serde_json::Error),
}
