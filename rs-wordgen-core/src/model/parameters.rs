use rand_distr::Poisson;
use serde::Deserialize;

use crate::error::GenerationError;

/// Tunables of the word model.
///
/// # Invariants
/// - `null_consonant_probability` is in `[0.0, 1.0]`
/// - `syllable_count_bias` is finite and `> 0`, and `bias - 1` is a mean
///   `rand_distr::Poisson` accepts (or `<= 0`)
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SamplingParameters {
	/// Probability that an optional consonant slot is left empty.
	null_consonant_probability: f64,

	/// Poisson mean of the syllable count, before the `+1` shift.
	syllable_count_bias: f64,
}

impl Default for SamplingParameters {
	fn default() -> Self {
		Self { null_consonant_probability: 0.3, syllable_count_bias: 3.0 }
	}
}

impl SamplingParameters {
	/// Creates validated parameters.
	///
	/// # Errors
	/// Returns an error if either value is outside its domain.
	pub fn new(null_consonant_probability: f64, syllable_count_bias: f64) -> Result<Self, GenerationError> {
		let mut params = Self::default();
		params.set_null_consonant_probability(null_consonant_probability)?;
		params.set_syllable_count_bias(syllable_count_bias)?;
		Ok(params)
	}

	/// Returns the probability that a consonant slot is omitted.
	pub fn null_consonant_probability(&self) -> f64 {
		self.null_consonant_probability
	}

	/// Returns the Poisson mean before the `+1` shift.
	pub fn syllable_count_bias(&self) -> f64 {
		self.syllable_count_bias
	}

	/// Sets the null consonant probability (0.0..=1.0).
	///
	/// # Errors
	/// Returns an error if the value is outside the valid range or NaN.
	pub fn set_null_consonant_probability(&mut self, probability: f64) -> Result<(), GenerationError> {
		if !(0.0..=1.0).contains(&probability) {
			return Err(GenerationError::InvalidNullProbability(probability));
		}
		self.null_consonant_probability = probability;
		Ok(())
	}

	/// Sets the syllable count bias.
	///
	/// Values in `(0, 1]` are valid: the Poisson mean is then clamped to 0
	/// and every word has exactly one syllable.
	///
	/// # Errors
	/// Returns an error if the value is not a finite number `> 0`, or if
	/// `bias - 1` exceeds the largest mean the Poisson sampler supports.
	pub fn set_syllable_count_bias(&mut self, bias: f64) -> Result<(), GenerationError> {
		if !(bias.is_finite() && bias > 0.0) {
			return Err(GenerationError::InvalidSyllableCountBias(bias));
		}
		let mean = bias - 1.0;
		if mean > 0.0 && Poisson::new(mean).is_err() {
			return Err(GenerationError::InvalidSyllableCountBias(bias));
		}
		self.syllable_count_bias = bias;
		Ok(())
	}

	/// Re-checks the invariants, for values built by deserialization.
	pub fn validate(&self) -> Result<(), GenerationError> {
		Self::new(self.null_consonant_probability, self.syllable_count_bias).map(|_| ())
	}

	/// Poisson mean used for the syllable count (`bias - 1`, never negative).
	pub(crate) fn poisson_mean(&self) -> f64 {
		(self.syllable_count_bias - 1.0).max(0.0)
	}
}
