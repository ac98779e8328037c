use std::path::Path;

use serde::Deserialize;

use crate::error::GenerationError;
use crate::io;
use super::parameters::SamplingParameters;
use super::profile::WeightProfile;
use super::random::RandomSource;
use super::word::generate_word;

/// Immutable bundle of everything a word needs: both profiles and the
/// sampling parameters.
///
/// # Responsibilities
/// - Hold validated profiles and parameters
/// - Load them from JSON, falling back to defaults field by field
/// - Generate words with a caller-provided random source
///
/// Built once at startup and then only read, so it can be shared freely
/// between threads (`GenerationConfig: Send + Sync`).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
	consonants: WeightProfile,
	vowels: WeightProfile,
	params: SamplingParameters,
}

impl Default for GenerationConfig {
	/// Default profiles, `null_consonant_probability = 0.3`, `syllable_count_bias = 3`.
	fn default() -> Self {
		Self {
			consonants: WeightProfile::default_consonants(),
			vowels: WeightProfile::default_vowels(),
			params: SamplingParameters::default(),
		}
	}
}

impl GenerationConfig {
	/// Creates a configuration from already-built parts.
	///
	/// # Errors
	/// Returns an error if `params` does not satisfy its invariants.
	pub fn new(
		consonants: WeightProfile,
		vowels: WeightProfile,
		params: SamplingParameters,
	) -> Result<Self, GenerationError> {
		params.validate()?;
		Ok(Self { consonants, vowels, params })
	}

	/// Parses a JSON configuration.
	///
	/// Every field is optional; missing ones keep their default. Profiles
	/// are arrays of `[label, weight]` pairs so their order is kept.
	///
	/// # Errors
	/// - `Parse` on malformed JSON, unknown fields or invalid profiles
	/// - `InvalidNullProbability` / `InvalidSyllableCountBias` on bad parameters
	pub fn from_json_str(json: &str) -> Result<Self, GenerationError> {
		let config: Self = serde_json::from_str(json)?;
		config.params.validate()?;
		Ok(config)
	}

	/// Loads a JSON configuration file.
	///
	/// # Errors
	/// Returns `Io` if the file cannot be read, otherwise as `from_json_str`.
	pub fn from_file<P: AsRef<Path>>(filepath: P) -> Result<Self, GenerationError> {
		let path = filepath.as_ref();
		let config = Self::from_json_str(&io::read_file(path)?)?;
		log::info!(
			"Loaded generation config from {} ({} consonants, {} vowels)",
			path.display(),
			config.consonants.len(),
			config.vowels.len()
		);
		Ok(config)
	}

	pub fn consonants(&self) -> &WeightProfile {
		&self.consonants
	}

	pub fn vowels(&self) -> &WeightProfile {
		&self.vowels
	}

	pub fn params(&self) -> &SamplingParameters {
		&self.params
	}

	/// Generates one word from this configuration.
	pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> String {
		generate_word(&self.consonants, &self.vowels, &self.params, rng)
	}
}
