use std::collections::HashSet;

use serde::Deserialize;

use crate::error::GenerationError;

/// Default vowel-like clusters and their weights, in table order.
pub const DEFAULT_VOWELS: &[(&str, f64)] = &[
	("a", 9.0),
	("e", 12.0),
	("i", 9.0),
	("o", 8.0),
	("u", 4.0),
	("ei", 1.0),
	("ie", 1.0),
	("oo", 1.0),
	("ou", 1.0),
	("ui", 1.0),
];

/// Default consonant-like clusters and their weights, in table order.
pub const DEFAULT_CONSONANTS: &[(&str, f64)] = &[
	("b", 2.0),
	("c", 2.0),
	("d", 4.0),
	("f", 2.0),
	("g", 3.0),
	("h", 2.0),
	("j", 8.0),
	("k", 1.0),
	("l", 4.0),
	("m", 2.0),
	("n", 6.0),
	("p", 2.0),
	("r", 6.0),
	("s", 4.0),
	("t", 6.0),
	("v", 2.0),
	("w", 2.0),
	("x", 1.0),
	("z", 1.0),
	("qu", 1.0),
	("th", 1.0),
	("ch", 1.0),
	("ck", 1.0),
	("ph", 1.0),
	("sh", 1.0),
];

/// One weighted cluster of a profile.
#[derive(Clone, Debug, PartialEq)]
struct Entry {
	label: String,
	weight: f64,
	/// Cumulative weight up to and including this entry.
	threshold: f64,
}

/// An ordered table of weighted character clusters.
///
/// # Invariants
/// - At least one entry
/// - Labels are non-empty and unique
/// - Every weight is finite and strictly positive
/// - Thresholds are strictly increasing; the last one is the total weight
///
/// Entry order is the insertion order. It has no statistical effect but
/// decides which label the sampler's final-bucket fallback returns.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "Vec<(String, f64)>")]
pub struct WeightProfile {
	entries: Vec<Entry>,
}

impl WeightProfile {
	/// Builds a validated profile from `(label, weight)` pairs.
	///
	/// # Errors
	/// - `EmptyProfile` if no pair is given
	/// - `EmptyLabel` / `DuplicateLabel` on bad labels
	/// - `InvalidWeight` if a weight is not a positive finite number
	/// - `TotalWeightOverflow` if the weights sum to infinity
	pub fn new<I, S>(pairs: I) -> Result<Self, GenerationError>
	where
		I: IntoIterator<Item = (S, f64)>,
		S: Into<String>,
	{
		let mut entries = Vec::new();
		let mut seen = HashSet::new();
		let mut total = 0.0;

		for (label, weight) in pairs {
			let label = label.into();
			if label.is_empty() {
				return Err(GenerationError::EmptyLabel);
			}
			if !weight.is_finite() || weight <= 0.0 {
				return Err(GenerationError::InvalidWeight { label, weight });
			}
			if !seen.insert(label.clone()) {
				return Err(GenerationError::DuplicateLabel(label));
			}
			total += weight;
			entries.push(Entry { label, weight, threshold: total });
		}

		if entries.is_empty() {
			return Err(GenerationError::EmptyProfile);
		}
		if !total.is_finite() {
			return Err(GenerationError::TotalWeightOverflow);
		}

		Ok(Self { entries })
	}

	/// The built-in vowel-like profile.
	pub fn default_vowels() -> Self {
		Self::from_static(DEFAULT_VOWELS)
	}

	/// The built-in consonant-like profile.
	pub fn default_consonants() -> Self {
		Self::from_static(DEFAULT_CONSONANTS)
	}

	// The static tables satisfy every invariant, so validation is skipped.
	fn from_static(table: &[(&str, f64)]) -> Self {
		let mut total = 0.0;
		let entries = table
			.iter()
			.map(|(label, weight)| {
				total += weight;
				Entry { label: (*label).to_owned(), weight: *weight, threshold: total }
			})
			.collect();
		Self { entries }
	}

	/// Number of entries (always >= 1).
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Always `false` for a constructed profile.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Sum of all weights.
	pub fn total_weight(&self) -> f64 {
		self.entries.last().map_or(0.0, |entry| entry.threshold)
	}

	/// Iterates over `(label, weight)` pairs in table order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
		self.entries.iter().map(|entry| (entry.label.as_str(), entry.weight))
	}

	/// Iterates over `(label, cumulative threshold)` pairs in table order.
	pub fn thresholds(&self) -> impl Iterator<Item = (&str, f64)> {
		self.entries.iter().map(|entry| (entry.label.as_str(), entry.threshold))
	}

	/// Returns `true` if `label` is one of the profile's clusters.
	pub fn contains(&self, label: &str) -> bool {
		self.entries.iter().any(|entry| entry.label == label)
	}
}

impl TryFrom<Vec<(String, f64)>> for WeightProfile {
	type Error = GenerationError;

	fn try_from(pairs: Vec<(String, f64)>) -> Result<Self, Self::Error> {
		Self::new(pairs)
	}
}
