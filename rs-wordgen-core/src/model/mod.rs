//! Top-level module for the syllable word model.
//!
//! This module provides, bottom-up:
//! - Random source abstraction (`RandomSource`)
//! - Weighted cluster profiles (`WeightProfile`)
//! - Sampling parameters (`SamplingParameters`)
//! - The weighted discrete sampler (`sampler::draw`)
//! - Syllable and word builders
//! - An immutable bundle of all of the above (`GenerationConfig`)

/// Capability trait for uniform and Poisson draws.
///
/// Blanket-implemented for every `rand::Rng`.
pub mod random;

/// Ordered, validated (label, weight) tables with precomputed cumulative
/// thresholds, plus the default vowel-like and consonant-like tables.
pub mod profile;

/// Process-wide tunables: null consonant probability and syllable count bias.
pub mod parameters;

/// Weighted discrete sampling over a `WeightProfile`.
pub mod sampler;

/// Builds one consonant / vowel / consonant syllable.
pub mod syllable;

/// Builds a word from a Poisson-distributed number of syllables.
pub mod word;

/// Immutable generation configuration (profiles + parameters).
///
/// Built once at startup, optionally from a JSON document.
pub mod generator;
