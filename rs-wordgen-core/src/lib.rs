//! Syllable-based pronounceable word generation library.
//!
//! This crate provides a small probabilistic word model including:
//! - Weighted profiles of vowel-like and consonant-like clusters
//! - A weighted discrete sampler with an explicit final-bucket fallback
//! - Syllable and word assembly driven by tunable sampling parameters
//! - An immutable generation configuration, loadable from JSON
//!
//! Randomness is always injected through [`model::random::RandomSource`],
//! so callers decide how generators are shared between threads.

/// Word model and generation logic.
///
/// Exposes profiles, parameters, the random source abstraction and the
/// syllable/word builders.
pub mod model;

/// Error type shared by every fallible operation of the crate.
pub mod error;

/// I/O utilities (file loading).
///
/// Not exposed
pub(crate) mod io;

pub use error::GenerationError;
pub use model::generator::GenerationConfig;
pub use model::word::generate_word;
