use super::parameters::SamplingParameters;
use super::profile::WeightProfile;
use super::random::RandomSource;
use super::syllable::push_syllable;

/// Generates one word.
///
/// The syllable count is `k + 1` where `k ~ Poisson(syllable_count_bias - 1)`,
/// so a word always has at least one syllable. Syllables are built
/// independently and concatenated in order.
pub fn generate_word<R: RandomSource + ?Sized>(
	consonants: &WeightProfile,
	vowels: &WeightProfile,
	params: &SamplingParameters,
	rng: &mut R,
) -> String {
	let syllables = syllable_count(params, rng);

	let mut word = String::new();
	for _ in 0..syllables {
		push_syllable(&mut word, consonants, vowels, params, rng);
	}
	word
}

/// Draws the shifted Poisson syllable count (always >= 1).
pub fn syllable_count<R: RandomSource + ?Sized>(params: &SamplingParameters, rng: &mut R) -> u64 {
	rng.poisson(params.poisson_mean()) + 1
}
