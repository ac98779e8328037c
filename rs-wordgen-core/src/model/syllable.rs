use super::parameters::SamplingParameters;
use super::profile::WeightProfile;
use super::random::RandomSource;
use super::sampler::draw;

/// Builds one syllable: optional consonant + vowel + optional consonant.
///
/// Each consonant slot is left empty when its own uniform draw falls below
/// `null_consonant_probability`; the two slots are independent. The vowel
/// cluster is always present.
pub fn build_syllable<R: RandomSource + ?Sized>(
	consonants: &WeightProfile,
	vowels: &WeightProfile,
	params: &SamplingParameters,
	rng: &mut R,
) -> String {
	let mut syllable = String::new();
	push_syllable(&mut syllable, consonants, vowels, params, rng);
	syllable
}

/// Appends one syllable to `word`.
pub(crate) fn push_syllable<R: RandomSource + ?Sized>(
	word: &mut String,
	consonants: &WeightProfile,
	vowels: &WeightProfile,
	params: &SamplingParameters,
	rng: &mut R,
) {
	push_optional_consonant(word, consonants, params, rng);
	word.push_str(draw(vowels, rng));
	push_optional_consonant(word, consonants, params, rng);
}

fn push_optional_consonant<R: RandomSource + ?Sized>(
	word: &mut String,
	consonants: &WeightProfile,
	params: &SamplingParameters,
	rng: &mut R,
) {
	if rng.uniform() < params.null_consonant_probability() {
		return;
	}
	word.push_str(draw(consonants, rng));
}
