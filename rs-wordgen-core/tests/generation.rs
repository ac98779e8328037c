//! End-to-end properties of word generation through the public API.

use std::thread;

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use rs_wordgen_core::model::parameters::SamplingParameters;
use rs_wordgen_core::model::profile::WeightProfile;
use rs_wordgen_core::model::sampler::draw;
use rs_wordgen_core::{GenerationConfig, generate_word};

/// Default clusters are all lowercase ASCII, so any other character is foreign.
fn only_lowercase_ascii(word: &str) -> bool {
	!word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase())
}

#[test]
fn default_words_use_only_lowercase_ascii() {
	let config = GenerationConfig::default();
	let mut rng = StdRng::seed_from_u64(2024);
	for _ in 0..5_000 {
		let word = config.generate(&mut rng);
		assert!(only_lowercase_ascii(&word), "unexpected word {word:?}");
	}
}

#[test]
fn forced_empty_consonants_with_single_vowel() {
	let consonants = WeightProfile::default_consonants();
	let vowels = WeightProfile::new([("a", 1.0)]).unwrap();
	let params = SamplingParameters::new(1.0, 1.0).unwrap();

	let mut rng = StdRng::seed_from_u64(1);
	for _ in 0..1_000 {
		// Poisson mean is 0, so there is exactly one syllable.
		assert_eq!(generate_word(&consonants, &vowels, &params, &mut rng), "a");
	}

	let params = SamplingParameters::new(1.0, 4.0).unwrap();
	for _ in 0..1_000 {
		let word = generate_word(&consonants, &vowels, &params, &mut rng);
		assert!(!word.is_empty() && word.chars().all(|c| c == 'a'), "unexpected {word}");
	}
}

#[test]
fn large_syllable_count_bias_produces_long_words() {
	let consonants = WeightProfile::default_consonants();
	let vowels = WeightProfile::new([("a", 1.0)]).unwrap();
	let params = SamplingParameters::new(1.0, 100.0).unwrap();

	let mut rng = StdRng::seed_from_u64(3);
	let words: Vec<String> = (0..200).map(|_| generate_word(&consonants, &vowels, &params, &mut rng)).collect();
	assert!(words.iter().all(|word| !word.is_empty() && word.chars().all(|c| c == 'a')));

	// One vowel per syllable: mean length is the bias.
	let mean = words.iter().map(String::len).sum::<usize>() as f64 / words.len() as f64;
	assert!((mean - 100.0).abs() < 5.0, "mean syllable count was {mean}");
}

#[test]
fn identical_seeds_give_identical_sequences() {
	let config = GenerationConfig::default();
	let mut first = StdRng::seed_from_u64(77);
	let mut second = StdRng::seed_from_u64(77);

	let a: Vec<String> = (0..100).map(|_| config.generate(&mut first)).collect();
	let b: Vec<String> = (0..100).map(|_| config.generate(&mut second)).collect();
	assert_eq!(a, b);
}

#[test]
fn concurrent_generation_matches_sequential() {
	let config = GenerationConfig::default();
	let seeds: Vec<u64> = (0..8).collect();

	let sequential: Vec<Vec<String>> = seeds
		.iter()
		.map(|seed| {
			let mut rng = StdRng::seed_from_u64(*seed);
			(0..200).map(|_| config.generate(&mut rng)).collect()
		})
		.collect();

	let concurrent: Vec<Vec<String>> = thread::scope(|scope| {
		let handles: Vec<_> = seeds
			.iter()
			.map(|seed| {
				let config = &config;
				scope.spawn(move || {
					let mut rng = StdRng::seed_from_u64(*seed);
					(0..200).map(|_| config.generate(&mut rng)).collect::<Vec<_>>()
				})
			})
			.collect();
		handles.into_iter().map(|handle| handle.join().unwrap()).collect()
	});

	assert_eq!(sequential, concurrent);
}

#[test]
fn thread_local_generator_is_usable() {
	let config = GenerationConfig::default();
	let word = config.generate(&mut rand::rng());
	assert!(only_lowercase_ascii(&word));
}

fn profile_strategy() -> impl Strategy<Value = Vec<(String, f64)>> {
	prop::collection::btree_map("[a-z]{1,3}", 0.001f64..1000.0, 1..20)
		.prop_map(|map| map.into_iter().collect())
}

proptest! {
	#[test]
	fn draw_always_returns_a_profile_label(pairs in profile_strategy(), seed in any::<u64>()) {
		let profile = WeightProfile::new(pairs).unwrap();
		let mut rng = StdRng::seed_from_u64(seed);
		for _ in 0..50 {
			let label = draw(&profile, &mut rng);
			prop_assert!(profile.contains(label));
		}
	}

	#[test]
	fn words_are_never_empty(
		probability in 0.0f64..=1.0,
		bias in 0.01f64..8.0,
		seed in any::<u64>(),
	) {
		let config = GenerationConfig::new(
			WeightProfile::default_consonants(),
			WeightProfile::default_vowels(),
			SamplingParameters::new(probability, bias).unwrap(),
		)
		.unwrap();
		let mut rng = StdRng::seed_from_u64(seed);
		for _ in 0..20 {
			let word = config.generate(&mut rng);
			prop_assert!(only_lowercase_ascii(&word));
		}
	}
}
