use rand::SeedableRng;
use rand::rngs::StdRng;

use rs_wordgen_core::GenerationConfig;
use rs_wordgen_core::model::parameters::SamplingParameters;
use rs_wordgen_core::model::profile::WeightProfile;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Default profiles, 30% chance of an empty consonant slot, ~3 syllables per word
    let config = GenerationConfig::default();

    // The thread-local generator is fine for one-off words
    let mut rng = rand::rng();
    for i in 0..10 {
        println!("Generated word {}: {}", i + 1, config.generate(&mut rng));
    }

    // A seeded generator always replays the same words
    let mut first = StdRng::seed_from_u64(42);
    let mut second = StdRng::seed_from_u64(42);
    for _ in 0..3 {
        let a = config.generate(&mut first);
        let b = config.generate(&mut second);
        println!("Seeded: {} / {}", a, b);
    }

    // Custom profiles: order is kept, weights are relative
    let consonants = WeightProfile::new([("k", 3.0), ("l", 2.0), ("th", 1.0)])?;
    let vowels = WeightProfile::new([("a", 2.0), ("ae", 1.0)])?;

    // Rarely drop consonants, shorter words
    let mut params = SamplingParameters::default();
    params.set_null_consonant_probability(0.1)?;
    params.set_syllable_count_bias(2.0)?;

    let custom = GenerationConfig::new(consonants, vowels, params)?;
    for i in 0..5 {
        println!("Custom word {}: {}", i + 1, custom.generate(&mut rng));
    }

    // Invalid parameters are rejected and leave the previous value untouched
    match params.set_null_consonant_probability(1.5) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected: {e}"),
    }
    match params.set_syllable_count_bias(0.0) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected: {e}"),
    }

    // Same for profiles
    match WeightProfile::new([("a", 1.0), ("a", 2.0)]) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected: {e}"),
    }

    // A JSON document only needs the fields it overrides
    let from_json = GenerationConfig::from_json_str(r#"{ "params": { "syllable_count_bias": 1 } }"#)?;
    println!("One-syllable word: {}", from_json.generate(&mut rng));

    Ok(())
}
