use rand::Rng;
use rand_distr::{Distribution, Poisson};

/// Source of randomness consumed by the word model.
///
/// Generation needs exactly two kinds of draws, so the whole model depends
/// on this single abstraction instead of a concrete generator.
///
/// # Concurrency
/// Implementations are taken by `&mut` reference. A source is therefore
/// never shared between concurrent calls; each thread (or each call) brings
/// its own, e.g. `rand::rng()` which is thread-local.
pub trait RandomSource {
	/// Returns a uniform real in `[0, 1)`.
	fn uniform(&mut self) -> f64;

	/// Returns a Poisson-distributed integer with the given mean.
	///
	/// A mean `<= 0` is degenerate and always yields `0`.
	///
	/// # Panics
	/// The blanket implementation panics if a positive mean is beyond what
	/// `rand_distr::Poisson` supports. `SamplingParameters` never produces
	/// such a mean.
	fn poisson(&mut self, mean: f64) -> u64;
}

impl<R: Rng> RandomSource for R {
	fn uniform(&mut self) -> f64 {
		self.random::<f64>()
	}

	fn poisson(&mut self, mean: f64) -> u64 {
		if mean.is_nan() || mean <= 0.0 {
			return 0;
		}
		match Poisson::new(mean) {
			Ok(distribution) => distribution.sample(self) as u64,
			Err(e) => unreachable!(
				"Poisson mean {mean} rejected ({e}); SamplingParameters only admits means the sampler accepts"
			),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn uniform_stays_in_unit_interval() {
		let mut rng = StdRng::seed_from_u64(7);
		for _ in 0..10_000 {
			let u = rng.uniform();
			assert!((0.0..1.0).contains(&u), "out of range: {u}");
		}
	}

	#[test]
	fn poisson_with_non_positive_mean_is_zero() {
		let mut rng = StdRng::seed_from_u64(7);
		for mean in [0.0, -1.0, -0.5, f64::NAN] {
			for _ in 0..100 {
				assert_eq!(rng.poisson(mean), 0);
			}
		}
	}

	#[test]
	#[should_panic]
	fn poisson_mean_beyond_sampler_range_panics() {
		let mut rng = StdRng::seed_from_u64(7);
		rng.poisson(1.0e300);
	}

	#[test]
	fn poisson_mean_converges() {
		let mut rng = StdRng::seed_from_u64(11);
		let draws = 50_000;
		let total: u64 = (0..draws).map(|_| rng.poisson(2.0)).sum();
		let mean = total as f64 / draws as f64;
		assert!((mean - 2.0).abs() < 0.05, "mean was {mean}");
	}
}
