use super::profile::WeightProfile;
use super::random::RandomSource;

/// Draws one label from `profile`, proportionally to its weight.
///
/// Two phases:
/// - thresholds `t_1 < ... < t_n` are the profile's cumulative weights
///   (precomputed at construction)
/// - a uniform `r` in `[0, t_n)` is drawn and the first entry with
///   `t_{i-1} <= r < t_i` wins
///
/// If the scan reaches the final entry without a match, the final label is
/// returned unconditionally. This covers `r == t_n` after floating-point
/// rounding and is part of the output distribution, not an error path.
pub fn draw<'a, R: RandomSource + ?Sized>(profile: &'a WeightProfile, rng: &mut R) -> &'a str {
	let r = rng.uniform() * profile.total_weight();
	let last = profile.len() - 1;

	let mut lower = 0.0;
	for (i, (label, upper)) in profile.thresholds().enumerate() {
		if lower <= r && r < upper {
			return label;
		}
		// Final-bucket fallback.
		if i == last {
			return label;
		}
		lower = upper;
	}

	unreachable!("a WeightProfile always has at least one entry")
}
