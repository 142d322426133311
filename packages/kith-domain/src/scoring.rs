use std::cmp::Ordering;

/// Sum aggregation: a candidate matching more of the requested tags, or
/// matching them more strongly, ranks higher.
pub fn sum_weights<I>(weights: I) -> f64
where
	I: IntoIterator<Item = f64>,
{
	weights.into_iter().sum()
}

/// Geometric pair weight for one shared tag: `sqrt(reference * candidate)`.
/// A shared tag where either side reports low interest contributes little,
/// however strongly the other side weighted it.
pub fn pair_weight(reference: i64, candidate: i64) -> f64 {
	((reference as f64) * (candidate as f64)).sqrt()
}

pub fn cmp_score_desc(a: f64, b: f64) -> Ordering {
	match (a.is_nan(), b.is_nan()) {
		(true, true) => Ordering::Equal,
		(true, false) => Ordering::Greater,
		(false, true) => Ordering::Less,
		(false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pair_weight_is_geometric_mean() {
		assert_eq!(pair_weight(8, 2), 4.0);
		assert_eq!(pair_weight(4, 8), 32_f64.sqrt());
	}

	#[test]
	fn pair_weight_of_equal_sides_is_the_side() {
		assert_eq!(pair_weight(7, 7), 7.0);
		assert_eq!(pair_weight(1, 1), 1.0);
	}

	#[test]
	fn sum_of_nothing_is_zero() {
		assert_eq!(sum_weights(std::iter::empty::<f64>()), 0.0);
		assert_eq!(sum_weights([5.0, 3.0]), 8.0);
	}

	#[test]
	fn score_ordering_is_descending_and_nan_sinks() {
		assert_eq!(cmp_score_desc(9.0, 8.0), Ordering::Less);
		assert_eq!(cmp_score_desc(8.0, 9.0), Ordering::Greater);
		assert_eq!(cmp_score_desc(8.0, 8.0), Ordering::Equal);
		assert_eq!(cmp_score_desc(f64::NAN, 0.0), Ordering::Greater);
		assert_eq!(cmp_score_desc(0.0, f64::NAN), Ordering::Less);
	}
}
