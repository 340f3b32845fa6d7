/// Median of the sample in which each value appears `weight` times.
///
/// Equivalent to expanding the sample and taking the ordinary median (mean of
/// the two middle values for an even count), without materializing it.
/// Returns `None` when the total weight is zero.
pub(crate) fn weighted_median(values: impl IntoIterator<Item = (f64, u32)>) -> Option<f64> {
    let mut pairs: Vec<(f64, u64)> = values.into_iter()
        .filter(|&(_, w)| w > 0)
        .map(|(v, w)| (v, w as u64))
        .collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

    let total: u64 = pairs.iter().map(|&(_, w)| w).sum();
    if total == 0 { return None }

    // Value at 0-based rank `k` of the expanded, sorted sample.
    let at_rank = |k: u64| -> f64 {
        let mut seen = 0;
        for &(v, w) in &pairs {
            seen += w;
            if seen > k { return v }
        }
        pairs[pairs.len() - 1].0
    };

    if total % 2 == 1 {
        Some(at_rank(total / 2))
    } else {
        Some((at_rank(total / 2 - 1) + at_rank(total / 2)) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::weighted_median;

    /// Reference: expand and take the plain median.
    fn expanded_median(values: &[(f64, u32)]) -> f64 {
        let mut sample: Vec<f64> = values.iter()
            .flat_map(|&(v, w)| std::iter::repeat_n(v, w as usize))
            .collect();
        sample.sort_by(f64::total_cmp);
        let n = sample.len();
        if n % 2 == 1 { sample[n / 2] } else { (sample[n / 2 - 1] + sample[n / 2]) / 2.0 }
    }

    #[test]
    fn symmetric_sample() {
        assert_eq!(weighted_median([(-1.0, 5), (0.0, 5), (1.0, 5)]), Some(0.0));
    }

    #[test]
    fn heavy_weight_dominates() {
        assert_eq!(weighted_median([(-3.0, 10), (4.0, 60), (8.0, 29)]), Some(4.0));
    }

    #[test]
    fn even_total_averages_middle_pair() {
        assert_eq!(weighted_median([(1.0, 2), (3.0, 2)]), Some(2.0));
        assert_eq!(weighted_median([(1.0, 1), (3.0, 3)]), Some(3.0));
    }

    #[test]
    fn zero_weights_are_ignored() {
        assert_eq!(weighted_median([(9.0, 0), (2.0, 1)]), Some(2.0));
        assert_eq!(weighted_median([(9.0, 0)]), None);
        assert_eq!(weighted_median(Vec::new()), None);
    }

    #[test]
    fn unsorted_input_matches_expansion() {
        let samples: &[&[(f64, u32)]] = &[
            &[(4.5, 27), (-2.0, 15), (7.0, 7), (1.0, 8), (-6.5, 30), (3.0, 14)],
            &[(0.5, 3), (0.25, 4), (-0.75, 1)],
            &[(2.0, 1), (-2.0, 1), (5.0, 1), (-5.0, 1)],
        ];
        for values in samples {
            assert_eq!(weighted_median(values.iter().copied()), Some(expanded_median(values)));
        }
    }
}
