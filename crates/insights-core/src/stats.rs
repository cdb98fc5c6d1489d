//! Descriptive statistics over numeric dataset columns.

// ── Quantile helper ───────────────────────────────────────────────────────────

/// Compute the `q`-th quantile (`0.0 ..= 1.0`) of a **sorted** slice using
/// linear interpolation between closest ranks (the method pandas and NumPy
/// use by default).
///
/// Returns `0.0` for an empty slice.
pub fn quantile(sorted_data: &[f64], q: f64) -> f64 {
    if sorted_data.is_empty() {
        return 0.0;
    }
    let len = sorted_data.len();
    if len == 1 {
        return sorted_data[0];
    }
    let rank = q * (len as f64 - 1.0);
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted_data[lo];
    }
    let frac = rank - lo as f64;
    sorted_data[lo] + frac * (sorted_data[hi] - sorted_data[lo])
}

// ── ColumnSummary ─────────────────────────────────────────────────────────────

/// Summary statistics for one numeric column, shaped like a single column of
/// a `describe()` table: count, mean, sample standard deviation, min, the
/// quartiles, and max.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    /// Column name, e.g. `"points"`.
    pub column: String,
    /// Number of values summarized.
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (`ddof = 1`); `0.0` for a single value.
    pub std_dev: f64,
    pub min: f64,
    /// 25th percentile.
    pub q25: f64,
    /// 50th percentile.
    pub median: f64,
    /// 75th percentile.
    pub q75: f64,
    pub max: f64,
}

/// Summarize one numeric column.
///
/// `NaN` values are skipped, as `describe()` skips them. Returns `None` for
/// an empty column (or one holding only `NaN`); the caller reports the
/// missing summary the same way an empty chart input is reported.
pub fn summarize(column: &str, values: &[f64]) -> Option<ColumnSummary> {
    let values: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if values.is_empty() {
        return None;
    }
    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let std_dev = if count > 1 {
        let sum_sq: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
        (sum_sq / (count as f64 - 1.0)).sqrt()
    } else {
        0.0
    };

    let mut sorted = values;
    sorted.sort_by(f64::total_cmp);

    Some(ColumnSummary {
        column: column.to_string(),
        count,
        mean,
        std_dev,
        min: sorted[0],
        q25: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.50),
        q75: quantile(&sorted, 0.75),
        max: sorted[count - 1],
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── quantile ─────────────────────────────────────────────────────────────

    #[test]
    fn test_quantile_empty_returns_zero() {
        assert_eq!(quantile(&[], 0.5), 0.0);
    }

    #[test]
    fn test_quantile_single_element() {
        assert_eq!(quantile(&[42.0], 0.0), 42.0);
        assert_eq!(quantile(&[42.0], 0.5), 42.0);
        assert_eq!(quantile(&[42.0], 1.0), 42.0);
    }

    #[test]
    fn test_quantile_median_even_count() {
        let data = vec![1.0, 2.0, 3.0, 4.0];
        // rank = 0.5 * 3 = 1.5 → interpolate between data[1]=2 and data[2]=3
        assert!((quantile(&data, 0.5) - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_quantile_q25_ten_elements() {
        // 1..=10 sorted: rank = 0.25 * 9 = 2.25 → 3 + 0.25*(4-3) = 3.25
        let data: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        let q25 = quantile(&data, 0.25);
        assert!((q25 - 3.25).abs() < 1e-9, "q25 = {q25}");
    }

    #[test]
    fn test_quantile_extremes() {
        let data = vec![10.0, 20.0, 30.0];
        assert!((quantile(&data, 0.0) - 10.0).abs() < 1e-9);
        assert!((quantile(&data, 1.0) - 30.0).abs() < 1e-9);
    }

    // ── summarize ────────────────────────────────────────────────────────────

    #[test]
    fn test_summarize_empty_returns_none() {
        assert_eq!(summarize("points", &[]), None);
    }

    #[test]
    fn test_summarize_single_value() {
        let summary = summarize("points", &[8.0]).unwrap();
        assert_eq!(summary.count, 1);
        assert!((summary.mean - 8.0).abs() < 1e-9);
        assert_eq!(summary.std_dev, 0.0);
        assert!((summary.min - 8.0).abs() < 1e-9);
        assert!((summary.median - 8.0).abs() < 1e-9);
        assert!((summary.max - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_known_values() {
        // 1..=5: mean 3, sum of squared deviations 10, sample variance 2.5
        let summary = summarize("position", &[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(summary.column, "position");
        assert_eq!(summary.count, 5);
        assert!((summary.mean - 3.0).abs() < 1e-9);
        assert!((summary.std_dev - 2.5_f64.sqrt()).abs() < 1e-9);
        assert!((summary.min - 1.0).abs() < 1e-9);
        assert!((summary.q25 - 2.0).abs() < 1e-9);
        assert!((summary.median - 3.0).abs() < 1e-9);
        assert!((summary.q75 - 4.0).abs() < 1e-9);
        assert!((summary.max - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_unsorted_input() {
        // The input need not be sorted; quantiles sort internally.
        let summary = summarize("wins", &[5.0, 1.0, 3.0, 2.0, 4.0]).unwrap();
        assert!((summary.median - 3.0).abs() < 1e-9);
        assert!((summary.min - 1.0).abs() < 1e-9);
        assert!((summary.max - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_skips_nan_values() {
        let summary = summarize("points", &[1.0, f64::NAN, 3.0]).unwrap();
        assert_eq!(summary.count, 2);
        assert!((summary.mean - 2.0).abs() < 1e-9);
        assert!((summary.min - 1.0).abs() < 1e-9);
        assert!((summary.median - 2.0).abs() < 1e-9);
        assert!((summary.max - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_all_nan_returns_none() {
        assert_eq!(summarize("points", &[f64::NAN, f64::NAN]), None);
    }
}
