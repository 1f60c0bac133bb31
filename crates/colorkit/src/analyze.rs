//! Dataset statistics and class breaks for data-driven scales.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, Result};

const KMEANS_MAX_ITER: usize = 200;

/// Summary of a numeric dataset. NaN values are skipped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    pub count: usize,
    /// The accepted values, in input order.
    pub values: Vec<f64>,
}

/// How [`Analysis::limits`] splits the value range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LimitMode {
    /// Equal-width intervals.
    #[default]
    Equal,
    /// Quantiles, interpolating between order statistics.
    Quantile,
    /// Equal width in log10 space. Needs strictly positive values.
    Logarithmic,
    /// One-dimensional k-means clustering.
    KMeans,
    /// Only `[min, max]`.
    Continuous,
}

impl LimitMode {
    pub fn name(self) -> &'static str {
        match self {
            LimitMode::Equal => "equal",
            LimitMode::Quantile => "quantile",
            LimitMode::Logarithmic => "logarithmic",
            LimitMode::KMeans => "kmeans",
            LimitMode::Continuous => "continuous",
        }
    }
}

impl fmt::Display for LimitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Only the first letter matters, so `"q"`, `"quantile"` and `"quantiles"`
/// are the same mode.
impl FromStr for LimitMode {
    type Err = ColorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('e') => Ok(LimitMode::Equal),
            Some('q') => Ok(LimitMode::Quantile),
            Some('l') => Ok(LimitMode::Logarithmic),
            Some('k') => Ok(LimitMode::KMeans),
            Some('c') => Ok(LimitMode::Continuous),
            _ => Err(ColorError::UnknownLimitMode(s.to_string())),
        }
    }
}

/// Summarize `values`. An empty (or all-NaN) dataset has NaN bounds.
pub fn analyze(values: &[f64]) -> Analysis {
    let values: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    let (min, max) = if values.is_empty() {
        (f64::NAN, f64::NAN)
    } else {
        values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    };
    Analysis {
        min,
        max,
        sum: values.iter().sum(),
        count: values.len(),
        values,
    }
}

/// Class breaks for `values`; see [`Analysis::limits`].
pub fn limits(values: &[f64], mode: LimitMode, n: usize) -> Result<Vec<f64>> {
    analyze(values).limits(mode, n)
}

impl Analysis {
    pub fn domain(&self) -> [f64; 2] {
        [self.min, self.max]
    }

    /// Split the range into `n` classes, returning the `n + 1` boundaries
    /// (fewer for k-means when clusters collapse).
    ///
    /// ```
    /// use colorkit::{analyze, LimitMode};
    ///
    /// let data: Vec<f64> = (1..=10).map(f64::from).collect();
    /// let breaks = analyze(&data).limits(LimitMode::Quantile, 4).unwrap();
    /// assert_eq!(breaks, [1.0, 3.25, 5.5, 7.75, 10.0]);
    /// ```
    pub fn limits(&self, mode: LimitMode, n: usize) -> Result<Vec<f64>> {
        if self.count == 0 {
            return Ok(Vec::new());
        }
        let (min, max) = (self.min, self.max);
        if n <= 1 {
            return Ok(vec![min, max]);
        }
        let step = |i: usize| i as f64 / n as f64;

        let mut sorted = self.values.clone();
        sorted.sort_by(f64::total_cmp);

        let breaks = match mode {
            LimitMode::Continuous => vec![min, max],
            LimitMode::Equal => {
                let mut out = vec![min];
                out.extend((1..n).map(|i| min + step(i) * (max - min)));
                out.push(max);
                out
            }
            LimitMode::Logarithmic => {
                if min <= 0.0 {
                    return Err(ColorError::LogarithmicDomain { min });
                }
                let (lo, hi) = (min.log10(), max.log10());
                let mut out = vec![min];
                out.extend((1..n).map(|i| 10f64.powf(lo + step(i) * (hi - lo))));
                out.push(max);
                out
            }
            LimitMode::Quantile => {
                let mut out = vec![min];
                out.extend((1..n).map(|i| {
                    let p = (sorted.len() - 1) as f64 * i as f64 / n as f64;
                    let pb = p.floor();
                    let k = pb as usize;
                    if pb == p {
                        sorted[k]
                    } else {
                        let pr = p - pb;
                        sorted[k] * (1.0 - pr) + sorted[k + 1] * pr
                    }
                }));
                out.push(max);
                out
            }
            LimitMode::KMeans => kmeans_breaks(&sorted, min, max, n),
        };
        Ok(breaks)
    }
}

/// Cluster sorted values around `n` centroids, starting from equal-width
/// positions, and return the cluster boundaries.
fn kmeans_breaks(sorted: &[f64], min: f64, max: f64, n: usize) -> Vec<f64> {
    let mut centroids: Vec<f64> = (0..n)
        .map(|i| min + i as f64 / n as f64 * (max - min))
        .collect();
    let mut assignments = vec![0usize; sorted.len()];

    let mut iterations = 0;
    loop {
        for (slot, &value) in assignments.iter_mut().zip(sorted) {
            let mut best = 0;
            let mut best_dist = f64::INFINITY;
            for (j, c) in centroids.iter().enumerate() {
                let dist = (c - value).abs();
                if dist < best_dist {
                    best_dist = dist;
                    best = j;
                }
            }
            *slot = best;
        }

        let mut sums = vec![0.0; n];
        let mut sizes = vec![0usize; n];
        for (&cluster, &value) in assignments.iter().zip(sorted) {
            sums[cluster] += value;
            sizes[cluster] += 1;
        }
        let next: Vec<f64> = centroids
            .iter()
            .enumerate()
            .map(|(j, &old)| {
                if sizes[j] == 0 {
                    old
                } else {
                    sums[j] / sizes[j] as f64
                }
            })
            .collect();

        let changed = next != centroids;
        centroids = next;
        iterations += 1;
        if !changed {
            break;
        }
        if iterations > KMEANS_MAX_ITER {
            tracing::debug!(iterations, "k-means limits hit iteration cap");
            break;
        }
    }

    let mut ends = Vec::with_capacity(n * 2);
    for j in 0..n {
        let mut members = assignments
            .iter()
            .zip(sorted)
            .filter(|(cluster, _)| **cluster == j)
            .map(|(_, v)| *v);
        if let Some(first) = members.next() {
            ends.push(first);
            ends.push(members.last().unwrap_or(first));
        }
    }
    ends.sort_by(f64::total_cmp);

    let Some(&first) = ends.first() else {
        return Vec::new();
    };
    let mut breaks = vec![first];
    for &v in ends.iter().skip(1).step_by(2) {
        if !breaks.contains(&v) {
            breaks.push(v);
        }
    }
    breaks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_to_ten() -> Vec<f64> {
        (1..=10).map(f64::from).collect()
    }

    #[test]
    fn test_analyze_skips_nan() {
        let a = analyze(&[3.0, f64::NAN, -1.0, 4.0]);
        assert_eq!(a.min, -1.0);
        assert_eq!(a.max, 4.0);
        assert_eq!(a.sum, 6.0);
        assert_eq!(a.count, 3);
        assert_eq!(a.values, [3.0, -1.0, 4.0]);
        assert_eq!(a.domain(), [-1.0, 4.0]);
    }

    #[test]
    fn test_empty_dataset() {
        let a = analyze(&[]);
        assert!(a.min.is_nan() && a.max.is_nan());
        assert_eq!(a.count, 0);
        assert!(a.limits(LimitMode::Equal, 5).unwrap().is_empty());
    }

    #[test]
    fn test_equal_and_quantile() {
        let data = one_to_ten();
        assert_eq!(
            limits(&data, LimitMode::Equal, 4).unwrap(),
            [1.0, 3.25, 5.5, 7.75, 10.0]
        );
        assert_eq!(
            limits(&data, LimitMode::Quantile, 4).unwrap(),
            [1.0, 3.25, 5.5, 7.75, 10.0]
        );
        assert_eq!(
            limits(&[2.0, 8.0, 1.0, 5.0], LimitMode::Quantile, 3).unwrap(),
            [1.0, 2.0, 5.0, 8.0]
        );
    }

    #[test]
    fn test_logarithmic() {
        let breaks = limits(&one_to_ten(), LimitMode::Logarithmic, 3).unwrap();
        assert_eq!(breaks.len(), 4);
        assert!((breaks[1] - 2.154434690031884).abs() < 1e-12);
        assert!((breaks[2] - 4.641588833612778).abs() < 1e-12);

        let err = limits(&[0.0, 1.0, 2.0], LimitMode::Logarithmic, 3).unwrap_err();
        assert_eq!(err, ColorError::LogarithmicDomain { min: 0.0 });
    }

    #[test]
    fn test_continuous_and_single_class() {
        let data = one_to_ten();
        assert_eq!(limits(&data, LimitMode::Continuous, 4).unwrap(), [1.0, 10.0]);
        assert_eq!(limits(&data, LimitMode::Quantile, 1).unwrap(), [1.0, 10.0]);
        // A single class short-circuits before the domain check.
        assert_eq!(limits(&[-1.0, 5.0], LimitMode::Logarithmic, 1).unwrap(), [-1.0, 5.0]);
    }

    #[test]
    fn test_kmeans_finds_clusters() {
        let data = [30.0, 1.0, 2.0, 3.0, 10.0, 11.0, 12.0, 31.0, 32.0];
        assert_eq!(
            limits(&data, LimitMode::KMeans, 3).unwrap(),
            [1.0, 3.0, 12.0, 32.0]
        );
    }

    #[test]
    fn test_kmeans_skips_empty_clusters() {
        let data = [1.0, 1.0, 1.0, 10.0];
        assert_eq!(limits(&data, LimitMode::KMeans, 3).unwrap(), [1.0, 10.0]);
    }

    #[test]
    fn test_kmeans_without_values_has_no_breaks() {
        assert!(kmeans_breaks(&[], 0.0, 1.0, 3).is_empty());
    }

    #[test]
    fn test_mode_from_first_letter() {
        assert_eq!("q".parse::<LimitMode>().unwrap(), LimitMode::Quantile);
        assert_eq!("K-means".parse::<LimitMode>().unwrap(), LimitMode::KMeans);
        assert_eq!("log".parse::<LimitMode>().unwrap(), LimitMode::Logarithmic);
        assert!("".parse::<LimitMode>().is_err());
        assert!("x".parse::<LimitMode>().is_err());
    }
}
