use std::collections::BTreeMap;

/// Lengths of all maximal identical runs between two aligned sequences.
///
/// Mismatch columns act as separators, with virtual mismatches just before
/// the first column and just after the last, so neighbouring mismatches
/// produce zero-length runs. Identical input yields the single run `[len]`.
pub fn identical_run_lengths(first: &[u8], second: &[u8]) -> Vec<usize> {
    if first == second {
        return vec![first.len()];
    }

    let mut runs = Vec::new();
    let mut run_start = 0usize;
    for (pos, (a, b)) in first.iter().zip(second).enumerate() {
        if a != b {
            runs.push(pos - run_start);
            run_start = pos + 1;
        }
    }
    runs.push(first.len() - run_start);
    runs
}

/// Survival function of the identical-run length distribution.
///
/// Entry `w` is the fraction of identical-run mass lying in runs strictly
/// longer than `w`. The function is non-increasing in `w`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CumulativeSpectrum {
    values: Vec<f64>,
}

impl CumulativeSpectrum {
    /// Build the spectrum over window lengths `0..size` from run lengths.
    ///
    /// Each distinct run length `w` seen `c` times contributes `c·w/norm` at
    /// index `w`, where `norm` is the total run mass. Runs reaching `size` or
    /// beyond fall outside the array. With no identical mass every entry is 0.
    pub fn from_run_lengths(runs: &[usize], size: usize) -> Self {
        let norm: usize = runs.iter().sum();
        if norm == 0 {
            return Self {
                values: vec![0.0; size],
            };
        }

        let mut histogram: BTreeMap<usize, usize> = BTreeMap::new();
        for &run in runs {
            *histogram.entry(run).or_default() += 1;
        }

        let mut fractions = vec![0.0f64; size];
        for (&window, &count) in &histogram {
            if let Some(slot) = fractions.get_mut(window) {
                *slot = (count * window) as f64 / norm as f64;
            }
        }

        let mut cumulative = 0.0f64;
        let values = fractions
            .into_iter()
            .map(|fraction| {
                cumulative += fraction;
                1.0 - cumulative
            })
            .collect();
        Self { values }
    }

    /// Number of window lengths covered.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true for an empty spectrum.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Survival fraction at window length `w`; 0 past the last entry.
    pub fn value_at(&self, w: usize) -> f64 {
        self.values.get(w).copied().unwrap_or(0.0)
    }

    /// Borrow the raw values.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Take ownership of the raw values.
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}
