/// Expected identical-window survival under point mutation alone.
///
/// Evaluates `exp(-d·w)·(d·w + 1)` for window length `w` and divergence `d`.
pub fn null_model_survival(window_length: f64, divergence_rate: f64) -> f64 {
    let scaled = divergence_rate * window_length;
    (-scaled).exp() * (scaled + 1.0)
}

/// Null model evaluated at every window length in `0..len`.
pub fn null_model_curve(len: usize, divergence_rate: f64) -> Vec<f64> {
    (0..len)
        .map(|w| null_model_survival(w as f64, divergence_rate))
        .collect()
}
