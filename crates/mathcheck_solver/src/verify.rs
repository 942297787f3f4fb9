/// Candidates at which `|f(x)|` is finite and below `tolerance`.
pub fn verify_candidates<F>(f: F, candidates: &[f64], tolerance: f64) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    candidates
        .iter()
        .copied()
        .filter(|&x| {
            let residual = f(x);
            residual.is_finite() && residual.abs() < tolerance
        })
        .collect()
}
