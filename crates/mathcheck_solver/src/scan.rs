//! Recovery of roots the model did not state correctly.
//!
//! The residual is sampled on a uniform grid. Exact zeros are recorded as
//! they are met and every sign change between finite neighbours is refined
//! by bisection. Non-finite samples only disqualify their own sub-intervals.

use crate::options::{BisectionOptions, ScanOptions};

/// Root inside `[a, b]` by interval halving.
///
/// `None` when either endpoint is non-finite or already an exact zero, when
/// both endpoints have the same sign, or when a midpoint is non-finite. If the
/// iteration budget runs out, the midpoint of the last bracket is returned.
pub fn bisection<F>(f: F, a: f64, b: f64, options: &BisectionOptions) -> Option<f64>
where
    F: Fn(f64) -> f64,
{
    let mut fa = f(a);
    let fb = f(b);
    if !fa.is_finite() || !fb.is_finite() {
        return None;
    }
    // Exact zeros at sample points are recorded by the scan itself
    if fa == 0.0 || fb == 0.0 {
        return None;
    }
    if (fa < 0.0) == (fb < 0.0) {
        return None;
    }

    let (mut lo, mut hi) = (a, b);
    for _ in 0..options.max_iterations {
        let mid = 0.5 * (lo + hi);
        let fm = f(mid);
        if !fm.is_finite() {
            return None;
        }
        if fm.abs() < options.tolerance {
            return Some(mid);
        }
        if (fa < 0.0) != (fm < 0.0) {
            hi = mid;
        } else {
            lo = mid;
            fa = fm;
        }
    }
    Some(0.5 * (lo + hi))
}

/// Interval and step count the scan will use.
///
/// With candidates the interval is `[floor(min - margin), ceil(max + margin)]`
/// clipped to `[options.min, options.max]`. Non-finite candidates or an empty
/// clipped interval fall back to the full range.
pub fn scan_range(candidates: &[f64], options: &ScanOptions) -> (f64, f64, usize) {
    let full = (options.min, options.max, options.steps);
    if candidates.is_empty() {
        return full;
    }

    let lowest = candidates.iter().copied().fold(f64::INFINITY, f64::min);
    let highest = candidates.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !lowest.is_finite() || !highest.is_finite() {
        return full;
    }

    let start = options.min.max((lowest - options.margin).floor());
    let end = options.max.min((highest + options.margin).ceil());
    if start >= end || options.narrow_steps == 0 {
        tracing::trace!(start, end, "narrow scan range unusable, scanning full range");
        return full;
    }
    (start, end, options.narrow_steps)
}

/// Roots of `f` found by sampling and bisection, in discovery order.
pub fn scan_for_roots<F>(f: F, candidates: &[f64], options: &ScanOptions) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    let (start, end, steps) = scan_range(candidates, options);
    tracing::debug!(start, end, steps, "scanning for roots");

    let mut roots: Vec<f64> = Vec::new();
    if steps == 0 || start >= end {
        return roots;
    }
    let mut record = |x: f64| {
        if !roots.contains(&x) {
            roots.push(x);
        }
    };

    let sample = |i: usize| start + (i as f64 * (end - start)) / steps as f64;
    let mut prev_x = sample(0);
    let mut prev_y = f(prev_x);

    for i in 1..=steps {
        let x = sample(i);
        let y = f(x);
        if prev_y.is_finite() && y.is_finite() {
            if prev_y == 0.0 {
                record(prev_x);
            } else if y == 0.0 {
                record(x);
            } else if (prev_y < 0.0) != (y < 0.0) {
                if let Some(root) = bisection(&f, prev_x, x, &options.bisection) {
                    record(root);
                }
            }
        }
        prev_x = x;
        prev_y = y;
    }

    roots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bisection_converges_within_tolerance() {
        let f = |x: f64| x * x - 2.0;
        let root = bisection(f, 1.0, 2.0, &BisectionOptions::default()).unwrap();
        assert!(f(root).abs() < 1e-6);
        assert!((root - 2f64.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn bisection_rejects_invalid_brackets() {
        let options = BisectionOptions::default();
        assert_eq!(bisection(|x| x * x + 1.0, -1.0, 1.0, &options), None);
        assert_eq!(bisection(|x: f64| x.sqrt(), -1.0, 1.0, &options), None);
        assert_eq!(bisection(|x| x, 0.0, 1.0, &options), None);
        assert_eq!(bisection(|x| x - 1.0, 0.0, 1.0, &options), None);
    }

    #[test]
    fn bisection_stops_on_non_finite_midpoint() {
        // Sign change across a pole
        let f = |x: f64| if x.abs() < 0.3 { f64::NAN } else { x };
        assert_eq!(bisection(f, -1.0, 1.0, &BisectionOptions::default()), None);
    }

    #[test]
    fn bisection_returns_last_midpoint_when_budget_runs_out() {
        let options = BisectionOptions {
            tolerance: 0.0,
            max_iterations: 1,
        };
        // First midpoint 0.5 is not the root; the bracket becomes [0.5, 1]
        let root = bisection(|x| x - 0.7, 0.0, 1.0, &options).unwrap();
        assert_eq!(root, 0.75);
    }

    #[test]
    fn full_range_without_candidates() {
        let options = ScanOptions::default();
        assert_eq!(scan_range(&[], &options), (-200.0, 200.0, 400));
    }

    #[test]
    fn narrow_range_around_candidates() {
        let options = ScanOptions::default();
        assert_eq!(scan_range(&[1.5, 3.0], &options), (-49.0, 53.0, 200));
        assert_eq!(scan_range(&[-190.0], &options), (-200.0, -140.0, 200));
    }

    #[test]
    fn unusable_narrow_range_falls_back() {
        let options = ScanOptions::default();
        assert_eq!(scan_range(&[500.0], &options), (-200.0, 200.0, 400));
        assert_eq!(scan_range(&[f64::INFINITY], &options), (-200.0, 200.0, 400));
    }

    #[test]
    fn exact_zero_samples_are_recorded_once() {
        let roots = scan_for_roots(|x| x * x - 4.0, &[], &ScanOptions::default());
        assert_eq!(roots, vec![-2.0, 2.0]);
    }

    #[test]
    fn sign_changes_are_refined() {
        let roots = scan_for_roots(|x| x * x - 2.0, &[], &ScanOptions::default());
        assert_eq!(roots.len(), 2);
        assert!((roots[0] + 2f64.sqrt()).abs() < 1e-6);
        assert!((roots[1] - 2f64.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn non_finite_samples_only_skip_their_interval() {
        // Undefined left of 4, root at 5
        let f = |x: f64| (x - 4.0).sqrt() - 1.0;
        let roots = scan_for_roots(f, &[], &ScanOptions::default());
        assert_eq!(roots, vec![5.0]);
    }

    #[test]
    fn no_roots() {
        assert!(scan_for_roots(|x| x * x + 1.0, &[], &ScanOptions::default()).is_empty());
    }
}
