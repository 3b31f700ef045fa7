//! Small numeric helpers shared by the samplers.

/// Computes `ln(k!)` by direct summation.
///
/// Exact to within a few ulps for arguments up to a few thousand, which far
/// exceeds any edge multiplicity a sampler can produce.
///
/// # Example
/// ```
/// # use degsample::utils::log_factorial;
/// assert_eq!(log_factorial(0), 0.0);
/// assert_eq!(log_factorial(1), 0.0);
/// assert!((log_factorial(5) - 120f64.ln()).abs() < 1e-12);
/// ```
pub fn log_factorial(k: u64) -> f64 {
    (2..=k).map(|i| (i as f64).ln()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values() {
        let facts = [1u64, 1, 2, 6, 24, 120, 720, 5040, 40320];
        for (k, &f) in facts.iter().enumerate() {
            assert!((log_factorial(k as u64) - (f as f64).ln()).abs() < 1e-12);
        }
    }

    #[test]
    fn matches_running_product() {
        // 170! is the largest factorial representable as f64
        let mut fact = 1.0f64;
        for k in 1..=170u64 {
            fact *= k as f64;
            assert!((log_factorial(k) - fact.ln()).abs() < 1e-9 * fact.ln().max(1.0));
        }
    }

    #[test]
    fn monotone() {
        let mut prev = log_factorial(1);
        for k in 2..2000u64 {
            let cur = log_factorial(k);
            assert!(cur > prev);
            prev = cur;
        }
    }
}
