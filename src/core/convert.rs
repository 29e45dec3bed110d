//! Rate based amount conversion

/// Converts `amount` of a currency worth `from_rate` base units into a
/// currency worth `to_rate` base units.
///
/// A zero `to_rate` yields `0.0` instead of failing. Use [`checked_convert`]
/// to tell that case apart from a genuine zero result.
pub fn convert(amount: f64, from_rate: f64, to_rate: f64) -> f64 {
    checked_convert(amount, from_rate, to_rate).unwrap_or(0.0)
}

/// Same as [`convert`] but returns `None` when the target rate is zero.
pub fn checked_convert(amount: f64, from_rate: f64, to_rate: f64) -> Option<f64> {
    if to_rate == 0.0 {
        return None;
    }
    Some((amount * from_rate) / to_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let rel = ((actual - expected) / expected).abs();
        assert!(rel < 1e-9, "expected {expected}, got {actual}");
    }

    #[test]
    fn test_usd_to_uah() {
        assert_eq!(convert(100.0, 41.5, 1.0), 4150.0);
    }

    #[test]
    fn test_eur_to_usd() {
        assert_close(convert(100.0, 44.8, 41.5), 107.951_807_228_915_66);
    }

    #[test]
    fn test_formula_matches_plain_arithmetic() {
        for (amount, from, to) in [(1.0, 52.3, 10.2), (250.75, 10.2, 44.8), (0.01, 1.0, 41.5)] {
            assert_eq!(convert(amount, from, to), amount * from / to);
        }
    }

    #[test]
    fn test_equal_rates_are_identity() {
        for rate in [1.0, 10.2, 41.5, 44.8, 52.3] {
            assert_close(convert(123.45, rate, rate), 123.45);
        }
    }

    #[test]
    fn test_zero_target_rate_returns_zero() {
        assert_eq!(convert(100.0, 41.5, 0.0), 0.0);
        assert_eq!(convert(-5.0, 0.0, 0.0), 0.0);
        assert_eq!(checked_convert(100.0, 41.5, 0.0), None);
    }

    #[test]
    fn test_checked_convert_passes_through() {
        assert_eq!(checked_convert(100.0, 41.5, 1.0), Some(4150.0));
    }
}
