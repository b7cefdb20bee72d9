//! Currency conversion helpers.

/// Satang per baht.
const MINOR_PER_MAJOR: f64 = 100.0;

/// Micro-satang scale used to absorb binary-float noise before truncating.
const MICRO: f64 = 1_000_000.0;

/// Convert a baht amount to satang, the processor's minor unit.
///
/// Fractional satang are truncated, not rounded half-up: `0.004` baht is
/// `0` satang, `1500.5` baht is `150050` satang. Inputs are first snapped
/// at micro-satang precision so ordinary two-decimal amounts survive the
/// float representation (`10.01` baht is `1001` satang, never `1000`).
///
/// Callers must validate the amount first; negative or non-finite input is
/// clamped to `0`.
#[must_use]
pub fn to_minor_units(amount: f64) -> i64 {
    if !amount.is_finite() || amount <= 0.0 {
        return 0;
    }

    let minor = (amount * MINOR_PER_MAJOR * MICRO).round() / MICRO;
    #[allow(clippy::cast_possible_truncation)]
    let truncated = minor.trunc() as i64;
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_baht_converts_exactly() {
        assert_eq!(to_minor_units(100.0), 10_000);
        assert_eq!(to_minor_units(3500.0), 350_000);
    }

    #[test]
    fn half_baht_converts_exactly() {
        assert_eq!(to_minor_units(1500.5), 150_050);
    }

    #[test]
    fn fractional_satang_are_truncated() {
        // Sub-satang amounts drop to zero rather than rounding up.
        assert_eq!(to_minor_units(0.004), 0);
        assert_eq!(to_minor_units(0.999), 99);
    }

    #[test]
    fn two_decimal_amounts_survive_float_representation() {
        // 10.01 * 100 is 1000.9999999999999 in f64; the snap keeps it 1001.
        assert_eq!(to_minor_units(10.01), 1_001);
        assert_eq!(to_minor_units(0.29), 29);
        assert_eq!(to_minor_units(4999.99), 499_999);
    }

    #[test]
    fn invalid_input_clamps_to_zero() {
        assert_eq!(to_minor_units(-5.0), 0);
        assert_eq!(to_minor_units(f64::NAN), 0);
        assert_eq!(to_minor_units(f64::INFINITY), 0);
    }
}
