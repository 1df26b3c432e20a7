use crate::f;

/// Extends primitives with more specific formatting options
pub trait ValueExt {
    /// Consistent scientific number formatting
    ///
    /// The standard `{:e}` output leaves the exponent unpadded and unsigned,
    /// which makes tabulated log output ragged. This fixes the precision and
    /// pads the exponent to `exp_pad` digits.
    ///
    /// ```rust
    /// # use wtools_utils::ValueExt;
    /// assert_eq!(2.4e10.sci(3, 2), "2.400e+10".to_string());
    /// assert_eq!((-0.5).sci(2, 2), "-5.00e-01".to_string());
    /// assert_eq!(0.0.sci(1, 2), "0.0e+00".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl ValueExt for f64 {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let raw = f!("{:.*e}", precision, self);
        // `{:e}` always emits an 'e'; split into mantissa and exponent
        let (mantissa, exp) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
        let exp: i32 = exp.parse().unwrap_or(0);
        let sign = if exp < 0 { '-' } else { '+' };
        f!(
            "{}e{}{:0>width$}",
            mantissa,
            sign,
            exp.unsigned_abs(),
            width = exp_pad
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_small_exponents() {
        assert_eq!(1.0e5.sci(2, 2), "1.00e+05");
        assert_eq!(7.0e8.sci(1, 3), "7.0e+008");
    }

    #[test]
    fn negative_exponents_keep_sign() {
        assert_eq!(1.0e-15.sci(2, 2), "1.00e-15");
    }
}
