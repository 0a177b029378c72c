use crate::f;

/// Extends primitives with more specific formatting options
pub trait ValueExt {
    /// Fortran-like scientific number formatting
    ///
    /// Rust prints `1e30` for a float in `LowerExp` form, where FLASH and
    /// most fortran codes write `1.000e+30`. This gives a fixed `precision`
    /// for the mantissa and a signed exponent padded to `exp_pad` digits.
    ///
    /// Works for anything that can be represented as scientific using the
    /// `LowerExp` trait, which is pretty much every numerical primitive.
    ///
    /// ```rust
    /// # use flashy_utils::ValueExt;
    /// assert_eq!((-1.0).sci(5, 2), "-1.00000e+00".to_string());
    /// assert_eq!((2.5e-7).sci(3, 2), "2.500e-07".to_string());
    /// assert_eq!((1.0e123).sci(1, 2), "1.0e+123".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl<T: std::fmt::LowerExp> ValueExt for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let mut num = f!("{:.precision$e}", &self, precision = precision);

        // NaN and inf have no exponent to fix
        let Some(idx) = num.find('e') else {
            return num;
        };

        let exp = num.split_off(idx);
        let (sign, exp) = match exp.strip_prefix("e-") {
            Some(exp) => ('-', exp),
            None => ('+', &exp[1..]),
        };
        num.push_str(&f!("e{}{:0>pad$}", sign, exp, pad = exp_pad));
        num
    }
}
