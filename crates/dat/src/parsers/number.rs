// nom parser combinators
use nom::branch::alt;
use nom::character::complete::{char, digit0, digit1, one_of};
use nom::combinator::{all_consuming, opt, recognize};
use nom::sequence::{pair, tuple};
use nom::IResult;

use flashy_utils::f;
use log::trace;

use super::cause;

/// Whole number value of a token
pub(crate) fn integer(token: &str) -> Option<i64> {
    token.parse().ok()
}

/// Floating point value of a token
///
/// Anything Rust understands is accepted (including `NaN` and `inf`), then
/// the common fortran oddities are tried.
pub(crate) fn float(token: &str) -> Option<f64> {
    token
        .parse()
        .ok()
        .or_else(|| all_consuming(fortran_f64)(token).ok().map(|(_, v)| v))
}

/// Mantissa with optional sign and decimal point, e.g. `-1.25`, `3.`, `.5`
fn mantissa(i: &str) -> IResult<&str, &str> {
    recognize(pair(
        opt(one_of("+-")),
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
            recognize(pair(char('.'), digit1)),
        )),
    ))(i)
}

/// Parse values with fortran style exponents
///
/// Double precision exponents use `D` in place of `E`, and if the exponent
/// goes into triple digits the `E` is dropped entirely to make room:
///
/// ```text
/// 1.234D+05   =>  1.234e+05
/// 8.15942-132 =>  8.15942e-132
/// ```
pub(crate) fn fortran_f64(i: &str) -> IResult<&str, f64> {
    let (i, mantissa) = mantissa(i)?;
    let (i, (marker, sign, exponent)) =
        tuple((opt(one_of("DdEe")), opt(one_of("+-")), digit1))(i)?;

    // no marker and no sign means this was never an exponent
    if marker.is_none() && sign.is_none() {
        return Err(cause(i));
    }

    let text = f!("{mantissa}e{}{exponent}", sign.unwrap_or('+'));
    trace!("Fixing fortran formatting for: \"{text}\"");
    text.parse().map(|v| (i, v)).map_err(|_| cause(i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers() {
        assert_eq!(integer("42"), Some(42));
        assert_eq!(integer("-7"), Some(-7));
        assert_eq!(integer("4.0"), None);
        assert_eq!(float("4.0"), Some(4.0));
        assert_eq!(float("1.5E+03"), Some(1500.0));
        assert_eq!(float("-2.5e-1"), Some(-0.25));
        assert!(float("NaN").is_some_and(f64::is_nan));
        assert_eq!(float("abc"), None);
        assert_eq!(float(""), None);
    }

    #[test]
    fn fortran_exponents() {
        assert_eq!(float("1.5D+03"), Some(1500.0));
        assert_eq!(float("1.5d3"), Some(1500.0));
        assert_eq!(float("1.111+001"), Some(11.11));
        assert_eq!(float("1.111-001"), Some(0.1111));
        assert_eq!(float("-8.15942-132"), Some(-8.15942e-132));
    }

    #[test]
    fn not_an_exponent() {
        assert!(fortran_f64("1.5").is_err());
        assert_eq!(float("1.5.3"), None);
        assert_eq!(float("1.0-"), None);
        assert_eq!(float("v1.0"), None);
    }
}
