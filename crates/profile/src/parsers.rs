//! Set of useful parser combinators

// nom parser combinators
use nom::bytes::complete::is_not;
use nom::character::complete::{digit1, one_of, space1};
use nom::combinator::{all_consuming, map_res, opt};
use nom::error::{Error, ErrorKind};
use nom::multi::separated_list1;
use nom::number::complete::recognize_float;
use nom::sequence::tuple;
use nom::{Err, IResult};

use flashy_utils::f;

/// Number of variables from the last word of the line
///
/// The line is usually `number of variables = N`, but only the final word
/// matters.
pub(crate) fn variable_count(i: &str) -> IResult<&str, usize> {
    let token = i.split_whitespace().last().unwrap_or_default();
    let (i, digits) = all_consuming(digit1)(token)?;
    let count = digits
        .parse()
        .map_err(|_| Err::Error(Error::new(token, ErrorKind::Digit)))?;
    Ok((i, count))
}

/// Variable name as the first word of the line
pub(crate) fn variable_name(i: &str) -> Option<&str> {
    i.split_whitespace().next()
}

/// List of whitespace separated values as a vector of f64 values
pub(crate) fn vector_of_f64(i: &str) -> IResult<&str, Vec<f64>> {
    all_consuming(separated_list1(space1, value))(i.trim())
}

/// Single whitespace delimited value
///
/// Anything Rust parses is accepted (including `NaN` and `inf`), otherwise
/// the token is tried as a fortran number.
fn value(i: &str) -> IResult<&str, f64> {
    map_res(is_not(" \t"), |token: &str| {
        token
            .parse::<f64>()
            .or_else(|e| fortran_f64(token).map(|(_, v)| v).map_err(|_| e))
    })(i)
}

/// Fortran style exponents, `1.234D+05` or `8.15942-132` with no `E`
fn fortran_f64(i: &str) -> IResult<&str, f64> {
    let (i, (mantissa, marker, sign, exponent)) = all_consuming(tuple((
        recognize_float,
        opt(one_of("Dd")),
        opt(one_of("+-")),
        digit1,
    )))(i)?;

    // no marker and no sign means this was never an exponent
    if marker.is_none() && sign.is_none() {
        return Err(Err::Error(Error::new(i, ErrorKind::Float)));
    }

    let text = f!("{mantissa}e{}{exponent}", sign.unwrap_or('+'));
    let v = text
        .parse()
        .map_err(|_| Err::Error(Error::new(i, ErrorKind::Float)))?;
    Ok((i, v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_from_last_word() {
        assert_eq!(variable_count("number of variables = 12"), Ok(("", 12)));
        assert_eq!(variable_count("4"), Ok(("", 4)));
        assert!(variable_count("number of variables = four").is_err());
        assert!(variable_count("number of variables = 2.5").is_err());
        assert!(variable_count("").is_err());
    }

    #[test]
    fn first_word_is_name() {
        assert_eq!(variable_name("dens   # density"), Some("dens"));
        assert_eq!(variable_name("   "), None);
    }

    #[test]
    fn rows_of_values() {
        assert_eq!(
            vector_of_f64("  1.0e+05 2.5E-01  -3 "),
            Ok(("", vec![1.0e5, 0.25, -3.0]))
        );
        assert!(vector_of_f64("1.0 abc 2.0").is_err());
        assert!(vector_of_f64("").is_err());
    }

    #[test]
    fn values_need_separators() {
        assert!(vector_of_f64("1.02.0").is_err());
        assert!(vector_of_f64("1.0 2.0-3.0").is_err());
        assert_eq!(vector_of_f64("1.0\t2.0"), Ok(("", vec![1.0, 2.0])));
    }

    #[test]
    fn fortran_exponents() {
        assert_eq!(
            vector_of_f64("1.5-100 1.234D+05 -2.0+10"),
            Ok(("", vec![1.5e-100, 1.234e5, -2.0e10]))
        );
        assert!(vector_of_f64("1.5D").is_err());
        assert!(vector_of_f64("15").is_ok());
    }
}
