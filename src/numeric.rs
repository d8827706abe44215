//! # Numeric Field Primitives
//!
//! The three number formats found in GGA and RMC fields: plain integers,
//! fixed-point decimals and `[D...D]MM.MMMM` degree-minute coordinates.
//!
//! Every primitive takes the complete field span and must consume all of it.
//! An empty span is accepted and yields zero, which is how optional fields
//! are tolerated.

use nom::{
    Parser,
    character::complete::{char, satisfy},
    combinator::opt,
    error::{ErrorKind, ParseError},
    multi::fold_many0,
    sequence::preceded,
};

use crate::{Error, IResult, parsing::consumed};

/// Integer types a field can be decoded into.
///
/// Accumulation wraps in the target width: a digit sequence longer than the
/// type can hold is not rejected, it wraps around (e.g. `"300"` as `u8` is `44`).
pub trait Integer: Copy + Default {
    /// Whether a leading `-` is accepted.
    const SIGNED: bool;

    /// Returns `self * 10 + digit`, wrapping on overflow.
    fn push_digit(self, digit: u8) -> Self;

    /// Returns `-self`, wrapping on overflow.
    fn negate(self) -> Self;
}

macro_rules! impl_integer {
    ($signed:literal => $($t:ty),*) => ($(
        impl Integer for $t {
            const SIGNED: bool = $signed;

            fn push_digit(self, digit: u8) -> Self {
                self.wrapping_mul(10).wrapping_add(digit as $t)
            }

            fn negate(self) -> Self {
                self.wrapping_neg()
            }
        }
    )*)
}

impl_integer!(false => u8, u16, u32);
impl_integer!(true => i8, i16, i32, i64);

fn digit<'a, E>(i: &'a [u8]) -> IResult<&'a [u8], u8, E>
where
    E: ParseError<&'a [u8]>,
{
    satisfy(|c| c.is_ascii_digit())
        .map(|c| c as u8 - b'0')
        .parse(i)
}

/// Parses a whole field as an integer.
///
/// A leading `-` is accepted at position 0 for signed targets only; every
/// other byte must be an ASCII digit. An empty field yields `0`.
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::{IResult, numeric::integer};
///
/// let result: IResult<_, i32> = integer(&b"-429"[..]);
/// assert_eq!(result, Ok((&b""[..], -429)));
///
/// let result: IResult<_, i32> = integer(&b"23.34"[..]);
/// assert!(result.is_err());
///
/// // Unsigned targets have no sign.
/// let result: IResult<_, u8> = integer(&b"-4"[..]);
/// assert!(result.is_err());
/// ```
pub fn integer<'a, T, E>(i: &'a [u8]) -> IResult<&'a [u8], T, E>
where
    T: Integer,
    E: ParseError<&'a [u8]>,
{
    let (i, negative) = if T::SIGNED {
        opt(char('-')).map(|sign| sign.is_some()).parse(i)?
    } else {
        (i, false)
    };

    let (i, value) = consumed(
        fold_many0(digit, T::default, |acc: T, d: u8| acc.push_digit(d)),
        ErrorKind::Digit,
    )
    .parse(i)?;

    Ok((i, if negative { value.negate() } else { value }))
}

/// Parses a whole field as a fixed-point decimal number.
///
/// The integer part is accumulated as a wrapping `i32`. Fractional digits are
/// added one at a time to the running result, each weighted by a factor that
/// starts at `0.1` and is divided by ten after every digit. A second `.`, a
/// sign anywhere but position 0, or any other non-digit rejects the field.
/// An empty field yields `0.0`.
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::{IResult, numeric::decimal};
///
/// let result: IResult<_, f64> = decimal(&b"57.7"[..]);
/// let (_, value) = result.unwrap();
/// assert!((value - 57.7).abs() < 1e-9);
///
/// let result: IResult<_, f64> = decimal(&b"1.2.3"[..]);
/// assert!(result.is_err());
/// ```
pub fn decimal<'a, E>(i: &'a [u8]) -> IResult<&'a [u8], f64, E>
where
    E: ParseError<&'a [u8]>,
{
    let (i, negative) = opt(char('-')).map(|sign| sign.is_some()).parse(i)?;

    let (i, whole) = fold_many0(
        digit,
        || 0i32,
        |acc: i32, d: u8| acc.wrapping_mul(10).wrapping_add(d as i32),
    )
    .parse(i)?;

    let fraction = fold_many0(
        digit,
        move || (whole as f64, 0.1f64),
        |(sum, weight): (f64, f64), d: u8| {
            let sum = if d != 0 { sum + weight * d as f64 } else { sum };
            (sum, weight / 10.0)
        },
    );

    let (i, value) = consumed(
        opt(preceded(char('.'), fraction)).map(|fraction| match fraction {
            Some((sum, _)) => sum,
            None => whole as f64,
        }),
        ErrorKind::Char,
    )
    .parse(i)?;

    Ok((i, if negative { -value } else { value }))
}

/// Parses a `[D...D]MM.MMMM` field into decimal degrees.
///
/// The position of the decimal point splits the field: the two digits right
/// before it are the whole minutes, everything before those is the degree
/// count. A field without a point, or with fewer than two digits before it,
/// is rejected. An empty field yields `0.0`.
///
/// The result is always the magnitude; the hemisphere is applied separately.
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::{IResult, numeric::coordinate};
///
/// let result: IResult<_, f64> = coordinate(&b"3150.7815"[..]);
/// let (_, latitude) = result.unwrap();
/// assert!((latitude - (31.0 + 50.7815 / 60.0)).abs() < 1e-5);
///
/// let result: IResult<_, f64> = coordinate(&b"31507815"[..]);
/// assert!(result.is_err());
/// ```
pub fn coordinate<'a, E>(i: &'a [u8]) -> IResult<&'a [u8], f64, E>
where
    E: ParseError<&'a [u8]>,
{
    if i.is_empty() {
        return Ok((i, 0.0));
    }

    let dot = match i.iter().position(|&c| c == b'.') {
        Some(dot) if dot >= 2 => dot,
        _ => {
            return Err(nom::Err::Error(Error::from_error_kind(
                i,
                ErrorKind::Char,
            )));
        }
    };

    let (degrees, minutes) = i.split_at(dot - 2);
    let (_, degrees) = integer::<i32, E>(degrees)?;
    let (rest, minutes) = decimal(minutes)?;

    Ok((rest, degrees as f64 + minutes / 60.0))
}
