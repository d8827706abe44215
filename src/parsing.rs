//! # Parsing Utilities
//!
//! Small combinators shared by the numeric primitives and the field handlers:
//! running a parser over an entire field, and over a fixed-width prefix of it.

use nom::{
    Err, Input, Mode, OutputMode, PResult, Parser, ToUsize,
    bytes::complete::take,
    error::{ErrorKind, ParseError},
};

/// Ensures that the parser consumes all input.
///
/// NMEA fields are handed to the primitives as complete spans, so a value
/// followed by anything at all (a letter, a second sign, a stray dot) must be
/// rejected rather than silently truncated.
///
/// # Arguments
///
/// * `f` - The parser to run
/// * `e` - Error kind to return if input is not fully consumed
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::parsing::consumed;
/// use nom::{IResult, Parser, bytes::complete::take, error::ErrorKind};
///
/// let mut parser = consumed(take(3u8), ErrorKind::Eof);
/// let result: IResult<_, _> = parser.parse(&b"abc"[..]);
/// assert!(result.is_ok());
///
/// let result = parser.parse(&b"abcd"[..]);
/// assert!(result.is_err());
/// ```
pub fn consumed<I, E: ParseError<I>, F>(
    f: F,
    e: ErrorKind,
) -> impl Parser<I, Output = <F as Parser<I>>::Output, Error = E>
where
    I: Input,
    F: Parser<I, Error = E>,
{
    Consumed { f, e }
}

/// Runs `f` over exactly the next `count` items of the input.
///
/// The prefix must be fully consumed by `f`; the remainder after the prefix
/// is returned untouched. Input shorter than `count` is rejected. This is how
/// the `hhmmss` and `ddmmyy` fields are cut into two-digit groups.
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::{IResult, numeric::integer, parsing::fixed_width};
/// use nom::Parser;
///
/// let result: IResult<_, u8> = fixed_width(2u8, integer).parse(&b"1026"[..]);
/// assert_eq!(result, Ok((&b"26"[..], 10)));
///
/// let result: IResult<_, u8> = fixed_width(2u8, integer).parse(&b"1"[..]);
/// assert!(result.is_err());
/// ```
pub fn fixed_width<I, C, E, F>(
    count: C,
    f: F,
) -> impl Parser<I, Output = <F as Parser<I>>::Output, Error = E>
where
    I: Input,
    C: ToUsize,
    E: ParseError<I>,
    F: Parser<I, Error = E>,
{
    take(count).and_then(consumed(f, ErrorKind::Eof))
}

struct Consumed<F> {
    f: F,
    e: ErrorKind,
}

impl<I, F> Parser<I> for Consumed<F>
where
    I: Input,
    F: Parser<I>,
{
    type Output = <F as Parser<I>>::Output;
    type Error = <F as Parser<I>>::Error;

    fn process<OM: OutputMode>(&mut self, i: I) -> PResult<OM, I, Self::Output, Self::Error> {
        let (i, o) = self.f.process::<OM>(i)?;

        if i.input_len() != 0 {
            return Err(Err::Error(OM::Error::bind(|| {
                <F as Parser<I>>::Error::from_error_kind(i, self.e)
            })));
        }

        Ok((i, o))
    }
}
