use nom::{
    Parser,
    error::{ErrorKind, ParseError},
};

use crate::{
    Error, IResult,
    nmea_content::{Date, Indicator, TimeOfDay},
    numeric::integer,
    parsing::fixed_width,
};

/// Splits the first six bytes of a field into three two-digit unsigned
/// integers. Anything after the sixth byte is returned unparsed.
fn two_digit_triple<'a, E>(i: &'a [u8]) -> IResult<&'a [u8], (u8, u8, u8), E>
where
    E: ParseError<&'a [u8]>,
{
    (
        fixed_width(2u8, integer),
        fixed_width(2u8, integer),
        fixed_width(2u8, integer),
    )
        .parse(i)
}

impl TimeOfDay {
    /// Parses `hhmmss`, ignoring any fractional seconds that follow.
    ///
    /// ```rust
    /// use nmea0183_fix::{IResult, nmea_content::TimeOfDay};
    ///
    /// let result: IResult<_, _> = TimeOfDay::parse(&b"102604.000"[..]);
    /// let (rest, time) = result.unwrap();
    /// assert_eq!(rest, b".000");
    /// assert_eq!((time.hours, time.minutes, time.seconds), (10, 26, 4));
    /// ```
    pub fn parse<'a, E>(i: &'a [u8]) -> IResult<&'a [u8], Self, E>
    where
        E: ParseError<&'a [u8]>,
    {
        two_digit_triple
            .map(|(hours, minutes, seconds)| TimeOfDay {
                hours,
                minutes,
                seconds,
            })
            .parse(i)
    }
}

impl Date {
    /// Parses `ddmmyy`.
    pub fn parse<'a, E>(i: &'a [u8]) -> IResult<&'a [u8], Self, E>
    where
        E: ParseError<&'a [u8]>,
    {
        two_digit_triple
            .map(|(day, month, year)| Date { day, month, year })
            .parse(i)
    }
}

fn indicator<'a, T, E>(i: &'a [u8], byte: Option<&u8>) -> IResult<&'a [u8], Option<T>, E>
where
    T: Indicator,
    E: ParseError<&'a [u8]>,
{
    let rest = &i[i.len()..];

    match byte {
        None => Ok((rest, None)),
        Some(&byte) => match T::from_byte(byte) {
            Some(value) => Ok((rest, Some(value))),
            None => Err(nom::Err::Error(Error::from_error_kind(i, ErrorKind::OneOf))),
        },
    }
}

/// Decodes a single-letter field from its last byte. An empty field is
/// tolerated and yields `None`.
pub(crate) fn last_indicator<'a, T, E>(i: &'a [u8]) -> IResult<&'a [u8], Option<T>, E>
where
    T: Indicator,
    E: ParseError<&'a [u8]>,
{
    indicator(i, i.last())
}

/// Decodes a single-letter field from its first byte. An empty field is
/// tolerated and yields `None`.
pub(crate) fn first_indicator<'a, T, E>(i: &'a [u8]) -> IResult<&'a [u8], Option<T>, E>
where
    T: Indicator,
    E: ParseError<&'a [u8]>,
{
    indicator(i, i.first())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nmea_content::{FixStatus, NorthSouth};

    #[test]
    fn test_time() {
        let result: IResult<_, _> = TimeOfDay::parse(&b"235959"[..]);
        assert_eq!(
            result,
            Ok((
                &b""[..],
                TimeOfDay {
                    hours: 23,
                    minutes: 59,
                    seconds: 59
                }
            ))
        );

        // No range check on the components.
        let result: IResult<_, _> = TimeOfDay::parse(&b"996099"[..]);
        assert!(result.is_ok());

        for input in ["1a02604.000", "10260s4.000", "10260", "", "-10260"] {
            let result: IResult<_, _> = TimeOfDay::parse(input.as_bytes());
            assert!(result.is_err(), "{input:?}");
        }
    }

    #[test]
    fn test_date() {
        let result: IResult<_, _> = Date::parse(&b"111214"[..]);
        assert_eq!(
            result,
            Ok((
                &b""[..],
                Date {
                    day: 11,
                    month: 12,
                    year: 14
                }
            ))
        );

        for input in ["1112", "11121a", ""] {
            let result: IResult<_, _> = Date::parse(input.as_bytes());
            assert!(result.is_err(), "{input:?}");
        }
    }

    #[test]
    fn test_indicators() {
        let result: IResult<_, _> = last_indicator::<FixStatus, _>(&b"1"[..]);
        assert_eq!(result.map(|(_, v)| v), Ok(Some(FixStatus::GnssFix)));

        let result: IResult<_, _> = last_indicator::<FixStatus, _>(&b""[..]);
        assert_eq!(result.map(|(_, v)| v), Ok(None));

        let result: IResult<_, _> = last_indicator::<FixStatus, _>(&b"3"[..]);
        assert!(result.is_err());

        let result: IResult<_, _> = last_indicator::<NorthSouth, _>(&b"S"[..]);
        assert_eq!(result.map(|(_, v)| v), Ok(Some(NorthSouth::South)));

        let result: IResult<_, _> = first_indicator::<NorthSouth, _>(&b"NX"[..]);
        assert_eq!(result.map(|(_, v)| v), Ok(Some(NorthSouth::North)));

        let result: IResult<_, _> = last_indicator::<NorthSouth, _>(&b"E"[..]);
        assert!(result.is_err());
    }
}
