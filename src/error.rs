//! # Error Types
//!
//! This module defines the error types used throughout the GGA/RMC decoder.

use nom::error::{ErrorKind, FromExternalError, ParseError};

/// Holds the result of parsing functions.
///
/// It depends on the input type `I`, the output type `O`, and the error type `E`
/// (by default `nom::error::Error<I>`).
///
/// The `Ok` side is a pair containing the remainder of the input (the part of the data that
/// was not parsed) and the produced value. The `Err` side contains an instance of `nom::Err`.
///
/// Outside of the parsing code, you can use the [nom::Finish::finish] method to convert
/// it to a more common result type.
pub type IResult<I, O, E = nom::error::Error<I>> = nom::IResult<I, O, Error<I, E>>;

/// Represents all possible errors that can occur while decoding a sentence.
///
/// Every variant is a whole-sentence rejection: a sentence that produced an
/// error carries no usable record and should simply be discarded.
#[derive(Debug, PartialEq)]
pub enum Error<I, E = nom::error::Error<I>> {
    /// The scanned part of the sentence contains non-ASCII bytes.
    ///
    /// NMEA sentences must be ASCII-only for proper parsing and checksum calculation.
    NonAscii,

    /// The checksum of the sentence was corrupt or incorrect.
    ///
    /// Contains both the expected checksum (calculated from the sentence payload)
    /// and the actual checksum found in the sentence.
    ChecksumMismatch {
        /// The checksum calculated from the sentence payload
        expected: u8,
        /// The checksum found in the sentence
        found: u8,
    },

    /// The sentence has no `*` checksum delimiter while a checksum is required.
    MissingChecksum,

    /// The sentence could not be parsed because its framing was invalid.
    ///
    /// This wraps nom's standard parsing errors: a missing `$` start marker,
    /// checksum digits that are not exactly two hexadecimal characters, or a
    /// missing `\r\n` when the line ending is required.
    ParsingError(E),

    /// The address field names a sentence type this crate does not decode.
    ///
    /// Contains the address field (talker ID and sentence type) for reference.
    UnrecognizedMessage(I),

    /// A field in the sentence was malformed.
    ///
    /// A non-digit where a digit was expected, a second decimal point, a
    /// missing decimal point in a coordinate or an unrecognized enumeration
    /// byte all end up here.
    InvalidField {
        /// Zero-based position of the field, the address field being `0`
        index: usize,
        /// The raw content of the rejected field
        field: I,
    },
}

impl<I, E> ParseError<I> for Error<I, E>
where
    E: ParseError<I>,
{
    fn from_error_kind(input: I, kind: ErrorKind) -> Self {
        Error::ParsingError(E::from_error_kind(input, kind))
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<I, E, EX> FromExternalError<I, EX> for Error<I, E>
where
    E: FromExternalError<I, EX>,
{
    fn from_external_error(input: I, kind: ErrorKind, e: EX) -> Self {
        Error::ParsingError(E::from_external_error(input, kind, e))
    }
}

impl<I, E> Error<I, E> {
    /// Returns `true` if the sentence was rejected because of a malformed field.
    pub fn is_invalid_field(&self) -> bool {
        matches!(self, Error::InvalidField { .. })
    }

    /// Returns `true` if the sentence was rejected by the checksum gate.
    ///
    /// Both a mismatching and a missing checksum count.
    pub fn is_checksum_error(&self) -> bool {
        matches!(self, Error::ChecksumMismatch { .. } | Error::MissingChecksum)
    }
}
