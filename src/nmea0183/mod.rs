//! # Sentence Scanner
//!
//! This module provides the single-pass decoder for NMEA 0183 sentences of the
//! form `$TTSSS,D1,D2,...,Dn*CC\r\n`.
//!
//! The scanner walks the sentence once. While doing so it accumulates the XOR
//! checksum of the payload, splits the payload on `,` and hands every completed
//! field to the field state machine of the requested sentence type. Once the
//! scan is over the transmitted checksum is compared with the computed one.
//!
//! The scanner is configurable to handle variations in:
//! - Checksum requirements (required or optional)
//! - Line ending requirements (CRLF optional or required)

use core::fmt::Write;

use nom::{
    Finish, Parser,
    bytes::complete::take,
    character::complete::{char, hex_digit0},
    error::{ErrorKind, ParseError},
    number::complete::hex_u32,
};

use crate::{
    Error, IResult,
    nmea_content::{FieldState, GGA, RMC, Sentence},
    parsing::consumed,
};

/// Defines how the scanner should handle sentence checksums.
///
/// A checksum is written as `*CC` after the last field, where CC is the
/// two-digit hexadecimal XOR of every byte between `$` and `*`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumMode {
    #[default]
    /// Checksum is required and must be present.
    ///
    /// A sentence without `*` is rejected with [`Error::MissingChecksum`].
    Required,

    /// Checksum is optional but will be validated if present.
    ///
    /// Use this mode for hand-written sentences or equipment that omits the
    /// checksum.
    Optional,
}

/// Defines how the scanner should handle the end of a sentence.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineEndingMode {
    #[default]
    /// The scan ends at `\r`, at a NUL byte or at the end of the input,
    /// whichever comes first.
    Optional,

    /// The sentence must end with `\r\n`.
    ///
    /// Use this mode when parsing standard NMEA log files or serial port data.
    Required,
}

/// Creates a configured [`SentenceParser`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::{ChecksumMode, LineEndingMode, SentenceParserBuilder};
///
/// let sentence = b"$GPGGA,102604.000,3150.7815,N,11711.9352,E,1,4,3.13,57.7,M,0.0,M,,*5B";
///
/// // Default: checksum required, line ending optional
/// let parser = SentenceParserBuilder::new().build();
/// assert!(parser.parse_gga(sentence).is_ok());
///
/// // Strict: checksum and CRLF both required
/// let strict = SentenceParserBuilder::new()
///     .line_ending_mode(LineEndingMode::Required)
///     .build();
/// assert!(strict.parse_gga(sentence).is_err());
///
/// // Lenient: sentences without a checksum are accepted
/// let lenient = SentenceParserBuilder::new()
///     .checksum_mode(ChecksumMode::Optional)
///     .build();
/// assert!(lenient.parse_gga(b"$GPGGA,102604.000,,,,,1,4,,57.7").is_ok());
/// ```
#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct SentenceParserBuilder {
    checksum_mode: ChecksumMode,
    line_ending_mode: LineEndingMode,
}

impl SentenceParserBuilder {
    /// Creates a new builder with default settings.
    ///
    /// The default settings are:
    /// - Checksum mode: [`ChecksumMode::Required`]
    /// - Line ending mode: [`LineEndingMode::Optional`]
    pub fn new() -> Self {
        SentenceParserBuilder {
            checksum_mode: ChecksumMode::Required,
            line_ending_mode: LineEndingMode::Optional,
        }
    }

    /// Sets the checksum mode for the parser.
    pub fn checksum_mode(mut self, mode: ChecksumMode) -> Self {
        self.checksum_mode = mode;
        self
    }

    /// Sets the line ending mode for the parser.
    pub fn line_ending_mode(mut self, mode: LineEndingMode) -> Self {
        self.line_ending_mode = mode;
        self
    }

    /// Builds the parser with the configured settings.
    pub fn build(self) -> SentenceParser {
        SentenceParser {
            checksum_mode: self.checksum_mode,
            line_ending_mode: self.line_ending_mode,
        }
    }
}

impl Default for SentenceParserBuilder {
    fn default() -> Self {
        SentenceParserBuilder::new()
    }
}

/// A configured sentence decoder.
///
/// The parser holds no state between calls; one instance can decode any
/// number of sentences, from any number of threads.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SentenceParser {
    checksum_mode: ChecksumMode,
    line_ending_mode: LineEndingMode,
}

impl SentenceParser {
    /// Decodes a sentence into the record type `S`.
    ///
    /// The address field is not inspected: any sentence laid out like `S` is
    /// decoded as one. A record is returned only if the framing is valid,
    /// every field was accepted and the checksum matched.
    pub fn parse<'a, S: Sentence>(&self, i: &'a [u8]) -> Result<S, Error<&'a [u8]>> {
        let start: IResult<_, _> = char('$').parse(i);
        let (body, _) = start.finish()?;

        let mut sentence = S::default();
        let mut state = S::Field::ADDRESS;
        let mut index = 0;
        let mut field_start = 0;
        let mut calculated = 0u8;
        let mut asterisk = None;
        let mut end = body.len();

        for (position, &byte) in body.iter().enumerate() {
            match byte {
                b'\0' | b'\r' => {
                    end = position;
                    break;
                }
                _ if !byte.is_ascii() => return Err(Error::NonAscii),
                _ if asterisk.is_some() => {}
                b'*' => {
                    dispatch(&mut sentence, state, index, &body[field_start..position])?;
                    asterisk = Some(position);
                }
                b',' => {
                    calculated ^= byte;
                    dispatch(&mut sentence, state, index, &body[field_start..position])?;
                    state = state.advance();
                    index += 1;
                    field_start = position + 1;
                }
                _ => calculated ^= byte,
            }
        }

        let found = match asterisk {
            Some(position) => {
                let digits: IResult<_, _> = checksum_digits(&body[position + 1..end]);
                Some(digits.finish()?.1)
            }
            None => {
                dispatch(&mut sentence, state, index, &body[field_start..end])?;
                None
            }
        };

        if self.line_ending_mode == LineEndingMode::Required && &body[end..] != b"\r\n" {
            return Err(Error::from_error_kind(&body[end..], ErrorKind::CrLf));
        }

        match (found, self.checksum_mode) {
            (Some(found), _) if found != calculated => {
                log_debug!(
                    "checksum mismatch: computed {:02X}, transmitted {:02X}",
                    calculated,
                    found
                );
                Err(Error::ChecksumMismatch {
                    expected: calculated,
                    found,
                })
            }
            (None, ChecksumMode::Required) => Err(Error::MissingChecksum),
            _ => Ok(sentence),
        }
    }

    /// Decodes a GGA (fix data) sentence.
    pub fn parse_gga<'a>(&self, i: &'a [u8]) -> Result<GGA, Error<&'a [u8]>> {
        self.parse(i)
    }

    /// Decodes an RMC (navigation data) sentence.
    pub fn parse_rmc<'a>(&self, i: &'a [u8]) -> Result<RMC, Error<&'a [u8]>> {
        self.parse(i)
    }
}

/// Decodes a GGA sentence with the default parser settings.
///
/// ```rust
/// use nmea0183_fix::{nmea_content::FixStatus, parse_gga};
///
/// let gga = parse_gga(
///     b"$GPGGA,102604.000,3150.7815,S,11711.9352,E,1,4,3.13,57.7,M,0.0,M,,*46\r\n",
/// )
/// .unwrap();
///
/// assert!((gga.latitude + 31.846358).abs() < 1e-5);
/// assert_eq!(gga.fix_status, Some(FixStatus::GnssFix));
/// assert_eq!(gga.satellite_count, 4);
/// ```
pub fn parse_gga(i: &[u8]) -> Result<GGA, Error<&[u8]>> {
    SentenceParser::default().parse(i)
}

/// Decodes an RMC sentence with the default parser settings.
pub fn parse_rmc(i: &[u8]) -> Result<RMC, Error<&[u8]>> {
    SentenceParser::default().parse(i)
}

fn dispatch<'a, S: Sentence>(
    sentence: &mut S,
    state: S::Field,
    index: usize,
    field: &'a [u8],
) -> Result<(), Error<&'a [u8]>> {
    log_trace!("field {}: {}", index, field.escape_ascii());

    sentence.apply(state, field).map_err(|_| {
        log_debug!("rejected field {}: {}", index, field.escape_ascii());
        Error::InvalidField { index, field }
    })
}

/// Parses the two hexadecimal digits after `*`.
///
/// Anything but exactly two digits is rejected: `ErrorKind::Eof` when there
/// are fewer, `ErrorKind::Count` when there are more and `ErrorKind::IsA`
/// when a digit is not hexadecimal.
fn checksum_digits<'a, E>(i: &'a [u8]) -> IResult<&'a [u8], u8, E>
where
    E: ParseError<&'a [u8]>,
{
    let (_, cc) = consumed(take(2u8), ErrorKind::Count).parse(i)?;
    let (_, cc) = consumed(hex_digit0, ErrorKind::IsA).parse(cc)?;

    hex_u32.map(|cc| cc as u8).parse(cc)
}

/// Calculates the NMEA 0183 checksum of a sentence payload.
///
/// The payload is everything between `$` and `*`, both excluded.
///
/// ```rust
/// use nmea0183_fix::checksum;
///
/// assert_eq!(checksum(b"GPGSV,3,2,12,01,40,083,45"), 0x44);
/// assert_eq!(checksum(b""), 0);
/// ```
pub fn checksum(payload: &[u8]) -> u8 {
    payload
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}

/// Formats a checksum the way it is transmitted: two uppercase hex digits.
///
/// ```rust
/// use nmea0183_fix::format_checksum;
///
/// assert_eq!(format_checksum(0x5B), "5B");
/// assert_eq!(format_checksum(0x0A), "0A");
/// ```
pub fn format_checksum(cc: u8) -> heapless::String<2> {
    let mut formatted = heapless::String::new();
    let _ = write!(formatted, "{cc:02X}");
    formatted
}

#[cfg(test)]
mod tests {
    mod checksum;
    mod line_ending;
}
