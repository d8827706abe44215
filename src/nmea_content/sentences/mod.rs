mod gga;
mod rmc;

pub use gga::{GGA, GgaField};
pub use rmc::{RMC, RmcField};

use nom::{
    Finish, Parser,
    bytes::complete::take_till,
    character::complete::char,
    sequence::preceded,
};

use crate::{Error, IResult, SentenceParser};

/// A sentence record that can be filled field by field during a single scan.
///
/// The scanner owns the tokenizing and the checksum; an implementation only
/// says what each completed field means for its sentence type. The record
/// starts out as [`Default`] and is handed back to the caller only if every
/// field was accepted and the checksum matched, so a rejected sentence never
/// leaves a half-written record behind.
pub trait Sentence: Default {
    /// Field positions of this sentence type, advanced on every `,`.
    type Field: FieldState;

    /// Decodes one completed field into the record.
    ///
    /// `value` is the raw field content between its delimiters. Positions
    /// without a handler must accept any content and leave the record as is.
    fn apply<'a>(
        &mut self,
        field: Self::Field,
        value: &'a [u8],
    ) -> Result<(), nom::Err<Error<&'a [u8]>>>;
}

/// The "current field" state of a sentence scan.
pub trait FieldState: Copy {
    /// The address field (`GPGGA`, `GNRMC`, ...) every sentence starts with.
    const ADDRESS: Self;

    /// The state for the field after this one.
    ///
    /// Positions past the last known field must map to a state that ignores
    /// its content.
    fn advance(self) -> Self;
}

/// A single-byte enumeration field such as a status or a hemisphere letter.
pub trait Indicator: Copy + Sized {
    /// Decodes the byte, `None` if it is not a recognized value.
    fn from_byte(byte: u8) -> Option<Self>;

    /// Returns the byte as transmitted.
    fn as_byte(self) -> u8;
}

macro_rules! indicator_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $byte:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl Indicator for $name {
            fn from_byte(byte: u8) -> Option<Self> {
                match byte {
                    $($byte => Some(Self::$variant),)*
                    _ => None,
                }
            }

            fn as_byte(self) -> u8 {
                match self {
                    $(Self::$variant => $byte,)*
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.as_byte() as char)
            }
        }
    };
}

indicator_enum! {
    /// GGA fix quality
    pub enum FixStatus {
        /// 0 - Fix not available
        b'0' => Invalid,
        /// 1 - GNSS fix
        b'1' => GnssFix,
        /// 2 - Differential GPS fix
        b'2' => DgpsFix,
        /// 6 - Estimated (dead reckoning) mode
        b'6' => EstimatedMode,
    }
}

indicator_enum! {
    /// RMC data validity
    pub enum Validity {
        /// V - Navigation receiver warning
        b'V' => Invalid,
        /// A - Data valid
        b'A' => Valid,
    }
}

indicator_enum! {
    /// RMC positioning mode
    pub enum PositioningMode {
        /// N - No fix
        b'N' => NoFix,
        /// A - Autonomous GNSS fix
        b'A' => AutonomousGnssFix,
        /// D - Differential GNSS fix
        b'D' => DifferentialGnssFix,
    }
}

indicator_enum! {
    /// Latitude hemisphere
    pub enum NorthSouth {
        /// N - North
        b'N' => North,
        /// S - South
        b'S' => South,
    }
}

indicator_enum! {
    /// Longitude hemisphere
    pub enum EastWest {
        /// E - East
        b'E' => East,
        /// W - West
        b'W' => West,
    }
}

impl NorthSouth {
    /// Applies the hemisphere sign to a latitude magnitude.
    pub fn apply(self, latitude: f64) -> f64 {
        match self {
            NorthSouth::North => latitude,
            NorthSouth::South => -latitude,
        }
    }
}

impl EastWest {
    /// Applies the hemisphere sign to a longitude magnitude.
    pub fn apply(self, longitude: f64) -> f64 {
        match self {
            EastWest::East => longitude,
            EastWest::West => -longitude,
        }
    }
}

/// Either of the two decodable sentences, selected by the address field.
///
/// The typed entry points ([`parse_gga`](crate::parse_gga),
/// [`parse_rmc`](crate::parse_rmc)) never look at the address; this enum is
/// for callers that receive a mixed stream of sentences.
///
/// ```rust
/// use nmea0183_fix::nmea_content::NmeaSentence;
///
/// let sentence = NmeaSentence::parse(
///     b"$GNRMC,102243.000,A,3150.7856,N,11711.9479,E,0.00,118.03,111214,,,D*71\r\n",
/// );
///
/// match sentence {
///     Ok(NmeaSentence::RMC(rmc)) => assert_eq!(rmc.date.year, 14),
///     other => panic!("unexpected {other:?}"),
/// }
///
/// assert!(NmeaSentence::parse(b"$GPGSV,3,2,12,01,40,083,45*44\r\n").is_err());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum NmeaSentence {
    /// Global Positioning System Fix Data
    GGA(GGA),
    /// Recommended Minimum Navigation Information
    RMC(RMC),
}

impl NmeaSentence {
    /// Parses a GGA or RMC sentence with the default parser settings.
    pub fn parse(i: &[u8]) -> Result<Self, Error<&[u8]>> {
        SentenceParser::default().parse_any(i)
    }
}

impl SentenceParser {
    /// Parses a GGA or RMC sentence, choosing the decoder from the address field.
    ///
    /// The address must be a two-letter talker ID followed by `GGA` or `RMC`;
    /// anything else is reported as [`Error::UnrecognizedMessage`].
    pub fn parse_any<'a>(&self, i: &'a [u8]) -> Result<NmeaSentence, Error<&'a [u8]>> {
        let address: IResult<_, _> =
            preceded(char('$'), take_till(|c: u8| c == b',' || c == b'*')).parse(i);
        let (_, address) = address.finish()?;

        match address {
            [_, _, b'G', b'G', b'A'] => self.parse::<GGA>(i).map(NmeaSentence::GGA),
            [_, _, b'R', b'M', b'C'] => self.parse::<RMC>(i).map(NmeaSentence::RMC),
            _ => {
                log_debug!("unrecognized address {}", address.escape_ascii());
                Err(Error::UnrecognizedMessage(address))
            }
        }
    }
}
