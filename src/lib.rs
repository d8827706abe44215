//! # NMEA 0183 Fix Decoder
//!
//! This library decodes the two sentences a GNSS receiver emits for every fix:
//! GGA (position, fix quality, satellites, altitude) and RMC (position, speed,
//! course, date). Sentences have the format `$TTSSS,D1,D2,...,Dn*CC\r\n`.
//!
//! Decoding is a single pass over a borrowed slice with no allocation. The XOR
//! checksum is computed during the same scan and compared with the transmitted
//! one at the end; a sentence is only ever returned as a complete record.
//!
//! The decoder is configurable to handle:
//! - Required or optional checksum validation
//! - Optional or required CRLF line endings
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_fix::{
//!     nmea_content::{PositioningMode, Validity},
//!     parse_rmc,
//! };
//!
//! let rmc = parse_rmc(
//!     b"$GPRMC,102739.000,A,3150.7825,N,11711.9369,E,0.00,303.62,111214,,,D*6A\r\n",
//! )
//! .unwrap();
//!
//! assert_eq!(rmc.validity, Some(Validity::Valid));
//! assert_eq!(rmc.positioning_mode, Some(PositioningMode::DifferentialGnssFix));
//! assert_eq!((rmc.date.day, rmc.date.month, rmc.date.year), (11, 12, 14));
//! assert!((rmc.course_over_ground - 303.62).abs() < 1e-9);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for all records
//! - `time`: conversions of the time and date fields into the `time` crate
//! - `log`: debug logging of rejected sentences through the `log` crate

mod fmt;

pub mod error;
mod nmea0183;
pub mod nmea_content;
pub mod numeric;
pub mod parsing;

pub use error::{Error, IResult};
pub use nmea0183::*;
pub use nmea_content::{GGA, NmeaSentence, RMC};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
