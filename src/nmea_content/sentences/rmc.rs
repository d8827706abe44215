#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    nmea_content::{
        Date, EastWest, FieldState, NorthSouth, PositioningMode, Sentence, TimeOfDay, Validity,
        parse::{first_indicator, last_indicator},
    },
    numeric::{coordinate, decimal},
};

/// Divisor applied to the transmitted speed over ground.
const KNOTS_DIVISOR: f64 = 1.852;

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6  7   8   9    10 1112
///         |         | |       | |        |  |   |   |    |  | |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a,m*hh<CR><LF>
/// ```
///
/// The magnetic variation (fields 10 and 11) is not decoded. Any field
/// after the positioning mode, such as the NMEA 4.1 navigation status, is
/// ignored.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RMC {
    /// Latitude in decimal degrees, negative in the southern hemisphere
    pub latitude: f64,
    /// Longitude in decimal degrees, negative in the western hemisphere
    pub longitude: f64,
    /// Course over ground in degrees
    pub course_over_ground: f64,
    /// Speed over ground: the transmitted knots value divided by 1.852
    pub speed_over_ground: f64,
    /// Fix time in UTC
    pub time: TimeOfDay,
    /// Fix date in UTC
    pub date: Date,
    /// Status, `None` when the field was empty
    pub validity: Option<Validity>,
    /// Positioning mode, `None` when the field was empty or absent
    pub positioning_mode: Option<PositioningMode>,
}

#[cfg(feature = "time")]
impl RMC {
    /// Combines the fix date and time, `None` if either is out of range.
    pub fn date_time(&self) -> Option<time::PrimitiveDateTime> {
        Some(time::PrimitiveDateTime::new(
            self.date.to_date()?,
            self.time.to_time()?,
        ))
    }
}

/// Field positions of an RMC sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RmcField {
    Address,
    Time,
    Validity,
    Latitude,
    NorthSouth,
    Longitude,
    EastWest,
    SpeedOverGround,
    CourseOverGround,
    Date,
    MagneticVariation,
    MagneticVariationDirection,
    PositioningMode,
    /// Navigation status and anything after it
    Trailing,
}

impl FieldState for RmcField {
    const ADDRESS: Self = RmcField::Address;

    fn advance(self) -> Self {
        match self {
            RmcField::Address => RmcField::Time,
            RmcField::Time => RmcField::Validity,
            RmcField::Validity => RmcField::Latitude,
            RmcField::Latitude => RmcField::NorthSouth,
            RmcField::NorthSouth => RmcField::Longitude,
            RmcField::Longitude => RmcField::EastWest,
            RmcField::EastWest => RmcField::SpeedOverGround,
            RmcField::SpeedOverGround => RmcField::CourseOverGround,
            RmcField::CourseOverGround => RmcField::Date,
            RmcField::Date => RmcField::MagneticVariation,
            RmcField::MagneticVariation => RmcField::MagneticVariationDirection,
            RmcField::MagneticVariationDirection => RmcField::PositioningMode,
            RmcField::PositioningMode | RmcField::Trailing => RmcField::Trailing,
        }
    }
}

impl Sentence for RMC {
    type Field = RmcField;

    fn apply<'a>(
        &mut self,
        field: RmcField,
        value: &'a [u8],
    ) -> Result<(), nom::Err<Error<&'a [u8]>>> {
        match field {
            RmcField::Time => self.time = TimeOfDay::parse(value)?.1,
            RmcField::Validity => self.validity = last_indicator(value)?.1,
            RmcField::Latitude => self.latitude = coordinate(value)?.1,
            RmcField::NorthSouth => {
                if let (_, Some(hemisphere)) = last_indicator::<NorthSouth, _>(value)? {
                    self.latitude = hemisphere.apply(self.latitude);
                }
            }
            RmcField::Longitude => self.longitude = coordinate(value)?.1,
            RmcField::EastWest => {
                if let (_, Some(hemisphere)) = last_indicator::<EastWest, _>(value)? {
                    self.longitude = hemisphere.apply(self.longitude);
                }
            }
            RmcField::SpeedOverGround => {
                self.speed_over_ground = decimal(value)?.1 / KNOTS_DIVISOR;
            }
            RmcField::CourseOverGround => self.course_over_ground = decimal(value)?.1,
            RmcField::Date => self.date = Date::parse(value)?.1,
            RmcField::PositioningMode => self.positioning_mode = first_indicator(value)?.1,
            RmcField::Address
            | RmcField::MagneticVariation
            | RmcField::MagneticVariationDirection
            | RmcField::Trailing => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_all(fields: &[&str]) -> Result<RMC, usize> {
        let mut rmc = RMC::default();
        let mut state = RmcField::ADDRESS;

        for (index, field) in fields.iter().enumerate() {
            rmc.apply(state, field.as_bytes()).map_err(|_| index)?;
            state = state.advance();
        }

        Ok(rmc)
    }

    #[test]
    fn test_rmc_fields() {
        let rmc = apply_all(&[
            "GPRMC", "123519", "A", "4807.038", "N", "01131.000", "W", "18.52", "0.83", "230394",
            "004.2", "W", "A", "V",
        ])
        .unwrap();

        assert_eq!(
            rmc.time,
            TimeOfDay {
                hours: 12,
                minutes: 35,
                seconds: 19
            }
        );
        assert_eq!(
            rmc.date,
            Date {
                day: 23,
                month: 3,
                year: 94
            }
        );
        assert_eq!(rmc.validity, Some(Validity::Valid));
        assert!((rmc.latitude - (48.0 + 7.038 / 60.0)).abs() < 1e-9);
        assert!((rmc.longitude + (11.0 + 31.0 / 60.0)).abs() < 1e-9);
        assert!((rmc.speed_over_ground - 10.0).abs() < 1e-9);
        assert!((rmc.course_over_ground - 0.83).abs() < 1e-9);
        assert_eq!(rmc.positioning_mode, Some(PositioningMode::AutonomousGnssFix));
    }

    #[test]
    fn test_rmc_without_mode() {
        let rmc = apply_all(&[
            "GPRMC", "235959", "V", "", "", "", "", "", "", "311299", "", "",
        ])
        .unwrap();

        assert_eq!(rmc.validity, Some(Validity::Invalid));
        assert_eq!(rmc.positioning_mode, None);
        assert_eq!(rmc.latitude, 0.0);
    }

    #[test]
    fn test_rmc_rejected_fields() {
        let base = [
            "GPRMC", "010203", "A", "1234.567", "N", "01234.567", "E", "5.0", "270.0", "050607",
            "", "", "A",
        ];

        let cases = [
            (1, "0102a3"),
            (2, "K"),
            (3, "1234567"),
            (4, "W"),
            (5, "012a4.567"),
            (6, "S"),
            (7, "abc"),
            (8, "270.0.0"),
            (9, "0506"),
            (12, "X"),
        ];

        for (index, value) in cases {
            let mut fields = base;
            fields[index] = value;
            assert_eq!(apply_all(&fields).err(), Some(index), "{value:?}");
        }

        // Magnetic variation is never looked at.
        let mut fields = base;
        fields[10] = "004.2";
        fields[11] = "Q";
        assert!(apply_all(&fields).is_ok());
    }

    #[cfg(feature = "time")]
    #[test]
    fn test_rmc_date_time() {
        let rmc = RMC {
            time: TimeOfDay {
                hours: 10,
                minutes: 27,
                seconds: 39,
            },
            date: Date {
                day: 11,
                month: 12,
                year: 14,
            },
            ..Default::default()
        };

        let expected = time::PrimitiveDateTime::new(
            time::Date::from_calendar_date(2014, time::Month::December, 11).unwrap(),
            time::Time::from_hms(10, 27, 39).unwrap(),
        );
        assert_eq!(rmc.date_time(), Some(expected));

        let rmc = RMC::default();
        assert_eq!(rmc.date_time(), None);
    }
}
