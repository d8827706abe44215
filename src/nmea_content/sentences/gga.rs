#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    nmea_content::{
        EastWest, FieldState, FixStatus, NorthSouth, Sentence, TimeOfDay,
        parse::last_indicator,
    },
    numeric::{coordinate, decimal, integer},
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
///
/// Only time, position, fix quality, satellite count and altitude are
/// decoded; HDOP, the unit letters, the geoidal separation and the DGPS
/// fields are skipped without being looked at.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GGA {
    /// Latitude in decimal degrees, negative in the southern hemisphere
    pub latitude: f64,
    /// Longitude in decimal degrees, negative in the western hemisphere
    pub longitude: f64,
    /// Altitude above mean sea level in meters
    pub altitude: f64,
    /// Fix time in UTC
    pub time: TimeOfDay,
    /// Number of satellites in use
    pub satellite_count: u8,
    /// GPS Quality Indicator, `None` when the field was empty
    pub fix_status: Option<FixStatus>,
}

/// Field positions of a GGA sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GgaField {
    Address,
    Time,
    Latitude,
    NorthSouth,
    Longitude,
    EastWest,
    FixStatus,
    SatelliteCount,
    Hdop,
    Altitude,
    /// Altitude unit and everything after it
    Trailing,
}

impl FieldState for GgaField {
    const ADDRESS: Self = GgaField::Address;

    fn advance(self) -> Self {
        match self {
            GgaField::Address => GgaField::Time,
            GgaField::Time => GgaField::Latitude,
            GgaField::Latitude => GgaField::NorthSouth,
            GgaField::NorthSouth => GgaField::Longitude,
            GgaField::Longitude => GgaField::EastWest,
            GgaField::EastWest => GgaField::FixStatus,
            GgaField::FixStatus => GgaField::SatelliteCount,
            GgaField::SatelliteCount => GgaField::Hdop,
            GgaField::Hdop => GgaField::Altitude,
            GgaField::Altitude | GgaField::Trailing => GgaField::Trailing,
        }
    }
}

impl Sentence for GGA {
    type Field = GgaField;

    fn apply<'a>(
        &mut self,
        field: GgaField,
        value: &'a [u8],
    ) -> Result<(), nom::Err<Error<&'a [u8]>>> {
        match field {
            GgaField::Time => self.time = TimeOfDay::parse(value)?.1,
            GgaField::Latitude => self.latitude = coordinate(value)?.1,
            GgaField::NorthSouth => {
                if let (_, Some(hemisphere)) = last_indicator::<NorthSouth, _>(value)? {
                    self.latitude = hemisphere.apply(self.latitude);
                }
            }
            GgaField::Longitude => self.longitude = coordinate(value)?.1,
            GgaField::EastWest => {
                if let (_, Some(hemisphere)) = last_indicator::<EastWest, _>(value)? {
                    self.longitude = hemisphere.apply(self.longitude);
                }
            }
            GgaField::FixStatus => self.fix_status = last_indicator(value)?.1,
            GgaField::SatelliteCount => self.satellite_count = integer(value)?.1,
            GgaField::Altitude => self.altitude = decimal(value)?.1,
            GgaField::Address | GgaField::Hdop | GgaField::Trailing => {}
        }

        Ok(())
    }
}
