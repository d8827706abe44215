use nom::error::ErrorKind;

use crate::{
    ChecksumMode, Error, GGA, NmeaSentence, RMC, SentenceParser, SentenceParserBuilder, checksum,
    format_checksum, parse_gga, parse_rmc,
};

const GGA_SENTENCE: &[u8] =
    b"$GPGGA,102604.000,3150.7815,N,11711.9352,E,1,4,3.13,57.7,M,0.0,M,,*5B\r\n";

/// Frames a payload the way a receiver would.
fn frame(payload: &str) -> String {
    format!(
        "${payload}*{}\r\n",
        format_checksum(checksum(payload.as_bytes()))
    )
}

#[test]
fn test_missing_start_marker() {
    match parse_gga(&GGA_SENTENCE[1..]) {
        Err(Error::ParsingError(e)) => assert_eq!(e.code, ErrorKind::Char),
        other => panic!("Unexpected result {other:?}"),
    }

    assert!(matches!(parse_gga(b""), Err(Error::ParsingError(_))));
}

#[test]
fn test_non_ascii() {
    let sentence = "$GPGGA,102604.000,3150.7815,N,11711.9352,E,1,4,3.13,57.7,M,0.0,M,,é*5B\r\n";
    assert_eq!(parse_gga(sentence.as_bytes()), Err(Error::NonAscii));

    // Bytes after the end of the scan are never looked at.
    let sentence = "$GPGGA,102604.000,3150.7815,N,11711.9352,E,1,4,3.13,57.7,M,0.0,M,,*5B\r\né";
    assert!(parse_gga(sentence.as_bytes()).is_ok());
}

#[test]
fn test_nul_terminated_buffer() {
    let mut buffer = [0u8; 128];
    buffer[..GGA_SENTENCE.len() - 2].copy_from_slice(&GGA_SENTENCE[..GGA_SENTENCE.len() - 2]);

    let gga = parse_gga(&buffer).unwrap();
    assert_eq!(gga.satellite_count, 4);
}

#[test]
fn test_address_not_inspected() {
    // The typed entry points decode by layout alone.
    let sentence = frame("XXGGA,102604.000,3150.7815,N,11711.9352,E,1,4,3.13,57.7,M,0.0,M,,");
    assert!(parse_gga(sentence.as_bytes()).is_ok());

    let rmc: Result<RMC, _> = SentenceParser::default().parse(GGA_SENTENCE);
    assert!(rmc.unwrap_err().is_invalid_field());
}

#[test]
fn test_generic_parse() {
    let parser = SentenceParserBuilder::new().build();

    let gga: GGA = parser.parse(GGA_SENTENCE).unwrap();
    assert_eq!(gga, parse_gga(GGA_SENTENCE).unwrap());
    assert_eq!(parser.parse_gga(GGA_SENTENCE), parse_gga(GGA_SENTENCE));
}

#[test]
fn test_first_rejection_wins() {
    // Field 1 fails before the corrupted checksum is ever compared.
    let sentence = b"$GPGGA,1a2604.000,31507815,N,11711.9352,E,1,4,3.13,57.7,M,0.0,M,,*00\r\n";

    assert_eq!(
        parse_gga(sentence),
        Err(Error::InvalidField {
            index: 1,
            field: &b"1a2604.000"[..]
        })
    );
}

#[test]
fn test_satellite_count_wraps() {
    let sentence = frame("GPGGA,102604.000,3150.7815,N,11711.9352,E,1,300,3.13,57.7,M,0.0,M,,");
    assert_eq!(parse_gga(sentence.as_bytes()).unwrap().satellite_count, 44);
}

#[test]
fn test_field_after_asterisk_is_checksum() {
    let parser = SentenceParserBuilder::new()
        .checksum_mode(ChecksumMode::Optional)
        .build();

    let sentence = b"$GPGGA,102604.000,3150.7815,N,11711.9352,E,1,4,3.13,57.7,M,0.0,M,,*5B,1\r\n";
    assert!(matches!(
        parser.parse_gga(sentence),
        Err(Error::ParsingError(_))
    ));
}

#[test]
fn test_dispatch_by_address() {
    let gga = frame("GNGGA,102604.000,3150.7815,N,11711.9352,E,2,9,0.9,57.7,M,0.0,M,,");
    let rmc = frame("GNRMC,102739.000,A,3150.7825,N,11711.9369,E,0.00,303.62,111214,,,A");

    match NmeaSentence::parse(gga.as_bytes()) {
        Ok(NmeaSentence::GGA(gga)) => assert_eq!(gga.satellite_count, 9),
        other => panic!("Unexpected result {other:?}"),
    }

    match NmeaSentence::parse(rmc.as_bytes()) {
        Ok(NmeaSentence::RMC(rmc)) => assert!(rmc.validity.is_some()),
        other => panic!("Unexpected result {other:?}"),
    }

    let vtg = frame("GPVTG,054.7,T,034.4,M,005.5,N,010.2,K");
    assert_eq!(
        NmeaSentence::parse(vtg.as_bytes()),
        Err(Error::UnrecognizedMessage(&b"GPVTG"[..]))
    );

    // Sentence errors pass through the dispatcher untouched.
    assert_eq!(
        parse_rmc(b"$GPRMC,102739.000,A*00"),
        NmeaSentence::parse(b"$GPRMC,102739.000,A*00").map(|_| RMC::default())
    );
}
