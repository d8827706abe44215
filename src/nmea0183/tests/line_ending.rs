use nom::error::ErrorKind;

use crate::{Error, LineEndingMode, SentenceParser, SentenceParserBuilder};

const PAYLOAD: &str = "$GPGGA,102604.000,3150.7815,N,11711.9352,E,1,4,3.13,57.7,M,0.0,M,,*5B";

fn required() -> SentenceParser {
    SentenceParserBuilder::new()
        .line_ending_mode(LineEndingMode::Required)
        .build()
}

#[test]
fn test_line_ending_optional() {
    let parser = SentenceParser::default();

    for ending in ["\r\n", "\r", "", "\0", "\0garbage", "\rtrailing"] {
        let sentence = format!("{PAYLOAD}{ending}");
        assert!(parser.parse_gga(sentence.as_bytes()).is_ok(), "{ending:?}");
    }
}

#[test]
fn test_line_ending_required() {
    let parser = required();

    let sentence = format!("{PAYLOAD}\r\n");
    assert!(parser.parse_gga(sentence.as_bytes()).is_ok());

    for ending in ["", "\r", "\0", "\r\nX"] {
        let sentence = format!("{PAYLOAD}{ending}");
        match parser.parse_gga(sentence.as_bytes()) {
            Err(Error::ParsingError(e)) => assert_eq!(e.code, ErrorKind::CrLf, "{ending:?}"),
            other => panic!("Unexpected result {other:?} for {ending:?}"),
        }
    }
}

#[test]
fn test_line_feed_is_not_a_terminator() {
    let sentence = format!("{PAYLOAD}\n");
    assert!(matches!(
        SentenceParser::default().parse_gga(sentence.as_bytes()),
        Err(Error::ParsingError(_))
    ));
}
