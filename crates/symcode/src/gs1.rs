//! GS1 application-identifier input normalization.
//!
//! Callers supply GS1 data in bracket notation, `(AI)value(AI)value...`.
//! Parsing validates the bracket structure and the AI numbers, then flattens
//! the fields into the raw AI/value stream handed to the encoder, separating
//! consecutive fields with the GS character.

use symcode_core::Error;

/// Field separator in the flattened AI stream.
pub const GS: u8 = 0x1D;

/// Parse and flatten bracketed GS1 data.
///
/// Fails with [`Error::InvalidData`] on mismatched brackets, malformed AI
/// numbers (anything but 2-4 digits), empty values, or characters outside
/// the printable ASCII range.
pub fn parse(data: &[u8]) -> Result<Vec<u8>, Error> {
    if data.first() != Some(&b'(') {
        return Err(Error::InvalidData(
            "GS1 input must start with a bracketed application identifier".into(),
        ));
    }

    let mut out = Vec::with_capacity(data.len());
    let mut rest = data;
    while !rest.is_empty() {
        // opening bracket
        rest = match rest.strip_prefix(b"(") {
            Some(r) => r,
            None => {
                return Err(Error::InvalidData(
                    "unexpected character where '(' was expected".into(),
                ))
            }
        };
        let close = rest.iter().position(|&b| b == b')').ok_or_else(|| {
            Error::InvalidData("unmatched '(' in GS1 input".into())
        })?;
        let ai = &rest[..close];
        if !(2..=4).contains(&ai.len()) || !ai.iter().all(u8::is_ascii_digit) {
            return Err(Error::InvalidData(format!(
                "invalid application identifier '{}'",
                String::from_utf8_lossy(ai)
            )));
        }
        rest = &rest[close + 1..];

        let value_end = rest
            .iter()
            .position(|&b| b == b'(')
            .unwrap_or(rest.len());
        let value = &rest[..value_end];
        if value.is_empty() {
            return Err(Error::InvalidData(format!(
                "application identifier '{}' has no value",
                String::from_utf8_lossy(ai)
            )));
        }
        for &b in value {
            if b == b')' {
                return Err(Error::InvalidData("unmatched ')' in GS1 input".into()));
            }
            if !(0x20..=0x7E).contains(&b) {
                return Err(Error::InvalidData(format!(
                    "byte 0x{b:02X} is not valid in a GS1 value"
                )));
            }
        }
        rest = &rest[value_end..];

        if !out.is_empty() {
            out.push(GS);
        }
        out.extend_from_slice(ai);
        out.extend_from_slice(value);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_field_flattens_without_separator() {
        let out = parse(b"(01)12345678901231").unwrap();
        assert_eq!(out, b"0112345678901231");
    }

    #[test]
    fn fields_are_separated_by_gs() {
        let out = parse(b"(01)12345678901231(10)LOT42").unwrap();
        assert_eq!(out, b"0112345678901231\x1d10LOT42".to_vec());
    }

    #[test]
    fn unmatched_open_bracket_is_invalid_data() {
        let err = parse(b"(01)12345678901231(").unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)), "{err}");
    }

    #[test]
    fn stray_close_bracket_is_invalid_data() {
        assert!(parse(b"(01)123)456").is_err());
    }

    #[test]
    fn bad_ai_numbers_are_rejected() {
        assert!(parse(b"(1)23").is_err(), "AI too short");
        assert!(parse(b"(12345)6").is_err(), "AI too long");
        assert!(parse(b"(1A)23").is_err(), "AI not numeric");
        assert!(parse(b"(10)").is_err(), "empty value");
        assert!(parse(b"no brackets").is_err());
    }
}
