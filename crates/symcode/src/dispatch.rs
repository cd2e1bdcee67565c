//! The encode dispatcher: validation, input normalization, encoder routing
//! and post-encode policy.

use log::{debug, warn};

use symcode_core::{
    output_options, Encoded, Error, InputMode, Segment, Status, Symbol, Warning, DEFAULT_HEIGHT,
    MAX_DATA_LEN,
};
use symcode_registry::{caps, registry, Symbology};

use crate::gs1;

/// Validate, normalize and encode the given segments into the symbol.
///
/// On success the symbol's matrix, row heights and text are replaced, any
/// stale rendered geometry is dropped, and `errtxt` carries the accumulated
/// warning message (empty when clean). On failure only `errtxt` changes: the
/// previous successful encode, if any, stays intact.
pub fn encode_segments(symbol: &mut Symbol, segments: &[Segment]) -> Result<Status, Error> {
    symbol.errtxt.clear();
    match run(symbol, segments) {
        Ok((encoded, status)) => {
            symbol.encoded = encoded.matrix;
            symbol.row_height = encoded.row_height;
            symbol.text = encoded.text;
            symbol.reset_render();
            symbol.errtxt = status.message.clone();
            if status.is_warning() {
                warn!("encode produced warnings: {}", status.message);
            }
            Ok(status)
        }
        Err(err) => {
            symbol.errtxt = err.to_string();
            Err(err)
        }
    }
}

fn run(symbol: &Symbol, segments: &[Segment]) -> Result<(Encoded, Status), Error> {
    let reg = registry();

    // 1. symbology must be valid in this build
    let kind = reg
        .resolve(symbol.symbology)
        .filter(|k| k.encoder_available())
        .ok_or(Error::InvalidSymbology(symbol.symbology))?;
    let cap_word = kind.capabilities();

    // 2. segment shape and combined length
    let total: usize = segments.iter().map(|s| s.data.len()).sum();
    if segments.is_empty() || segments.iter().any(|s| s.data.is_empty()) || total > MAX_DATA_LEN {
        return Err(Error::DataTooLong {
            length: total,
            max: MAX_DATA_LEN,
        });
    }

    // 3. ECI designators need symbology support
    let wants_eci =
        segments.len() > 1 || symbol.eci != 0 || segments.iter().any(|s| s.eci != 0);
    if wants_eci && cap_word & caps::ECI == 0 {
        return Err(Error::EciRequired(format!(
            "{} does not support ECI segments",
            kind.name()
        )));
    }

    // 4. input-mode normalization
    let mut status = Status::ok();
    let mut data = Vec::with_capacity(total);
    for segment in segments {
        match symbol.input_mode {
            InputMode::Data => data.extend_from_slice(&segment.data),
            InputMode::Gs1 => data.extend_from_slice(&gs1::parse(&segment.data)?),
            InputMode::Unicode => {
                transcode_unicode(&segment.data, cap_word, &mut data, &mut status)?
            }
        }
    }
    if symbol.input_mode == InputMode::Gs1 && cap_word & caps::GS1 == 0 {
        return Err(Error::InvalidOption(format!(
            "{} does not accept GS1 input",
            kind.name()
        )));
    }

    // 5./6. route to the encoder; option-range warnings surface here
    debug!("dispatching {} bytes to {}", data.len(), kind.name());
    let encoded = match kind {
        Symbology::MsiPlessey => symcode_linear::msi::encode(&data, symbol.option_2)?,
        Symbology::Code39 => symcode_linear::code39::encode(&data, symbol.option_2)?,
        other => return Err(Error::InvalidSymbology(reg.profile().id_of(other).unwrap_or(0))),
    };
    let mut encoded = encoded;
    for warning in encoded.warnings.drain(..) {
        status.absorb(warning);
    }

    // 7. post-encode policy: compliant-height rule
    if let Some(min) = kind.min_compliant_height(encoded.matrix.width()) {
        let requested = if symbol.height > 0 { symbol.height } else { DEFAULT_HEIGHT };
        if (requested as f32) < min {
            let message = format!(
                "height {requested} below the compliant minimum {min:.1} for {}",
                kind.name()
            );
            if symbol.output_options & output_options::COMPLIANT_HEIGHT != 0 {
                return Err(Error::NonCompliant(message));
            }
            status.absorb(Warning::non_compliant(message));
        }
    }

    Ok((encoded, status))
}

/// Transcode UTF-8 input to the Latin-1 range, falling back to an ECI escape
/// only where the symbology supports one.
fn transcode_unicode(
    input: &[u8],
    cap_word: u32,
    out: &mut Vec<u8>,
    status: &mut Status,
) -> Result<(), Error> {
    let text = std::str::from_utf8(input)
        .map_err(|_| Error::InvalidData("input is not valid UTF-8".into()))?;
    for ch in text.chars() {
        let cp = ch as u32;
        if cp <= 0xFF {
            out.push(cp as u8);
        } else if cap_word & caps::ECI != 0 {
            // keep the UTF-8 bytes and flag the ECI switch
            let mut buf = [0u8; 4];
            out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            status.absorb(Warning::uses_eci(format!(
                "U+{cp:04X} encoded through an ECI escape"
            )));
        } else {
            return Err(Error::EncodingProblem { codepoint: cp });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msi(data: &[u8]) -> Symbol {
        let mut sym = Symbol::new();
        sym.symbology = 47;
        let _ = encode_segments(&mut sym, &[Segment::new(data.to_vec())]);
        sym
    }

    #[test]
    fn unknown_and_unimplemented_ids_are_rejected() {
        let mut sym = Symbol::new();
        sym.symbology = 59; // withdrawn id
        let err = encode_segments(&mut sym, &[Segment::new(b"1".to_vec())]).unwrap_err();
        assert!(matches!(err, Error::InvalidSymbology(59)));

        sym.symbology = 58; // known metadata, no encoder in this build
        let err = encode_segments(&mut sym, &[Segment::new(b"1".to_vec())]).unwrap_err();
        assert!(matches!(err, Error::InvalidSymbology(58)));
        assert!(!sym.errtxt.is_empty());
    }

    #[test]
    fn empty_segments_signal_too_long() {
        let mut sym = Symbol::new();
        sym.symbology = 47;
        assert!(matches!(
            encode_segments(&mut sym, &[]),
            Err(Error::DataTooLong { .. })
        ));
        assert!(matches!(
            encode_segments(&mut sym, &[Segment::new(Vec::new())]),
            Err(Error::DataTooLong { .. })
        ));
    }

    #[test]
    fn combined_length_cap_is_symbology_independent() {
        let mut sym = Symbol::new();
        sym.symbology = 47;
        let segs = [Segment::new(vec![b'1'; MAX_DATA_LEN + 1])];
        assert!(matches!(
            encode_segments(&mut sym, &segs),
            Err(Error::DataTooLong { length, .. }) if length == MAX_DATA_LEN + 1
        ));
    }

    #[test]
    fn eci_segments_need_the_capability() {
        let mut sym = Symbol::new();
        sym.symbology = 47;
        let segs = [Segment::with_eci(b"123".to_vec(), 26)];
        assert!(matches!(
            encode_segments(&mut sym, &segs),
            Err(Error::EciRequired(_))
        ));
    }

    #[test]
    fn unicode_mode_transcodes_latin1() {
        let mut sym = Symbol::new();
        sym.symbology = 8;
        sym.input_mode = InputMode::Unicode;
        // "A" followed by a non-Latin-1 char: Code 39 has no ECI escape
        let err =
            encode_segments(&mut sym, &[Segment::new("A€".as_bytes().to_vec())]).unwrap_err();
        assert!(matches!(
            err,
            Error::EncodingProblem { codepoint: 0x20AC }
        ));
    }

    #[test]
    fn gs1_mode_parses_before_capability_check() {
        let mut sym = Symbol::new();
        sym.symbology = 47;
        sym.input_mode = InputMode::Gs1;
        // malformed brackets report as bad data, not as a mode mismatch
        let err = encode_segments(
            &mut sym,
            &[Segment::new(b"(01)12345678901231(".to_vec())],
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));

        // well-formed GS1 on a non-GS1 symbology is a fatal option error
        let err = encode_segments(
            &mut sym,
            &[Segment::new(b"(01)12345678901231".to_vec())],
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidOption(_)));
    }

    #[test]
    fn warnings_accumulate_into_errtxt() {
        let mut sym = Symbol::new();
        sym.symbology = 47;
        sym.option_2 = 99;
        let status = encode_segments(&mut sym, &[Segment::new(b"123".to_vec())]).unwrap();
        assert!(status.is_warning());
        assert_eq!(sym.errtxt, status.message);
        assert!(!sym.encoded.is_empty(), "warned output is still usable");
    }

    #[test]
    fn compliant_height_warns_by_default_and_rejects_in_strict_mode() {
        let mut sym = Symbol::new();
        sym.symbology = 8;
        sym.height = 2;
        let status = encode_segments(&mut sym, &[Segment::new(b"HELLOWORLD".to_vec())]).unwrap();
        assert_eq!(status.code, symcode_core::status::WARN_NONCOMPLIANT);

        sym.output_options |= output_options::COMPLIANT_HEIGHT;
        let err = encode_segments(&mut sym, &[Segment::new(b"HELLOWORLD".to_vec())]).unwrap_err();
        assert!(matches!(err, Error::NonCompliant(_)));
    }

    #[test]
    fn failed_encode_preserves_previous_matrix() {
        let mut sym = msi(b"1234567");
        let before = sym.encoded.clone();
        let err = encode_segments(&mut sym, &[Segment::new(b"12X".to_vec())]).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
        assert_eq!(sym.encoded, before, "prior successful state is untouched");
        assert!(sym.errtxt.contains('X'));
    }

    #[test]
    fn reencode_replaces_matrix_and_drops_geometry() {
        let mut sym = msi(b"1234567");
        sym.vector = Some(Default::default());
        let first = sym.encoded.clone();
        encode_segments(&mut sym, &[Segment::new(b"7654321".to_vec())]).unwrap();
        assert_ne!(sym.encoded, first);
        assert!(sym.vector.is_none(), "stale geometry is cleared");
        // the caller's saved copy is unaffected by the re-encode
        assert!(first.get(0, 0));
    }
}
