//! End-to-end scenarios across the dispatcher, encoders and renderers.

use symcode::{
    caps, ops, status, valid_id, barcode_name, cap, version, Error, InputMode, Rotation, Segment,
    Symbol,
};
use symcode_render::{render_raster, render_vector};

fn msi_symbol() -> Symbol {
    let mut sym = Symbol::new();
    sym.symbology = 47;
    sym
}

#[test]
fn linear_numeric_with_default_options() {
    let mut sym = msi_symbol();
    let status = ops::encode(&mut sym, b"123456789012").unwrap();
    assert!(status.is_clean());
    assert_eq!(sym.text, "1234567890128", "input plus one computed check digit");
    // start (3) + 13 digit blocks of 12 + stop (4)
    assert_eq!(sym.encoded.width(), 163);
    assert_eq!(sym.encoded.rows(), 1);
}

#[test]
fn two_hundred_digits_are_too_long() {
    let mut sym = msi_symbol();
    let err = ops::encode(&mut sym, &vec![b'9'; 200]).unwrap_err();
    assert!(matches!(err, Error::DataTooLong { .. }));
    assert_eq!(err.status(), status::ERR_TOO_LONG);
    assert!(sym.encoded.is_empty(), "no output was produced");
}

#[test]
fn gs1_unmatched_bracket_is_invalid_data() {
    let mut sym = msi_symbol();
    sym.input_mode = InputMode::Gs1;
    let err = ops::encode(&mut sym, b"(01)12345678901231(").unwrap_err();
    assert_eq!(err.status(), status::ERR_INVALID_DATA);
    assert!(sym.errtxt.contains("unmatched"), "errtxt: {}", sym.errtxt);
}

#[test]
fn cap_returns_only_the_requested_supported_bits() {
    // DataBar Omni is composite-capable; request that bit among unsupported
    // ones and only it comes back.
    let granted = cap(29, caps::COMPOSITE | caps::DOTTY | caps::FULL_MULTIBYTE);
    assert_eq!(granted, caps::COMPOSITE);
}

#[test]
fn sequential_encodes_do_not_alias_saved_output() {
    let mut sym = msi_symbol();
    ops::encode(&mut sym, b"1234567").unwrap();
    let saved = sym.encoded.clone();
    let first_errtxt = sym.errtxt.clone();

    let err = ops::encode(&mut sym, b"not digits").unwrap_err();
    assert!(matches!(err, Error::InvalidData(_)));
    assert_ne!(sym.errtxt, first_errtxt, "errtxt reflects the newest attempt");
    assert_eq!(sym.encoded, saved, "symbol keeps the last good matrix");
    assert!(saved.get(0, 0), "caller-held copy is valid independently");
}

#[test]
fn encoding_is_deterministic_across_calls() {
    let mut a = msi_symbol();
    let mut b = msi_symbol();
    ops::encode(&mut a, b"0042").unwrap();
    ops::encode(&mut b, b"0042").unwrap();
    assert_eq!(a.encoded, b.encoded);
    assert_eq!(a.text, b.text);
}

#[test]
fn boundary_length_encodes_and_one_more_fails() {
    // 117 data digits plus the appended check digit is the widest MSI symbol
    // that fits the matrix column capacity.
    let mut sym = msi_symbol();
    assert!(ops::encode(&mut sym, &vec![b'5'; 117]).is_ok());
    assert!(matches!(
        ops::encode(&mut sym, &vec![b'5'; 118]),
        Err(Error::DataTooLong { .. })
    ));
}

#[test]
fn vector_and_raster_agree_on_extent() {
    let mut sym = msi_symbol();
    sym.scale = 3.0;
    ops::encode(&mut sym, b"31337").unwrap();
    let scene = render_vector(&sym, Rotation::R0).unwrap();
    let raster = render_raster(&sym, Rotation::R0).unwrap();
    assert_eq!(raster.width, (scene.width * 3.0).ceil() as usize);
    assert_eq!(raster.height, (scene.height * 3.0).ceil() as usize);
}

#[test]
fn render_ops_populate_exactly_one_output() {
    let mut sym = msi_symbol();
    ops::encode(&mut sym, b"777").unwrap();

    ops::buffer(&mut sym, 0).unwrap();
    assert!(sym.bitmap.is_some() && sym.vector.is_none());

    ops::buffer_vector(&mut sym, 0).unwrap();
    assert!(sym.vector.is_some() && sym.bitmap.is_none());

    sym.reset_render();
    assert!(sym.vector.is_none() && sym.bitmap.is_none());
    assert!(!sym.encoded.is_empty(), "reset_render keeps the matrix");
}

#[test]
fn vector_scene_serializes_for_external_consumers() {
    let mut sym = msi_symbol();
    ops::encode_and_buffer_vector(&mut sym, b"90125", 0).unwrap();
    let json = serde_json::to_string(sym.vector.as_ref().unwrap()).unwrap();
    assert!(json.contains("\"rects\""));
    assert!(json.contains("\"strings\""));
}

#[test]
fn registry_surface_matches_the_build() {
    assert!(valid_id(47));
    assert!(valid_id(8));
    assert!(!valid_id(0));
    assert!(!valid_id(5));
    assert_eq!(barcode_name(47).unwrap(), "MSI_PLESSEY");
    assert!(barcode_name(59).is_err());
    assert_eq!(version(), 800, "0.8.0 encodes as 800");
}

#[test]
fn encode_segments_rejects_eci_on_linear_symbologies() {
    let mut sym = msi_symbol();
    let segs = [
        Segment::with_eci(b"123".to_vec(), 3),
        Segment::with_eci(b"456".to_vec(), 26),
    ];
    let err = ops::encode_segments(&mut sym, &segs).unwrap_err();
    assert_eq!(err.status(), status::ERR_ECI_REQUIRED);
}

#[test]
fn encode_file_reads_bytes_verbatim() {
    use std::io::Write;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"424242").unwrap();

    let mut sym = msi_symbol();
    ops::encode_file(&mut sym, file.path()).unwrap();
    assert!(sym.text.starts_with("424242"));

    let mut sym = msi_symbol();
    let err = ops::encode_file(&mut sym, "/nonexistent/symcode-input").unwrap_err();
    assert_eq!(err.status(), status::ERR_FILE_ACCESS);
    assert!(sym.errtxt.contains("nonexistent"));
}

#[cfg(feature = "image")]
#[test]
fn print_writes_the_configured_outfile() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("symbol.png");

    let mut sym = msi_symbol();
    sym.outfile = path.display().to_string();
    ops::encode_and_print(&mut sym, b"555", 0).unwrap();
    assert!(path.exists());
    assert!(std::fs::metadata(&path).unwrap().len() > 0);

    sym.outfile = dir.path().join("symbol.xyz").display().to_string();
    let err = ops::print(&mut sym, 0).unwrap_err();
    assert_eq!(err.status(), status::ERR_INVALID_OPTION);
}

#[test]
fn rotated_buffer_swaps_dimensions() {
    let mut sym = msi_symbol();
    ops::encode(&mut sym, b"8080").unwrap();
    ops::buffer(&mut sym, 0).unwrap();
    let flat = sym.bitmap.clone().unwrap();
    ops::buffer(&mut sym, 90).unwrap();
    let turned = sym.bitmap.clone().unwrap();
    assert_eq!((turned.width, turned.height), (flat.height, flat.width));

    let err = ops::buffer(&mut sym, 45).unwrap_err();
    assert_eq!(err.status(), status::ERR_INVALID_OPTION);
}

#[test]
fn code39_end_to_end_with_check_character() {
    let mut sym = Symbol::new();
    sym.symbology = 8;
    sym.option_2 = 1;
    let status = ops::encode(&mut sym, b"code 39").unwrap();
    assert!(status.code < status::ERR_TOO_LONG);
    assert!(sym.text.starts_with("CODE 39"));
    assert_eq!(sym.text.len(), 8, "one Mod-43 check character appended");
}
