use hexcmp_core::{
    ACTUAL_FILE, EXPECTED_FILE, Granularity, HexcmpError, MatchRate, Mode, Outcome, RunOptions,
    run_in,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn fixture(expected: &[u8], actual: &[u8]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(EXPECTED_FILE), expected).unwrap();
    fs::write(dir.path().join(ACTUAL_FILE), actual).unwrap();
    dir
}

fn run(dir: &Path, opts: &RunOptions) -> (hexcmp_core::Result<Outcome>, String) {
    let mut out = Vec::new();
    let res = run_in(dir, opts, &mut out);
    (res, String::from_utf8(out).unwrap())
}

#[test]
fn test_concrete_scenario() {
    let dir = fixture(&[0x12, 0x34], &[0x12, 0x35]);
    let (res, out) = run(dir.path(), &RunOptions::default());
    let outcome = res.unwrap();
    let c = outcome.comparison().unwrap();
    assert_eq!(c.matches, 3);
    assert_eq!(c.total, 4);
    assert_eq!(c.mismatches.len(), 1);
    assert_eq!(c.mismatches[0].position, 3);
    assert_eq!(
        out,
        "Incorrect: 3-th hex (0b100 vs 0b101)\nCorrection rate: 75.0\n"
    );
}

#[test]
fn test_identical_files() {
    let data: Vec<u8> = (0..=255).collect();
    let dir = fixture(&data, &data);
    let (res, out) = run(dir.path(), &RunOptions::default());
    let outcome = res.unwrap();
    let c = outcome.comparison().unwrap();
    assert_eq!(c.matches, c.total);
    assert_eq!(c.rate(), MatchRate::Percent(100.0));
    assert_eq!(out, "Correction rate: 100.0\n");
}

#[test]
fn test_one_byte_differs() {
    let expected = vec![0u8; 10];
    let mut actual = expected.clone();
    actual[4] = 0xab;
    let dir = fixture(&expected, &actual);
    let (res, _) = run(dir.path(), &RunOptions::default());
    let outcome = res.unwrap();
    let c = outcome.comparison().unwrap();
    assert_eq!(c.mismatches.len(), 2);
    assert_eq!(c.rate(), MatchRate::Percent(18.0 * 100.0 / 20.0));
}

#[test]
fn test_strict_length_mismatch_reports_nothing() {
    let dir = fixture(&[1, 2], &[1, 2, 3]);
    let (res, out) = run(dir.path(), &RunOptions::default());
    match res {
        Err(HexcmpError::LengthMismatch {
            expected, actual, ..
        }) => assert_eq!((expected, actual), (4, 6)),
        other => panic!("unexpected: {other:?}"),
    }
    assert!(!out.contains("Correction rate"));
}

#[test]
fn test_lenient_length_mismatch() {
    let dir = fixture(&[1, 2], &[1, 2, 3]);
    let opts = RunOptions {
        mode: Mode::Lenient,
        ..Default::default()
    };
    let (res, out) = run(dir.path(), &opts);
    assert!(matches!(res.unwrap(), Outcome::LengthMismatch { .. }));
    assert_eq!(
        out,
        "Length mismatch: expected 4 hex digits, actual 6 hex digits\n"
    );
}

#[test]
fn test_empty_files() {
    let dir = fixture(&[], &[]);
    let (res, out) = run(dir.path(), &RunOptions::default());
    assert_eq!(res.unwrap().comparison().unwrap().rate(), MatchRate::NoData);
    assert_eq!(out, "Correction rate: n/a (no data)\n");
}

#[test]
fn test_missing_output_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(EXPECTED_FILE), [0u8]).unwrap();
    let (res, out) = run(dir.path(), &RunOptions::default());
    match res {
        Err(HexcmpError::FileNotFound { path }) => assert!(path.ends_with(ACTUAL_FILE)),
        other => panic!("unexpected: {other:?}"),
    }
    assert!(out.is_empty());
}

#[test]
fn test_dump_then_bits() {
    let dir = fixture(&[0x0a], &[0x0b]);
    let opts = RunOptions {
        granularity: Granularity::Bit,
        dump: true,
        locate: true,
        ..Default::default()
    };
    let (res, out) = run(dir.path(), &opts);
    res.unwrap();
    assert_eq!(
        out,
        "Expected: 0a\nActual: 0b\nIncorrect: 7-th bit (0b0 vs 0b1) at byte 0 bit 0\nCorrection rate: 87.5\n"
    );
}

#[test]
fn test_byte_granularity_limit() {
    let dir = fixture(&[1, 2, 3], &[4, 5, 6]);
    let opts = RunOptions {
        granularity: Granularity::Byte,
        limit: Some(2),
        ..Default::default()
    };
    let (res, out) = run(dir.path(), &opts);
    res.unwrap();
    assert_eq!(
        out,
        "Incorrect: 0-th byte (0b00000001 vs 0b00000100)\n\
         Incorrect: 1-th byte (0b00000010 vs 0b00000101)\n\
         ... 1 more mismatches not shown\n\
         Correction rate: 0.0\n"
    );
}

#[test]
fn test_dump_precedes_strict_length_failure() {
    let dir = fixture(&[0x12], &[0x12, 0x34]);
    let opts = RunOptions {
        dump: true,
        ..Default::default()
    };
    let (res, out) = run(dir.path(), &opts);
    assert!(matches!(res, Err(HexcmpError::LengthMismatch { .. })));
    assert_eq!(out, "Expected: 12\nActual: 1234\n");
}
