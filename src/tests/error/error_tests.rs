use std::io;

use crate::error::{BackReadError, Stage};

#[test]
fn not_found_on_open_is_file_not_found() {
    let err = BackReadError::on_open("missing.txt", io::Error::from(io::ErrorKind::NotFound));
    assert!(matches!(err, BackReadError::FileNotFound { .. }));
    assert_eq!(err.target(), Some("missing.txt"));
    assert_eq!(err.stage(), Some(Stage::Open));
}

#[test]
fn permission_denied_on_open_is_not_readable() {
    let err = BackReadError::on_open(
        "secret.txt",
        io::Error::from(io::ErrorKind::PermissionDenied),
    );
    assert!(matches!(err, BackReadError::NotReadable { .. }));
}

#[test]
fn other_open_failures_stay_io_errors() {
    let err = BackReadError::on_open("dev", io::Error::other("device error"));
    match err {
        BackReadError::Io { stage, target, .. } => {
            assert_eq!(stage, Stage::Open);
            assert_eq!(target, "dev");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn display_includes_stage_and_target() {
    let err = BackReadError::io(Stage::Read, "log.txt", io::Error::other("boom"));
    assert_eq!(err.to_string(), "[Read] log.txt: boom");
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn encoding_error_reports_offset() {
    let err = BackReadError::Encoding {
        target: "bad.txt".into(),
        offset: 42,
    };
    assert_eq!(
        err.to_string(),
        "bad.txt: invalid UTF-8 sequence at byte offset 42"
    );
    assert_eq!(err.stage(), None);
}

#[test]
fn invalid_options_has_no_target() {
    let err = BackReadError::InvalidOptions("chunk_size must be at least 1".into());
    assert_eq!(err.target(), None);
}

#[cfg(feature = "miette")]
#[test]
fn converts_into_miette_report() {
    let err = BackReadError::Encoding {
        target: "bad.txt".into(),
        offset: 0,
    };
    let report: miette::Report = err.into();
    assert_eq!(report.to_string(), "failed to read 'bad.txt' backwards");
}

#[test]
fn non_regular_path_on_open_is_not_readable() {
    for kind in [io::ErrorKind::IsADirectory, io::ErrorKind::InvalidInput] {
        let err = BackReadError::on_open("/dev/null", io::Error::from(kind));
        assert!(matches!(err, BackReadError::NotReadable { .. }), "{kind:?}");
        assert_eq!(err.target(), Some("/dev/null"));
    }
}
