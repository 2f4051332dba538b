//! Source Loader Unit Tests.

use std::io::Write;

use alusim_core::common::{AsmErrorKind, SimError};
use alusim_core::sim::loader::{assemble_file, read_source};
use tempfile::NamedTempFile;

fn source_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn assembles_file_contents() {
    let file = source_file(".orig 0x02\nadd $1, $2, $3\nsub $0, $1, $1\n");
    let program = assemble_file(file.path()).unwrap();
    assert_eq!(program.pairs(), &[(0x02, 0x1B), (0x03, 0x45)]);
}

#[test]
fn reads_text_verbatim() {
    let file = source_file("add $0, $0, $0\n");
    assert_eq!(read_source(file.path()).unwrap(), "add $0, $0, $0\n");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.asm");
    match assemble_file(&path) {
        Err(SimError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn assembly_errors_carry_the_line() {
    let file = source_file("add $0, $0, $0\n.orig 0x1ff\n");
    match assemble_file(file.path()) {
        Err(SimError::Asm(err)) => {
            assert_eq!(err.line, 2);
            assert_eq!(err.kind, AsmErrorKind::AddressOutOfRange(0x1ff));
        }
        other => panic!("expected Asm error, got {other:?}"),
    }
}
