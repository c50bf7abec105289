//! Source input acquisition.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::errors::AppError;

/// Reads the whole input: `file` when given, otherwise `stdin`.
pub(crate) fn read_source<R: Read + ?Sized>(
    file: Option<&Path>,
    stdin: &mut R,
) -> Result<Vec<u8>, AppError> {
    if let Some(path) = file {
        return fs::read(path).map_err(|source| AppError::ReadFile {
            path: path.to_path_buf(),
            source,
        });
    }

    let mut buffer = Vec::new();
    stdin
        .read_to_end(&mut buffer)
        .map_err(AppError::ReadStdin)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn stdin_is_read_when_no_file_is_given() {
        let mut stdin = Cursor::new(b"package main".to_vec());
        let source = read_source(None, &mut stdin).expect("stdin readable");
        assert_eq!(source, b"package main");
    }

    #[test]
    fn file_takes_precedence_over_stdin() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("main.go");
        fs::write(&path, "package file").expect("write fixture");
        let mut stdin = Cursor::new(b"package stdin".to_vec());

        let source = read_source(Some(&path), &mut stdin).expect("file readable");
        assert_eq!(source, b"package file");
    }

    #[test]
    fn missing_file_reports_its_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.go");
        let mut stdin = Cursor::new(Vec::new());

        let error = read_source(Some(&path), &mut stdin).expect_err("file is missing");
        assert!(matches!(error, AppError::ReadFile { .. }));
        assert!(error.to_string().contains("absent.go"));
    }
}
