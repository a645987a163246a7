use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::parser::samples::SamplePair;
use crate::report::Reporter;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{} directory already exists", .0.display())]
    DirectoryExists(PathBuf),
    #[error("failed to write {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

pub fn case_paths(dir: &Path, n: usize) -> (PathBuf, PathBuf) {
    (
        dir.join(format!("sample-{}.in", n)),
        dir.join(format!("sample-{}.out", n)),
    )
}

/// Write pairs as `sample-<n>.in` / `sample-<n>.out` into a new `dir`.
///
/// Refuses to touch a directory that already exists.
pub fn write_cases(
    dir: &Path,
    pairs: &[SamplePair],
    reporter: &mut dyn Reporter,
) -> Result<Vec<PathBuf>, StoreError> {
    if let Some(parent) = dir.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_err(parent))?;
        }
    }
    fs::create_dir(dir).map_err(|e| match e.kind() {
        io::ErrorKind::AlreadyExists => StoreError::DirectoryExists(dir.to_path_buf()),
        _ => io_err(dir)(e),
    })?;

    let mut written = Vec::with_capacity(pairs.len() * 2);
    for (i, pair) in pairs.iter().enumerate() {
        let (path_in, path_out) = case_paths(dir, i + 1);
        reporter.wrote(&path_in, &pair.input);
        reporter.wrote(&path_out, &pair.output);
        fs::write(&path_in, &pair.input).map_err(io_err(&path_in))?;
        fs::write(&path_out, &pair.output).map_err(io_err(&path_out))?;
        written.push(path_in);
        written.push(path_out);
    }
    Ok(written)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::testing::{NullReporter, RecordingReporter};

    fn pair(input: &[u8], output: &[u8]) -> SamplePair {
        SamplePair {
            input: input.to_vec(),
            output: output.to_vec(),
        }
    }

    #[test]
    fn writes_numbered_files() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("test");
        let pairs = vec![pair(b"140\n", b"60\n"), pair(b"1000\n", b"100\n")];

        let written = write_cases(&dir, &pairs, &mut NullReporter).unwrap();

        assert_eq!(written.len(), 4);
        assert_eq!(fs::read(dir.join("sample-1.in")).unwrap(), b"140\n");
        assert_eq!(fs::read(dir.join("sample-1.out")).unwrap(), b"60\n");
        assert_eq!(fs::read(dir.join("sample-2.in")).unwrap(), b"1000\n");
        assert_eq!(fs::read(dir.join("sample-2.out")).unwrap(), b"100\n");
        assert!(!dir.join("sample-3.in").exists());
        assert!(!dir.join("sample-3.out").exists());
    }

    #[test]
    fn existing_directory_is_left_alone() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("test");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("sample-1.in"), b"old").unwrap();

        let err = write_cases(&dir, &[pair(b"new", b"new")], &mut NullReporter).unwrap_err();

        assert!(matches!(err, StoreError::DirectoryExists(_)));
        assert_eq!(fs::read(dir.join("sample-1.in")).unwrap(), b"old");
        assert!(!dir.join("sample-1.out").exists());
    }

    #[test]
    fn non_utf8_bytes_written_verbatim() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("test");
        let raw = vec![0xff, 0xfe, b'\n'];
        let mut rec = RecordingReporter::default();

        write_cases(&dir, &[pair(&raw, b"ok\n")], &mut rec).unwrap();

        assert_eq!(fs::read(dir.join("sample-1.in")).unwrap(), raw);
        assert_eq!(
            rec.events,
            vec!["wrote sample-1.in (3 bytes)", "wrote sample-1.out (3 bytes)"]
        );
    }
}
