use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::RunnerError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub name: String,
    pub input: PathBuf,
    pub expected: Option<PathBuf>,
}

/// Collect `<stem>.in` / `<stem>.out` pairs from `dir`, sorted by stem.
///
/// A `.out` without its `.in` is an error; an `.in` alone is a valid case.
pub fn discover_cases(dir: &Path) -> Result<Vec<TestCase>, RunnerError> {
    let entries = fs::read_dir(dir).map_err(RunnerError::io(dir))?;

    let mut inputs: BTreeMap<String, PathBuf> = BTreeMap::new();
    let mut outputs: Vec<(String, PathBuf)> = Vec::new();
    for entry in entries {
        let path = entry.map_err(RunnerError::io(dir))?.path();
        if !path.is_file() {
            continue;
        }
        let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
            continue;
        };
        match path.extension().and_then(|e| e.to_str()) {
            Some("in") => {
                inputs.insert(stem, path);
            }
            Some("out") => outputs.push((stem, path)),
            _ => {}
        }
    }

    let mut expected: BTreeMap<String, PathBuf> = BTreeMap::new();
    for (stem, path) in outputs {
        if !inputs.contains_key(&stem) {
            return Err(RunnerError::OrphanOutput(path));
        }
        expected.insert(stem, path);
    }

    Ok(inputs
        .into_iter()
        .map(|(name, input)| TestCase {
            expected: expected.remove(&name),
            name,
            input,
        })
        .collect())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::samples::SamplePair;
    use crate::report::testing::NullReporter;
    use crate::store;

    #[test]
    fn sorted_by_stem_with_optional_output() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();
        fs::write(dir.join("sample-2.in"), "2").unwrap();
        fs::write(dir.join("sample-1.in"), "1").unwrap();
        fs::write(dir.join("sample-1.out"), "1").unwrap();
        fs::write(dir.join("README.md"), "notes").unwrap();

        let cases = discover_cases(dir).unwrap();

        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].name, "sample-1");
        assert_eq!(cases[0].expected, Some(dir.join("sample-1.out")));
        assert_eq!(cases[1].name, "sample-2");
        assert_eq!(cases[1].expected, None);
    }

    #[test]
    fn orphan_output_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("sample-1.in"), "1").unwrap();
        fs::write(tmp.path().join("sample-1.out"), "1").unwrap();
        fs::write(tmp.path().join("extra.out"), "1").unwrap();

        let err = discover_cases(tmp.path()).unwrap_err();

        assert!(matches!(err, RunnerError::OrphanOutput(p) if p.ends_with("extra.out")));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = discover_cases(&tmp.path().join("nope")).unwrap_err();
        assert!(matches!(err, RunnerError::Io { .. }));
    }

    #[test]
    fn reads_back_what_the_store_wrote() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("test");
        let pairs: Vec<SamplePair> = (1..=3)
            .map(|i| SamplePair {
                input: format!("{}\n", i).into_bytes(),
                output: format!("{}\n", i * i).into_bytes(),
            })
            .collect();
        store::write_cases(&dir, &pairs, &mut NullReporter).unwrap();

        let cases = discover_cases(&dir).unwrap();

        assert_eq!(cases.len(), pairs.len());
        for (case, pair) in cases.iter().zip(&pairs) {
            assert_eq!(fs::read(&case.input).unwrap(), pair.input);
            let expected = case.expected.as_ref().unwrap();
            assert_eq!(fs::read(expected).unwrap(), pair.output);
        }
    }
}
