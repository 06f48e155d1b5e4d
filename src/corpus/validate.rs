//! Dataset consistency checks.
//!
//! A corpus directory is consistent when raw and meta files come in pairs,
//! their ids run from 1 to N without gaps, and no raw file is empty. An id 0
//! pair is tolerated next to the numbered ones; that slot is reserved for
//! reference samples and does not take part in the numbering.
use std::collections::BTreeSet;
use std::path::Path;

use crate::error::Error;

/// Validate the corpus directory at `path`.
///
/// Fails with an io error when `path` does not exist or is not a directory,
/// [Error::EmptyDirectory] when it holds nothing, and
/// [Error::InconsistentDataset] when the numbering invariants are broken.
pub fn validate_dataset(path: &Path) -> Result<(), Error> {
    let mut raw_ids = BTreeSet::new();
    let mut meta_ids = BTreeSet::new();
    let mut entries = 0usize;

    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        entries += 1;

        let name = entry.file_name();
        let name = match name.to_str() {
            Some(name) => name,
            None => continue,
        };

        if let Some(id) = file_id(name, "_raw.txt") {
            if entry.metadata()?.len() == 0 {
                return Err(Error::InconsistentDataset(format!(
                    "raw file for article {} is empty",
                    id
                )));
            }
            raw_ids.insert(id);
        } else if let Some(id) = file_id(name, "_meta.json") {
            meta_ids.insert(id);
        }
    }

    if entries == 0 {
        return Err(Error::EmptyDirectory(path.to_path_buf()));
    }

    // id 0 is the reference slot; numbering applies from 1 upwards
    raw_ids.remove(&0);
    meta_ids.remove(&0);

    if raw_ids.len() != meta_ids.len() {
        return Err(Error::InconsistentDataset(format!(
            "{} raw files vs {} meta files",
            raw_ids.len(),
            meta_ids.len()
        )));
    }

    for (wanted, (raw, meta)) in (1..).zip(raw_ids.iter().zip(meta_ids.iter())) {
        if *raw != wanted || *meta != wanted {
            return Err(Error::InconsistentDataset(format!(
                "article {} is missing: ids must run from 1 to {} without gaps",
                wanted,
                raw_ids.len()
            )));
        }
    }

    Ok(())
}

/// Extract the numeric id from a file named `{id}{suffix}`.
fn file_id(name: &str, suffix: &str) -> Option<usize> {
    name.strip_suffix(suffix)?.parse::<usize>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::Article;

    /// Build a directory with `raw_n` raw files and `meta_n` meta files.
    fn generate_dataset(raw_n: usize, meta_n: usize, raw_empty: bool) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for id in 1..=raw_n {
            let text = if raw_empty { "" } else { "Текст статьи." };
            std::fs::write(Article::raw_path(dir.path(), id), text).unwrap();
        }
        for id in 1..=meta_n {
            std::fs::write(Article::meta_path(dir.path(), id), "{\"id\": 0}").unwrap();
        }
        dir
    }

    #[test]
    fn test_accepts_consistent_dataset() {
        let dir = generate_dataset(5, 5, false);
        validate_dataset(dir.path()).unwrap();
    }

    #[test]
    fn test_fails_given_non_existent_path() {
        let result = validate_dataset(Path::new("non_existent_path"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_fails_given_file_path() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let result = validate_dataset(f.path());
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_fails_given_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = validate_dataset(dir.path());
        assert!(matches!(result, Err(Error::EmptyDirectory(_))));
    }

    #[test]
    fn test_fails_given_broken_numbering() {
        let dir = generate_dataset(5, 5, false);
        std::fs::remove_file(Article::raw_path(dir.path(), 1)).unwrap();
        let result = validate_dataset(dir.path());
        assert!(matches!(result, Err(Error::InconsistentDataset(_))));
    }

    #[test]
    fn test_fails_given_imbalanced_dataset() {
        let dir = generate_dataset(3, 2, false);
        let result = validate_dataset(dir.path());
        assert!(matches!(result, Err(Error::InconsistentDataset(_))));
    }

    #[test]
    fn test_fails_given_empty_raw_files() {
        let dir = generate_dataset(5, 5, true);
        let result = validate_dataset(dir.path());
        assert!(matches!(result, Err(Error::InconsistentDataset(_))));
    }

    #[test]
    fn test_tolerates_reference_slot() {
        let dir = generate_dataset(3, 3, false);
        std::fs::write(Article::raw_path(dir.path(), 0), "эталонный текст").unwrap();
        std::fs::write(Article::meta_path(dir.path(), 0), "{\"id\": 0}").unwrap();
        validate_dataset(dir.path()).unwrap();
    }
}
