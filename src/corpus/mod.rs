/*! Corpus storage management.

[CorpusManager] scans a corpus directory for files following the
`{id}_raw.txt` naming convention and keeps an ordered in-memory map of
id → [Article]. Articles that already carry a meta sidecar are hydrated from
it; raw-only entries get an empty shell.
!*/
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use glob::glob;
use log::warn;

use crate::article::Article;
use crate::error::Error;

mod validate;

pub use validate::validate_dataset;

pub struct CorpusManager {
    dir: PathBuf,
    storage: BTreeMap<usize, Article>,
}

impl CorpusManager {
    /// Scan `dir` and register every dataset entry.
    pub fn new(dir: &Path) -> Result<Self, Error> {
        let dir_str = dir
            .to_str()
            .ok_or_else(|| Error::Custom(format!("invalid corpus path: {:?}", dir)))?;
        let pattern = format!("{}/*_raw.txt", dir_str);

        let mut storage = BTreeMap::new();
        for entry in glob(&pattern)? {
            let path = entry?;
            let article_id = match raw_file_id(&path) {
                Some(id) => id,
                None => {
                    warn!("skipping file with no numeric id: {:?}", path);
                    continue;
                }
            };

            let meta_path = Article::meta_path(dir, article_id);
            let article = if meta_path.exists() {
                Article::from_meta_file(&meta_path)?
            } else {
                Article::new(article_id, "")
            };
            storage.insert(article_id, article);
        }

        Ok(Self {
            dir: dir.to_path_buf(),
            storage,
        })
    }

    /// Get a reference to the id → article storage.
    pub fn articles(&self) -> &BTreeMap<usize, Article> {
        &self.storage
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Extract the numeric id from a `{id}_raw.txt` path.
fn raw_file_id(path: &Path) -> Option<usize> {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.split('_').next())
        .and_then(|id| id.parse::<usize>().ok())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_scan_registers_raw_only_entries() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(Article::raw_path(dir.path(), 1), "первый текст").unwrap();
        std::fs::write(Article::raw_path(dir.path(), 2), "второй текст").unwrap();

        let manager = CorpusManager::new(dir.path()).unwrap();
        assert_eq!(manager.articles().len(), 2);
        assert!(manager.articles().contains_key(&1));
        assert!(manager.articles().contains_key(&2));
    }

    #[test]
    fn test_scan_hydrates_from_meta() {
        let dir = tempfile::tempdir().unwrap();
        let mut article = Article::new(1, "https://elementy.ru/novosti_nauki/434000");
        article.set_title("Заголовок");
        article.set_date(NaiveDate::from_ymd_opt(2022, 4, 15).unwrap());
        article.set_text("Текст статьи.");
        article.save_raw(dir.path()).unwrap();

        let manager = CorpusManager::new(dir.path()).unwrap();
        let stored = &manager.articles()[&1];
        assert_eq!(stored.title(), "Заголовок");
        assert_eq!(stored.url(), "https://elementy.ru/novosti_nauki/434000");
        assert_eq!(stored.read_raw(dir.path()).unwrap(), "Текст статьи.");
    }

    #[test]
    fn test_scan_skips_foreign_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(Article::raw_path(dir.path(), 1), "текст").unwrap();
        std::fs::write(dir.path().join("notes_raw.txt"), "not an article").unwrap();

        let manager = CorpusManager::new(dir.path()).unwrap();
        assert_eq!(manager.articles().len(), 1);
    }
}
