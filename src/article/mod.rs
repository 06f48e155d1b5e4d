/*! Article entity and its on-disk layout.

An [Article] is the unit of the corpus. Each article owns a numeric id and is
persisted as a pair of flat files in the corpus directory: `{id}_raw.txt` with
the article body and `{id}_meta.json` with the bibliographic sidecar. Derived
artifacts produced by the pipelines live next to them, named by the same id
and an [ArtifactType] suffix.
!*/
use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Date format used in meta sidecars.
pub const META_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Derived artifact kinds produced by the processing pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactType {
    Cleaned,
    SingleTagged,
    MultipleTagged,
}

impl ArtifactType {
    pub fn suffix(&self) -> &'static str {
        match self {
            ArtifactType::Cleaned => "cleaned",
            ArtifactType::SingleTagged => "single_tagged",
            ArtifactType::MultipleTagged => "multiple_tagged",
        }
    }
}

/// A single news article: bibliographic fields plus the raw body.
///
/// The body is never serialized into the meta sidecar; it travels through
/// `{id}_raw.txt` only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ArticleSer", into = "ArticleSer")]
pub struct Article {
    article_id: usize,
    url: String,
    title: String,
    date: Option<NaiveDateTime>,
    author: String,
    topics: Vec<String>,
    text: String,
    pos_frequencies: Option<BTreeMap<String, u64>>,
}

/// Serializable version of [Article], matching the meta sidecar shape.
#[derive(Serialize, Deserialize)]
struct ArticleSer {
    id: usize,
    url: String,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    author: String,
    topics: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pos_frequencies: Option<BTreeMap<String, u64>>,
}

impl From<Article> for ArticleSer {
    fn from(a: Article) -> Self {
        Self {
            id: a.article_id,
            url: a.url,
            title: a.title,
            date: a.date.map(|d| d.format(META_DATE_FORMAT).to_string()),
            author: a.author,
            topics: a.topics,
            pos_frequencies: a.pos_frequencies,
        }
    }
}

impl TryFrom<ArticleSer> for Article {
    type Error = chrono::ParseError;

    fn try_from(a: ArticleSer) -> Result<Self, Self::Error> {
        let date = match a.date {
            Some(d) => Some(NaiveDateTime::parse_from_str(&d, META_DATE_FORMAT)?),
            None => None,
        };
        Ok(Self {
            article_id: a.id,
            url: a.url,
            title: a.title,
            date,
            author: a.author,
            topics: a.topics,
            text: String::new(),
            pos_frequencies: a.pos_frequencies,
        })
    }
}

impl Article {
    /// An empty shell carrying only identity; fields are filled by the page
    /// parser or hydrated from a meta sidecar.
    pub fn new(article_id: usize, url: &str) -> Self {
        Self {
            article_id,
            url: url.to_string(),
            title: String::new(),
            date: None,
            author: String::new(),
            topics: Vec::new(),
            text: String::new(),
            pos_frequencies: None,
        }
    }

    pub fn article_id(&self) -> usize {
        self.article_id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> Option<&NaiveDateTime> {
        self.date.as_ref()
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn pos_frequencies(&self) -> Option<&BTreeMap<String, u64>> {
        self.pos_frequencies.as_ref()
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    /// Set the publication date. Dates coming from article pages carry no
    /// time of day; midnight is used.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = Some(date.and_time(chrono::NaiveTime::MIN));
    }

    pub fn set_author(&mut self, author: &str) {
        self.author = author.to_string();
    }

    pub fn set_topics(&mut self, topics: Vec<String>) {
        self.topics = topics;
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub fn set_pos_frequencies(&mut self, frequencies: BTreeMap<String, u64>) {
        self.pos_frequencies = Some(frequencies);
    }

    /// `{id}_raw.txt` under `dir`.
    pub fn raw_path(dir: &Path, article_id: usize) -> PathBuf {
        dir.join(format!("{}_raw.txt", article_id))
    }

    /// `{id}_meta.json` under `dir`.
    pub fn meta_path(dir: &Path, article_id: usize) -> PathBuf {
        dir.join(format!("{}_meta.json", article_id))
    }

    /// `{id}_{suffix}.txt` under `dir`.
    pub fn artifact_path(dir: &Path, article_id: usize, kind: ArtifactType) -> PathBuf {
        dir.join(format!("{}_{}.txt", article_id, kind.suffix()))
    }

    /// `{id}_frequencies.csv` under `dir`.
    pub fn frequencies_path(dir: &Path, article_id: usize) -> PathBuf {
        dir.join(format!("{}_frequencies.csv", article_id))
    }

    /// Hydrate an article from its meta sidecar. The body is left empty and
    /// can be read back with [Article::read_raw].
    pub fn from_meta_file(path: &Path) -> Result<Self, Error> {
        let f = File::open(path)?;
        let article = serde_json::from_reader(f)?;
        Ok(article)
    }

    /// Persist the raw body and the meta sidecar.
    pub fn save_raw(&self, dir: &Path) -> Result<(), Error> {
        std::fs::write(Self::raw_path(dir, self.article_id), &self.text)?;
        self.save_meta(dir)
    }

    /// Rewrite the meta sidecar only.
    pub fn save_meta(&self, dir: &Path) -> Result<(), Error> {
        let f = File::create(Self::meta_path(dir, self.article_id))?;
        serde_json::to_writer_pretty(f, self)?;
        Ok(())
    }

    pub fn read_raw(&self, dir: &Path) -> Result<String, Error> {
        let raw = std::fs::read_to_string(Self::raw_path(dir, self.article_id))?;
        Ok(raw)
    }

    /// Write a derived artifact of the given kind.
    pub fn save_artifact(&self, dir: &Path, kind: ArtifactType, text: &str) -> Result<(), Error> {
        std::fs::write(Self::artifact_path(dir, self.article_id, kind), text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_article() -> Article {
        let mut article = Article::new(3, "https://elementy.ru/novosti_nauki/434000");
        article.set_title("Новая статья");
        article.set_date(NaiveDate::from_ymd_opt(2022, 3, 18).unwrap());
        article.set_author("И. Иванов");
        article.set_topics(vec!["Биология".to_string()]);
        article.set_text("Текст статьи.");
        article
    }

    #[test]
    fn test_paths_follow_naming_convention() {
        let dir = Path::new("corpus");
        assert_eq!(Article::raw_path(dir, 7), dir.join("7_raw.txt"));
        assert_eq!(Article::meta_path(dir, 7), dir.join("7_meta.json"));
        assert_eq!(
            Article::artifact_path(dir, 7, ArtifactType::Cleaned),
            dir.join("7_cleaned.txt")
        );
        assert_eq!(
            Article::artifact_path(dir, 7, ArtifactType::SingleTagged),
            dir.join("7_single_tagged.txt")
        );
        assert_eq!(
            Article::artifact_path(dir, 7, ArtifactType::MultipleTagged),
            dir.join("7_multiple_tagged.txt")
        );
        assert_eq!(
            Article::frequencies_path(dir, 7),
            dir.join("7_frequencies.csv")
        );
    }

    #[test]
    fn test_save_and_hydrate() {
        let dir = tempfile::tempdir().unwrap();
        let article = sample_article();
        article.save_raw(dir.path()).unwrap();

        let raw = std::fs::read_to_string(Article::raw_path(dir.path(), 3)).unwrap();
        assert_eq!(raw, "Текст статьи.");

        let hydrated = Article::from_meta_file(&Article::meta_path(dir.path(), 3)).unwrap();
        assert_eq!(hydrated.article_id(), 3);
        assert_eq!(hydrated.url(), article.url());
        assert_eq!(hydrated.title(), article.title());
        assert_eq!(hydrated.date(), article.date());
        assert_eq!(hydrated.author(), article.author());
        assert_eq!(hydrated.topics(), article.topics());
        // the body stays in the raw file
        assert!(hydrated.text().is_empty());
    }

    #[test]
    fn test_meta_shape() {
        let article = sample_article();
        let meta: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&article).unwrap()).unwrap();

        assert_eq!(meta["id"], 3);
        assert_eq!(meta["date"], "2022-03-18 00:00:00");
        assert!(meta.get("text").is_none());
        assert!(meta.get("pos_frequencies").is_none());
    }

    #[test]
    fn test_meta_keeps_frequencies() {
        let mut article = sample_article();
        article.set_pos_frequencies([("S".to_string(), 12u64)].into_iter().collect());
        let meta: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&article).unwrap()).unwrap();
        assert_eq!(meta["pos_frequencies"]["S"], 12);
    }

    #[test]
    fn test_save_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let article = sample_article();
        article
            .save_artifact(dir.path(), ArtifactType::Cleaned, "текст статьи")
            .unwrap();
        let cleaned =
            std::fs::read_to_string(Article::artifact_path(dir.path(), 3, ArtifactType::Cleaned))
                .unwrap();
        assert_eq!(cleaned, "текст статьи");
    }
}
