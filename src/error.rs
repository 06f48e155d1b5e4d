//! Error enum
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Request(reqwest::Error),
    UrlParse(url::ParseError),
    Csv(csv::Error),
    DateParse(chrono::ParseError),
    Glob(glob::GlobError),
    GlobPattern(glob::PatternError),
    /// Seed URL list is missing, empty or contains non-`http(s)` entries.
    IncorrectUrl(String),
    /// Article cap is missing, not an integer or not positive.
    IncorrectArticleCount(String),
    /// Article cap exceeds the crawl limit.
    ArticleCountOutOfRange(i64),
    EmptyDirectory(PathBuf),
    InconsistentDataset(String),
    EmptyFile(PathBuf),
    Analyzer(String),
    Custom(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Request(e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Error {
        Error::UrlParse(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<chrono::ParseError> for Error {
    fn from(e: chrono::ParseError) -> Error {
        Error::DateParse(e)
    }
}

impl From<glob::GlobError> for Error {
    fn from(e: glob::GlobError) -> Error {
        Error::Glob(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Error {
        Error::GlobPattern(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
