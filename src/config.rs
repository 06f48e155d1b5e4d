/*! Crawler configuration loading and validation.

The crawler is driven by a small JSON file holding the seed pages and the
number of articles to collect:

```json
{
    "seed_urls": ["https://elementy.ru/novosti_nauki"],
    "total_articles_to_find_and_parse": 50
}
```

Field types are checked by hand rather than through derive so that a malformed
file yields the precise configuration error instead of a generic decoding one.
!*/
use std::fs::File;
use std::path::Path;

use serde_json::Value;
use url::Url;

use crate::error::Error;

/// Hard cap on the number of articles a single run is allowed to collect.
pub const MAX_ARTICLES: i64 = 200;

#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    seed_urls: Vec<String>,
    total_articles: i64,
}

impl CrawlerConfig {
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let f = File::open(path)?;
        let document: Value = serde_json::from_reader(f)?;
        Self::from_value(&document)
    }

    fn from_value(document: &Value) -> Result<Self, Error> {
        let seeds = document
            .get("seed_urls")
            .and_then(Value::as_array)
            .ok_or_else(|| Error::IncorrectUrl("seed_urls must be a list of strings".to_string()))?;

        let seed_urls = seeds
            .iter()
            .map(|seed| {
                seed.as_str().map(str::to_string).ok_or_else(|| {
                    Error::IncorrectUrl(format!("seed entry is not a string: {}", seed))
                })
            })
            .collect::<Result<Vec<String>, Error>>()?;

        let total_articles = document
            .get("total_articles_to_find_and_parse")
            .and_then(Value::as_i64)
            .ok_or_else(|| {
                Error::IncorrectArticleCount(
                    "total_articles_to_find_and_parse must be an integer".to_string(),
                )
            })?;

        Ok(Self {
            seed_urls,
            total_articles,
        })
    }

    /// Check seed URLs and the article cap, returning parsed seeds and the cap.
    pub fn validate(&self) -> Result<(Vec<Url>, usize), Error> {
        if self.seed_urls.is_empty() {
            return Err(Error::IncorrectUrl(
                "seed_urls must not be empty".to_string(),
            ));
        }

        let seeds = self
            .seed_urls
            .iter()
            .map(|seed| {
                let url = Url::parse(seed).map_err(|_| Error::IncorrectUrl(seed.clone()))?;
                match url.scheme() {
                    "http" | "https" => Ok(url),
                    _ => Err(Error::IncorrectUrl(seed.clone())),
                }
            })
            .collect::<Result<Vec<Url>, Error>>()?;

        if self.total_articles <= 0 {
            return Err(Error::IncorrectArticleCount(format!(
                "expected a positive article count, got {}",
                self.total_articles
            )));
        }
        if self.total_articles > MAX_ARTICLES {
            return Err(Error::ArticleCountOutOfRange(self.total_articles));
        }

        Ok((seeds, self.total_articles as usize))
    }
}

/// Load and validate the config at `path` in one step.
pub fn validate_config(path: &Path) -> Result<(Vec<Url>, usize), Error> {
    CrawlerConfig::from_path(path)?.validate()
}
