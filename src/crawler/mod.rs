/*! Sequential article discovery.

The [Crawler] walks the configured seed pages one blocking HTTP GET at a
time, extracts article links and accumulates them up to the configured cap.
Seed pages that answer with a non-success status are skipped and never
retried. A short randomized delay between requests keeps the crawl polite;
there is no rate-limit machinery beyond that.
!*/
use std::path::Path;
use std::time::Duration;

use lazy_static::lazy_static;
use log::{debug, error, info, warn};
use rand::Rng;
use scraper::{Html, Selector};
use url::Url;

use crate::error::Error;

mod parser;

pub use parser::ArticleParser;

/// Site base against which relative article links are resolved.
pub const BASE_URL: &str = "https://elementy.ru/";

/// Links into the popular-science library section are not articles.
const LIBRARY_SECTION: &str = "nauchno-populyarnaya_biblioteka";

lazy_static! {
    static ref LINK_SELECTOR: Selector = Selector::parse("a.nohover").unwrap();
}

pub struct Crawler {
    seed_urls: Vec<Url>,
    max_articles: usize,
    urls: Vec<Url>,
    client: reqwest::blocking::Client,
}

impl Crawler {
    pub fn new(seed_urls: Vec<Url>, max_articles: usize) -> Self {
        Self {
            seed_urls,
            max_articles,
            urls: Vec::new(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Walk the seed pages and accumulate article URLs.
    pub fn find_articles(&mut self) {
        for seed in self.seed_urls.clone() {
            debug!("fetching seed {}", seed);
            let response = match self.client.get(seed.clone()).send() {
                Ok(response) => response,
                Err(e) => {
                    error!("failed to fetch seed {}: {:?}", seed, e);
                    continue;
                }
            };
            if !response.status().is_success() {
                warn!("seed {} answered {}, skipping", seed, response.status());
                continue;
            }
            let body = match response.text() {
                Ok(body) => body,
                Err(e) => {
                    error!("failed to read seed {}: {:?}", seed, e);
                    continue;
                }
            };

            let found = self.extract_urls(&Html::parse_document(&body));
            debug!("{} new article links on {}", found, seed);

            if self.urls.len() >= self.max_articles {
                break;
            }
            politeness_delay();
        }
        info!("collected {} article urls", self.urls.len());
    }

    /// Pull article links out of a seed page, resolving them against the
    /// site base. Returns the number of newly accumulated URLs.
    fn extract_urls(&mut self, page: &Html) -> usize {
        let base = Url::parse(BASE_URL).unwrap();
        let mut found = 0;

        for element in page.select(&LINK_SELECTOR) {
            if self.urls.len() >= self.max_articles {
                break;
            }
            let href = match element.value().attr("href") {
                Some(href) => href,
                None => continue,
            };
            let full = match base.join(href) {
                Ok(full) => full,
                Err(e) => {
                    warn!("unparseable link {}: {:?}", href, e);
                    continue;
                }
            };
            if full.as_str().contains(LIBRARY_SECTION) {
                continue;
            }
            if !self.urls.contains(&full) {
                self.urls.push(full);
                found += 1;
            }
        }

        found
    }

    /// Get a reference to the accumulated article URLs.
    pub fn urls(&self) -> &[Url] {
        &self.urls
    }

    /// Get a reference to the configured seed URLs.
    pub fn seed_urls(&self) -> &[Url] {
        &self.seed_urls
    }

    pub fn client(&self) -> &reqwest::blocking::Client {
        &self.client
    }
}

/// Sleep for a short randomized interval between requests.
pub fn politeness_delay() {
    let ms = rand::thread_rng().gen_range(500..1500);
    std::thread::sleep(Duration::from_millis(ms));
}

/// Wipe and recreate the corpus directory.
pub fn prepare_environment(dst: &Path) -> Result<(), Error> {
    if dst.exists() {
        std::fs::remove_dir_all(dst)?;
    }
    std::fs::create_dir_all(dst)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_page() -> Html {
        Html::parse_document(
            r#"<html><body>
            <a class="nohover" href="novosti_nauki/434100">Первая</a>
            <a class="nohover" href="novosti_nauki/434101">Вторая</a>
            <a class="nohover" href="novosti_nauki/434100">Дубль первой</a>
            <a class="nohover" href="nauchno-populyarnaya_biblioteka/1234">Библиотека</a>
            <a href="novosti_nauki/434102">Без класса</a>
            </body></html>"#,
        )
    }

    #[test]
    fn test_extract_urls_resolves_and_dedupes() {
        let mut crawler = Crawler::new(Vec::new(), 10);
        let found = crawler.extract_urls(&seed_page());

        assert_eq!(found, 2);
        assert_eq!(
            crawler.urls()[0].as_str(),
            "https://elementy.ru/novosti_nauki/434100"
        );
        assert_eq!(
            crawler.urls()[1].as_str(),
            "https://elementy.ru/novosti_nauki/434101"
        );
    }

    #[test]
    fn test_extract_urls_respects_cap() {
        let mut crawler = Crawler::new(Vec::new(), 1);
        crawler.extract_urls(&seed_page());
        assert_eq!(crawler.urls().len(), 1);
    }

    #[test]
    fn test_extract_urls_skips_library_links() {
        let mut crawler = Crawler::new(Vec::new(), 10);
        crawler.extract_urls(&seed_page());
        assert!(crawler
            .urls()
            .iter()
            .all(|url| !url.as_str().contains(LIBRARY_SECTION)));
    }

    #[test]
    fn test_prepare_environment_wipes_existing_state() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("articles");
        std::fs::create_dir(&dst).unwrap();
        std::fs::write(dst.join("1_raw.txt"), "старый текст").unwrap();

        prepare_environment(&dst).unwrap();
        assert!(dst.exists());
        assert_eq!(std::fs::read_dir(&dst).unwrap().count(), 0);
    }
}
