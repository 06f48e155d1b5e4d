//! Article page parsing.
//!
//! Extracts the bibliographic fields and the body out of a fetched article
//! page. The selectors match the elementy.ru article layout.
use chrono::NaiveDate;
use itertools::Itertools;
use lazy_static::lazy_static;
use log::warn;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::article::Article;
use crate::error::Error;

/// Date format used on article pages.
const PAGE_DATE_FORMAT: &str = "%d.%m.%Y";

/// Everything after this marker is a source attribution, not article text.
const SOURCE_TRAILER: &str = "Источник:";

lazy_static! {
    static ref TITLE: Selector = Selector::parse("h1").unwrap();
    static ref DATE: Selector = Selector::parse("span.date").unwrap();
    static ref SUBLINK: Selector = Selector::parse("div.sublink a").unwrap();
    static ref BODY: Selector = Selector::parse("div.memo p").unwrap();
}

/// One-shot parser turning an article page into a filled [Article].
pub struct ArticleParser<'a> {
    client: &'a reqwest::blocking::Client,
    url: Url,
    article_id: usize,
}

impl<'a> ArticleParser<'a> {
    pub fn new(client: &'a reqwest::blocking::Client, url: Url, article_id: usize) -> Self {
        Self {
            client,
            url,
            article_id,
        }
    }

    /// Fetch the page and extract the article.
    pub fn parse(&self) -> Result<Article, Error> {
        let response = self.client.get(self.url.clone()).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Custom(format!(
                "article page {} answered {}",
                self.url, status
            )));
        }
        let page = Html::parse_document(&response.text()?);
        parse_page(&page, self.url.as_str(), self.article_id)
    }
}

/// Extract an [Article] from an already fetched page.
fn parse_page(page: &Html, url: &str, article_id: usize) -> Result<Article, Error> {
    let mut article = Article::new(article_id, url);
    fill_text(page, &mut article)?;
    fill_meta(page, &mut article)?;
    Ok(article)
}

fn fill_text(page: &Html, article: &mut Article) -> Result<(), Error> {
    let text = page
        .select(&BODY)
        .map(|paragraph| element_text(&paragraph))
        .join("\n");

    let text = match text.split_once(SOURCE_TRAILER) {
        Some((body, _)) => body,
        None => text.as_str(),
    };
    let text = text.trim();

    if text.is_empty() {
        return Err(Error::Custom(format!(
            "article {} has an empty body",
            article.url()
        )));
    }
    article.set_text(text);
    Ok(())
}

fn fill_meta(page: &Html, article: &mut Article) -> Result<(), Error> {
    let title = page
        .select(&TITLE)
        .next()
        .ok_or_else(|| Error::Custom(format!("article {} has no title", article.url())))?;
    article.set_title(element_text(&title).trim());

    let date = page
        .select(&DATE)
        .next()
        .ok_or_else(|| Error::Custom(format!("article {} has no date", article.url())))?;
    let date = NaiveDate::parse_from_str(element_text(&date).trim(), PAGE_DATE_FORMAT)?;
    article.set_date(date);

    // first sublink is the author, second the topic
    let mut sublinks = page.select(&SUBLINK);
    let author = sublinks
        .next()
        .ok_or_else(|| Error::Custom(format!("article {} has no author", article.url())))?;
    article.set_author(element_text(&author).trim());

    match sublinks.next() {
        Some(topic) => article.set_topics(vec![element_text(&topic).trim().to_string()]),
        None => warn!("article {} has no topic link", article.url()),
    }

    Ok(())
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>()
}
