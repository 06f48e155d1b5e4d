/*! Part-of-speech frequency pipeline.

Counts the primary analyzer tags found in each article's single-tagged
artifact, stores the counts in the `pos_frequencies` field of the meta
sidecar and writes a per-article `{id}_frequencies.csv` report sorted by
descending count. Chart rendering is left to external tooling fed by the
CSV.
!*/
use std::collections::BTreeMap;

use itertools::Itertools;
use lazy_static::lazy_static;
use log::{info, warn};
use regex::Regex;
use serde::Serialize;

use crate::article::{Article, ArtifactType};
use crate::corpus::CorpusManager;
use crate::error::Error;
use crate::morph::POS_TAGS;

use super::Pipeline;

lazy_static! {
    /// POS tag opening a `<...>` tag group, e.g. `S` in `<S,жен,од=род,мн>`.
    static ref TAG: Regex = Regex::new(r"<([A-Z]+)[,=]?").unwrap();
}

/// A serializable report row: tag, count and the tag's share of all tags.
#[derive(Debug, Serialize)]
struct FrequencyRecord {
    tag: String,
    count: u64,
    share: f64,
}

pub struct PosFrequencyPipeline<'a> {
    corpus: &'a CorpusManager,
}

impl<'a> PosFrequencyPipeline<'a> {
    pub fn new(corpus: &'a CorpusManager) -> Self {
        Self { corpus }
    }

    fn process_article(&self, article: &Article) -> Result<(), Error> {
        let dir = self.corpus.dir();
        let path = Article::artifact_path(dir, article.article_id(), ArtifactType::SingleTagged);
        let tagged = std::fs::read_to_string(&path)?;
        if tagged.trim().is_empty() {
            return Err(Error::EmptyFile(path));
        }

        let frequencies = frequencies(&tagged);
        for tag in frequencies.keys() {
            if !POS_TAGS.contains(&tag.as_str()) {
                warn!("unknown tag {} in article {}", tag, article.article_id());
            }
        }

        let mut article = article.clone();
        article.set_pos_frequencies(frequencies.clone());
        article.save_meta(dir)?;

        write_report(dir, article.article_id(), &frequencies)?;
        Ok(())
    }
}

impl Pipeline<()> for PosFrequencyPipeline<'_> {
    fn run(&self) -> Result<(), Error> {
        for (article_id, article) in self.corpus.articles() {
            info!("counting tag frequencies for article {}", article_id);
            self.process_article(article)?;
        }
        Ok(())
    }
}

/// Count POS tags in a single-tagged text.
fn frequencies(tagged: &str) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for capture in TAG.captures_iter(tagged) {
        *counts.entry(capture[1].to_string()).or_insert(0) += 1;
    }
    counts
}

/// Write the per-article csv report, most frequent tags first.
fn write_report(
    dir: &std::path::Path,
    article_id: usize,
    frequencies: &BTreeMap<String, u64>,
) -> Result<(), Error> {
    let total: u64 = frequencies.values().sum();
    let mut out = csv::WriterBuilder::new().from_path(Article::frequencies_path(dir, article_id))?;

    for (tag, count) in frequencies
        .iter()
        .sorted_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)))
    {
        out.serialize(FrequencyRecord {
            tag: tag.clone(),
            count: *count,
            share: *count as f64 / total as f64,
        })?;
    }
    out.flush()?;
    Ok(())
}
