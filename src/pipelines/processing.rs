/*! Morphological text-processing pipeline.

For each registered article the pipeline reads the raw body, tokenizes it
into lowercased alphabetic words, queries both analyzers and writes the three
derived artifacts:

- `{id}_cleaned.txt`: the lowercased words, punctuation stripped;
- `{id}_single_tagged.txt`: `lemma<tags>` per word, primary analyzer;
- `{id}_multiple_tagged.txt`: `lemma<tags>(tags)` per word, both analyzers.

Words the primary analyzer cannot handle stay in the cleaned artifact but are
left out of the tagged ones. Articles that fail (unreadable raw file, analyzer
failure) are logged and skipped; the pipeline keeps going.
!*/
use itertools::Itertools;
use log::{error, info};
use unicode_segmentation::UnicodeSegmentation;

use crate::article::{Article, ArtifactType};
use crate::corpus::CorpusManager;
use crate::error::Error;
use crate::morph::{MorphologicalToken, Morphology};

use super::Pipeline;

pub struct TextProcessingPipeline<'a> {
    corpus: &'a CorpusManager,
    single: Box<dyn Morphology>,
    multiple: Box<dyn Morphology>,
}

impl<'a> TextProcessingPipeline<'a> {
    pub fn new(
        corpus: &'a CorpusManager,
        single: Box<dyn Morphology>,
        multiple: Box<dyn Morphology>,
    ) -> Self {
        Self {
            corpus,
            single,
            multiple,
        }
    }

    /// Tokenize `raw` and run both analyzers over the words.
    fn process(&self, raw: &str) -> Result<Vec<MorphologicalToken>, Error> {
        let words = clean_words(raw);
        let singles = self.single.analyze(&words)?;
        let multiples = self.multiple.analyze(&words)?;

        let tokens = words
            .iter()
            .zip(singles.iter().zip(multiples.iter()))
            .map(|(word, (single, multiple))| {
                let mut token = MorphologicalToken::new(word);
                if let Some(analysis) = single {
                    token.set_normalized(&analysis.lemma);
                    token.set_tags_single(&analysis.tags);
                }
                if let Some(analysis) = multiple {
                    token.set_tags_multiple(&analysis.tags);
                }
                token
            })
            .collect();

        Ok(tokens)
    }

    fn process_article(&self, article: &Article) -> Result<(), Error> {
        let dir = self.corpus.dir();
        let raw = article.read_raw(dir)?;
        let tokens = self.process(&raw)?;

        let cleaned = tokens.iter().map(MorphologicalToken::cleaned).join(" ");
        let single_tagged = tokens
            .iter()
            .filter(|token| token.has_single_analysis())
            .map(MorphologicalToken::single_tagged)
            .join(" ");
        let multiple_tagged = tokens
            .iter()
            .filter(|token| token.has_full_analysis())
            .map(MorphologicalToken::multiple_tagged)
            .join(" ");

        article.save_artifact(dir, ArtifactType::Cleaned, &cleaned)?;
        article.save_artifact(dir, ArtifactType::SingleTagged, &single_tagged)?;
        article.save_artifact(dir, ArtifactType::MultipleTagged, &multiple_tagged)?;
        Ok(())
    }
}

impl Pipeline<()> for TextProcessingPipeline<'_> {
    fn run(&self) -> Result<(), Error> {
        let mut processed = 0;
        for (article_id, article) in self.corpus.articles() {
            info!("processing article {}", article_id);
            match self.process_article(article) {
                Ok(()) => processed += 1,
                Err(e) => error!("failed to process article {}: {:?}", article_id, e),
            }
        }
        info!(
            "processed {}/{} articles",
            processed,
            self.corpus.articles().len()
        );
        Ok(())
    }
}

/// Lowercased alphabetic words of `text`, in order. Punctuation, digits and
/// mixed tokens are dropped.
pub fn clean_words(text: &str) -> Vec<String> {
    text.unicode_words()
        .filter(|word| word.chars().all(char::is_alphabetic))
        .map(str::to_lowercase)
        .collect()
}
