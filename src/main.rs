//! # Vestnik
//!
//! Vestnik collects articles from a news site into a flat-file corpus and
//! annotates them with two external morphological analyzers.
//!
//! ## Getting started
//!
//! ```sh
//! vestnik 0.1.0
//! news corpus collection and annotation tool.
//!
//! USAGE:
//!     vestnik <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     check          Validate a corpus directory
//!     crawl          Collect articles from the configured seed pages
//!     frequencies    Compute part-of-speech frequencies
//!     help           Prints this message or the help of the given subcommand(s)
//!     process        Run the morphological processing pipeline
//! ```
use structopt::StructOpt;

#[macro_use]
extern crate log;

use vestnik::cli;
use vestnik::config;
use vestnik::corpus::{validate_dataset, CorpusManager};
use vestnik::crawler::{self, ArticleParser, Crawler};
use vestnik::error::Error;
use vestnik::morph::{Mystem, Pymorphy};
use vestnik::pipelines::{Pipeline, PosFrequencyPipeline, TextProcessingPipeline};

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Vestnik::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Vestnik::Crawl(c) => {
            let (seeds, max_articles) = config::validate_config(&c.config)?;
            crawler::prepare_environment(&c.dst)?;

            let mut crawler = Crawler::new(seeds, max_articles);
            crawler.find_articles();

            let mut next_id = 1;
            for url in crawler.urls() {
                let parser = ArticleParser::new(crawler.client(), url.clone(), next_id);
                match parser.parse() {
                    Ok(article) => {
                        article.save_raw(&c.dst)?;
                        info!("saved article {} from {}", next_id, url);
                        next_id += 1;
                    }
                    Err(e) => error!("skipping {}: {:?}", url, e),
                }
                crawler::politeness_delay();
            }
            info!("saved {} articles to {:?}", next_id - 1, c.dst);
        }

        cli::Vestnik::Process(p) => {
            validate_dataset(&p.src)?;
            let corpus = CorpusManager::new(&p.src)?;
            let pipeline = TextProcessingPipeline::new(
                &corpus,
                Box::new(Mystem::new(&p.mystem_path)),
                Box::new(Pymorphy::new(&p.pymorphy_path)),
            );
            pipeline.run()?;
        }

        cli::Vestnik::Frequencies(f) => {
            validate_dataset(&f.src)?;
            let corpus = CorpusManager::new(&f.src)?;
            PosFrequencyPipeline::new(&corpus).run()?;
        }

        cli::Vestnik::Check(c) => {
            validate_dataset(&c.src)?;
            println!("dataset at {:?} is consistent", c.src);
        }
    };
    Ok(())
}
