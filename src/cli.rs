//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "vestnik", about = "news corpus collection and annotation tool.")]
/// Holds every command that is callable by the `vestnik` command.
pub enum Vestnik {
    #[structopt(about = "Collect articles from the configured seed pages")]
    Crawl(Crawl),
    #[structopt(about = "Run the morphological processing pipeline")]
    Process(Process),
    #[structopt(about = "Compute part-of-speech frequencies")]
    Frequencies(Frequencies),
    #[structopt(about = "Validate a corpus directory")]
    Check(Check),
}

#[derive(Debug, StructOpt)]
/// Crawl command and parameters.
pub struct Crawl {
    #[structopt(parse(from_os_str), help = "crawler configuration file")]
    pub config: PathBuf,
    #[structopt(parse(from_os_str), help = "corpus destination")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Process command and parameters.
pub struct Process {
    #[structopt(parse(from_os_str), help = "corpus location")]
    pub src: PathBuf,
    #[structopt(
        long = "mystem-path",
        default_value = "mystem",
        help = "primary analyzer binary"
    )]
    pub mystem_path: String,
    #[structopt(
        long = "pymorphy-path",
        default_value = "pymorphy",
        help = "secondary analyzer binary"
    )]
    pub pymorphy_path: String,
}

#[derive(Debug, StructOpt)]
/// Frequencies command and parameters.
pub struct Frequencies {
    #[structopt(parse(from_os_str), help = "corpus location")]
    pub src: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Check command and parameters.
pub struct Check {
    #[structopt(parse(from_os_str), help = "corpus location")]
    pub src: PathBuf,
}
