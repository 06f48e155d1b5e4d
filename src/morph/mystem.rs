//! Adapter for the Yandex `mystem` analyzer.
//!
//! Words are fed to the binary one per line; `--format json` makes it answer
//! with one JSON object per token, e.g.
//! `{"text": "бактерий", "analysis": [{"lex": "бактерия", "gr": "S,жен,од=род,мн"}]}`.
use std::collections::HashMap;
use std::io::Write;
use std::process::{Command, Stdio};

use serde::Deserialize;

use crate::error::Error;

use super::{Analysis, Morphology};

pub struct Mystem {
    command: String,
}

impl Mystem {
    /// `command` is the binary to invoke, usually just `mystem` from `PATH`.
    pub fn new(command: &str) -> Self {
        Self {
            command: command.to_string(),
        }
    }
}

impl Default for Mystem {
    fn default() -> Self {
        Self::new("mystem")
    }
}

#[derive(Debug, Deserialize)]
struct Entry {
    text: String,
    #[serde(default)]
    analysis: Vec<EntryAnalysis>,
}

#[derive(Debug, Deserialize)]
struct EntryAnalysis {
    lex: String,
    gr: String,
}

impl Morphology for Mystem {
    fn analyze(&self, words: &[String]) -> Result<Vec<Option<Analysis>>, Error> {
        if words.is_empty() {
            return Ok(Vec::new());
        }

        let mut child = Command::new(&self.command)
            .args(["-n", "-i", "-d", "--format", "json", "-e", "utf-8"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        {
            let stdin = child
                .stdin
                .as_mut()
                .ok_or_else(|| Error::Analyzer("mystem stdin is not piped".to_string()))?;
            stdin.write_all(words.join("\n").as_bytes())?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(Error::Analyzer(format!(
                "mystem exited with {}",
                output.status
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_output(words, &stdout)
    }
}

/// Map analyzer output lines back onto the input words.
fn parse_output(words: &[String], stdout: &str) -> Result<Vec<Option<Analysis>>, Error> {
    let mut table: HashMap<String, Analysis> = HashMap::new();
    for line in stdout.lines().filter(|line| !line.trim().is_empty()) {
        let entry: Entry = serde_json::from_str(line)?;
        if let Some(analysis) = entry.analysis.first() {
            table.entry(entry.text.to_lowercase()).or_insert(Analysis {
                lemma: analysis.lex.clone(),
                tags: analysis.gr.clone(),
            });
        }
    }

    Ok(words
        .iter()
        .map(|word| table.get(&word.to_lowercase()).cloned())
        .collect())
}
