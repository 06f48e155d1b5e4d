//! Adapter for a pymorphy-backed analyzer.
//!
//! pymorphy has no command line of its own; the corpus toolchain wraps it in
//! a small `pymorphy` script speaking the same one-object-per-line contract
//! as mystem: words on stdin, `{"word": ..., "normal_form": ..., "tag": ...}`
//! per line on stdout.
use std::io::Write;
use std::process::{Command, Stdio};

use serde::Deserialize;

use crate::error::Error;

use super::{Analysis, Morphology};

pub struct Pymorphy {
    command: String,
}

impl Pymorphy {
    pub fn new(command: &str) -> Self {
        Self {
            command: command.to_string(),
        }
    }
}

impl Default for Pymorphy {
    fn default() -> Self {
        Self::new("pymorphy")
    }
}

#[derive(Debug, Deserialize)]
struct Entry {
    word: String,
    #[serde(default)]
    normal_form: Option<String>,
    #[serde(default)]
    tag: Option<String>,
}

impl Morphology for Pymorphy {
    fn analyze(&self, words: &[String]) -> Result<Vec<Option<Analysis>>, Error> {
        if words.is_empty() {
            return Ok(Vec::new());
        }

        let mut child = Command::new(&self.command)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        {
            let stdin = child
                .stdin
                .as_mut()
                .ok_or_else(|| Error::Analyzer("pymorphy stdin is not piped".to_string()))?;
            stdin.write_all(words.join("\n").as_bytes())?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(Error::Analyzer(format!(
                "pymorphy exited with {}",
                output.status
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_output(words, &stdout)
    }
}

fn parse_output(words: &[String], stdout: &str) -> Result<Vec<Option<Analysis>>, Error> {
    let mut table = std::collections::HashMap::new();
    for line in stdout.lines().filter(|line| !line.trim().is_empty()) {
        let entry: Entry = serde_json::from_str(line)?;
        if let (Some(normal_form), Some(tag)) = (entry.normal_form, entry.tag) {
            table.entry(entry.word.to_lowercase()).or_insert(Analysis {
                lemma: normal_form,
                tags: tag,
            });
        }
    }

    Ok(words
        .iter()
        .map(|word| table.get(&word.to_lowercase()).cloned())
        .collect())
}
