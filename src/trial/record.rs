//! Ground-truth label files.
//!
//! One line per query, two whitespace-separated tokens: the query identifier
//! and the identifier of the candidate it should be matched to. Identifiers
//! are paths relative to the run root, e.g.
//! `run01/test/item01.png run01/training/class07.png`.

use crate::error::{Error, Result};
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Eq)]
struct LabelEntry {
    query: String,
    answer: String,
}

/// Parsed label file of one trial, entries kept in file order.
#[derive(Clone, Debug)]
pub struct TrialRecord {
    entries: Vec<LabelEntry>,
    by_query: HashMap<String, usize>,
}

impl TrialRecord {
    /// Build a record from `(query, answer)` pairs.
    ///
    /// Every query must appear once; an empty list is rejected.
    pub fn from_pairs<I, Q, A>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Q, A)>,
        Q: Into<String>,
        A: Into<String>,
    {
        let mut record = Self {
            entries: Vec::new(),
            by_query: HashMap::new(),
        };
        for (query, answer) in pairs {
            record
                .push(query.into(), answer.into())
                .map_err(|reason| Error::LabelParse {
                    path: Default::default(),
                    line: record.entries.len() + 1,
                    reason,
                })?;
        }
        record.ensure_not_empty(Path::new(""))?;
        Ok(record)
    }

    /// Parse label file contents. `path` is only used for error messages.
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        let mut record = Self {
            entries: Vec::new(),
            by_query: HashMap::new(),
        };
        for (idx, line) in text.lines().enumerate() {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            let parse_err = |reason: String| Error::LabelParse {
                path: path.to_path_buf(),
                line: idx + 1,
                reason,
            };
            match tokens.as_slice() {
                [] => continue,
                [query, answer] => record
                    .push((*query).to_string(), (*answer).to_string())
                    .map_err(parse_err)?,
                other => {
                    return Err(parse_err(format!(
                        "expected 2 tokens, found {}",
                        other.len()
                    )))
                }
            }
        }
        record.ensure_not_empty(path)?;
        Ok(record)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::LabelParse {
            path: path.to_path_buf(),
            line: 0,
            reason: e.to_string(),
        })?;
        Self::parse(&text, path)
    }

    /// Repeating a line keeps both rows; a query with two different answers
    /// is rejected.
    fn push(&mut self, query: String, answer: String) -> std::result::Result<(), String> {
        match self.by_query.get(&query) {
            Some(&idx) if self.entries[idx].answer != answer => {
                return Err(format!(
                    "query {query} is labelled both {} and {answer}",
                    self.entries[idx].answer
                ));
            }
            Some(_) => {}
            None => {
                self.by_query.insert(query.clone(), self.entries.len());
            }
        }
        self.entries.push(LabelEntry { query, answer });
        Ok(())
    }

    fn ensure_not_empty(&self, path: &Path) -> Result<()> {
        if self.entries.is_empty() {
            return Err(Error::LabelParse {
                path: path.to_path_buf(),
                line: 0,
                reason: "no label entries".to_string(),
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Query identifiers in ascending order; row order of the matrix.
    pub fn sorted_queries(&self) -> Vec<String> {
        let mut queries: Vec<String> = self.entries.iter().map(|e| e.query.clone()).collect();
        queries.sort();
        queries
    }

    /// Distinct candidate identifiers in ascending order; column order of the
    /// matrix.
    pub fn sorted_candidates(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| e.answer.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Answer on the `line`-th entry (0-based, file order).
    pub fn answer_at(&self, line: usize) -> Option<&str> {
        self.entries.get(line).map(|e| e.answer.as_str())
    }

    /// Answer recorded for `query`.
    pub fn answer_for(&self, query: &str) -> Option<&str> {
        self.by_query
            .get(query)
            .map(|&idx| self.entries[idx].answer.as_str())
    }
}
