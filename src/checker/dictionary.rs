use crate::error::{CheckError, Result};
use log::debug;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Set of known-correct words, stored lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from raw entries. Entries are trimmed and lowercased;
    /// blank entries are skipped and duplicates collapse.
    pub fn from_words<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = entries
            .into_iter()
            .filter_map(|entry| {
                let word = entry.as_ref().trim();
                (!word.is_empty()).then(|| word.to_lowercase())
            })
            .collect();

        Self { words }
    }

    /// Read one entry per line. An empty source gives an empty dictionary.
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut entries = Vec::new();
        for raw in reader.split(b'\n') {
            let raw = raw?;
            entries.push(String::from_utf8_lossy(&raw).into_owned());
        }
        Ok(Self::from_words(entries))
    }

    /// Load a word list file
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| CheckError::io(path, e))?;
        let dict =
            Self::from_reader(BufReader::new(file)).map_err(|e| CheckError::io(path, e))?;

        debug!("Loaded {} words from {}", dict.len(), path.display());

        Ok(dict)
    }

    /// Check if an already-lowercased word exists in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
