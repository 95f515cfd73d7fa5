//! Autocomplete dictionary with set semantics.
//!
//! Entries are unique (compared verbatim) and iterate in first-insertion
//! order. That order is what the matcher walks, so when more than six entries
//! match, the earliest-inserted ones win.

use ahash::AHashSet;

/// The set of strings suggestions are drawn from.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    entries: Vec<String>,
    index: AHashSet<String>,
}

impl Vocabulary {
    /// Create an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry. Returns false if it was already present.
    pub fn insert<S: Into<String>>(&mut self, entry: S) -> bool {
        let entry = entry.into();
        if self.index.contains(&entry) {
            return false;
        }
        self.index.insert(entry.clone());
        self.entries.push(entry);
        true
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.index.contains(entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut vocabulary = Vocabulary::new();
        for entry in iter {
            vocabulary.insert(entry);
        }
        vocabulary
    }
}

impl<S: Into<String>> Extend<S> for Vocabulary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry);
        }
    }
}
