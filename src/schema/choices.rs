//! Static code→label tables for coded columns

use serde::Serialize;
use std::collections::HashSet;

/// One legal code of a coded column and its human-readable label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub code: &'static str,
    pub label: &'static str,
}

/// Closed set of legal values for a coded column.
///
/// Integer columns store their codes in decimal form so one lookup
/// table serves both text and integer columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChoiceSet {
    pub name: &'static str,
    pub entries: &'static [Choice],
}

impl ChoiceSet {
    pub fn contains(&self, code: &str) -> bool {
        self.entries.iter().any(|c| c.code == code)
    }

    pub fn label(&self, code: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|c| c.code == code)
            .map(|c| c.label)
    }

    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|c| c.code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Codes that appear more than once, in first-seen order
    pub fn duplicate_codes(&self) -> Vec<&'static str> {
        duplicates(self.entries.iter().map(|c| c.code))
    }

    /// Labels shared by more than one code, in first-seen order
    pub fn duplicate_labels(&self) -> Vec<&'static str> {
        duplicates(self.entries.iter().map(|c| c.label))
    }
}

fn duplicates(values: impl Iterator<Item = &'static str>) -> Vec<&'static str> {
    let mut seen = HashSet::new();
    let mut repeated = Vec::new();
    for value in values {
        if !seen.insert(value) && !repeated.contains(&value) {
            repeated.push(value);
        }
    }
    repeated
}

#[cfg(test)]
mod tests {
    use super::*;

    static SAMPLE: ChoiceSet = ChoiceSet {
        name: "SAMPLE",
        entries: &[
            Choice { code: "A", label: "Alpha" },
            Choice { code: "B", label: "Beta" },
            Choice { code: "A", label: "Again" },
            Choice { code: "C", label: "Beta" },
        ],
    };

    #[test]
    fn test_lookup() {
        assert!(SAMPLE.contains("B"));
        assert!(!SAMPLE.contains("Z"));
        assert_eq!(SAMPLE.label("A"), Some("Alpha"));
        assert_eq!(SAMPLE.label("Z"), None);
    }

    #[test]
    fn test_duplicates_reported_once() {
        assert_eq!(SAMPLE.duplicate_codes(), vec!["A"]);
        assert_eq!(SAMPLE.duplicate_labels(), vec!["Beta"]);
    }
}
