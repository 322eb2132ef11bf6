//! Vocabulary keyword matching

use crate::error::{Result, ResumeOptimizerError};
use aho_corasick::{AhoCorasick, MatchKind};
use serde::{Deserialize, Serialize};

/// Skill terms checked when no vocabulary is configured.
pub const DEFAULT_VOCABULARY: [&str; 7] = [
    "Python",
    "Machine Learning",
    "Data Analysis",
    "AWS",
    "SQL",
    "TensorFlow",
    "Project Management",
];

/// Ordered, immutable list of skill terms.
///
/// Terms keep their original casing for display. Duplicates are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
}

/// Partition of a vocabulary for one input text, in vocabulary order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched: Vec<String>,
    pub unmatched: Vec<String>,
}

impl Vocabulary {
    pub fn new<I, S>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms: Vec<String> = terms.into_iter().map(Into::into).collect();

        if terms.is_empty() {
            return Err(ResumeOptimizerError::InvalidVocabulary(
                "vocabulary must contain at least one term".to_string(),
            ));
        }
        if let Some(position) = terms.iter().position(String::is_empty) {
            return Err(ResumeOptimizerError::InvalidVocabulary(format!(
                "term #{} is empty",
                position + 1
            )));
        }

        Ok(Self { terms })
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            terms: DEFAULT_VOCABULARY.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl MatchResult {
    /// First `limit` unmatched terms, vocabulary order preserved.
    pub fn missing(&self, limit: usize) -> Vec<String> {
        self.unmatched.iter().take(limit).cloned().collect()
    }
}

/// Case-insensitive substring matcher over a fixed vocabulary.
pub struct KeywordMatcher {
    vocabulary: Vocabulary,
    automaton: AhoCorasick,
}

impl KeywordMatcher {
    pub fn new(vocabulary: Vocabulary) -> Result<Self> {
        let patterns: Vec<String> = vocabulary.terms().iter().map(|t| t.to_lowercase()).collect();

        // Overlapping search needs standard semantics so nested terms all report.
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&patterns)
            .map_err(|e| ResumeOptimizerError::Processing(format!("Failed to build keyword matcher: {}", e)))?;

        Ok(Self { vocabulary, automaton })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Partition the vocabulary by presence in `text`.
    ///
    /// A term is matched iff its lowercase form is a substring of the
    /// lowercase text.
    pub fn match_text(&self, text: &str) -> MatchResult {
        let haystack = text.to_lowercase();
        let mut found = vec![false; self.vocabulary.len()];

        for mat in self.automaton.find_overlapping_iter(&haystack) {
            found[mat.pattern().as_usize()] = true;
        }

        let mut matched = Vec::new();
        let mut unmatched = Vec::new();
        for (term, hit) in self.vocabulary.terms().iter().zip(found) {
            if hit {
                matched.push(term.clone());
            } else {
                unmatched.push(term.clone());
            }
        }

        MatchResult { matched, unmatched }
    }
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::new(Vocabulary::default()).expect("default vocabulary always builds")
    }
}
