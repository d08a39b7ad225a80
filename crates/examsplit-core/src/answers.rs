//! Answer keys: the section → question number → choice letter mapping, and
//! the text scraping that builds one from an answer-key booklet's text.

use std::collections::BTreeMap;

use regex::Regex;

/// Mapping from test-section name to question number (as a string, matching
/// the JSON schema) to choice letter A–E. Read-only after load.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AnswerKey {
    pub sections: BTreeMap<String, BTreeMap<String, char>>,
}

impl AnswerKey {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer. Existing entries are kept (first answer wins),
    /// mirroring how the key is scraped.
    pub fn insert(&mut self, section: &str, number: u32, letter: char) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .entry(number.to_string())
            .or_insert(letter);
    }

    /// Look up the recorded choice letter for a question.
    ///
    /// `None` is the unknown sentinel: an unknown section and an absent
    /// question number both degrade to it, never to an error.
    pub fn get(&self, section: &str, number: u32) -> Option<char> {
        self.sections
            .get(section)?
            .get(&number.to_string())
            .copied()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Scrape `N. <letter>` answer pairs from answer-key text.
///
/// Accepts numbers in `1..=max_number` and letters A–E; the first answer
/// seen for a number wins, so a key listing several sections in sequence
/// keeps the leading section's answers for overlapping numbers.
pub fn scrape_answer_pairs(text: &str, max_number: u32) -> Vec<(u32, char)> {
    let pair = Regex::new(r"(\d{1,2})\.\s*([A-E])\b").unwrap();

    let mut pairs: Vec<(u32, char)> = Vec::new();
    for caps in pair.captures_iter(text) {
        let number: u32 = match caps[1].parse() {
            Ok(n) => n,
            Err(_) => continue,
        };
        if number == 0 || number > max_number {
            continue;
        }
        if pairs.iter().any(|(n, _)| *n == number) {
            continue;
        }
        let letter = caps[2].chars().next().unwrap_or('?');
        pairs.push((number, letter));
    }
    pairs
}

/// Detect section titles in answer-key text: runs of uppercase letters
/// containing "TEST", math-related titles preferred. Falls back to a single
/// generic section so scraped answers always have a home.
pub fn find_section_titles(text: &str) -> Vec<String> {
    let title = Regex::new(r"[A-ZÇĞIİÖŞÜ][A-ZÇĞIİÖŞÜ ]*TEST[İI]?").unwrap();

    let mut titles: Vec<String> = Vec::new();
    for m in title.find_iter(text) {
        let clean = m.as_str().trim().to_string();
        if clean.len() > 3 && !titles.contains(&clean) {
            titles.push(clean);
        }
    }

    if titles.is_empty() {
        return vec!["GENEL".to_string()];
    }

    let math: Vec<String> = titles
        .iter()
        .filter(|t| t.contains("MATEMAT"))
        .cloned()
        .collect();
    if math.is_empty() { titles } else { math }
}
