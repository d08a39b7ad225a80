//! Answer-key extraction from answer booklet PDFs, and JSON persistence.

use std::path::{Path, PathBuf};

use examsplit_core::{AnswerKey, find_section_titles, scrape_answer_pairs};
use tracing::{debug, info};

use crate::document::SourceDocument;
use crate::error::Result;

/// Build an answer key from raw booklet text.
///
/// The text is partitioned at section-title occurrences; each section's
/// slice is scraped for `N. <letter>` pairs. When no title is found the
/// whole text is scraped into the fallback section.
pub fn answer_key_from_text(text: &str, max_number: u32) -> AnswerKey {
    let titles = find_section_titles(text);
    let mut key = AnswerKey::new();

    for (i, title) in titles.iter().enumerate() {
        let Some(start) = text.find(title.as_str()) else {
            // Fallback section: no title occurs in the text.
            for (number, letter) in scrape_answer_pairs(text, max_number) {
                key.insert(title, number, letter);
            }
            continue;
        };

        let after = start + title.len();
        let end = titles
            .get(i + 1)
            .and_then(|next| text[after..].find(next.as_str()))
            .map_or(text.len(), |offset| after + offset);

        let pairs = scrape_answer_pairs(&text[after..end], max_number);
        debug!(section = %title, answers = pairs.len(), "scraped section");
        for (number, letter) in pairs {
            key.insert(title, number, letter);
        }
    }

    key
}

/// Scrape an opened answer booklet into an [`AnswerKey`].
pub fn extract_answer_key(document: &SourceDocument<'_>, max_number: u32) -> Result<AnswerKey> {
    let text = document.full_text()?;
    let key = answer_key_from_text(&text, max_number);
    info!(
        document = document.name(),
        sections = key.sections.len(),
        "answer key extracted"
    );
    Ok(key)
}

/// The JSON path an answer key is stored at, next to its output directory.
pub fn answer_key_path(output_dir: &Path, document_name: &str) -> PathBuf {
    output_dir.join(format!("{document_name}_answers.json"))
}

/// Write an answer key as pretty-printed JSON.
pub fn save_answer_key(key: &AnswerKey, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(key)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Read an answer key back from JSON.
pub fn load_answer_key(path: &Path) -> Result<AnswerKey> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_sectioned_text() {
        let text = "TEMEL MATEMATİK TESTİ\n1. A 2. C 3. E";
        let key = answer_key_from_text(text, 50);
        assert_eq!(key.get("TEMEL MATEMATİK TESTİ", 1), Some('A'));
        assert_eq!(key.get("TEMEL MATEMATİK TESTİ", 3), Some('E'));
    }

    #[test]
    fn test_key_fallback_section() {
        let key = answer_key_from_text("1. B 2. D", 50);
        assert_eq!(key.get("GENEL", 1), Some('B'));
        assert_eq!(key.get("GENEL", 2), Some('D'));
    }

    #[test]
    fn test_key_path_layout() {
        let path = answer_key_path(Path::new("output"), "tyt_2023");
        assert_eq!(path, Path::new("output/tyt_2023_answers.json"));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc_answers.json");

        let key = answer_key_from_text("MATEMATİK TESTİ\n5. C", 50);
        save_answer_key(&key, &path).unwrap();
        let loaded = load_answer_key(&path).unwrap();
        assert_eq!(loaded.get("MATEMATİK TESTİ", 5), Some('C'));
    }
}
