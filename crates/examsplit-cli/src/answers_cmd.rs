use std::path::Path;

use examsplit::{SourceDocument, answer_key_path, bind_pdfium, extract_answer_key, save_answer_key};
use examsplit::examsplit_core::SegmentOptions;

pub fn run(file: &Path, out: Option<&Path>, out_dir: &Path) -> Result<(), i32> {
    let pdfium = bind_pdfium().map_err(|e| {
        eprintln!("Error initializing pdfium: {e}");
        1
    })?;
    let document = SourceDocument::open(&pdfium, file).map_err(|e| {
        eprintln!("Error opening {}: {e}", file.display());
        1
    })?;

    let max_number = SegmentOptions::default().max_question_number;
    let key = extract_answer_key(&document, max_number).map_err(|e| {
        eprintln!("Error scraping answer key: {e}");
        1
    })?;

    if key.is_empty() {
        eprintln!("No answers found in {}", file.display());
        return Err(1);
    }

    let path = out
        .map(Path::to_path_buf)
        .unwrap_or_else(|| answer_key_path(out_dir, document.name()));
    save_answer_key(&key, &path).map_err(|e| {
        eprintln!("Error writing {}: {e}", path.display());
        1
    })?;

    let total: usize = key.sections.values().map(|s| s.len()).sum();
    println!(
        "{} answers in {} sections -> {}",
        total,
        key.sections.len(),
        path.display()
    );
    Ok(())
}
