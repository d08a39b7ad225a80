use std::path::{Path, PathBuf};

use examsplit::{Extractor, ExtractorConfig};

pub fn run(
    files: &[PathBuf],
    out_dir: &Path,
    no_split: bool,
    zoom: f32,
    bold_markers: bool,
) -> Result<(), i32> {
    let files = expand_inputs(files)?;

    let mut config = ExtractorConfig {
        output_dir: out_dir.to_path_buf(),
        split_columns: !no_split,
        zoom,
        ..ExtractorConfig::default()
    };
    config.segment.bold_required = bold_markers;

    let extractor = Extractor::new(config).map_err(|e| {
        eprintln!("Error initializing pdfium: {e}");
        1
    })?;

    if files.len() == 1 {
        let report = extractor.process_document(&files[0]).map_err(|e| {
            eprintln!("Error processing {}: {e}", files[0].display());
            1
        })?;
        println!(
            "{}: {} questions -> {}",
            report.document,
            report.questions.len(),
            report.output_dir.display()
        );
        return Ok(());
    }

    // Batch mode: failed documents are skipped, not fatal.
    let reports = extractor.process_batch(&files);
    for report in &reports {
        println!(
            "{}: {} questions -> {}",
            report.document,
            report.questions.len(),
            report.output_dir.display()
        );
    }
    if reports.is_empty() {
        eprintln!("No documents processed");
        return Err(1);
    }
    if reports.len() < files.len() {
        eprintln!("{} of {} documents failed", files.len() - reports.len(), files.len());
    }
    Ok(())
}

/// Expand directory arguments into the PDF files they contain, sorted by
/// name. Plain file paths pass through untouched.
fn expand_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, i32> {
    let mut files = Vec::new();
    for input in inputs {
        if !input.is_dir() {
            files.push(input.clone());
            continue;
        }
        let entries = std::fs::read_dir(input).map_err(|e| {
            eprintln!("Error reading directory {}: {e}", input.display());
            1
        })?;
        let mut pdfs: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| {
                p.extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
            })
            .collect();
        pdfs.sort();
        if pdfs.is_empty() {
            eprintln!("No PDF files in {}", input.display());
        }
        files.extend(pdfs);
    }
    Ok(files)
}
