//! End-to-end extraction: PDF in, one PNG per question out.

use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};

use examsplit_core::{Page, QuestionRegion, SegmentOptions, Segmenter, Side, normalize_document};
use image::{DynamicImage, GenericImageView};
use pdfium_render::prelude::Pdfium;
use tracing::{info, warn};

use crate::document::{SourceDocument, bind_pdfium};
use crate::error::Result;
use crate::render::{crop_region, render_page, save_crop};

/// Configuration for one extraction run.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Root directory; each document gets a subdirectory named after it.
    pub output_dir: PathBuf,
    /// Split each physical page into left/right half-pages. Disable for
    /// single-column booklets.
    pub split_columns: bool,
    /// Raster zoom factor. 2.0 keeps small maths legible in the crops.
    pub zoom: f32,
    pub segment: SegmentOptions,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            split_columns: true,
            zoom: 2.0,
            segment: SegmentOptions::default(),
        }
    }
}

/// One question successfully cropped and written to disk.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ExtractedQuestion {
    pub number: u32,
    pub original_page: usize,
    pub side: Side,
    pub path: PathBuf,
    pub pixel_width: u32,
    pub pixel_height: u32,
    /// Accumulated text of the question's spans.
    pub text: String,
}

/// Summary of one processed document.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ExtractionReport {
    pub document: String,
    pub page_count: usize,
    pub output_dir: PathBuf,
    pub questions: Vec<ExtractedQuestion>,
}

/// The extraction service. Owns the pdfium binding; documents are opened
/// per call.
pub struct Extractor {
    pdfium: Pdfium,
    config: ExtractorConfig,
}

impl Extractor {
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        Ok(Self {
            pdfium: bind_pdfium()?,
            config,
        })
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Process one booklet: segment every page, render one crop per
    /// detected question, and write a question list next to the crops.
    ///
    /// Within a document the first occurrence of a question number wins;
    /// later repeats on other pages are dropped.
    pub fn process_document(&self, path: &Path) -> Result<ExtractionReport> {
        let document = SourceDocument::open(&self.pdfium, path)?;
        let page_count = document.page_count();
        info!(document = document.name(), pages = page_count, "processing");

        let mut raw_pages = Vec::with_capacity(page_count);
        let mut page_sizes = Vec::with_capacity(page_count);
        for index in 0..page_count {
            let raw = document.raw_page(index)?;
            page_sizes.push((raw.width, raw.height));
            raw_pages.push(raw);
        }

        let half_pages =
            normalize_document(raw_pages, self.config.split_columns, &self.config.segment);

        let segmenter = Segmenter::new(self.config.segment.clone());
        let picks = select_first_occurrences(&half_pages, &segmenter);

        let doc_dir = self.config.output_dir.join(document.name());
        let mut questions: Vec<ExtractedQuestion> = Vec::new();

        // Picks arrive grouped by physical page, so one raster serves both
        // columns.
        let mut raster: Option<(usize, DynamicImage)> = None;

        for (half_index, region) in picks {
            let half = &half_pages[half_index];
            let page_index = half.original_page_number - 1;
            if raster.as_ref().map(|(i, _)| *i) != Some(page_index) {
                let page = document.page(page_index)?;
                raster = Some((page_index, render_page(&page, self.config.zoom)?));
            }
            let (_, image) = raster.as_ref().unwrap();
            let (page_width, page_height) = page_sizes[page_index];

            let crop = crop_region(image, &region.bbox, page_width, page_height);
            // A single failed crop costs one question, not the document.
            let out_path = match save_crop(
                &crop,
                &doc_dir,
                region.number,
                half.original_page_number,
                half.side,
            ) {
                Ok(path) => path,
                Err(err) => {
                    warn!(question = region.number, error = %err, "crop not written");
                    continue;
                }
            };
            questions.push(ExtractedQuestion {
                number: region.number,
                original_page: half.original_page_number,
                side: half.side,
                path: out_path,
                pixel_width: crop.width(),
                pixel_height: crop.height(),
                text: region.text,
            });
        }

        write_question_list(&doc_dir, &questions)?;
        log_statistics(document.name(), &questions);

        Ok(ExtractionReport {
            document: document.name().to_string(),
            page_count,
            output_dir: doc_dir,
            questions,
        })
    }

    /// Process several booklets, skipping documents that fail.
    pub fn process_batch(&self, paths: &[PathBuf]) -> Vec<ExtractionReport> {
        let mut reports = Vec::new();
        for path in paths {
            match self.process_document(path) {
                Ok(report) => reports.push(report),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "document skipped");
                }
            }
        }
        reports
    }
}

/// Segment every half-page and keep the first occurrence of each question
/// number, in reading order. Each kept region is returned with the index
/// of the half-page it came from.
///
/// This is where the per-document uniqueness invariant lives: a number
/// repeated on a later half-page never produces a second crop.
fn select_first_occurrences(
    half_pages: &[Page],
    segmenter: &Segmenter,
) -> Vec<(usize, QuestionRegion)> {
    let mut seen: BTreeSet<u32> = BTreeSet::new();
    let mut picks = Vec::new();
    for (index, page) in half_pages.iter().enumerate() {
        for region in segmenter.segment_page(page) {
            if seen.insert(region.number) {
                picks.push((index, region));
            }
        }
    }
    picks
}

/// Write `question_list.txt`: one line per extracted question with its
/// filename, crop size, and a text preview.
fn write_question_list(dir: &Path, questions: &[ExtractedQuestion]) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    let mut file = std::fs::File::create(dir.join("question_list.txt"))?;
    for q in questions {
        let preview: String = q.text.chars().take(100).collect();
        let name = q
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        writeln!(
            file,
            "soru {}: {} ({}x{}) | {}",
            q.number, name, q.pixel_width, q.pixel_height, preview
        )?;
    }
    Ok(())
}

/// Log the per-document extraction totals.
fn log_statistics(document: &str, questions: &[ExtractedQuestion]) {
    let left = questions.iter().filter(|q| q.side == Side::Left).count();
    let mut numbers: Vec<u32> = questions.iter().map(|q| q.number).collect();
    numbers.sort_unstable();
    info!(
        document,
        questions = questions.len(),
        left,
        right = questions.len() - left,
        numbers = ?numbers,
        "extraction finished"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use examsplit_core::{BBox, TextSpan};

    fn span(text: &str, top: f64) -> TextSpan {
        TextSpan::new(text, BBox::new(10.0, top, 250.0, top + 12.0))
    }

    fn half_page(number: usize, side: Side, spans: Vec<TextSpan>) -> Page {
        Page {
            original_page_number: number,
            side,
            bounds: BBox::new(0.0, 0.0, 300.0, 800.0),
            spans,
        }
    }

    #[test]
    fn test_first_occurrence_wins_across_half_pages() {
        // Question 5 appears on both columns of page 1; only the left
        // column's region survives.
        let pages = vec![
            half_page(1, Side::Left, vec![span("5.", 100.0), span("metin", 115.0)]),
            half_page(1, Side::Right, vec![span("5.", 100.0), span("6.", 400.0)]),
        ];
        let segmenter = Segmenter::new(SegmentOptions::default());
        let picks = select_first_occurrences(&pages, &segmenter);

        let fives: Vec<&(usize, QuestionRegion)> =
            picks.iter().filter(|(_, r)| r.number == 5).collect();
        assert_eq!(fives.len(), 1);
        assert_eq!(fives[0].0, 0);

        let numbers: Vec<u32> = picks.iter().map(|(_, r)| r.number).collect();
        assert_eq!(numbers, vec![5, 6]);
    }

    #[test]
    fn test_unique_count_matches_unique_numbers() {
        // Question 3 repeats across physical pages; picks equal the set of
        // distinct numbers.
        let pages = vec![
            half_page(1, Side::Left, vec![span("3.", 100.0)]),
            half_page(1, Side::Right, vec![span("4.", 100.0)]),
            half_page(2, Side::Left, vec![span("3.", 100.0), span("7.", 400.0)]),
        ];
        let segmenter = Segmenter::new(SegmentOptions::default());
        let picks = select_first_occurrences(&pages, &segmenter);

        let numbers: Vec<u32> = picks.iter().map(|(_, r)| r.number).collect();
        assert_eq!(numbers, vec![3, 4, 7]);
    }

    #[test]
    fn test_config_defaults() {
        let config = ExtractorConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert!(config.split_columns);
        assert_eq!(config.zoom, 2.0);
    }

    #[test]
    fn test_question_list_written() {
        let dir = tempfile::tempdir().unwrap();
        let questions = vec![ExtractedQuestion {
            number: 3,
            original_page: 1,
            side: Side::Left,
            path: dir.path().join("soru_3_sayfa_1_sol.png"),
            pixel_width: 600,
            pixel_height: 400,
            text: "Bir sayının 2 katı 8 ise bu sayı kaçtır?".to_string(),
        }];
        write_question_list(dir.path(), &questions).unwrap();

        let listing = std::fs::read_to_string(dir.path().join("question_list.txt")).unwrap();
        assert!(listing.contains("soru 3"));
        assert!(listing.contains("soru_3_sayfa_1_sol.png"));
        assert!(listing.contains("(600x400)"));
        assert!(listing.contains("Bir sayının"));
    }

    #[test]
    fn test_empty_question_list() {
        let dir = tempfile::tempdir().unwrap();
        write_question_list(dir.path(), &[]).unwrap();
        assert_eq!(
            std::fs::read_to_string(dir.path().join("question_list.txt")).unwrap(),
            ""
        );
    }
}
