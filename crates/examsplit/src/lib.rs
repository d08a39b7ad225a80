//! examsplit: split exam booklet PDFs into one cropped image per question.
//!
//! Ties the backend-independent segmenter in `examsplit-core` to a pdfium
//! backend for text and raster access:
//!
//! - [`SourceDocument`] opens a PDF and yields positioned text spans.
//! - [`Extractor`] runs the whole pipeline per document: normalize,
//!   segment, render, and write one PNG per question plus a
//!   `question_list.txt` report.
//! - [`extract_answer_key`] scrapes an answer booklet into an
//!   [`AnswerKey`](examsplit_core::AnswerKey) stored as JSON.
//!
//! Requires libpdfium at runtime, either next to the executable or
//! installed system-wide.

pub mod answers;
pub mod document;
pub mod error;
pub mod pipeline;
pub mod render;

pub use answers::{
    answer_key_from_text, answer_key_path, extract_answer_key, load_answer_key, save_answer_key,
};
pub use document::{SourceDocument, bind_pdfium};
pub use error::{ExtractError, Result};
pub use pipeline::{ExtractedQuestion, ExtractionReport, Extractor, ExtractorConfig};
pub use render::{crop_region, question_filename, render_page, save_crop};

pub use examsplit_core;
