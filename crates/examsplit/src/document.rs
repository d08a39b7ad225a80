//! PDF document access through the pdfium backend.
//!
//! Bridges pdfium's page model to the backend-independent types the
//! segmentation pipeline consumes: each text segment becomes a
//! [`TextSpan`] with its rectangle flipped into top-left-origin
//! coordinates.

use std::path::Path;

use examsplit_core::{BBox, RawPage, TextSpan};
use pdfium_render::prelude::*;

use crate::error::{ExtractError, Result};

/// Bind to libpdfium, preferring a copy next to the executable over the
/// system library.
pub fn bind_pdfium() -> Result<Pdfium> {
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| ExtractError::Pdfium(e.to_string()))?;
    Ok(Pdfium::new(bindings))
}

/// An opened exam booklet PDF.
///
/// Keeps the pdfium document handle alive for the duration of extraction;
/// pages are loaded on demand and not retained.
pub struct SourceDocument<'a> {
    document: PdfDocument<'a>,
    name: String,
}

impl<'a> SourceDocument<'a> {
    /// Open a PDF from disk. The document name used for output paths is
    /// the file stem.
    pub fn open(pdfium: &'a Pdfium, path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ExtractError::InputNotFound(path.to_path_buf()));
        }
        let document = pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| ExtractError::Pdfium(e.to_string()))?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        Ok(Self { document, name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    pub(crate) fn page(&self, index: usize) -> Result<PdfPage<'_>> {
        self.document
            .pages()
            .get(index as u16)
            .map_err(|e| ExtractError::Pdfium(e.to_string()))
    }

    /// Collect one page's text segments as positioned spans.
    ///
    /// pdfium reports rectangles with a bottom-left origin; spans are
    /// flipped into the top-left-origin space the segmenter expects. The
    /// backend exposes no per-segment font weight, so spans carry an
    /// unknown weight.
    pub fn raw_page(&self, index: usize) -> Result<RawPage> {
        let page = self.page(index)?;
        let width = page.width().value as f64;
        let height = page.height().value as f64;

        let text = page
            .text()
            .map_err(|e| ExtractError::Pdfium(e.to_string()))?;

        let mut spans = Vec::new();
        for segment in text.segments().iter() {
            let content = segment.text();
            if content.trim().is_empty() {
                continue;
            }
            let rect = segment.bounds();
            let bbox = BBox::new(
                rect.left.value as f64,
                height - rect.top.value as f64,
                rect.right.value as f64,
                height - rect.bottom.value as f64,
            );
            spans.push(TextSpan::new(&content, bbox));
        }

        Ok(RawPage {
            width,
            height,
            spans,
        })
    }

    /// One page's text as a single string, segments joined by newlines.
    /// Used for answer-key scraping, where geometry does not matter.
    pub fn page_text(&self, index: usize) -> Result<String> {
        let page = self.page(index)?;
        let text = page
            .text()
            .map_err(|e| ExtractError::Pdfium(e.to_string()))?;

        let lines: Vec<String> = text.segments().iter().map(|s| s.text()).collect();
        Ok(lines.join("\n"))
    }

    /// The whole document's text, page texts joined by newlines.
    pub fn full_text(&self) -> Result<String> {
        let mut pages = Vec::with_capacity(self.page_count());
        for index in 0..self.page_count() {
            pages.push(self.page_text(index)?);
        }
        Ok(pages.join("\n"))
    }
}
