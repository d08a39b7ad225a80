//! Page normalization: instruction-block removal and two-up column split.
//!
//! Booklets open with a numbered instruction list ("1. Bu testte …") that
//! shares its typography with real question markers, and print two columns
//! per physical page. Normalization removes the former and linearizes the
//! latter before any detection runs.

use std::sync::LazyLock;

use regex::Regex;

use crate::geometry::BBox;
use crate::page::{Page, RawPage, Side};
use crate::segment::SegmentOptions;
use crate::span::{TextSpan, sort_spans_by_top};

/// Find the vertical cut line above which the first page's instruction
/// block lies.
///
/// Scans for tight `N.` markers with N in {1, 2, 3}. Only when at least two
/// such markers are present is the page considered to carry a numbered
/// question sequence; the cut is then a margin above the first marker.
/// With fewer markers the function returns `None` and the page proceeds
/// un-cropped — degraded recall beats aborting the document.
pub fn instruction_cutoff(spans: &[TextSpan], margin: f64) -> Option<f64> {
    static TIGHT_MARKER: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^[123]\.\s*$").unwrap());

    let mut marker_tops: Vec<f64> = spans
        .iter()
        .filter(|s| TIGHT_MARKER.is_match(s.text.trim()))
        .map(|s| s.bbox.top)
        .collect();

    if marker_tops.len() < 2 {
        return None;
    }
    marker_tops.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    Some((marker_tops[0] - margin).max(0.0))
}

/// Normalize a document's raw pages into half-pages in reading order.
///
/// The first page is cropped at the instruction cutoff when one is found.
/// With `split_columns` set, every page is then bisected at its horizontal
/// midpoint into a left and a right half-page (a span belongs to the half
/// containing its horizontal midpoint), yielding `2 × pages.len()` pages
/// ordered left-then-right. Without it each page maps to a single
/// full-width page.
///
/// Span coordinates are left in the original page's coordinate space; each
/// produced [`Page`] records the area it covers via its `bounds`.
pub fn normalize_document(
    pages: Vec<RawPage>,
    split_columns: bool,
    options: &SegmentOptions,
) -> Vec<Page> {
    let cutoff = pages
        .first()
        .and_then(|p| instruction_cutoff(&p.spans, options.instruction_margin));

    let mut out = Vec::with_capacity(pages.len() * if split_columns { 2 } else { 1 });

    for (index, raw) in pages.into_iter().enumerate() {
        let number = index + 1;
        let content_top = if number == 1 { cutoff.unwrap_or(0.0) } else { 0.0 };

        // Spans starting above the cut line belong to the instruction block.
        let spans: Vec<TextSpan> = raw
            .spans
            .into_iter()
            .filter(|s| s.bbox.top >= content_top)
            .collect();

        if split_columns {
            let mid = raw.width / 2.0;
            let (left, right): (Vec<TextSpan>, Vec<TextSpan>) =
                spans.into_iter().partition(|s| s.bbox.mid_x() < mid);

            out.push(half_page(
                number,
                Side::Left,
                BBox::new(0.0, content_top, mid, raw.height),
                left,
            ));
            out.push(half_page(
                number,
                Side::Right,
                BBox::new(mid, content_top, raw.width, raw.height),
                right,
            ));
        } else {
            out.push(half_page(
                number,
                Side::Left,
                BBox::new(0.0, content_top, raw.width, raw.height),
                spans,
            ));
        }
    }

    out
}

fn half_page(number: usize, side: Side, bounds: BBox, mut spans: Vec<TextSpan>) -> Page {
    sort_spans_by_top(&mut spans);
    Page {
        original_page_number: number,
        side,
        bounds,
        spans,
    }
}
