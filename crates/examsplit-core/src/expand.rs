//! Region expansion: turn ordered question anchors into disjoint crops.
//!
//! Implemented as a fold over the anchor list rather than a mutable
//! "current question" accumulator: each region is computed from one anchor
//! plus the position of the following anchor (or a content-length estimate
//! when none exists), and is immutable once produced.

use crate::detect::{AnchorDetector, QuestionAnchor};
use crate::geometry::BBox;
use crate::page::Page;
use crate::segment::SegmentOptions;

/// The rectangular page area holding one question, answer choices included.
///
/// Coordinates are in the original page's coordinate space, ready to be
/// cropped out of a rasterized page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestionRegion {
    pub number: u32,
    pub bbox: BBox,
    /// Accumulated text of the question's spans, marker included.
    pub text: String,
}

/// Expand anchors into vertically disjoint regions on one half-page.
///
/// For each anchor the region starts a margin above the marker glyph. It
/// ends a margin above the next anchor when one exists; otherwise at an
/// estimated offset grown from the accumulated text length, with a bonus
/// when answer-choice markers were seen in the question's span range. The
/// minimum-height floor applies on both branches, but never past the next
/// anchor's boundary: regions on a page must not overlap.
pub fn expand_regions(
    page: &Page,
    anchors: &[QuestionAnchor],
    detector: &AnchorDetector,
    options: &SegmentOptions,
) -> Vec<QuestionRegion> {
    anchors
        .iter()
        .enumerate()
        .map(|(i, anchor)| {
            let next = anchors.get(i + 1);
            let span_end = next.map_or(page.spans.len(), |n| n.span_index);
            let question_spans = &page.spans[anchor.span_index..span_end];

            let text = question_spans
                .iter()
                .map(|s| s.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            let has_choices = question_spans
                .iter()
                .any(|s| detector.is_choice_marker(&s.text));

            let top = (anchor.bbox.top - options.instruction_margin).max(page.bounds.top);

            let mut bottom = match next {
                Some(n) => n.bbox.top - options.instruction_margin,
                None => {
                    let mut estimate = anchor.bbox.top
                        + options.base_height
                        + options.length_factor * text.chars().count() as f64;
                    if has_choices {
                        estimate += options.choice_extra_height;
                    }
                    estimate
                }
            };

            bottom = bottom.max(top + options.min_region_height);
            if let Some(n) = next {
                bottom = bottom.min(n.bbox.top - options.instruction_margin);
            }
            bottom = bottom.min(page.bounds.bottom).max(top);

            QuestionRegion {
                number: anchor.number,
                bbox: BBox::new(page.bounds.x0, top, page.bounds.x1, bottom),
                text,
            }
        })
        .collect()
}
