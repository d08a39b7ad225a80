//! Segmentation entry point and configuration.
//!
//! [`SegmentOptions`] gathers every heuristic threshold used by the
//! detector and expander in one place; [`segment_page`] runs both stages
//! over a normalized half-page.

use crate::detect::AnchorDetector;
use crate::expand::{QuestionRegion, expand_regions};
use crate::page::Page;

/// Heuristic thresholds for question-boundary segmentation.
///
/// These are configuration values, not control flow: changing them tunes
/// recall/precision but never changes the shape of the pipeline.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentOptions {
    /// Margin (points) kept above a question marker when cutting the
    /// instruction block and when starting a region, and between a region's
    /// bottom and the next anchor. Default: `10.0`.
    pub instruction_margin: f64,
    /// Extra estimated height (points) added when answer-choice markers
    /// `A)`–`E)` were seen inside the question's span range. Default: `100.0`.
    pub choice_extra_height: f64,
    /// Minimum height (points) of any produced region. Default: `150.0`.
    pub min_region_height: f64,
    /// Base of the estimated-height fallback used when no next anchor
    /// bounds the region. Default: `50.0`.
    pub base_height: f64,
    /// Estimated height contributed per character of accumulated question
    /// text in the fallback branch. Default: `0.8`.
    pub length_factor: f64,
    /// Maximum length (characters) of a span accepted as a question-number
    /// marker. Longer matches have prose fused onto the marker and are
    /// rejected. Default: `12`.
    pub max_anchor_text_len: usize,
    /// Highest question number accepted as a marker. Default: `50`.
    pub max_question_number: u32,
    /// When `true`, spans known to be non-bold are accepted as anchors only
    /// if they are a bare `N.` marker with no trailing content. Spans with
    /// unknown weight are never rejected on weight grounds. Default: `false`.
    pub bold_required: bool,
    /// Lowercase connector words whose presence marks a numeral as part of
    /// running prose (dates, durations, counts) rather than a question
    /// marker. Default: a small set of Turkish time/date/subject nouns.
    pub blocklist: Vec<String>,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            instruction_margin: 10.0,
            choice_extra_height: 100.0,
            min_region_height: 150.0,
            base_height: 50.0,
            length_factor: 0.8,
            max_anchor_text_len: 12,
            max_question_number: 50,
            bold_required: false,
            blocklist: [
                "yıl", "saat", "dakika", "gün", "ayında", "tarih", "sayfa", "sınıf",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

/// Reusable segmenter holding a compiled [`AnchorDetector`].
///
/// Construct one per document run; the detector's regexes are compiled
/// once and applied to every half-page.
pub struct Segmenter {
    detector: AnchorDetector,
    options: SegmentOptions,
}

impl Segmenter {
    pub fn new(options: SegmentOptions) -> Self {
        let detector = AnchorDetector::new(&options);
        Self { detector, options }
    }

    pub fn options(&self) -> &SegmentOptions {
        &self.options
    }

    /// Segment one half-page into disjoint question regions.
    ///
    /// A pure function of the page and options: re-running it yields an
    /// identical region set. Pages with no detected anchors yield an
    /// empty Vec.
    pub fn segment_page(&self, page: &Page) -> Vec<QuestionRegion> {
        let anchors = self.detector.detect(&page.spans);
        expand_regions(page, &anchors, &self.detector, &self.options)
    }
}

/// One-off convenience wrapper around [`Segmenter::segment_page`].
pub fn segment_page(page: &Page, options: &SegmentOptions) -> Vec<QuestionRegion> {
    Segmenter::new(options.clone()).segment_page(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BBox;
    use crate::page::Side;
    use crate::span::TextSpan;

    fn span(text: &str, top: f64) -> TextSpan {
        TextSpan::new(text, BBox::new(10.0, top, 250.0, top + 12.0))
    }

    fn page(spans: Vec<TextSpan>) -> Page {
        Page {
            original_page_number: 1,
            side: Side::Left,
            bounds: BBox::new(0.0, 0.0, 300.0, 800.0),
            spans,
        }
    }

    #[test]
    fn test_regions_ordered_and_disjoint() {
        let p = page(vec![
            span("1.", 100.0),
            span("Bir sayının 2 katı 8 ise bu sayı kaçtır?", 115.0),
            span("2.", 300.0),
            span("5 + 3 işleminin sonucu kaçtır?", 315.0),
            span("3.", 520.0),
            span("A) 7", 540.0),
        ]);
        let regions = segment_page(&p, &SegmentOptions::default());
        assert_eq!(regions.len(), 3);
        for pair in regions.windows(2) {
            assert!(pair[0].number < pair[1].number);
            assert!(!pair[0].bbox.overlaps_vertically(&pair[1].bbox));
        }
    }

    #[test]
    fn test_segmentation_is_idempotent() {
        let p = page(vec![
            span("1.", 100.0),
            span("İlk soru metni", 115.0),
            span("2.", 400.0),
            span("İkinci soru metni", 415.0),
        ]);
        let options = SegmentOptions::default();
        let first = segment_page(&p, &options);
        let second = segment_page(&p, &options);
        assert_eq!(first, second);
    }

    #[test]
    fn test_segmenter_reuse_matches_one_off() {
        let options = SegmentOptions::default();
        let segmenter = Segmenter::new(options.clone());
        let pages = [
            page(vec![span("1.", 100.0), span("metin", 115.0)]),
            page(vec![span("2.", 200.0)]),
        ];
        for p in &pages {
            assert_eq!(segmenter.segment_page(p), segment_page(p, &options));
        }
    }

    #[test]
    fn test_page_without_markers_yields_no_regions() {
        let p = page(vec![
            span("Bu sayfada soru yoktur", 100.0),
            span("sadece açıklama metni", 120.0),
        ]);
        assert!(segment_page(&p, &SegmentOptions::default()).is_empty());
    }

    #[test]
    fn test_two_page_scenario() {
        // Page 1: markers at y=100 and y=300, choices A)-E) between 320 and 380.
        let p1 = page(vec![
            span("1.", 100.0),
            span("Soru metni", 115.0),
            span("2.", 300.0),
            span("A) 1", 320.0),
            span("B) 2", 335.0),
            span("C) 3", 350.0),
            span("D) 4", 365.0),
            span("E) 5", 380.0),
        ]);
        // Page 2: no markers at all.
        let p2 = page(vec![span("devam eden açıklama", 100.0)]);

        let options = SegmentOptions::default();
        let r1 = segment_page(&p1, &options);
        let r2 = segment_page(&p2, &options);

        assert_eq!(r1.len(), 2);
        assert!(r2.is_empty());

        // Region 1 spans roughly [90, 290]: margin above its marker down to
        // a margin above the next one.
        assert!((r1[0].bbox.top - 90.0).abs() < 1e-9);
        assert!((r1[0].bbox.bottom - 290.0).abs() < 1e-9);

        // Region 2 starts a margin above its marker and is extended for the
        // detected choice markers, capped at the page bottom.
        assert!((r1[1].bbox.top - 290.0).abs() < 1e-9);
        assert!(r1[1].bbox.bottom > 380.0);
        assert!(r1[1].bbox.bottom <= 800.0);
    }
}
