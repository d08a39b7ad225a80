use crate::geometry::BBox;

/// A contiguous run of text from a page's text layer, with its bounding box
/// and font attributes.
///
/// Spans are the smallest addressable unit the segmentation engine works on.
/// They are produced by a PDF backend (the pipeline crate collects them from
/// PDFium text segments) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextSpan {
    /// Raw text content as reported by the backend.
    pub text: String,
    /// Bounding box in page coordinates (top-left origin).
    pub bbox: BBox,
    /// Whether the span is set in a bold face. `None` when the backend does
    /// not expose font weight metadata — weight-based heuristics must
    /// degrade gracefully in that case.
    pub bold: Option<bool>,
    /// Nominal font size in points. Backends that report only segment
    /// bounds approximate this with the bounds height.
    pub font_size: f64,
}

impl TextSpan {
    pub fn new(text: impl Into<String>, bbox: BBox) -> Self {
        let font_size = bbox.height();
        Self {
            text: text.into(),
            bbox,
            bold: None,
            font_size,
        }
    }

    /// Builder-style setter for the boldness flag, used by backends that do
    /// carry font weight.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }
}

/// Sort spans by ascending vertical origin. The sort is stable, so spans at
/// the same height keep their original document order.
pub fn sort_spans_by_top(spans: &mut [TextSpan]) {
    spans.sort_by(|a, b| {
        a.bbox
            .top
            .partial_cmp(&b.bbox.top)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(text: &str, top: f64) -> TextSpan {
        TextSpan::new(text, BBox::new(0.0, top, 100.0, top + 10.0))
    }

    #[test]
    fn test_sort_is_by_top() {
        let mut spans = vec![span("c", 30.0), span("a", 10.0), span("b", 20.0)];
        sort_spans_by_top(&mut spans);
        let texts: Vec<&str> = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_preserves_document_order_on_ties() {
        let mut spans = vec![span("first", 10.0), span("second", 10.0)];
        sort_spans_by_top(&mut spans);
        assert_eq!(spans[0].text, "first");
        assert_eq!(spans[1].text, "second");
    }

    #[test]
    fn test_bold_defaults_to_absent() {
        let s = span("1.", 0.0);
        assert_eq!(s.bold, None);
        assert_eq!(s.with_bold(true).bold, Some(true));
    }
}
