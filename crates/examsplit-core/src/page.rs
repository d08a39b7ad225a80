use crate::geometry::BBox;
use crate::span::TextSpan;

/// Which vertical half of a two-up printed page a half-page came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Filename token for this side, matching the booklet convention
    /// (`sol` = left, `sag` = right).
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "sol",
            Side::Right => "sag",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw page as reported by the PDF backend: full dimensions and every
/// text span, before any normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPage {
    pub width: f64,
    pub height: f64,
    pub spans: Vec<TextSpan>,
}

/// One half-page in single-column reading order, produced by the normalizer.
///
/// Span coordinates stay in the coordinate space of the original PDF page;
/// `bounds` records which part of that page this half-page covers (the
/// column extent horizontally, and the post-cutoff content area vertically).
/// Keeping original coordinates means regions computed here can be handed
/// to the rasterizer without any re-basing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// 1-based page number in the original document.
    pub original_page_number: usize,
    /// Which column of the original page this is.
    pub side: Side,
    /// Area of the original page covered by this half-page.
    pub bounds: BBox,
    /// Spans inside `bounds`, sorted by ascending top.
    pub spans: Vec<TextSpan>,
}
