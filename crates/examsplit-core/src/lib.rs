//! Backend-independent question segmentation for two-column exam booklets.
//!
//! The crate works on plain geometry and text: a PDF backend (or a test)
//! supplies [`RawPage`] values of positioned [`TextSpan`]s, and the
//! pipeline turns them into disjoint [`QuestionRegion`]s per half-page.
//!
//! Stages, in order:
//!
//! 1. [`normalize_document`] removes the first page's instruction block and
//!    splits each page into left/right half-pages.
//! 2. [`AnchorDetector`] classifies spans and finds question-number anchors.
//! 3. [`expand_regions`] grows each anchor into a crop rectangle bounded by
//!    the next anchor or a content-length estimate.
//!
//! [`segment_page`] bundles stages 2 and 3; [`AnswerKey`] holds the
//! section → number → letter mapping scraped from answer-key booklets.
//!
//! All coordinates use a top-left origin with y growing downward, in PDF
//! points. Enable the `serde` feature to serialize the public types.

pub mod answers;
pub mod detect;
pub mod expand;
pub mod geometry;
pub mod normalize;
pub mod page;
pub mod segment;
pub mod span;

pub use answers::{AnswerKey, find_section_titles, scrape_answer_pairs};
pub use detect::{AnchorDetector, QuestionAnchor, SpanClass};
pub use expand::{QuestionRegion, expand_regions};
pub use geometry::BBox;
pub use normalize::{instruction_cutoff, normalize_document};
pub use page::{Page, RawPage, Side};
pub use segment::{SegmentOptions, Segmenter, segment_page};
pub use span::{TextSpan, sort_spans_by_top};
