//! Question-start detection.
//!
//! Classifies each span of a half-page as a question-number marker,
//! instruction text, answer-choice marker, or plain prose. Question
//! numbering is typographically distinguished from prose numerals (dates,
//! counts) only by a combination of brevity, position, and weight — no
//! single signal is reliable alone, so a span becomes an anchor only when
//! every filter agrees. A missed question costs one manual review; a
//! spurious split corrupts two adjacent questions.

use regex::Regex;

use crate::geometry::BBox;
use crate::segment::SegmentOptions;
use crate::span::TextSpan;

/// The verified start of a question: its number marker span.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestionAnchor {
    /// Question number parsed from the marker.
    pub number: u32,
    /// Bounding box of the marker span.
    pub bbox: BBox,
    /// Index of the marker span in the page's span list.
    pub span_index: usize,
}

/// Classification of a single span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanClass {
    /// A genuine question-number marker.
    QuestionStart(u32),
    /// Instruction-preamble text (booklet rules, marking instructions),
    /// even when it starts with a numbered marker.
    Instruction,
    /// An answer-choice marker `A)`–`E)`.
    ChoiceMarker,
    /// A numeric marker rejected by the length, blocklist, or weight
    /// filters: the numeral is part of running text.
    NumericNoise,
    /// Everything else.
    Prose,
}

/// Instruction-preamble patterns, excluded even when prefixed with `N.`.
/// These are the stock phrasings of Turkish exam booklet front matter.
const INSTRUCTION_PATTERNS: &[&str] = &[
    r"^\d+\.\s*Bu testte \d+ soru vardır",
    r"^\d+\.\s*Cevaplarınızı, cevap kâğıdının",
    r"^\d+\.\s*Test süresi",
    r"^\d+\.\s*Sınav başlamadan önce",
    r"^\d+\.\s*Talimatlar",
    r"^\d+\.\s*Yönergeler",
];

/// Detector with its patterns compiled once per run.
pub struct AnchorDetector {
    /// Accepted marker patterns in priority order: `N.` > `Soru N` > `N -`.
    marker_patterns: [Regex; 3],
    /// A marker with nothing after the number and period.
    bare_marker: Regex,
    instruction_patterns: Vec<Regex>,
    choice_marker: Regex,
    options: SegmentOptions,
}

impl AnchorDetector {
    pub fn new(options: &SegmentOptions) -> Self {
        // The patterns are fixed at compile time, so construction cannot fail.
        let marker_patterns = [
            Regex::new(r"^(\d{1,2})\.\s*").unwrap(),
            Regex::new(r"^Soru\s*(\d{1,2})").unwrap(),
            Regex::new(r"^(\d{1,2})\s*-\s*").unwrap(),
        ];
        Self {
            marker_patterns,
            bare_marker: Regex::new(r"^\d{1,2}\.\s*$").unwrap(),
            instruction_patterns: INSTRUCTION_PATTERNS
                .iter()
                .map(|p| Regex::new(p).unwrap())
                .collect(),
            choice_marker: Regex::new(r"^[A-E]\s*[.)]\s*").unwrap(),
            options: options.clone(),
        }
    }

    /// Classify one span.
    pub fn classify(&self, span: &TextSpan) -> SpanClass {
        let text = span.text.trim();
        if text.is_empty() {
            return SpanClass::Prose;
        }

        if self.is_instruction(text) {
            return SpanClass::Instruction;
        }

        if let Some(number) = self.match_marker(text) {
            if !self.accept_marker(span, text, number) {
                return SpanClass::NumericNoise;
            }
            return SpanClass::QuestionStart(number);
        }

        if self.choice_marker.is_match(text) {
            return SpanClass::ChoiceMarker;
        }

        SpanClass::Prose
    }

    /// Detect all question anchors on a page, in span order.
    ///
    /// Booklet numbering ascends within a page, so each accepted anchor
    /// must carry a number greater than the previous one. This drops both
    /// repeats of a number (page-numbering artifacts keep the first
    /// occurrence) and out-of-order markers, keeping the anchor list
    /// strictly increasing.
    pub fn detect(&self, spans: &[TextSpan]) -> Vec<QuestionAnchor> {
        let mut anchors = Vec::new();
        let mut last_number: Option<u32> = None;

        for (index, span) in spans.iter().enumerate() {
            if let SpanClass::QuestionStart(number) = self.classify(span) {
                if last_number.is_some_and(|last| number <= last) {
                    continue;
                }
                last_number = Some(number);
                anchors.push(QuestionAnchor {
                    number,
                    bbox: span.bbox,
                    span_index: index,
                });
            }
        }

        anchors
    }

    /// Whether `text` matches an instruction-preamble pattern.
    pub fn is_instruction(&self, text: &str) -> bool {
        self.instruction_patterns.iter().any(|p| p.is_match(text))
    }

    /// Whether `text` is an answer-choice marker.
    pub fn is_choice_marker(&self, text: &str) -> bool {
        self.choice_marker.is_match(text.trim())
    }

    /// Match the marker patterns in priority order and parse the number.
    fn match_marker(&self, text: &str) -> Option<u32> {
        for pattern in &self.marker_patterns {
            if let Some(caps) = pattern.captures(text) {
                if let Ok(number) = caps[1].parse::<u32>() {
                    return Some(number);
                }
            }
        }
        None
    }

    /// Conjunction of the acceptance filters beyond the pattern match.
    fn accept_marker(&self, span: &TextSpan, text: &str, number: u32) -> bool {
        if number == 0 || number > self.options.max_question_number {
            return false;
        }

        if text.chars().count() > self.options.max_anchor_text_len {
            return false;
        }

        let lower = text.to_lowercase();
        if self
            .options
            .blocklist
            .iter()
            .any(|word| lower.contains(word.as_str()))
        {
            return false;
        }

        // Non-bold numerals are suspect: a mid-sentence numeral in a
        // differently-weighted font must not start a region. Unknown weight
        // never rejects.
        if self.options.bold_required && span.bold == Some(false) && !self.bare_marker.is_match(text)
        {
            return false;
        }

        true
    }
}
