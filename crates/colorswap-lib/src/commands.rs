//! Outward commands: locate, convert and write back over the collaborator
//! traits.
//!
//! Batch commands never abort: each selection or match yields its own
//! [`Outcome`], and edits are applied highest offset first so earlier
//! replacements cannot shift the ranges of later ones.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::buffer::TextBuffer;
use crate::color::NAMED_COLORS;
use crate::config::FormatConfig;
use crate::error::{ColorswapError, Result};
use crate::format::{self, Notation};
use crate::locate::try_locate;
use crate::parse::{self, FUNCTION_RE};

/// Message for a `name` conversion of a color that has none.
pub const NO_NAME: &str = "This color does not have a name";

/// `#`-prefixed hex literals, any case.
static HASH_HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)#(?:[0-9a-f]{6}|[0-9a-f]{3})\b").expect("hex pattern is a valid regex")
});

/// Whole-word CSS color keywords, lowercase only.
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    let mut names: Vec<&str> = NAMED_COLORS.iter().map(|(name, _)| *name).collect();
    // longest first so no name is cut short by a prefix of itself
    names.sort_by_key(|n| std::cmp::Reverse(n.len()));
    Regex::new(&format!(r"\b(?:{})\b", names.join("|"))).expect("name pattern is a valid regex")
});

/// Host clipboard.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

// ── Outcomes ──

/// One successful replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// Char range of the original token, before any edit of this command.
    pub range: Range<usize>,
    pub original: String,
    pub text: String,
}

/// Result of one attempt inside a batch.
#[derive(Debug)]
pub enum Outcome {
    Converted(Conversion),
    Failed { offset: usize, error: ColorswapError },
}

/// Per-attempt outcomes of a batch command, in the order they were applied.
#[derive(Debug, Default)]
pub struct Report {
    pub outcomes: Vec<Outcome>,
}

impl Report {
    fn push(&mut self, offset: usize, result: Result<Conversion>) {
        let outcome = match result {
            Ok(conversion) => Outcome::Converted(conversion),
            Err(error) => {
                log::warn!("skipping color at {offset}: {error}");
                Outcome::Failed { offset, error }
            }
        };
        self.outcomes.push(outcome);
    }

    pub fn conversions(&self) -> impl Iterator<Item = &Conversion> {
        self.outcomes.iter().filter_map(|o| match o {
            Outcome::Converted(c) => Some(c),
            Outcome::Failed { .. } => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = (usize, &ColorswapError)> {
        self.outcomes.iter().filter_map(|o| match o {
            Outcome::Failed { offset, error } => Some((*offset, error)),
            Outcome::Converted(_) => None,
        })
    }

    pub fn converted_count(&self) -> usize {
        self.conversions().count()
    }
}

// ── Commands ──

/// Parse a literal and render it in `notation`.
pub fn convert_text(text: &str, notation: Notation, config: &FormatConfig) -> Result<String> {
    let color = parse::parse(text)?;
    Ok(format::format(&color, notation, config))
}

/// Locate the color at `offset` and render it, without editing.
pub fn convert_at<B: TextBuffer + ?Sized>(
    buffer: &B,
    offset: usize,
    notation: Notation,
    config: &FormatConfig,
) -> Result<Conversion> {
    let (span, color) = try_locate(buffer, offset)?;
    Ok(Conversion {
        range: span.range,
        original: span.raw_text,
        text: format::format(&color, notation, config),
    })
}

/// Convert the color at each selection's start.
///
/// Selections are processed from the highest offset down. A selection whose
/// token overlaps one already replaced is skipped.
pub fn convert_at_each_selection<B: TextBuffer + ?Sized>(
    buffer: &mut B,
    selections: &[Range<usize>],
    notation: Notation,
    config: &FormatConfig,
) -> Report {
    let mut starts: Vec<usize> = selections.iter().map(|s| s.start).collect();
    starts.sort_unstable_by(|a, b| b.cmp(a));
    starts.dedup();

    let mut report = Report::default();
    let mut lowest_edit = usize::MAX;
    for offset in starts {
        let result = convert_at(buffer, offset, notation, config).and_then(|conversion| {
            if conversion.range.end > lowest_edit {
                return Err(ColorswapError::NoColorFound);
            }
            buffer.replace(conversion.range.clone(), &conversion.text);
            lowest_edit = conversion.range.start;
            Ok(conversion)
        });
        report.push(offset, result);
    }
    report
}

/// Convert every hex literal, color function and color name in `within`
/// (or the whole buffer).
///
/// All candidate spans are gathered before any edit, overlaps are dropped
/// (earliest, then longest, wins), and replacements run highest offset first.
pub fn convert_all<B: TextBuffer + ?Sized>(
    buffer: &mut B,
    within: Option<Range<usize>>,
    notation: Notation,
    config: &FormatConfig,
) -> Report {
    let spans = color_spans(buffer, within);
    log::debug!("convert-all found {} candidate spans", spans.len());

    let mut report = Report::default();
    for range in spans.into_iter().rev() {
        let original = buffer.substring(range.clone());
        let result = parse::parse(&original)
            .map_err(ColorswapError::from)
            .map(|color| {
                let text = format::format(&color, notation, config);
                buffer.replace(range.clone(), &text);
                Conversion {
                    range: range.clone(),
                    original,
                    text,
                }
            });
        report.push(range.start, result);
    }
    report
}

/// Candidate spans for [`convert_all`], sorted and non-overlapping.
pub fn color_spans<B: TextBuffer + ?Sized>(
    buffer: &B,
    within: Option<Range<usize>>,
) -> Vec<Range<usize>> {
    let mut spans: Vec<Range<usize>> = [&*HASH_HEX_RE, &*FUNCTION_RE, &*NAME_RE]
        .into_iter()
        .flat_map(|re| buffer.find_all(re, within.clone()))
        .collect();
    spans.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let mut kept: Vec<Range<usize>> = Vec::with_capacity(spans.len());
    for span in spans {
        if kept.last().is_none_or(|last| span.start >= last.end) {
            kept.push(span);
        }
    }
    kept
}

/// Convert the color at a pointer position.
///
/// A `name` request for a color without a CSS name fails with
/// [`ColorswapError::UnsupportedConversion`] and leaves the buffer untouched.
pub fn convert_at_point<B: TextBuffer + ?Sized>(
    buffer: &mut B,
    offset: usize,
    notation: Notation,
    config: &FormatConfig,
) -> Result<Conversion> {
    let conversion = convert_at(buffer, offset, notation, config)?;
    if notation == Notation::Name && format::is_name_fallback(&conversion.text) {
        return Err(ColorswapError::UnsupportedConversion(NO_NAME.to_string()));
    }
    buffer.replace(conversion.range.clone(), &conversion.text);
    Ok(conversion)
}

/// Convert the color at `offset` and put the text on the clipboard.
///
/// `notation` defaults to [`Notation::Hex6`]. Hex output loses its `#` unless
/// `emit_leading_hash` is set. Returns the copied text.
pub fn copy_converted<B, C>(
    buffer: &B,
    offset: usize,
    notation: Option<Notation>,
    config: &FormatConfig,
    clipboard: &mut C,
) -> Result<String>
where
    B: TextBuffer + ?Sized,
    C: Clipboard + ?Sized,
{
    let notation = notation.unwrap_or(Notation::Hex6);
    let conversion = convert_at(buffer, offset, notation, config)?;
    let text = match notation {
        Notation::Hex | Notation::Hex6 | Notation::Hexa if !config.emit_leading_hash => conversion
            .text
            .strip_prefix('#')
            .map(str::to_string)
            .unwrap_or(conversion.text),
        _ => conversion.text,
    };
    clipboard.set_text(&text)?;
    Ok(text)
}
