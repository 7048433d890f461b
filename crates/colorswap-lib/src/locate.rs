//! Token locator: finds the color literal at a caret offset.
//!
//! Function notations are searched first inside a window of
//! [`SEARCH_RADIUS`] characters either side of the caret, in the priority
//! order of [`notation_patterns`]. When none of them covers the caret the word
//! under it is tried as a hex literal or color name.

use std::ops::Range;

use regex::{Captures, Regex};

use crate::buffer::TextBuffer;
use crate::color::CanonicalColor;
use crate::error::{ColorswapError, Result};
use crate::parse::{self, BARE_HEX_RE, FUNCTION_RE, HSL_RE, HWB_RE};

/// How far either side of the caret function notations are searched for.
pub const SEARCH_RADIUS: usize = 50;

/// A located color token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSpan {
    /// Char range in the buffer, never empty.
    pub range: Range<usize>,
    /// The exact text of `range`.
    pub raw_text: String,
}

/// How a pattern's match is turned into a color.
#[derive(Clone, Copy)]
enum MatchParser {
    /// Specialized parser reading the pattern's capture groups.
    Captures(fn(&Captures) -> parse::Result<CanonicalColor>),
    /// Re-parse the whole matched text.
    Text,
}

struct NotationPattern {
    name: &'static str,
    regex: &'static Regex,
    parser: MatchParser,
}

/// Function patterns, highest priority first. The first match covering the
/// caret wins, so the unit-aware hue patterns must precede the catch-all.
fn notation_patterns() -> [NotationPattern; 3] {
    [
        NotationPattern {
            name: "hsl",
            regex: &HSL_RE,
            parser: MatchParser::Captures(parse::parse_hsl),
        },
        NotationPattern {
            name: "hwb",
            regex: &HWB_RE,
            parser: MatchParser::Captures(parse::parse_hwb),
        },
        NotationPattern {
            name: "function",
            regex: &FUNCTION_RE,
            parser: MatchParser::Text,
        },
    ]
}

/// The search window around `offset`, clamped to the buffer.
pub fn search_window(len: usize, offset: usize) -> Range<usize> {
    let offset = offset.min(len);
    offset.saturating_sub(SEARCH_RADIUS)..offset.saturating_add(SEARCH_RADIUS).min(len)
}

/// Locate and parse the color at `offset`. `None` means "not a color".
pub fn locate<B: TextBuffer + ?Sized>(buffer: &B, offset: usize) -> Option<(MatchSpan, CanonicalColor)> {
    match try_locate(buffer, offset) {
        Ok(found) => Some(found),
        Err(e) => {
            log::debug!("no color at {offset}: {e}");
            None
        }
    }
}

/// Like [`locate`], but says why nothing was found.
///
/// Returns [`ColorswapError::NoColorFound`] when no token could be isolated and
/// [`ColorswapError::Parse`] when the token is not valid color syntax.
pub fn try_locate<B: TextBuffer + ?Sized>(
    buffer: &B,
    offset: usize,
) -> Result<(MatchSpan, CanonicalColor)> {
    let offset = offset.min(buffer.len());
    let window = search_window(buffer.len(), offset);

    if let Some(found) = find_function(buffer, &window, offset) {
        return found;
    }

    let span = word_token(buffer, offset, &window).ok_or(ColorswapError::NoColorFound)?;
    let color = parse::parse(&span.raw_text)?;
    Ok((span, color))
}

fn find_function<B: TextBuffer + ?Sized>(
    buffer: &B,
    window: &Range<usize>,
    offset: usize,
) -> Option<Result<(MatchSpan, CanonicalColor)>> {
    let text = buffer.substring(window.clone());
    let cursor = offset - window.start;

    for pattern in notation_patterns() {
        for caps in pattern.regex.captures_iter(&text) {
            let Some(m) = caps.get(0) else { continue };
            let start = text[..m.start()].chars().count();
            let end = start + m.as_str().chars().count();
            if !(start <= cursor && cursor <= end) {
                continue;
            }

            let span = MatchSpan {
                range: window.start + start..window.start + end,
                raw_text: m.as_str().to_string(),
            };
            log::debug!("{} pattern matched {:?} at {:?}", pattern.name, span.raw_text, span.range);
            let parsed = match pattern.parser {
                MatchParser::Captures(parse_captures) => parse_captures(&caps),
                MatchParser::Text => parse::parse(m.as_str()),
            };
            return Some(parsed.map(|color| (span, color)).map_err(ColorswapError::from));
        }
    }
    None
}

/// The hex literal or name under the caret, `#` included.
fn word_token<B: TextBuffer + ?Sized>(
    buffer: &B,
    offset: usize,
    window: &Range<usize>,
) -> Option<MatchSpan> {
    let mut range = buffer.word_at(offset);
    // `#abc` segments as `#` + `abc`
    if buffer.substring(range.clone()).trim() == "#" && offset < buffer.len() {
        range = buffer.word_at(offset + 1);
    }

    let word = buffer.substring(range.clone());
    if BARE_HEX_RE.is_match(&word)
        && range.start > 0
        && buffer.substring(range.start - 1..range.start) == "#"
    {
        range.start -= 1;
    }

    if range.is_empty() || range.start < window.start || range.end > window.end {
        return None;
    }
    let raw_text = buffer.substring(range.clone());
    log::debug!("word fallback {raw_text:?} at {range:?}");
    Some(MatchSpan { range, raw_text })
}
