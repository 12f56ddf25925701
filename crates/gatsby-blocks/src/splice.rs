//! In-memory block splicing.
//!
//! Lines are split on `\n` and compared to the markers exactly, ignoring a
//! single trailing `\r` so files with CRLF endings keep matching.

use crate::error::{CONTENT_PATH, Error, Result};
use crate::marker::MarkerPair;
use std::ops::Range;
use std::path::PathBuf;

/// What a splice or removal did to the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpliceOutcome {
    /// No block existed; one was appended.
    Inserted,
    /// An existing block was replaced with a different body.
    Replaced,
    /// An existing block was removed.
    Removed,
    /// The content already held the requested state.
    Unchanged,
}

/// The result of splicing: new content plus what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spliced {
    pub content: String,
    pub outcome: SpliceOutcome,
}

/// A located block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedBlock {
    /// The text between the marker lines, without the surrounding newlines.
    pub body: String,
    /// The 1-based line number of the start marker.
    pub start_line: usize,
    /// The 1-based line number of the end marker.
    pub end_line: usize,
    /// Byte span from the start of the start marker to the end of the end
    /// marker text (its line terminator excluded).
    pub span: Range<usize>,
}

struct Line<'a> {
    number: usize,
    start: usize,
    /// End of the line text, excluding any `\r` and the `\n`.
    end: usize,
    /// Offset of the following line.
    next: usize,
    text: &'a str,
}

fn lines(content: &str) -> impl Iterator<Item = Line<'_>> {
    let mut offset = 0;
    content.split('\n').enumerate().map(move |(idx, raw)| {
        let start = offset;
        offset += raw.len() + 1;
        let text = raw.strip_suffix('\r').unwrap_or(raw);
        Line {
            number: idx + 1,
            start,
            end: start + text.len(),
            next: offset,
            text,
        }
    })
}

/// Find the block delimited by `markers`.
///
/// The first start-marker line is paired with the first end-marker line that
/// follows it.
///
/// # Errors
/// Returns `Error::MalformedBlock` when only one of the markers is present,
/// or the end marker only appears before the start marker.
///
/// # Example
/// ```
/// use gatsby_blocks::{MarkerPair, find_block};
///
/// let markers = MarkerPair::new("# S", "# E").unwrap();
/// let block = find_block("a\n# S\nx/y\n# E\nb", &markers).unwrap().unwrap();
/// assert_eq!(block.body, "x/y");
/// assert_eq!((block.start_line, block.end_line), (2, 4));
/// ```
pub fn find_block(content: &str, markers: &MarkerPair) -> Result<Option<MarkedBlock>> {
    let mut start: Option<Line<'_>> = None;
    let mut stray_end: Option<Line<'_>> = None;

    for line in lines(content) {
        if let Some(open) = &start {
            if line.text == markers.end() {
                let body = if line.start > open.next {
                    let raw = &content[open.next..line.start - 1];
                    raw.strip_suffix('\r').unwrap_or(raw)
                } else {
                    ""
                };
                return Ok(Some(MarkedBlock {
                    body: body.to_string(),
                    start_line: open.number,
                    end_line: line.number,
                    span: open.start..line.end,
                }));
            }
        } else if line.text == markers.start() {
            start = Some(line);
        } else if line.text == markers.end() && stray_end.is_none() {
            stray_end = Some(line);
        }
    }

    match (start, stray_end) {
        (Some(open), _) => Err(malformed(markers.start(), markers.end(), open.number)),
        (None, Some(close)) => Err(malformed(markers.end(), markers.start(), close.number)),
        (None, None) => Ok(None),
    }
}

fn malformed(found: &str, missing: &str, line: usize) -> Error {
    Error::MalformedBlock {
        path: PathBuf::from(CONTENT_PATH),
        found: found.to_string(),
        missing: missing.to_string(),
        line,
    }
}

fn check_body(markers: &MarkerPair, body: &str) -> Result<()> {
    let clash = body
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .find(|line| *line == markers.start() || *line == markers.end());
    match clash {
        Some(marker) => Err(Error::MarkerInBody {
            marker: marker.to_string(),
        }),
        None => Ok(()),
    }
}

/// Insert the block for `markers`, or replace it if it already exists.
///
/// An existing block (markers inclusive) is replaced in place; everything
/// before the start marker and after the end marker is left byte-identical.
/// Without an existing block, the new block is appended at the end, preceded
/// by a newline only when the content is non-empty and lacks a trailing one.
/// Splicing twice with the same arguments equals splicing once.
///
/// # Errors
/// Returns `Error::MarkerInBody` if a body line equals either marker, and
/// `Error::MalformedBlock` if only one of the markers is present.
///
/// # Example
/// ```
/// use gatsby_blocks::{MarkerPair, SpliceOutcome, splice};
///
/// let markers = MarkerPair::new("# S", "# E").unwrap();
/// let first = splice("a\nb\n", &markers, "x/y").unwrap();
/// assert_eq!(first.content, "a\nb\n# S\nx/y\n# E");
/// assert_eq!(first.outcome, SpliceOutcome::Inserted);
///
/// let again = splice(&first.content, &markers, "x/y").unwrap();
/// assert_eq!(again.content, first.content);
/// assert_eq!(again.outcome, SpliceOutcome::Unchanged);
/// ```
pub fn splice(content: &str, markers: &MarkerPair, body: &str) -> Result<Spliced> {
    check_body(markers, body)?;
    let block = markers.format_block(body);

    match find_block(content, markers)? {
        Some(existing) => {
            let mut updated = String::with_capacity(content.len() + block.len());
            updated.push_str(&content[..existing.span.start]);
            updated.push_str(&block);
            updated.push_str(&content[existing.span.end..]);

            let outcome = if updated == content {
                SpliceOutcome::Unchanged
            } else {
                SpliceOutcome::Replaced
            };
            Ok(Spliced {
                content: updated,
                outcome,
            })
        }
        None => {
            let mut updated = String::with_capacity(content.len() + block.len() + 1);
            updated.push_str(content);
            if !content.is_empty() && !content.ends_with('\n') {
                updated.push('\n');
            }
            updated.push_str(&block);
            Ok(Spliced {
                content: updated,
                outcome: SpliceOutcome::Inserted,
            })
        }
    }
}

/// Remove the block for `markers`, including the end marker's line
/// terminator. Content without the block is returned unchanged.
///
/// # Errors
/// Returns `Error::MalformedBlock` if only one of the markers is present.
pub fn remove(content: &str, markers: &MarkerPair) -> Result<Spliced> {
    let Some(existing) = find_block(content, markers)? else {
        return Ok(Spliced {
            content: content.to_string(),
            outcome: SpliceOutcome::Unchanged,
        });
    };

    let rest = &content[existing.span.end..];
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
        .unwrap_or(rest);

    Ok(Spliced {
        content: format!("{}{}", &content[..existing.span.start], rest),
        outcome: SpliceOutcome::Removed,
    })
}
