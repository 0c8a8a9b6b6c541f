//! Locating one JSON value inside free-form model text.
//!
//! Model output is not a contract: the JSON we asked for may arrive wrapped
//! in prose, inside a markdown code fence, or cut off mid-value. Regexes
//! cannot balance nested or escaped structures, so the scanner here is an
//! explicit state machine (`Scanning` / `InString` / `InEscape`) with a
//! nesting-depth counter.
//!
//! The extractor either returns exactly one [`Candidate`] spanning a
//! syntactically balanced value, or a typed failure. It never consumes
//! partially and has no side effects.

use crate::error::ExtractionError;

/// Nesting ceiling for the balanced scan.
///
/// Matches `serde_json`'s default recursion limit, so anything the scanner
/// accepts the decoder can also take without unbounded recursion. Deeper
/// input fails fast as [`ExtractionError::UnterminatedValue`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// A substring of the raw payload believed to span exactly one balanced JSON
/// value, with its byte offsets retained for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    text: &'a str,
    start: usize,
    end: usize,
}

impl<'a> Candidate<'a> {
    /// The candidate text itself.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Byte offset of the candidate's first byte within the raw payload.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the candidate's last byte within the raw payload.
    pub fn end(&self) -> usize {
        self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Scanning,
    InString,
    InEscape,
}

/// Extract the first balanced JSON value from `raw` with the default
/// nesting ceiling. See [`extract_candidate_with_depth`].
pub fn extract_candidate(raw: &str) -> Result<Candidate<'_>, ExtractionError> {
    extract_candidate_with_depth(raw, DEFAULT_MAX_DEPTH)
}

/// Extract the first balanced JSON value from `raw`.
///
/// If the text carries a fenced code block whose body contains an opening
/// brace or bracket, the first such fence is scanned; otherwise the whole
/// text is. Within the scan region the first `{` or `[` opens the value and
/// the scan runs until its nesting returns to zero. When several top-level
/// values are present, the first well-formed one wins: an intentional
/// tie-break favoring the earliest value rather than the largest or the last.
///
/// The scanner balances counts only; a `]` closing a `{` is accepted here
/// and surfaces as `MalformedJson` from the decoder.
pub fn extract_candidate_with_depth(
    raw: &str,
    max_depth: usize,
) -> Result<Candidate<'_>, ExtractionError> {
    let (base, region) = scan_region(raw);
    let open = region
        .find(['{', '['])
        .ok_or(ExtractionError::NoJsonFound)?;
    let end = balanced_end(region, open, base + open, max_depth)?;
    Ok(Candidate {
        text: &region[open..end],
        start: base + open,
        end: base + end,
    })
}

/// Pick the region to scan: the body of the first fenced code block if that
/// body contains an opening brace/bracket, the whole text otherwise.
///
/// Returns the region and its byte offset within `raw`. An unclosed fence
/// runs to the end of the text, so truncated fenced output still scans.
fn scan_region(raw: &str) -> (usize, &str) {
    let Some(fence) = raw.find("```") else {
        return (0, raw);
    };
    // Skip the optional info string (```json).
    let body_start = raw[fence + 3..]
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .map(|i| fence + 3 + i)
        .unwrap_or(raw.len());
    let body_end = raw[body_start..]
        .find("```")
        .map(|i| body_start + i)
        .unwrap_or(raw.len());
    let body = &raw[body_start..body_end];
    if body.contains(['{', '[']) {
        (body_start, body)
    } else {
        (0, raw)
    }
}

/// Scan from the opener at `region[open..]` until depth returns to zero,
/// returning the end offset (exclusive) within `region`.
///
/// Brace and bracket characters inside double-quoted strings do not perturb
/// the depth count; backslash escapes, including `\"` and `\\`, are honored.
fn balanced_end(
    region: &str,
    open: usize,
    opened_at: usize,
    max_depth: usize,
) -> Result<usize, ExtractionError> {
    let mut depth = 0usize;
    let mut state = ScanState::Scanning;
    for (i, ch) in region[open..].char_indices() {
        match state {
            ScanState::InEscape => state = ScanState::InString,
            ScanState::InString => match ch {
                '\\' => state = ScanState::InEscape,
                '"' => state = ScanState::Scanning,
                _ => {}
            },
            ScanState::Scanning => match ch {
                '"' => state = ScanState::InString,
                '{' | '[' => {
                    depth += 1;
                    if depth > max_depth {
                        return Err(ExtractionError::UnterminatedValue { opened_at, depth });
                    }
                }
                '}' | ']' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(open + i + ch.len_utf8());
                    }
                }
                _ => {}
            },
        }
    }
    Err(ExtractionError::UnterminatedValue { opened_at, depth })
}
