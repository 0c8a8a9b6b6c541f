//! Caller-owned substitution policy for failed extractions.
//!
//! The core reports failures; it never masks them. What the user sees
//! instead of an error is the calling application's decision, configured
//! here: a canned fortune record for the fortune call site, a bounded
//! truncation of the original fortune for the summary call site. Both
//! substitution values are supplied by the caller; this crate embeds no
//! canned text and no character budget of its own.

use crate::error::ExtractionError;
use crate::types::{FortuneData, SummaryData};
use chrono::Utc;

/// Substitution values for the two call sites.
#[derive(Debug, Clone)]
pub struct FallbackPolicy {
    canned_fortune: FortuneData,
    summary_budget: usize,
    ellipsis: String,
}

impl FallbackPolicy {
    /// Build a policy from the caller's canned fortune record and the
    /// character budget for truncated summaries.
    pub fn new(canned_fortune: FortuneData, summary_budget: usize) -> Self {
        Self {
            canned_fortune,
            summary_budget,
            ellipsis: "...".to_string(),
        }
    }

    /// Override the marker appended to truncated summaries.
    pub fn with_ellipsis(mut self, marker: impl Into<String>) -> Self {
        self.ellipsis = marker.into();
        self
    }

    /// Resolve a fortune outcome: `Ok` passes through untouched; any failure
    /// substitutes the canned record, re-stamped with the substitution time.
    pub fn resolve_fortune(
        &self,
        outcome: Result<FortuneData, ExtractionError>,
    ) -> FortuneData {
        match outcome {
            Ok(data) => data,
            Err(err) => {
                tracing::debug!(error = %err, "substituting canned fortune");
                let mut canned = self.canned_fortune.clone();
                canned.result.timestamp = Utc::now().to_rfc3339();
                canned
            }
        }
    }

    /// Resolve a summary outcome: `Ok` yields the summary text; any failure
    /// yields the original fortune truncated to the configured budget, with
    /// the ellipsis marker appended when truncation actually cut something.
    pub fn resolve_summary(
        &self,
        outcome: Result<SummaryData, ExtractionError>,
        fortune_text: &str,
    ) -> String {
        match outcome {
            Ok(data) => data.result.summary,
            Err(err) => {
                tracing::debug!(error = %err, "substituting truncated fortune for summary");
                truncate_chars(fortune_text, self.summary_budget, &self.ellipsis)
            }
        }
    }
}

/// Truncate to `budget` characters on a character boundary, appending
/// `marker` only when text was actually cut.
fn truncate_chars(text: &str, budget: usize, marker: &str) -> String {
    match text.char_indices().nth(budget) {
        Some((cut, _)) => format!("{}{marker}", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FortuneMetadata, FortuneResult, SummaryMetadata, SummaryResult};

    fn canned() -> FortuneData {
        FortuneData {
            result: FortuneResult {
                fortune: "The stars align in your favor today.".to_string(),
                tone: "positive".to_string(),
                length: 36.0,
                timestamp: "1970-01-01T00:00:00Z".to_string(),
            },
            confidence: 0.8,
            metadata: FortuneMetadata {
                processing_time: "1s".to_string(),
                fortune_type: "general".to_string(),
            },
        }
    }

    fn summary_ok(text: &str) -> SummaryData {
        SummaryData {
            result: SummaryResult {
                summary: text.to_string(),
                original_length: 36.0,
                summary_length: text.len() as f64,
                share_format: "plain".to_string(),
            },
            confidence: 0.9,
            metadata: SummaryMetadata {
                processing_time: "0.2s".to_string(),
                compression_ratio: 0.5,
            },
        }
    }

    #[test]
    fn ok_fortune_passes_through() {
        let policy = FallbackPolicy::new(canned(), 60);
        let mut data = canned();
        data.result.fortune = "Fresh.".to_string();
        let resolved = policy.resolve_fortune(Ok(data.clone()));
        assert_eq!(resolved, data);
    }

    #[test]
    fn failed_fortune_substitutes_canned_with_fresh_timestamp() {
        let policy = FallbackPolicy::new(canned(), 60);
        let resolved = policy.resolve_fortune(Err(ExtractionError::NoJsonFound));
        assert_eq!(resolved.result.fortune, canned().result.fortune);
        assert_ne!(resolved.result.timestamp, canned().result.timestamp);
    }

    #[test]
    fn ok_summary_passes_through() {
        let policy = FallbackPolicy::new(canned(), 60);
        let resolved = policy.resolve_summary(Ok(summary_ok("Stars favor you")), "ignored");
        assert_eq!(resolved, "Stars favor you");
    }

    #[test]
    fn failed_summary_truncates_with_ellipsis() {
        let policy = FallbackPolicy::new(canned(), 10);
        let resolved =
            policy.resolve_summary(Err(ExtractionError::NoJsonFound), "a fortune far past ten");
        assert_eq!(resolved, "a fortune ...");
    }

    #[test]
    fn short_fortune_is_not_marked() {
        let policy = FallbackPolicy::new(canned(), 60);
        let resolved = policy.resolve_summary(Err(ExtractionError::NoJsonFound), "short");
        assert_eq!(resolved, "short");
    }

    #[test]
    fn truncation_respects_multibyte_boundaries() {
        let policy = FallbackPolicy::new(canned(), 3);
        let resolved = policy.resolve_summary(Err(ExtractionError::NoJsonFound), "héllo");
        assert_eq!(resolved, "hél...");
    }

    #[test]
    fn custom_ellipsis_marker() {
        let policy = FallbackPolicy::new(canned(), 4).with_ellipsis("…");
        let resolved = policy.resolve_summary(Err(ExtractionError::NoJsonFound), "longer");
        assert_eq!(resolved, "long…");
    }
}
