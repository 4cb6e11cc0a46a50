use std::fmt;

use serde::Serialize;

/// Why two trips were not surfaced to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MismatchReason {
    #[serde(rename = "Time mismatch")]
    TimeMismatch,
    #[serde(rename = "Same role")]
    SameRole,
    #[serde(rename = "Insufficient overlap")]
    InsufficientOverlap,
}

impl fmt::Display for MismatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MismatchReason::TimeMismatch => "Time mismatch",
            MismatchReason::SameRole => "Same role",
            MismatchReason::InsufficientOverlap => "Insufficient overlap",
        };
        f.write_str(text)
    }
}

/// Outcome of evaluating one pair of trips.
///
/// `overlap_score` on a mismatch is present only when overlap was computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchVerdict {
    Matched {
        overlap_score: f64,
    },
    NotMatched {
        reason: MismatchReason,
        #[serde(skip_serializing_if = "Option::is_none")]
        overlap_score: Option<f64>,
    },
}

impl MatchVerdict {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchVerdict::Matched { .. })
    }

    pub fn overlap_score(&self) -> Option<f64> {
        match self {
            MatchVerdict::Matched { overlap_score } => Some(*overlap_score),
            MatchVerdict::NotMatched { overlap_score, .. } => *overlap_score,
        }
    }

    pub fn reason(&self) -> Option<MismatchReason> {
        match self {
            MatchVerdict::Matched { .. } => None,
            MatchVerdict::NotMatched { reason, .. } => Some(*reason),
        }
    }

    pub(crate) fn rejected(reason: MismatchReason) -> Self {
        MatchVerdict::NotMatched {
            reason,
            overlap_score: None,
        }
    }
}

/// A candidate trip that matched, with its position in the scanned slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripMatch {
    pub candidate_index: usize,
    pub candidate_id: Option<String>,
    pub overlap_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reasons_render_as_human_readable_text() {
        assert_eq!(MismatchReason::TimeMismatch.to_string(), "Time mismatch");
        assert_eq!(MismatchReason::SameRole.to_string(), "Same role");
        assert_eq!(
            MismatchReason::InsufficientOverlap.to_string(),
            "Insufficient overlap"
        );
    }

    #[test]
    fn accessors_expose_score_and_reason() {
        let matched = MatchVerdict::Matched { overlap_score: 0.9 };
        assert!(matched.is_match());
        assert_eq!(matched.overlap_score(), Some(0.9));
        assert_eq!(matched.reason(), None);

        let rejected = MatchVerdict::rejected(MismatchReason::SameRole);
        assert!(!rejected.is_match());
        assert_eq!(rejected.overlap_score(), None);
        assert_eq!(rejected.reason(), Some(MismatchReason::SameRole));
    }
}
