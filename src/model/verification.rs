use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::statute::Severity;

/// Message reported when every citation is recognized
pub const VERIFIED_MESSAGE: &str = "All IPC Sections Verified Against Legal Database";

/// Message reported when at least one citation is unknown
pub const HALLUCINATION_MESSAGE: &str = "Hallucinated or Invalid IPC Section Detected";

/// Reliability score of a draft whose citations all verified
pub const RELIABLE_SCORE: u8 = 100;

/// Reliability score of a draft with any unknown citation
pub const UNRELIABLE_SCORE: u8 = 60;

/// Outcome of checking a draft's citations against the reference registry.
///
/// `is_valid` holds exactly when `invalid_citations` is empty, and
/// `reliability_score` is [`RELIABLE_SCORE`] or [`UNRELIABLE_SCORE`] accordingly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerificationVerdict {
    pub is_valid: bool,
    pub message: String,
    pub valid_citations: Vec<String>,
    pub invalid_citations: Vec<String>,
    pub reliability_score: u8,
    /// Catalogue details for valid citations that have an entry
    pub valid_details: Vec<CitationDetail>,
}

/// Short catalogue summary of a verified citation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CitationDetail {
    pub section: String,
    pub name: String,
    pub severity: Severity,
    pub category: String,
}
