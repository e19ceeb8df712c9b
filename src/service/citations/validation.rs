//! Citation verification against the reference registry
//!
//! Deterministic guard over generated drafts: every cited section must be a
//! registry member, otherwise the draft is flagged as containing a
//! hallucinated citation.

use crate::model::verification::{
    HALLUCINATION_MESSAGE, RELIABLE_SCORE, UNRELIABLE_SCORE, VERIFIED_MESSAGE,
};
use crate::model::{CitationDetail, VerificationVerdict};
use crate::service::citations::extract_citations;
use crate::service::registry::ReferenceRegistry;

/// Partition citations into registry members and non-members, preserving order.
pub fn verify_citations(citations: &[String], registry: &ReferenceRegistry) -> VerificationVerdict {
    let (valid_citations, invalid_citations): (Vec<String>, Vec<String>) = citations
        .iter()
        .cloned()
        .partition(|citation| registry.contains(citation));

    let is_valid = invalid_citations.is_empty();

    let valid_details = valid_citations
        .iter()
        .filter_map(|citation| registry.get(citation))
        .map(|info| CitationDetail {
            section: info.section.clone(),
            name: info.name.clone(),
            severity: info.severity,
            category: info.category.clone(),
        })
        .collect();

    VerificationVerdict {
        is_valid,
        message: if is_valid {
            VERIFIED_MESSAGE
        } else {
            HALLUCINATION_MESSAGE
        }
        .to_string(),
        valid_citations,
        invalid_citations,
        reliability_score: if is_valid {
            RELIABLE_SCORE
        } else {
            UNRELIABLE_SCORE
        },
        valid_details,
    }
}

/// Extract citations from a draft and verify them
pub fn verify_draft(draft: &str, registry: &ReferenceRegistry) -> VerificationVerdict {
    let citations = extract_citations(draft);
    let verdict = verify_citations(&citations, registry);

    if verdict.is_valid {
        tracing::info!(
            citations = citations.len(),
            "Verification passed, all cited sections recognized"
        );
    } else {
        tracing::warn!(
            invalid = ?verdict.invalid_citations,
            "Hallucinated or unknown sections cited in draft"
        );
    }

    verdict
}
