use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::risk::RiskAssessment;
use crate::model::verification::VerificationVerdict;

/// Placeholder for a required field the provider did not supply
pub const UNKNOWN_FIELD: &str = "[Unknown]";

/// Accused name reported when extraction could not run or could not be parsed
pub const EXTRACTION_FAILED: &str = "[Extraction Failed]";

/// Structured facts pulled from a free-text case description (FIR).
///
/// Built once per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaseExtraction {
    pub accused_name: String,
    /// Classification codes (statutory sections) charged in the FIR
    pub ipc_sections: Vec<String>,
    pub location: String,
    pub police_station: String,
    pub offense_type: String,
    pub age: Option<String>,
    pub address: Option<String>,
    pub fir_number: Option<String>,
    pub fir_date: Option<String>,
    pub complainant: Option<String>,
    pub property_value: Option<String>,
    pub evidence: Option<String>,
    pub arrest_status: Option<String>,
}

impl CaseExtraction {
    /// Sentinel used when the provider fails or returns unusable output
    pub fn failed() -> Self {
        Self {
            accused_name: EXTRACTION_FAILED.to_string(),
            ipc_sections: Vec::new(),
            location: UNKNOWN_FIELD.to_string(),
            police_station: UNKNOWN_FIELD.to_string(),
            offense_type: UNKNOWN_FIELD.to_string(),
            age: None,
            address: None,
            fir_number: None,
            fir_date: None,
            complainant: None,
            property_value: None,
            evidence: None,
            arrest_status: None,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.accused_name == EXTRACTION_FAILED
    }
}

/// Complete result of one pass through the case pipeline
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CaseReport {
    pub extraction: CaseExtraction,
    pub draft: String,
    pub verification: VerificationVerdict,
    pub risk: RiskAssessment,
}
