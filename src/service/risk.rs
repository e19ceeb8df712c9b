//! Risk scoring from a case's classification codes
//!
//! A closed lookup, evaluated top to bottom; the first rule that matches any
//! code decides the tier. Codes outside the table fall through to the default.

use crate::model::{RiskAssessment, RiskLevel};

struct RiskRule {
    codes: &'static [&'static str],
    assessment: RiskAssessment,
}

/// Precedence order matters: a case charged under both 420 and 379 is Medium.
const RISK_RULES: &[RiskRule] = &[
    // Murder, rape
    RiskRule {
        codes: &["302", "376"],
        assessment: RiskAssessment::new(90, RiskLevel::High),
    },
    // Cruelty by husband or relatives
    RiskRule {
        codes: &["498A"],
        assessment: RiskAssessment::new(65, RiskLevel::High),
    },
    // Cheating
    RiskRule {
        codes: &["420"],
        assessment: RiskAssessment::new(55, RiskLevel::Medium),
    },
    // Theft
    RiskRule {
        codes: &["379"],
        assessment: RiskAssessment::new(35, RiskLevel::Low),
    },
];

const DEFAULT_RISK: RiskAssessment = RiskAssessment::new(10, RiskLevel::Low);

/// Score a case from its classification codes
pub fn score_risk<S: AsRef<str>>(codes: &[S]) -> RiskAssessment {
    let assessment = RISK_RULES
        .iter()
        .find(|rule| {
            codes.iter().any(|code| {
                let code = code.as_ref().trim();
                rule.codes.iter().any(|known| *known == code)
            })
        })
        .map(|rule| rule.assessment)
        .unwrap_or(DEFAULT_RISK);

    tracing::debug!(
        codes = codes.len(),
        score = assessment.score,
        level = ?assessment.level,
        "Computed risk score"
    );

    assessment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violent_offence_is_high() {
        assert_eq!(score_risk(&["302"]), RiskAssessment::new(90, RiskLevel::High));
        assert_eq!(score_risk(&["376"]), RiskAssessment::new(90, RiskLevel::High));
    }

    #[test]
    fn test_each_tier() {
        assert_eq!(score_risk(&["498A"]), RiskAssessment::new(65, RiskLevel::High));
        assert_eq!(score_risk(&["420"]), RiskAssessment::new(55, RiskLevel::Medium));
        assert_eq!(score_risk(&["379"]), RiskAssessment::new(35, RiskLevel::Low));
    }

    #[test]
    fn test_fraud_wins_over_theft() {
        assert_eq!(
            score_risk(&["420", "379"]),
            RiskAssessment::new(55, RiskLevel::Medium)
        );
        assert_eq!(
            score_risk(&["379", "420"]),
            RiskAssessment::new(55, RiskLevel::Medium)
        );
    }

    #[test]
    fn test_highest_precedence_wins_regardless_of_order() {
        assert_eq!(score_risk(&["379", "498A", "302"]).score, 90);
        assert_eq!(score_risk(&["420", "498A"]).score, 65);
    }

    #[test]
    fn test_default_for_empty_and_unknown_codes() {
        let empty: [&str; 0] = [];
        assert_eq!(score_risk(&empty), RiskAssessment::new(10, RiskLevel::Low));
        assert_eq!(score_risk(&["999", "307"]), RiskAssessment::new(10, RiskLevel::Low));
    }

    #[test]
    fn test_codes_are_trimmed_but_case_sensitive() {
        assert_eq!(score_risk(&[" 302 "]).score, 90);
        assert_eq!(score_risk(&["498a"]).score, 10);
    }
}
