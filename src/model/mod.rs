pub mod case;
pub mod config;
pub mod risk;
pub mod statute;
pub mod verification;

pub use case::{CaseExtraction, CaseReport};
pub use config::Config;
pub use risk::{RiskAssessment, RiskLevel};
pub use statute::{Severity, StatuteInfo};
pub use verification::{CitationDetail, VerificationVerdict};
