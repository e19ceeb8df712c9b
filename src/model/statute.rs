use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Seriousness of an offence as recorded in the statute catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];
}

/// Catalogue entry for a recognized statutory section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatuteInfo {
    pub section: String,
    pub name: String,
    pub severity: Severity,
    pub category: String,
    pub punishment: String,
    pub bailable: bool,
    pub related: Vec<String>,
}
