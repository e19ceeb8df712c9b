//! Draft mutation hooks
//!
//! A mutator rewrites the provider's draft before verification. Production
//! uses [`PassThrough`]; [`HallucinationInjector`] plants a citation that the
//! registry does not recognize, for demonstrating the verifier.

/// Strategy applied to a provider-generated draft
pub trait DraftMutator: Send + Sync {
    fn mutate(&self, draft: String) -> String;
}

/// Leaves the draft untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl DraftMutator for PassThrough {
    fn mutate(&self, draft: String) -> String {
        draft
    }
}

/// Appends a sentence citing a section that does not exist
#[derive(Debug, Clone)]
pub struct HallucinationInjector {
    section: String,
}

impl HallucinationInjector {
    pub const DEFAULT_SECTION: &'static str = "999";

    pub fn new(section: impl Into<String>) -> Self {
        Self {
            section: section.into(),
        }
    }
}

impl Default for HallucinationInjector {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SECTION)
    }
}

impl DraftMutator for HallucinationInjector {
    fn mutate(&self, mut draft: String) -> String {
        tracing::debug!(section = %self.section, "Injecting fabricated citation into draft");
        draft.push_str(&format!(
            "\n\nThe accused further relies on the protection afforded under Section {} IPC.",
            self.section
        ));
        draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::citations::extract_citations;

    #[test]
    fn test_pass_through_is_identity() {
        let draft = "Bail under Section 379 IPC".to_string();
        assert_eq!(PassThrough.mutate(draft.clone()), draft);
    }

    #[test]
    fn test_injector_adds_extractable_citation() {
        let draft = HallucinationInjector::default().mutate("Bail under Section 379 IPC.".to_string());
        assert_eq!(extract_citations(&draft), vec!["379", "999"]);
    }
}
