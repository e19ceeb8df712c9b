//! Case pipeline orchestration
//!
//! Runs extraction, drafting, verification and risk scoring strictly in
//! sequence. Extraction and drafting call the generative-text provider and
//! recover locally from any provider failure or timeout; verification and
//! scoring are deterministic and cannot fail.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::model::{CaseExtraction, CaseReport};
use crate::service::citations::verify_draft;
use crate::service::llm::{DRAFTING_PARAMS, EXTRACTION_PARAMS, LlmError, ModelParams, TextGenerator};
use crate::service::registry::ReferenceRegistry;
use crate::service::risk::score_risk;

pub mod error;
pub mod extraction;
pub mod mutation;
pub mod prompts;
pub mod state;

pub use error::PipelineError;
pub use mutation::{DraftMutator, HallucinationInjector, PassThrough};
pub use state::{PipelineRun, PipelineStage};

use extraction::parse_extraction;
use prompts::{
    DRAFTING_SYSTEM_PROMPT, EXTRACTION_SYSTEM_PROMPT, build_drafting_prompt,
    build_extraction_prompt, fallback_draft,
};

/// Sequential case pipeline shared by all requests
pub struct CasePipeline {
    generator: Arc<dyn TextGenerator>,
    registry: Arc<ReferenceRegistry>,
    mutator: Arc<dyn DraftMutator>,
    timeout: Duration,
}

impl CasePipeline {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        registry: Arc<ReferenceRegistry>,
        timeout: Duration,
    ) -> Self {
        tracing::info!(
            model = %generator.model(),
            timeout_ms = timeout.as_millis(),
            registry_size = registry.len(),
            "Case pipeline initialized"
        );

        Self {
            generator,
            registry,
            mutator: Arc::new(PassThrough),
            timeout,
        }
    }

    /// Replace the draft mutator
    pub fn with_mutator(mut self, mutator: Arc<dyn DraftMutator>) -> Self {
        self.mutator = mutator;
        self
    }

    pub fn registry(&self) -> &ReferenceRegistry {
        &self.registry
    }

    pub fn model(&self) -> &str {
        self.generator.model()
    }

    /// Process a case description into a complete report.
    ///
    /// Blank input is rejected before any stage runs. Provider failures never
    /// surface here; the report may instead carry fallback values.
    pub async fn process(&self, case_description: &str) -> Result<CaseReport, PipelineError> {
        if case_description.trim().is_empty() {
            return Err(PipelineError::InvalidInput(
                "Case description is required".to_string(),
            ));
        }

        let start_time = Instant::now();
        let mut run = PipelineRun::new();

        tracing::info!(
            description_length = case_description.len(),
            "Starting case processing"
        );

        run.advance(PipelineStage::Extracting)?;
        let extraction = self.extract(case_description).await;

        run.advance(PipelineStage::Drafting)?;
        let draft = self.draft(&extraction).await;

        run.advance(PipelineStage::Verifying)?;
        let verification = verify_draft(&draft, &self.registry);

        run.advance(PipelineStage::Scoring)?;
        let risk = score_risk(extraction.ipc_sections.as_slice());

        run.advance(PipelineStage::Complete)?;

        tracing::info!(
            stage = %run.stage(),
            elapsed_ms = start_time.elapsed().as_millis(),
            extraction_failed = extraction.is_failed(),
            citations_valid = verification.is_valid,
            reliability = verification.reliability_score,
            risk_score = risk.score,
            risk_level = ?risk.level,
            "Case processing complete"
        );

        Ok(CaseReport {
            extraction,
            draft,
            verification,
            risk,
        })
    }

    /// Extraction stage; falls back to the sentinel on any failure.
    async fn extract(&self, case_description: &str) -> CaseExtraction {
        let prompt = build_extraction_prompt(case_description);

        let response = match self
            .call_provider(EXTRACTION_SYSTEM_PROMPT, &prompt, EXTRACTION_PARAMS)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "Extraction call failed, using sentinel extraction");
                return CaseExtraction::failed();
            }
        };

        match parse_extraction(&response) {
            Ok(extraction) => {
                tracing::info!(
                    accused = %extraction.accused_name,
                    sections = ?extraction.ipc_sections,
                    "Case data extracted"
                );
                extraction
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    response_preview = response.chars().take(100).collect::<String>(),
                    "Extraction response unusable, using sentinel extraction"
                );
                CaseExtraction::failed()
            }
        }
    }

    /// Drafting stage; falls back to the fixed template on any failure.
    async fn draft(&self, extraction: &CaseExtraction) -> String {
        let prompt = build_drafting_prompt(extraction);

        match self
            .call_provider(DRAFTING_SYSTEM_PROMPT, &prompt, DRAFTING_PARAMS)
            .await
        {
            Ok(draft) if !draft.trim().is_empty() => {
                tracing::info!(draft_length = draft.len(), "Draft generated");
                self.mutator.mutate(draft)
            }
            Ok(_) => {
                tracing::warn!("Provider returned an empty draft, using fallback template");
                fallback_draft(extraction)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Drafting call failed, using fallback template");
                fallback_draft(extraction)
            }
        }
    }

    /// Provider call bounded by the configured timeout
    async fn call_provider(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        params: ModelParams,
    ) -> Result<String, LlmError> {
        match tokio::time::timeout(
            self.timeout,
            self.generator.generate(system_prompt, user_prompt, params),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(LlmError::Timeout(self.timeout.as_millis())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RiskAssessment, RiskLevel};
    use crate::model::case::EXTRACTION_FAILED;
    use crate::service::llm::testing::{Reply, ScriptedGenerator};

    const EXTRACTION_JSON: &str = r#"{
        "accusedName": "Ravi Kumar",
        "ipcSections": ["379"],
        "location": "Karol Bagh",
        "policeStation": "PS Karol Bagh",
        "offenseType": "Theft"
    }"#;

    fn demo_registry() -> Arc<ReferenceRegistry> {
        Arc::new(ReferenceRegistry::from_codes([
            "302", "376", "379", "420", "498A", "307",
        ]))
    }

    fn pipeline(generator: Arc<ScriptedGenerator>) -> CasePipeline {
        CasePipeline::new(generator, demo_registry(), Duration::from_millis(200))
    }

    #[tokio::test]
    async fn test_full_run() {
        let generator = Arc::new(ScriptedGenerator::new([
            Reply::text(format!("```json\n{}\n```", EXTRACTION_JSON)),
            Reply::text("Bail application for the offence under Section 379 IPC."),
        ]));
        let report = pipeline(generator.clone()).process("FIR text").await.unwrap();

        assert_eq!(report.extraction.accused_name, "Ravi Kumar");
        assert_eq!(report.verification.valid_citations, vec!["379"]);
        assert!(report.verification.is_valid);
        assert_eq!(report.verification.reliability_score, 100);
        assert_eq!(report.risk, RiskAssessment::new(35, RiskLevel::Low));

        let calls = generator.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].system_prompt, EXTRACTION_SYSTEM_PROMPT);
        assert_eq!(calls[0].params, EXTRACTION_PARAMS);
        assert!(calls[0].user_prompt.contains("FIR text"));
        assert_eq!(calls[1].params, DRAFTING_PARAMS);
        assert!(calls[1].user_prompt.contains("Accused Name: Ravi Kumar"));
    }

    #[tokio::test]
    async fn test_hallucinated_citation_is_flagged() {
        let generator = Arc::new(ScriptedGenerator::new([
            Reply::text(EXTRACTION_JSON),
            Reply::text("... under Section 379 IPC and Section 999 IPC."),
        ]));
        let report = pipeline(generator).process("FIR text").await.unwrap();

        assert_eq!(report.verification.valid_citations, vec!["379"]);
        assert_eq!(report.verification.invalid_citations, vec!["999"]);
        assert!(!report.verification.is_valid);
        assert_eq!(report.verification.reliability_score, 60);
    }

    #[tokio::test]
    async fn test_drafting_timeout_uses_fallback_template() {
        let generator = Arc::new(ScriptedGenerator::new([
            Reply::text(EXTRACTION_JSON),
            Reply::Stall(Duration::from_secs(5)),
        ]));
        let report = pipeline(generator).process("FIR text").await.unwrap();

        assert_eq!(report.draft, fallback_draft(&report.extraction));
        assert!(report.draft.contains("Accused: Ravi Kumar"));
        assert!(report.draft.contains("under Section 379 IPC."));
        assert_eq!(report.verification.valid_citations, vec!["379"]);
        assert!(report.verification.is_valid);
    }

    #[tokio::test]
    async fn test_extraction_timeout_uses_sentinel() {
        let generator = Arc::new(ScriptedGenerator::new([
            Reply::Stall(Duration::from_secs(5)),
            Reply::Fail("down".to_string()),
        ]));
        let report = pipeline(generator.clone()).process("FIR text").await.unwrap();

        assert_eq!(report.extraction, CaseExtraction::failed());
        assert_eq!(report.draft, fallback_draft(&CaseExtraction::failed()));
        assert_eq!(report.risk, RiskAssessment::new(10, RiskLevel::Low));
        assert_eq!(generator.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_drafting_error_uses_fallback_template() {
        let generator = Arc::new(ScriptedGenerator::new([
            Reply::text(EXTRACTION_JSON),
            Reply::Fail("connection refused".to_string()),
        ]));
        let report = pipeline(generator).process("FIR text").await.unwrap();
        assert_eq!(report.draft, fallback_draft(&report.extraction));
    }

    #[tokio::test]
    async fn test_non_json_extraction_uses_sentinel() {
        let generator = Arc::new(ScriptedGenerator::new([
            Reply::text("Sorry, I cannot help with that."),
            Reply::text("A draft with no statutory references."),
        ]));
        let report = pipeline(generator).process("FIR text").await.unwrap();

        assert_eq!(report.extraction, CaseExtraction::failed());
        assert_eq!(report.extraction.accused_name, EXTRACTION_FAILED);
        assert_eq!(report.risk, RiskAssessment::new(10, RiskLevel::Low));
        assert!(report.verification.is_valid);
    }

    #[tokio::test]
    async fn test_provider_unreachable_for_both_calls() {
        let generator = Arc::new(ScriptedGenerator::new([
            Reply::Fail("unreachable".to_string()),
            Reply::Fail("unreachable".to_string()),
        ]));
        let report = pipeline(generator).process("FIR text").await.unwrap();

        assert!(report.extraction.is_failed());
        assert_eq!(report.draft, fallback_draft(&CaseExtraction::failed()));
        // "Section  IPC" carries no code, so nothing is cited
        assert!(report.verification.is_valid);
        assert!(report.verification.valid_citations.is_empty());
    }

    #[tokio::test]
    async fn test_blank_description_is_rejected_without_provider_calls() {
        let generator = Arc::new(ScriptedGenerator::empty());
        let err = pipeline(generator.clone()).process("   \n").await.unwrap_err();

        assert!(matches!(err, PipelineError::InvalidInput(_)));
        assert!(generator.calls().is_empty());
    }

    #[tokio::test]
    async fn test_mutator_applies_to_provider_draft_only() {
        let generator = Arc::new(ScriptedGenerator::new([
            Reply::text(EXTRACTION_JSON),
            Reply::text("Bail under Section 379 IPC."),
        ]));
        let report = pipeline(generator)
            .with_mutator(Arc::new(HallucinationInjector::default()))
            .process("FIR text")
            .await
            .unwrap();
        assert_eq!(report.verification.invalid_citations, vec!["999"]);
        assert_eq!(report.verification.reliability_score, 60);

        let failing = Arc::new(ScriptedGenerator::new([
            Reply::text(EXTRACTION_JSON),
            Reply::Fail("down".to_string()),
        ]));
        let report = pipeline(failing)
            .with_mutator(Arc::new(HallucinationInjector::default()))
            .process("FIR text")
            .await
            .unwrap();
        assert!(report.verification.is_valid);
    }

    #[tokio::test]
    async fn test_risk_uses_extraction_codes_not_draft_citations() {
        let generator = Arc::new(ScriptedGenerator::new([
            Reply::text(r#"{"accusedName": "A", "ipcSections": ["420", "379"]}"#),
            Reply::text("Draft citing Section 302 IPC only."),
        ]));
        let report = pipeline(generator).process("FIR text").await.unwrap();
        assert_eq!(report.risk, RiskAssessment::new(55, RiskLevel::Medium));
        assert_eq!(report.verification.valid_citations, vec!["302"]);
    }
}
