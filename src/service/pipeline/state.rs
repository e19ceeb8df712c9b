//! Stage tracking for a single pipeline run

use std::fmt;

use crate::service::pipeline::error::PipelineError;

/// Stages of the case pipeline, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Idle,
    Extracting,
    Drafting,
    Verifying,
    Scoring,
    Complete,
    Failed,
}

impl PipelineStage {
    /// The single stage that may follow this one on the success path
    fn successor(self) -> Option<PipelineStage> {
        match self {
            PipelineStage::Idle => Some(PipelineStage::Extracting),
            PipelineStage::Extracting => Some(PipelineStage::Drafting),
            PipelineStage::Drafting => Some(PipelineStage::Verifying),
            PipelineStage::Verifying => Some(PipelineStage::Scoring),
            PipelineStage::Scoring => Some(PipelineStage::Complete),
            PipelineStage::Complete | PipelineStage::Failed => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, PipelineStage::Complete | PipelineStage::Failed)
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStage::Idle => "idle",
            PipelineStage::Extracting => "extracting",
            PipelineStage::Drafting => "drafting",
            PipelineStage::Verifying => "verifying",
            PipelineStage::Scoring => "scoring",
            PipelineStage::Complete => "complete",
            PipelineStage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Current stage of one request; transitions are strictly sequential
#[derive(Debug)]
pub struct PipelineRun {
    stage: PipelineStage,
}

impl PipelineRun {
    pub fn new() -> Self {
        Self {
            stage: PipelineStage::Idle,
        }
    }

    pub fn stage(&self) -> PipelineStage {
        self.stage
    }

    /// Move to `next`, which must be the direct successor of the current stage.
    ///
    /// An out-of-order transition marks the run failed.
    pub fn advance(&mut self, next: PipelineStage) -> Result<(), PipelineError> {
        if self.stage.successor() != Some(next) {
            let from = self.stage;
            self.fail(&format!("illegal transition {} -> {}", from, next));
            return Err(PipelineError::Internal(format!(
                "illegal pipeline transition from {} to {}",
                from, next
            )));
        }

        tracing::debug!(from = %self.stage, to = %next, "Pipeline stage transition");
        self.stage = next;
        Ok(())
    }

    /// Mark the run failed. Reachable from any in-flight stage.
    pub fn fail(&mut self, reason: &str) {
        if self.stage == PipelineStage::Idle || self.stage.is_terminal() {
            return;
        }
        tracing::error!(stage = %self.stage, reason = reason, "Pipeline run failed");
        self.stage = PipelineStage::Failed;
    }
}

impl Default for PipelineRun {
    fn default() -> Self {
        Self::new()
    }
}
