//! Application state and service initialization
//!
//! This module centralizes service construction so handlers receive ready
//! services and tests can build the same graph around a scripted generator.

use std::sync::Arc;

use crate::model::Config;
use crate::service::pipeline::HallucinationInjector;
use crate::service::{CasePipeline, LlmClient, ReferenceRegistry, TextGenerator};

/// Application state containing all services and shared resources
pub struct AppState {
    /// Recognized statutory sections, read-only after startup
    pub registry: Arc<ReferenceRegistry>,
    /// Case processing pipeline
    pub pipeline: Arc<CasePipeline>,
}

impl AppState {
    /// Build application state backed by the OpenAI provider.
    ///
    /// The API key is not validated; requests fail over to fallbacks if it is wrong.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let llm_client = LlmClient::new(&config.api_key, config.model.clone())
            .map_err(|e| AppError::InvalidConfig(e.to_string()))?;

        Ok(Self::with_generator(config, Arc::new(llm_client)))
    }

    /// Build application state around any text generator
    pub fn with_generator(config: &Config, generator: Arc<dyn TextGenerator>) -> Self {
        let registry = Arc::new(Self::build_registry(config));

        let mut pipeline = CasePipeline::new(generator, Arc::clone(&registry), config.timeout);
        if config.inject_hallucination {
            tracing::warn!("Hallucination injection enabled, drafts will cite a fabricated section");
            pipeline = pipeline.with_mutator(Arc::new(HallucinationInjector::default()));
        }

        Self {
            registry,
            pipeline: Arc::new(pipeline),
        }
    }

    fn build_registry(config: &Config) -> ReferenceRegistry {
        let Some(codes) = &config.reference_sections else {
            return ReferenceRegistry::builtin();
        };

        let registry = ReferenceRegistry::from_codes(codes);
        if registry.is_empty() {
            tracing::warn!("Reference registry override is empty, every citation will be flagged");
        } else {
            tracing::info!(
                sections = ?registry.codes().collect::<Vec<_>>(),
                "Reference registry overridden by configuration"
            );
        }
        registry
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::llm::testing::ScriptedGenerator;

    #[test]
    fn test_builtin_registry_by_default() {
        let state = AppState::with_generator(
            &Config::default(),
            Arc::new(ScriptedGenerator::empty()),
        );
        assert_eq!(state.registry.len(), ReferenceRegistry::builtin().len());
        assert_eq!(state.pipeline.model(), "scripted");
    }

    #[test]
    fn test_registry_override() {
        let config = Config {
            reference_sections: Some(vec!["302".to_string(), "379".to_string()]),
            ..Config::default()
        };
        let state = AppState::with_generator(&config, Arc::new(ScriptedGenerator::empty()));
        assert_eq!(state.registry.len(), 2);
        assert!(state.pipeline.registry().contains("379"));
        assert!(!state.pipeline.registry().contains("420"));
    }

    #[test]
    fn test_registry_override_matches_canonical_citations() {
        let config = Config {
            reference_sections: Some(vec!["498a".to_string()]),
            ..Config::default()
        };
        let state = AppState::with_generator(&config, Arc::new(ScriptedGenerator::empty()));
        let verdict = crate::service::citations::verify_draft(
            "Charged under Section 498a IPC.",
            state.pipeline.registry(),
        );
        assert!(verdict.is_valid);
        assert_eq!(verdict.valid_citations, vec!["498A"]);
    }

    #[test]
    fn test_empty_override_yields_empty_registry() {
        let config = Config {
            reference_sections: Some(vec!["  ".to_string()]),
            ..Config::default()
        };
        let state = AppState::with_generator(&config, Arc::new(ScriptedGenerator::empty()));
        assert!(state.registry.is_empty());
    }
}
