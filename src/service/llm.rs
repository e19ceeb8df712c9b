//! Shared LLM client and generative-text abstraction
//!
//! The pipeline talks to the provider only through [`TextGenerator`], so the
//! OpenAI-backed [`LlmClient`] can be swapped for scripted generators in tests.

use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::openai;

/// Error type for generative-text provider calls
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LlmError {
    #[error("LLM call timed out after {0} ms")]
    Timeout(u128),

    #[error("LLM call failed: {0}")]
    Provider(String),

    #[error("Failed to create LLM client: {0}")]
    ClientInit(String),
}

/// Sampling parameters for a single generation call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParams {
    pub temperature: f64,
    pub max_tokens: u64,
}

/// Low temperature, short output: structured JSON extraction
pub const EXTRACTION_PARAMS: ModelParams = ModelParams {
    temperature: 0.1,
    max_tokens: 500,
};

/// Higher temperature, longer output: free-form drafting
pub const DRAFTING_PARAMS: ModelParams = ModelParams {
    temperature: 0.7,
    max_tokens: 1000,
};

/// Capability to turn a system and user prompt into text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        params: ModelParams,
    ) -> Result<String, LlmError>;

    /// Model identifier reported by health checks
    fn model(&self) -> &str;
}

/// Shared LLM client wrapper
#[derive(Clone)]
pub struct LlmClient {
    client: openai::Client,
    model: String,
}

impl LlmClient {
    /// Create a new LLM client with the provided API key and model.
    ///
    /// The key is not checked here; an invalid key fails on the first call.
    pub fn new(api_key: &str, model: impl Into<String>) -> Result<Self, LlmError> {
        let client = openai::Client::new(api_key).map_err(|e| LlmError::ClientInit(e.to_string()))?;

        Ok(Self {
            client,
            model: model.into(),
        })
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        params: ModelParams,
    ) -> Result<String, LlmError> {
        let start_time = std::time::Instant::now();

        tracing::debug!(
            model = %self.model,
            prompt_length = user_prompt.len(),
            temperature = params.temperature,
            max_tokens = params.max_tokens,
            "Initiating LLM call"
        );

        let agent = self
            .client
            .agent(&self.model)
            .preamble(system_prompt)
            .temperature(params.temperature)
            .max_tokens(params.max_tokens)
            .build();

        match agent.prompt(user_prompt).await {
            Ok(text) => {
                tracing::info!(
                    model = %self.model,
                    elapsed_ms = start_time.elapsed().as_millis(),
                    prompt_length = user_prompt.len(),
                    response_length = text.len(),
                    "LLM call completed successfully"
                );
                Ok(text)
            }
            Err(e) => {
                tracing::error!(
                    model = %self.model,
                    elapsed_ms = start_time.elapsed().as_millis(),
                    prompt_length = user_prompt.len(),
                    error = %e,
                    "LLM call failed"
                );
                Err(LlmError::Provider(e.to_string()))
            }
        }
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
pub mod testing {
    //! Scripted generators for exercising the pipeline without a provider

    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;

    use super::*;

    /// One scripted response
    #[derive(Debug, Clone)]
    pub enum Reply {
        Text(String),
        Fail(String),
        /// Sleep past any sensible test timeout before answering
        Stall(Duration),
    }

    impl Reply {
        pub fn text(s: impl Into<String>) -> Self {
            Reply::Text(s.into())
        }
    }

    /// Recorded call arguments
    #[derive(Debug, Clone)]
    pub struct Call {
        pub system_prompt: String,
        pub user_prompt: String,
        pub params: ModelParams,
    }

    /// Answers calls in order from a fixed script; fails once it runs dry
    pub struct ScriptedGenerator {
        replies: Mutex<VecDeque<Reply>>,
        calls: Mutex<Vec<Call>>,
    }

    impl ScriptedGenerator {
        pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
            Self {
                replies: Mutex::new(replies.into_iter().collect()),
                calls: Mutex::new(Vec::new()),
            }
        }

        /// Generator that fails every call
        pub fn empty() -> Self {
            Self::new(Vec::new())
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(
            &self,
            system_prompt: &str,
            user_prompt: &str,
            params: ModelParams,
        ) -> Result<String, LlmError> {
            self.calls.lock().unwrap().push(Call {
                system_prompt: system_prompt.to_string(),
                user_prompt: user_prompt.to_string(),
                params,
            });

            let reply = self.replies.lock().unwrap().pop_front();
            match reply {
                Some(Reply::Text(text)) => Ok(text),
                Some(Reply::Fail(msg)) => Err(LlmError::Provider(msg)),
                Some(Reply::Stall(delay)) => {
                    tokio::time::sleep(delay).await;
                    Ok("late response".to_string())
                }
                None => Err(LlmError::Provider("script exhausted".to_string())),
            }
        }

        fn model(&self) -> &str {
            "scripted"
        }
    }
}
