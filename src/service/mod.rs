pub mod citations;
pub mod llm;
pub mod pipeline;
pub mod registry;
pub mod risk;

pub use llm::{LlmClient, TextGenerator};
pub use pipeline::CasePipeline;
pub use registry::ReferenceRegistry;
