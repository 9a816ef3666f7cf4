pub mod bedrock;
pub mod local;

use crate::errors::AssistError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// The model families whose request and response JSON shapes differ.
///
/// A family is inferred from the model identifier, never configured, so a
/// newly enabled model works as long as its identifier carries the family
/// name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFamily {
    Claude,
    Titan,
    Llama,
    Generic,
}

impl ModelFamily {
    /// Infers the family by case-insensitive substring match on the model
    /// identifier. Unrecognized identifiers fall back to the generic shape.
    pub fn from_model_id(model_id: &str) -> Self {
        let id = model_id.to_ascii_lowercase();
        if id.contains("claude") {
            ModelFamily::Claude
        } else if id.contains("titan") {
            ModelFamily::Titan
        } else if id.contains("llama") {
            ModelFamily::Llama
        } else {
            ModelFamily::Generic
        }
    }
}

/// A trait for invoking a hosted text-generation model.
///
/// This trait defines a common interface for sending an assembled prompt to
/// different model runtimes (e.g. a Bedrock-style runtime, a local
/// OpenAI-compatible server) and getting the generated text back.
#[async_trait]
pub trait Invoker: Send + Sync + Debug + DynClone {
    /// Generates a response for `prompt` using the model named by `model_id`.
    async fn invoke(&self, prompt: &str, model_id: &str) -> Result<String, AssistError>;
}

dyn_clone::clone_trait_object!(Invoker);
