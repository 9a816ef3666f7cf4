#![allow(dead_code)]
//! # Common Test Utilities
//!
//! This module provides shared utilities for testing, such as a scripted
//! inference provider, to ensure tests are isolated and repeatable.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, RwLock};
use textsmith::{errors::AssistError, providers::model::Invoker};

/// Initializes tracing for a test run; safe to call more than once.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .try_init();
}

/// A scripted `Invoker` that returns canned responses in order and records
/// every `(prompt, model)` pair it receives.
///
/// Once the scripted responses run out, further calls return a generic
/// placeholder so tests only have to script the calls they assert on.
#[derive(Clone, Debug)]
pub struct MockInvoker {
    responses: Arc<Mutex<Vec<String>>>,
    pub call_history: Arc<RwLock<Vec<(String, String)>>>,
}

impl MockInvoker {
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            call_history: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl Invoker for MockInvoker {
    async fn invoke(&self, prompt: &str, model_id: &str) -> Result<String, AssistError> {
        self.call_history
            .write()
            .unwrap()
            .push((prompt.to_string(), model_id.to_string()));

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok("mock response".to_string())
        } else {
            Ok(responses.remove(0))
        }
    }
}
