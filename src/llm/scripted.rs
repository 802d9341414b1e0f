// src/llm/scripted.rs
// Scripted model client shared by unit and integration tests
//
// Resolves `ModelClient` and `Result` through the including module so the
// same file compiles inside the crate and from tests/test_helpers.rs.

use super::{ModelClient, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays scripted replies in order and records every prompt it receives
pub struct ScriptedModel {
    replies: Mutex<VecDeque<Result<String>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    pub fn new(replies: Vec<Result<String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(replies: &[&str]) -> Self {
        Self::new(replies.iter().map(|r| Ok(r.to_string())).collect())
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl ModelClient for ScriptedModel {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.replies.lock().unwrap().pop_front() {
            Some(reply) => reply.map(|text| text.trim().to_string()),
            None => panic!("no scripted reply left for prompt: {prompt}"),
        }
    }

    fn model_name(&self) -> &str {
        "scripted-model"
    }
}
