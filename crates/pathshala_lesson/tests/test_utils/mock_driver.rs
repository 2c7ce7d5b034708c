//! Scripted generation driver.

use async_trait::async_trait;
use pathshala_core::{GenerateRequest, GenerateResponse, Output};
use pathshala_error::{GenerationError, GenerationErrorKind, PathshalaResult};
use pathshala_interface::GenerationDriver;
use std::sync::{Arc, Mutex};

/// A single scripted answer.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(Output),
    Error(GenerationErrorKind),
}

/// Driver that replays scripted answers and records what it was asked.
///
/// Clones share the call log, so a test can keep one handle while the
/// pipeline owns another.
#[derive(Debug, Clone)]
pub struct MockDriver {
    responses: Arc<Vec<MockResponse>>,
    repeat_last: bool,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl MockDriver {
    /// Always answer with the given output.
    pub fn new_success(output: Output) -> Self {
        Self {
            responses: Arc::new(vec![MockResponse::Success(output)]),
            repeat_last: true,
            requests: Arc::default(),
        }
    }

    /// Always fail with the given error.
    pub fn new_error(error: GenerationErrorKind) -> Self {
        Self {
            responses: Arc::new(vec![MockResponse::Error(error)]),
            repeat_last: true,
            requests: Arc::default(),
        }
    }

    /// Answer with each response once, then fail.
    #[allow(dead_code)]
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self {
            responses: Arc::new(responses),
            repeat_last: false,
            requests: Arc::default(),
        }
    }

    /// Number of generate calls made so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// The most recent request, if any.
    #[allow(dead_code)]
    pub fn last_request(&self) -> Option<GenerateRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl GenerationDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> PathshalaResult<GenerateResponse> {
        let index = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(req.clone());
            requests.len() - 1
        };

        let response = if self.repeat_last {
            self.responses.last()
        } else {
            self.responses.get(index)
        };

        match response {
            Some(MockResponse::Success(output)) => Ok(GenerateResponse::new(output.clone(), 0)),
            Some(MockResponse::Error(kind)) => Err(GenerationError::new(kind.clone()).into()),
            None => Err(GenerationError::new(GenerationErrorKind::Transport(format!(
                "Mock sequence exhausted (call {} beyond {} responses)",
                index + 1,
                self.responses.len()
            )))
            .into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
