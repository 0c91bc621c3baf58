// SPDX-FileCopyrightText: 2026 Nossa Maternidade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock remote classifier for deterministic testing.
//!
//! `MockRemoteClassifier` implements `RemoteClassifier` with pre-configured
//! outcomes, enabling fast tests of the hybrid analysis and its fallback path.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use nat_core::{ClassificationRequest, NatError, RemoteClassification, RemoteClassifier};

use crate::fixtures::calm_response;

#[derive(Debug, Clone)]
enum Outcome {
    Respond(RemoteClassification),
    Fail(String),
}

/// A mock remote classifier.
///
/// Outcomes are popped from a FIFO queue. When the queue is empty the default
/// outcome is used: a calm response, or a failure for [`failing`](Self::failing).
/// Every request is recorded for later inspection.
pub struct MockRemoteClassifier {
    outcomes: Arc<Mutex<VecDeque<Outcome>>>,
    default_outcome: Outcome,
    requests: Arc<Mutex<Vec<ClassificationRequest>>>,
    delay: Option<Duration>,
}

impl MockRemoteClassifier {
    /// Create a mock that answers every request with a calm response.
    pub fn new() -> Self {
        Self::from_parts(VecDeque::new(), Outcome::Respond(calm_response()))
    }

    /// Create a mock pre-loaded with the given responses.
    pub fn with_responses(responses: Vec<RemoteClassification>) -> Self {
        Self::from_parts(
            responses.into_iter().map(Outcome::Respond).collect(),
            Outcome::Respond(calm_response()),
        )
    }

    /// Create a mock whose every call fails with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::from_parts(VecDeque::new(), Outcome::Fail(message.into()))
    }

    /// Sleep for `delay` before answering (use with paused tokio time).
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    fn from_parts(outcomes: VecDeque<Outcome>, default_outcome: Outcome) -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(outcomes)),
            default_outcome,
            requests: Arc::new(Mutex::new(Vec::new())),
            delay: None,
        }
    }

    /// Queue a response.
    pub async fn push_response(&self, response: RemoteClassification) {
        self.outcomes
            .lock()
            .await
            .push_back(Outcome::Respond(response));
    }

    /// Queue a failure.
    pub async fn push_failure(&self, message: impl Into<String>) {
        self.outcomes
            .lock()
            .await
            .push_back(Outcome::Fail(message.into()));
    }

    /// All requests received so far, in order.
    pub async fn requests(&self) -> Vec<ClassificationRequest> {
        self.requests.lock().await.clone()
    }

    /// Number of requests received so far.
    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    async fn next_outcome(&self) -> Outcome {
        self.outcomes
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| self.default_outcome.clone())
    }
}

impl Default for MockRemoteClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RemoteClassifier for MockRemoteClassifier {
    fn name(&self) -> &str {
        "mock-classifier"
    }

    async fn classify(
        &self,
        request: &ClassificationRequest,
    ) -> Result<RemoteClassification, NatError> {
        self.requests.lock().await.push(request.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match self.next_outcome().await {
            Outcome::Respond(response) => Ok(response),
            Outcome::Fail(message) => Err(NatError::Classifier {
                message,
                source: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use nat_core::RecommendedAction;

    use super::*;
    use crate::fixtures::medical_emergency_response;

    #[tokio::test]
    async fn queued_outcomes_then_default() {
        let mock = MockRemoteClassifier::with_responses(vec![medical_emergency_response()]);
        mock.push_failure("boom").await;

        let request = ClassificationRequest::new("oi", None);
        let first = mock.classify(&request).await.unwrap();
        assert_eq!(first.recommended_action, RecommendedAction::CallSamu);

        let second = mock.classify(&request).await.unwrap_err();
        assert!(second.to_string().contains("boom"));

        let third = mock.classify(&request).await.unwrap();
        assert_eq!(third.recommended_action, RecommendedAction::None);

        assert_eq!(mock.call_count().await, 3);
    }

    #[tokio::test]
    async fn failing_mock_always_fails() {
        let mock = MockRemoteClassifier::failing("down");
        let request = ClassificationRequest::new("oi", Some("u"));
        assert!(mock.classify(&request).await.is_err());
        assert!(mock.classify(&request).await.is_err());
        assert_eq!(mock.requests().await[0].user_id.as_deref(), Some("u"));
    }
}
