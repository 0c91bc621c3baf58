// SPDX-FileCopyrightText: 2026 Nossa Maternidade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Remote classifier trait (Supabase Edge Function, mocks in tests).

use async_trait::async_trait;

use crate::error::NatError;
use crate::types::{ClassificationRequest, RemoteClassification};

/// A remote risk classification service.
///
/// Implementations are best-effort: any error they return is recovered by
/// the analyzer, which falls back to local-only classification.
#[async_trait]
pub trait RemoteClassifier: Send + Sync + 'static {
    /// Returns the human-readable name of this classifier.
    fn name(&self) -> &str;

    /// Classifies a single chat message.
    async fn classify(
        &self,
        request: &ClassificationRequest,
    ) -> Result<RemoteClassification, NatError>;
}
