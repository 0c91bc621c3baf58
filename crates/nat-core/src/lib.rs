// SPDX-FileCopyrightText: 2026 Nossa Maternidade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the NAT-AI emotional risk pipeline.
//!
//! This crate provides the value types shared by every layer of the pipeline
//! ([`RiskAnalysis`], [`RemoteClassification`]), the common error type, and
//! the [`RemoteClassifier`] trait that remote classification services
//! implement.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::NatError;
pub use traits::RemoteClassifier;
pub use types::{
    ClassificationRequest, RecommendedAction, RemoteClassification, RiskAnalysis, RiskFlag,
    SupportResource,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nat_error_has_all_variants() {
        let _config = NatError::Config("test".into());
        let _classifier = NatError::Classifier {
            message: "test".into(),
            source: None,
        };
        let _timeout = NatError::Timeout {
            duration: std::time::Duration::from_secs(10),
        };
        let _internal = NatError::Internal("test".into());
    }

    #[test]
    fn timeout_error_is_transient() {
        let err = NatError::Timeout {
            duration: std::time::Duration::from_secs(10),
        };
        assert!(err.is_transient());
        assert!(!NatError::Config("bad url".into()).is_transient());
    }

    #[test]
    fn remote_classifier_is_object_safe() {
        fn _assert_dyn(_: &dyn RemoteClassifier) {}
    }
}
