// SPDX-FileCopyrightText: 2026 Nossa Maternidade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for the pluggable parts of the risk pipeline.
//!
//! Traits use `#[async_trait]` for dynamic dispatch compatibility.

pub mod classifier;

pub use classifier::RemoteClassifier;
