//! Intent type definitions

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Coarse classification of what the user wants to do
///
/// The set is closed: skill descriptors reference these values in their
/// intent gates, so adding a member is a registry-wide change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Build something new
    Create,
    /// Understand existing code or concepts
    Research,
    /// Diagnose and fix a defect
    Debug,
    /// Restructure without changing behavior
    Refactor,
    /// Write or update documentation
    Document,
    /// Testing, not otherwise specified
    Test,
    /// Author unit tests
    TestWriteUnit,
    /// Author integration tests
    TestWriteIntegration,
    /// Author end-to-end tests
    TestWriteE2e,
    /// Execute an existing test suite
    TestRun,
    /// Ship or release
    Deploy,
    /// Measure, profile, or review
    Analyze,
    /// Translate between formats or languages
    Convert,
    /// Greeting or small talk
    Chat,
    /// Nothing matched
    Unknown,
}

impl Intent {
    /// Wire representation, matching the serde encoding
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Research => "research",
            Self::Debug => "debug",
            Self::Refactor => "refactor",
            Self::Document => "document",
            Self::Test => "test",
            Self::TestWriteUnit => "test_write_unit",
            Self::TestWriteIntegration => "test_write_integration",
            Self::TestWriteE2e => "test_write_e2e",
            Self::TestRun => "test_run",
            Self::Deploy => "deploy",
            Self::Analyze => "analyze",
            Self::Convert => "convert",
            Self::Chat => "chat",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the classification table
///
/// Table position is meaningful: on equal aggregate scores the earlier row
/// wins, so more specific intents are registered before general ones.
#[derive(Debug, Clone)]
pub struct IntentPattern {
    /// Intent this row votes for
    pub intent: Intent,
    /// Compiled patterns; each matching pattern counts once
    pub patterns: Vec<Regex>,
    /// Score contributed per matching pattern
    pub weight: i32,
}

impl IntentPattern {
    /// Build a row from pattern literals
    ///
    /// Pattern literals are part of the static table, so a failure to
    /// compile is a programming error, not a runtime condition.
    pub fn new(intent: Intent, weight: i32, patterns: &[&str]) -> Self {
        Self {
            intent,
            weight,
            patterns: patterns
                .iter()
                .map(|p| Regex::new(p).expect("intent pattern must compile"))
                .collect(),
        }
    }
}
