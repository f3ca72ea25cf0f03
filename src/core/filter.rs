// Testmode - core/filter.rs
//
// Retention filtering of entity labels against compiled pattern sets.
// Core layer: pure logic, no I/O dependencies.

use crate::core::like::LikeMatcher;
use crate::core::model::LabelDecision;

/// An ordered list of LIKE patterns compiled once for repeated matching.
///
/// Order matters only for reporting: the first matching pattern is the
/// one recorded in the decision.
#[derive(Debug, Clone)]
pub struct PatternSet {
    matchers: Vec<LikeMatcher>,
}

impl PatternSet {
    /// Compiles every pattern in the list. Total: patterns that exceed
    /// engine limits simply never match (see [`LikeMatcher::new`]).
    pub fn new(patterns: &[String]) -> Self {
        let matchers = patterns.iter().map(|p| LikeMatcher::new(p)).collect();
        tracing::debug!(patterns = patterns.len(), "Compiled pattern set");
        Self { matchers }
    }

    /// Returns true if the set contains no patterns.
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Number of patterns in the set.
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Whether the label matches at least one pattern.
    ///
    /// Vacuously false for an empty set; what an empty set means for a
    /// whole listing is the caller's policy, see [`evaluate`].
    pub fn retains(&self, label: &str) -> bool {
        self.matched(label).is_some()
    }

    /// The first pattern matching the label, if any.
    pub fn matched(&self, label: &str) -> Option<&str> {
        self.matchers
            .iter()
            .find(|m| m.is_match(label))
            .map(|m| m.pattern())
    }
}

/// Evaluate a listing of labels against a pattern set, one decision per
/// label, preserving input order.
///
/// An empty pattern set applies no filtering: with no patterns configured
/// nothing is recognised as test content, and every label is retained.
pub fn evaluate(labels: &[String], set: &PatternSet) -> Vec<LabelDecision> {
    if set.is_empty() {
        return pass_all(labels);
    }

    labels
        .iter()
        .map(|label| {
            let pattern = set.matched(label).map(str::to_string);
            LabelDecision {
                label: label.clone(),
                retained: pattern.is_some(),
                pattern,
            }
        })
        .collect()
}

/// Decisions for a run with filtering disabled: every label retained, no
/// pattern consulted.
pub fn pass_all(labels: &[String]) -> Vec<LabelDecision> {
    labels
        .iter()
        .map(|label| LabelDecision {
            label: label.clone(),
            retained: true,
            pattern: None,
        })
        .collect()
}
