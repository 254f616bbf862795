//! Transfer validation between (station, line) states.
//!
//! Changing lines is only legal where a transfer rule explicitly allows it.
//! Staying on the same line never needs a rule.

use std::collections::{HashMap, HashSet};

use crate::domain::SearchState;

use super::records::TransferRule;

/// Symmetric index of authorised transfers.
///
/// If a rule lists A ↔ B, both A → B and B → A are stored, so lookups are a
/// single hash probe in either direction.
#[derive(Debug, Clone, Default)]
pub struct TransferValidator {
    allowed: HashMap<SearchState, HashSet<SearchState>>,
}

impl TransferValidator {
    /// Create an empty validator (only same-line moves are valid).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a validator from a collection of rules.
    pub fn from_rules(rules: &[TransferRule]) -> Self {
        let mut validator = Self::new();
        for rule in rules {
            validator.add(rule);
        }
        validator
    }

    /// Add a rule in both directions.
    pub fn add(&mut self, rule: &TransferRule) {
        let a = SearchState::new(rule.station_a.as_str(), rule.line_a.as_str());
        let b = SearchState::new(rule.station_b.as_str(), rule.line_b.as_str());

        self.allowed
            .entry(a.clone())
            .or_default()
            .insert(b.clone());
        self.allowed.entry(b).or_default().insert(a);
    }

    /// Whether moving from one state to another is permitted.
    pub fn is_valid(&self, from: &SearchState, to: &SearchState) -> bool {
        if from.same_line(to) {
            return true;
        }
        self.allowed
            .get(from)
            .is_some_and(|targets| targets.contains(to))
    }

    /// Number of directed transfer entries (each rule counts twice unless
    /// both endpoints are identical).
    pub fn len(&self) -> usize {
        self.allowed.values().map(HashSet::len).sum()
    }

    /// Returns true if no transfers are authorised.
    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }
}
