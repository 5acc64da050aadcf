//! Candidates awaiting user review

use serde::{Deserialize, Serialize};

use crate::traits::*;
use crate::types::*;

/// The review list owned by the UI layer.
///
/// Each ingestion replaces the list; the user then edits or discards entries
/// before committing what is left.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PendingCandidates {
    candidates: Vec<CandidateTransaction>,
}

impl PendingCandidates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list with the result of a new ingestion
    pub fn replace(&mut self, candidates: Vec<CandidateTransaction>) {
        self.candidates = candidates;
    }

    /// Add one candidate at the end (e.g. from the manual form)
    pub fn push(&mut self, candidate: CandidateTransaction) {
        self.candidates.push(candidate);
    }

    /// Remove and return the candidate at `index`
    pub fn discard(&mut self, index: usize) -> IngestResult<CandidateTransaction> {
        if index >= self.candidates.len() {
            return Err(out_of_range(index, self.candidates.len()));
        }
        Ok(self.candidates.remove(index))
    }

    /// Replace the candidate at `index` with an edited one
    pub fn update(
        &mut self,
        index: usize,
        candidate: CandidateTransaction,
        validator: &dyn CandidateValidator,
    ) -> IngestResult<()> {
        let len = self.candidates.len();
        let slot = self
            .candidates
            .get_mut(index)
            .ok_or_else(|| out_of_range(index, len))?;

        validator.validate_candidate(&candidate)?;
        *slot = candidate;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&CandidateTransaction> {
        self.candidates.get(index)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CandidateTransaction> {
        self.candidates.iter()
    }

    /// Drop the first `count` candidates once they have been stored
    pub(crate) fn remove_front(&mut self, count: usize) {
        let count = count.min(self.candidates.len());
        self.candidates.drain(..count);
    }

    /// Empty the list, handing its contents over for commit
    pub fn take_all(&mut self) -> Vec<CandidateTransaction> {
        std::mem::take(&mut self.candidates)
    }
}

fn out_of_range(index: usize, len: usize) -> IngestError {
    IngestError::Validation(format!(
        "No pending transaction at position {} (have {})",
        index, len
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use chrono::NaiveDate;

    fn candidate(description: &str) -> CandidateTransaction {
        CandidateTransaction::new(
            description.to_string(),
            BigDecimal::from(-10),
            "Expense".to_string(),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            CandidateSource::Message,
        )
    }

    #[test]
    fn test_replace_discard_take() {
        let mut pending = PendingCandidates::new();
        pending.replace(vec![candidate("a"), candidate("b"), candidate("c")]);
        pending.replace(vec![candidate("x"), candidate("y")]);
        assert_eq!(pending.len(), 2);

        let removed = pending.discard(0).unwrap();
        assert_eq!(removed.description, "x");
        assert!(pending.discard(5).is_err());

        let taken = pending.take_all();
        assert_eq!(taken.len(), 1);
        assert_eq!(taken[0].description, "y");
        assert!(pending.is_empty());
    }

    #[test]
    fn test_remove_front() {
        let mut pending = PendingCandidates::new();
        pending.replace(vec![candidate("a"), candidate("b"), candidate("c")]);

        pending.remove_front(2);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending.get(0).unwrap().description, "c");

        pending.remove_front(4);
        assert!(pending.is_empty());
    }

    #[test]
    fn test_update_validates() {
        let mut pending = PendingCandidates::new();
        pending.push(candidate("a"));

        pending
            .update(0, candidate("edited"), &DefaultCandidateValidator)
            .unwrap();
        assert_eq!(pending.get(0).unwrap().description, "edited");

        assert!(pending
            .update(0, candidate("  "), &DefaultCandidateValidator)
            .is_err());
        assert_eq!(pending.get(0).unwrap().description, "edited");

        assert!(pending
            .update(3, candidate("b"), &DefaultCandidateValidator)
            .is_err());
    }
}
