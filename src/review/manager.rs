//! Committing reviewed candidates and querying what was committed

use chrono::NaiveDate;

use super::PendingCandidates;
use crate::traits::*;
use crate::types::*;
use crate::utils::validation::EnhancedCandidateValidator;

/// Transaction manager for committing candidates to a store
pub struct TransactionManager<S: TransactionStore> {
    storage: S,
    validator: Box<dyn CandidateValidator>,
}

impl<S: TransactionStore> TransactionManager<S> {
    /// Create a new transaction manager
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            validator: Box::new(EnhancedCandidateValidator),
        }
    }

    /// Create a new transaction manager with custom validator
    pub fn with_validator(storage: S, validator: Box<dyn CandidateValidator>) -> Self {
        Self { storage, validator }
    }

    /// The validator commits must pass, for re-validating review edits
    pub fn validator(&self) -> &dyn CandidateValidator {
        self.validator.as_ref()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Validate and store one candidate
    pub async fn commit(&mut self, candidate: CandidateTransaction) -> IngestResult<Transaction> {
        self.validator.validate_candidate(&candidate)?;

        let transaction = Transaction::from_candidate(candidate);
        self.storage.save_transaction(&transaction).await?;

        tracing::debug!(id = %transaction.id, "committed transaction");
        Ok(transaction)
    }

    /// Commit every pending candidate, in order.
    ///
    /// Validation runs over the whole list first, so a bad entry leaves the
    /// list untouched and nothing is stored. If the store fails part way, the
    /// candidates already saved leave the list and the rest stay pending.
    pub async fn commit_all(
        &mut self,
        pending: &mut PendingCandidates,
    ) -> IngestResult<Vec<Transaction>> {
        for (index, candidate) in pending.iter().enumerate() {
            self.validator.validate_candidate(candidate).map_err(|e| {
                IngestError::Validation(format!("Pending transaction {}: {}", index + 1, e))
            })?;
        }

        let mut committed = Vec::with_capacity(pending.len());
        let mut failure = None;
        for candidate in pending.iter() {
            let transaction = Transaction::from_candidate(candidate.clone());
            if let Err(e) = self.storage.save_transaction(&transaction).await {
                failure = Some(e);
                break;
            }
            committed.push(transaction);
        }

        if let Some(e) = failure {
            pending.remove_front(committed.len());
            tracing::warn!(
                saved = committed.len(),
                remaining = pending.len(),
                error = %e,
                "commit stopped by storage failure"
            );
            return Err(e);
        }

        pending.take_all();
        tracing::info!(count = committed.len(), "committed pending transactions");
        Ok(committed)
    }

    /// Get a transaction by ID
    pub async fn get_transaction(&self, transaction_id: &str) -> IngestResult<Option<Transaction>> {
        self.storage.get_transaction(transaction_id).await
    }

    /// Get a transaction by ID, returning an error if not found
    pub async fn get_transaction_required(&self, transaction_id: &str) -> IngestResult<Transaction> {
        self.storage
            .get_transaction(transaction_id)
            .await?
            .ok_or_else(|| IngestError::TransactionNotFound(transaction_id.to_string()))
    }

    /// Get all transactions within a date range, newest first
    pub async fn get_transactions(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> IngestResult<Vec<Transaction>> {
        self.storage.list_transactions(start_date, end_date).await
    }

    /// Transactions whose description contains `query`, ignoring case.
    /// A blank query matches everything.
    pub async fn search(&self, query: &str) -> IngestResult<Vec<Transaction>> {
        let needle = query.trim().to_lowercase();
        let all = self.storage.list_transactions(None, None).await?;

        Ok(all
            .into_iter()
            .filter(|txn| txn.description.to_lowercase().contains(&needle))
            .collect())
    }

    /// Delete a committed transaction
    pub async fn delete_transaction(&mut self, transaction_id: &str) -> IngestResult<()> {
        self.storage.delete_transaction(transaction_id).await
    }
}
