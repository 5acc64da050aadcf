//! Traits for storage abstraction and extensibility

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::types::*;

/// Storage abstraction for committed transactions
///
/// Ingestion itself never touches storage. Reviewed candidates are handed to
/// an implementation of this trait (a hosted backend, SQLite, in-memory, etc.)
/// through [`crate::review::TransactionManager`].
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Save a transaction to storage
    async fn save_transaction(&mut self, transaction: &Transaction) -> IngestResult<()>;

    /// Get a transaction by ID
    async fn get_transaction(&self, transaction_id: &str) -> IngestResult<Option<Transaction>>;

    /// List transactions within a date range, newest first
    async fn list_transactions(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> IngestResult<Vec<Transaction>>;

    /// Delete a transaction
    async fn delete_transaction(&mut self, transaction_id: &str) -> IngestResult<()>;
}

/// Trait for implementing custom candidate validation rules
pub trait CandidateValidator: Send + Sync {
    /// Validate a candidate before it is emitted or committed
    fn validate_candidate(&self, candidate: &CandidateTransaction) -> IngestResult<()>;
}

/// Default validator: the description must not be blank
pub struct DefaultCandidateValidator;

impl CandidateValidator for DefaultCandidateValidator {
    fn validate_candidate(&self, candidate: &CandidateTransaction) -> IngestResult<()> {
        if candidate.description.trim().is_empty() {
            return Err(IngestError::Validation(
                "Transaction description cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
