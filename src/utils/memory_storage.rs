//! In-memory storage implementation for testing

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::traits::*;
use crate::types::*;

/// In-memory transaction store for testing and demos
#[derive(Debug, Clone)]
pub struct MemoryStore {
    transactions: Arc<RwLock<HashMap<String, Transaction>>>,
}

impl MemoryStore {
    /// Create a new memory store instance
    pub fn new() -> Self {
        Self {
            transactions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored transactions
    pub fn len(&self) -> IngestResult<usize> {
        Ok(self.transactions.read().map_err(poisoned)?.len())
    }

    pub fn is_empty(&self) -> IngestResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) -> IngestResult<()> {
        self.transactions.write().map_err(poisoned)?.clear();
        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: PoisonError<T>) -> IngestError {
    IngestError::Storage("memory store lock poisoned".to_string())
}

#[async_trait]
impl TransactionStore for MemoryStore {
    async fn save_transaction(&mut self, transaction: &Transaction) -> IngestResult<()> {
        self.transactions
            .write()
            .map_err(poisoned)?
            .insert(transaction.id.clone(), transaction.clone());
        Ok(())
    }

    async fn get_transaction(&self, transaction_id: &str) -> IngestResult<Option<Transaction>> {
        Ok(self
            .transactions
            .read()
            .map_err(poisoned)?
            .get(transaction_id)
            .cloned())
    }

    async fn list_transactions(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> IngestResult<Vec<Transaction>> {
        let transactions = self.transactions.read().map_err(poisoned)?;
        let mut filtered: Vec<Transaction> = transactions
            .values()
            .filter(|txn| {
                let after_start = start_date.is_none_or(|start| txn.date >= start);
                let before_end = end_date.is_none_or(|end| txn.date <= end);
                after_start && before_end
            })
            .cloned()
            .collect();

        filtered.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.created_at.cmp(&a.created_at))
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(filtered)
    }

    async fn delete_transaction(&mut self, transaction_id: &str) -> IngestResult<()> {
        if self
            .transactions
            .write()
            .map_err(poisoned)?
            .remove(transaction_id)
            .is_some()
        {
            Ok(())
        } else {
            Err(IngestError::TransactionNotFound(transaction_id.to_string()))
        }
    }
}
