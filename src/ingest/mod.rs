//! Text ingestion: pasted messages and uploaded tables into candidate transactions
//!
//! Both parsers are permissive. A line that cannot be turned into a record is
//! dropped (and logged at debug level); neither parser ever fails the batch.

pub mod config;
mod messages;
mod table;
pub mod upload;

pub use config::*;
pub use table::lenient_amount;
pub use upload::*;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::suggest::{CategorySuggester, Suggestion};
use crate::traits::*;
use crate::types::*;

/// Borrowed rules shared by the message and table scanners
pub(crate) struct ScanContext<'a> {
    pub config: &'a IngestConfig,
    pub suggester: &'a CategorySuggester,
    pub validator: &'a dyn CandidateValidator,
}

/// Candidates from one ingestion call plus the summary shown to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestOutcome {
    pub candidates: Vec<CandidateTransaction>,
    pub summary: IngestSummary,
}

/// Converts raw text into candidate transactions
pub struct TransactionTextIngestor {
    config: IngestConfig,
    suggester: CategorySuggester,
    validator: Box<dyn CandidateValidator>,
}

impl Default for TransactionTextIngestor {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionTextIngestor {
    /// Create an ingestor with the default rules
    pub fn new() -> Self {
        Self::with_config(IngestConfig::default())
    }

    /// Create an ingestor with custom rules
    pub fn with_config(config: IngestConfig) -> Self {
        Self {
            config,
            suggester: CategorySuggester::default(),
            validator: Box::new(DefaultCandidateValidator),
        }
    }

    /// Builder pattern: replace the category suggester
    pub fn with_suggester(mut self, suggester: CategorySuggester) -> Self {
        self.suggester = suggester;
        self
    }

    /// Builder pattern: replace the validator candidates must pass to be emitted
    pub fn with_validator(mut self, validator: Box<dyn CandidateValidator>) -> Self {
        self.validator = validator;
        self
    }

    pub fn config(&self) -> &IngestConfig {
        &self.config
    }

    fn context(&self) -> ScanContext<'_> {
        ScanContext {
            config: &self.config,
            suggester: &self.suggester,
            validator: self.validator.as_ref(),
        }
    }

    /// Extract transactions from pasted message text, one message per line
    pub fn parse_freeform_messages(&self, text: &str) -> Vec<CandidateTransaction> {
        messages::scan_messages(text, self.config.today(), &self.context())
    }

    /// Extract transactions from comma-delimited text with a header line
    pub fn parse_delimited_table(&self, text: &str) -> Vec<CandidateTransaction> {
        table::scan_table(text, self.config.today(), &self.context())
    }

    /// Ingest a block of either kind
    pub fn ingest(&self, block: &RawInputBlock) -> IngestOutcome {
        let text = block.text();
        let candidates = match block {
            RawInputBlock::Messages(_) => self.parse_freeform_messages(text),
            RawInputBlock::Table(_) => self.parse_delimited_table(text),
        };
        let summary = IngestSummary::new(block.source(), candidates.len());

        tracing::info!(
            source = %summary.source,
            bytes = text.len(),
            count = summary.count,
            "ingested text block"
        );
        IngestOutcome {
            candidates,
            summary,
        }
    }

    /// Read an uploaded CSV file and ingest it as a table
    pub fn ingest_upload<R: Read>(&self, file_name: &str, reader: R) -> IngestResult<IngestOutcome> {
        let text = read_table_upload(file_name, reader).inspect_err(|e| {
            tracing::warn!(file_name, error = %e, "rejected upload");
        })?;
        Ok(self.ingest(&RawInputBlock::Table(text)))
    }

    /// Suggest a category for a description typed into the manual form
    pub fn suggest(&self, description: &str) -> Option<Suggestion> {
        self.suggester.suggest(description)
    }
}

/// Parse message text with the default rules, stamping records with `today`
///
/// ```rust
/// use bigdecimal::BigDecimal;
/// use chrono::NaiveDate;
/// use finance_ingest::parse_freeform_messages;
///
/// let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
/// let records = parse_freeform_messages("₹5000 credited to your account as salary", today);
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].amount, BigDecimal::from(5000));
/// ```
pub fn parse_freeform_messages(text: &str, today: NaiveDate) -> Vec<CandidateTransaction> {
    TransactionTextIngestor::with_config(IngestConfig::default().with_today(today))
        .parse_freeform_messages(text)
}

/// Parse delimited text with the default rules, stamping undated rows with `today`
pub fn parse_delimited_table(text: &str, today: NaiveDate) -> Vec<CandidateTransaction> {
    TransactionTextIngestor::with_config(IngestConfig::default().with_today(today))
        .parse_delimited_table(text)
}
