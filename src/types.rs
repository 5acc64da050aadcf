//! Core types and data structures for transaction ingestion

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of money movement inferred from a message line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Money leaving the account (expense); amounts are negative
    Debit,
    /// Money entering the account (income); amounts are positive
    Credit,
}

impl Direction {
    /// Apply the direction's sign to an unsigned amount
    pub fn signed(&self, amount: BigDecimal) -> BigDecimal {
        match self {
            Direction::Debit => -amount,
            Direction::Credit => amount,
        }
    }

    /// Category label given to message candidates of this direction
    pub fn default_category(&self) -> &'static str {
        match self {
            Direction::Debit => "Expense",
            Direction::Credit => "Income",
        }
    }
}

/// Where a candidate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandidateSource {
    /// Pasted SMS / notification text
    Message,
    /// Uploaded CSV text
    Table,
    /// The manual entry form
    Manual,
}

impl fmt::Display for CandidateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateSource::Message => write!(f, "SMS"),
            CandidateSource::Table => write!(f, "CSV"),
            CandidateSource::Manual => write!(f, "Manual"),
        }
    }
}

/// A block of raw text handed to the ingestor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawInputBlock {
    /// Multi-line message text, one message per line
    Messages(String),
    /// Comma-delimited text with a header line
    Table(String),
}

impl RawInputBlock {
    /// The source every candidate from this block will carry
    pub fn source(&self) -> CandidateSource {
        match self {
            RawInputBlock::Messages(_) => CandidateSource::Message,
            RawInputBlock::Table(_) => CandidateSource::Table,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            RawInputBlock::Messages(text) | RawInputBlock::Table(text) => text,
        }
    }
}

/// A transaction extracted from text, awaiting user review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateTransaction {
    /// Non-empty description
    pub description: String,
    /// Signed amount; negative for expenses
    pub amount: BigDecimal,
    /// Category label
    pub category: String,
    /// Date of the transaction
    pub date: NaiveDate,
    /// Which ingestion path produced this candidate
    pub source: CandidateSource,
    /// 1-based line within the input block, if it came from one
    pub line_number: Option<usize>,
    /// Date cell text that matched no known format. While set, `date` is only
    /// the ingestion date and the candidate cannot be committed.
    #[serde(default)]
    pub unparsed_date: Option<String>,
}

impl CandidateTransaction {
    /// Create a new candidate
    pub fn new(
        description: String,
        amount: BigDecimal,
        category: String,
        date: NaiveDate,
        source: CandidateSource,
    ) -> Self {
        Self {
            description,
            amount,
            category,
            date,
            source,
            line_number: None,
            unparsed_date: None,
        }
    }

    /// Builder pattern: record the originating line
    pub fn at_line(mut self, line_number: usize) -> Self {
        self.line_number = Some(line_number);
        self
    }

    /// Builder pattern: keep a date cell that could not be read
    pub fn with_unparsed_date(mut self, raw: &str) -> Self {
        self.unparsed_date = Some(raw.to_string());
        self
    }

    pub fn has_unparsed_date(&self) -> bool {
        self.unparsed_date.is_some()
    }

    /// Set the date chosen during review, clearing any unreadable date text
    pub fn resolve_date(&mut self, date: NaiveDate) {
        self.date = date;
        self.unparsed_date = None;
    }

    /// Whether the amount is an expense
    pub fn is_expense(&self) -> bool {
        self.amount < BigDecimal::from(0)
    }

    /// Direction implied by the sign of the amount
    pub fn direction(&self) -> Direction {
        if self.is_expense() {
            Direction::Debit
        } else {
            Direction::Credit
        }
    }
}

/// A committed transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    pub amount: BigDecimal,
    pub category: String,
    /// Ingestion path of the candidate this was committed from
    pub source: CandidateSource,
    /// When the transaction was committed
    pub created_at: NaiveDateTime,
}

impl Transaction {
    /// Commit a candidate under a freshly generated id
    pub fn from_candidate(candidate: CandidateTransaction) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            date: candidate.date,
            description: candidate.description,
            amount: candidate.amount,
            category: candidate.category,
            source: candidate.source,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

/// Outcome of one ingestion call, as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestSummary {
    pub source: CandidateSource,
    /// Number of candidates produced; zero is a valid outcome
    pub count: usize,
}

impl IngestSummary {
    pub fn new(source: CandidateSource, count: usize) -> Self {
        Self { source, count }
    }

    /// No records were extracted
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Short heading for the notification, e.g. "SMS Parsed"
    pub fn title(&self) -> String {
        format!("{} Parsed", self.source)
    }
}

impl fmt::Display for IngestSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Found {} transactions", self.count)
    }
}

/// Errors that can occur around ingestion
///
/// Line-level problems never produce these; malformed lines are dropped.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Invalid file: {0}")]
    InvalidFile(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for IngestError {
    fn from(err: std::io::Error) -> Self {
        IngestError::Io(err.to_string())
    }
}

/// Result type for ingestion operations
pub type IngestResult<T> = Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_signs_amount() {
        assert_eq!(
            Direction::Debit.signed(BigDecimal::from(350)),
            BigDecimal::from(-350)
        );
        assert_eq!(
            Direction::Credit.signed(BigDecimal::from(350)),
            BigDecimal::from(350)
        );
    }

    #[test]
    fn test_summary_message() {
        let summary = IngestSummary::new(CandidateSource::Table, 3);
        assert_eq!(summary.to_string(), "Found 3 transactions");
        assert_eq!(summary.title(), "CSV Parsed");
        assert!(IngestSummary::new(CandidateSource::Message, 0).is_empty());
    }

    #[test]
    fn test_resolve_unparsed_date() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let mut candidate = CandidateTransaction::new(
            "Tea".to_string(),
            BigDecimal::from(20),
            "Food".to_string(),
            today,
            CandidateSource::Table,
        )
        .with_unparsed_date("Jan 10 2025");
        assert!(candidate.has_unparsed_date());

        let fixed = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        candidate.resolve_date(fixed);
        assert_eq!(candidate.date, fixed);
        assert_eq!(candidate.unparsed_date, None);
    }

    #[test]
    fn test_transaction_from_candidate() {
        let candidate = CandidateTransaction::new(
            "Uber Ride".to_string(),
            BigDecimal::from(-120),
            "Transport".to_string(),
            NaiveDate::from_ymd_opt(2025, 1, 14).unwrap(),
            CandidateSource::Manual,
        );
        assert!(candidate.is_expense());
        assert_eq!(candidate.direction(), Direction::Debit);

        assert!(!candidate.has_unparsed_date());

        let first = Transaction::from_candidate(candidate.clone());
        let second = Transaction::from_candidate(candidate);
        assert_eq!(first.description, "Uber Ride");
        assert_eq!(first.amount, BigDecimal::from(-120));
        assert_ne!(first.id, second.id);
    }
}
