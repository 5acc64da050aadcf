//! Ingestion rules and tunables

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::*;

/// How table columns are located
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnLayout {
    /// description, amount, category, date by position; header ignored
    #[default]
    Positional,
    /// Columns located by header name, falling back to positions
    Header,
}

/// Configuration for [`super::TransactionTextIngestor`]
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```rust
/// use finance_ingest::IngestConfig;
///
/// let config = IngestConfig::from_json(r#"{ "tie_direction": "Debit" }"#).unwrap();
/// assert_eq!(config.fallback_category, "Other");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Case-insensitive substrings marking a message as money out
    pub debit_keywords: Vec<String>,
    /// Case-insensitive substrings marking a message as money in
    pub credit_keywords: Vec<String>,
    /// Direction used when a line carries both kinds of keyword
    pub tie_direction: Direction,
    /// Remove every amount-shaped substring from message descriptions, not only the first
    pub strip_all_amounts: bool,
    /// Replace Expense/Income labels on messages with a suggested category
    pub suggest_categories: bool,
    /// Description used for blank table cells
    pub fallback_description: String,
    /// Category used for blank table cells
    pub fallback_category: String,
    pub column_layout: ColumnLayout,
    /// Field separator for tables
    pub delimiter: char,
    /// Date formats tried, in order, for the table date column
    pub date_formats: Vec<String>,
    /// Pin "today"; when unset the current UTC date is used
    pub today: Option<NaiveDate>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            debit_keywords: to_strings(&["debited", "spent", "paid", "purchase"]),
            credit_keywords: to_strings(&["credited", "received", "deposit"]),
            tie_direction: Direction::Credit,
            strip_all_amounts: false,
            suggest_categories: false,
            fallback_description: "Unknown".to_string(),
            fallback_category: "Other".to_string(),
            column_layout: ColumnLayout::Positional,
            delimiter: ',',
            date_formats: to_strings(&["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%Y/%m/%d"]),
            today: None,
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl IngestConfig {
    /// Load a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> IngestResult<Self> {
        let config: IngestConfig = serde_json::from_str(json)
            .map_err(|e| IngestError::Validation(format!("Invalid ingest config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> IngestResult<()> {
        if self.fallback_description.trim().is_empty() {
            return Err(IngestError::Validation(
                "Fallback description cannot be empty".to_string(),
            ));
        }

        if self.delimiter == '\n' || self.delimiter == '\r' {
            return Err(IngestError::Validation(
                "Delimiter cannot be a line break".to_string(),
            ));
        }

        if self
            .debit_keywords
            .iter()
            .chain(self.credit_keywords.iter())
            .any(|k| k.trim().is_empty())
        {
            return Err(IngestError::Validation(
                "Direction keywords cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Builder pattern: pin the ingestion date
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Builder pattern: set the tie policy
    pub fn with_tie_direction(mut self, direction: Direction) -> Self {
        self.tie_direction = direction;
        self
    }

    /// Builder pattern: set the table column layout
    pub fn with_column_layout(mut self, layout: ColumnLayout) -> Self {
        self.column_layout = layout;
        self
    }

    /// Builder pattern: strip every amount from message descriptions
    pub fn with_strip_all_amounts(mut self, strip: bool) -> Self {
        self.strip_all_amounts = strip;
        self
    }

    /// Builder pattern: suggest categories for message candidates
    pub fn with_suggested_categories(mut self, suggest: bool) -> Self {
        self.suggest_categories = suggest;
        self
    }

    /// The date stamped on records with no date of their own
    pub fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Utc::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keywords() {
        let config = IngestConfig::default();
        assert_eq!(config.debit_keywords.len(), 4);
        assert!(config.credit_keywords.contains(&"deposit".to_string()));
        assert_eq!(config.tie_direction, Direction::Credit);
        assert_eq!(config.column_layout, ColumnLayout::Positional);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config = IngestConfig::from_json(
            r#"{ "column_layout": "header", "today": "2025-01-10", "fallback_category": "Misc" }"#,
        )
        .unwrap();

        assert_eq!(config.column_layout, ColumnLayout::Header);
        assert_eq!(config.today(), NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
        assert_eq!(config.fallback_category, "Misc");
        assert_eq!(config.delimiter, ',');
    }

    #[test]
    fn test_invalid_json_config() {
        assert!(matches!(
            IngestConfig::from_json("{ not json"),
            Err(IngestError::Validation(_))
        ));
        assert!(IngestConfig::from_json(r#"{ "debit_keywords": [""] }"#).is_err());
        assert!(IngestConfig::from_json(r#"{ "fallback_description": " " }"#).is_err());
    }
}
