//! The manual "add transaction" form

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::suggest::CategorySuggester;
use crate::types::*;
use crate::utils::validation::{parse_amount, validate_description};

/// Raw form fields as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualEntry {
    pub description: String,
    pub amount: String,
    pub category: String,
}

impl ManualEntry {
    pub fn new(description: &str, amount: &str, category: &str) -> Self {
        Self {
            description: description.to_string(),
            amount: amount.to_string(),
            category: category.to_string(),
        }
    }

    /// Fill category and amount from a suggestion. Returns whether one applied.
    ///
    /// The category is always replaced; the amount only when the field is empty.
    pub fn apply_suggestion(&mut self, suggester: &CategorySuggester) -> bool {
        let Some(suggestion) = suggester.suggest(&self.description) else {
            return false;
        };

        self.category = suggestion.category;
        if let Some(amount) = suggestion.amount {
            if self.amount.trim().is_empty() {
                self.amount = amount.to_string();
            }
        }
        true
    }

    /// Validate the form and turn it into a candidate dated `date`
    pub fn into_candidate(self, date: NaiveDate) -> IngestResult<CandidateTransaction> {
        validate_description(&self.description)?;
        let amount = parse_amount(&self.amount)?;

        let category = match self.category.trim() {
            "" => "Other".to_string(),
            category => category.to_string(),
        };

        Ok(CandidateTransaction::new(
            self.description.trim().to_string(),
            amount,
            category,
            date,
            CandidateSource::Manual,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_valid_entry() {
        let candidate = ManualEntry::new(" Uber Ride ", "-120", "Transport")
            .into_candidate(date())
            .unwrap();

        assert_eq!(candidate.description, "Uber Ride");
        assert_eq!(candidate.amount, BigDecimal::from(-120));
        assert_eq!(candidate.category, "Transport");
        assert_eq!(candidate.source, CandidateSource::Manual);
        assert_eq!(candidate.line_number, None);
    }

    #[test]
    fn test_blank_category_defaults() {
        let candidate = ManualEntry::new("Gym", "40", "  ")
            .into_candidate(date())
            .unwrap();
        assert_eq!(candidate.category, "Other");
    }

    #[test]
    fn test_invalid_entries() {
        assert!(ManualEntry::new("", "40", "Food")
            .into_candidate(date())
            .is_err());
        assert!(ManualEntry::new("Gym", "", "Food")
            .into_candidate(date())
            .is_err());
        assert!(ManualEntry::new("Gym", "forty", "Food")
            .into_candidate(date())
            .is_err());
    }

    #[test]
    fn test_apply_suggestion() {
        let suggester = CategorySuggester::default();

        let mut entry = ManualEntry::new("Zomato lunch", "", "");
        assert!(entry.apply_suggestion(&suggester));
        assert_eq!(entry.category, "Food");
        assert_eq!(entry.amount, "300");

        let mut entry = ManualEntry::new("zomato", "450", "Other");
        assert!(entry.apply_suggestion(&suggester));
        assert_eq!(entry.amount, "450");

        let mut entry = ManualEntry::new("Gym", "", "");
        assert!(!entry.apply_suggestion(&suggester));
        assert_eq!(entry, ManualEntry::new("Gym", "", ""));
    }
}
