//! Validation utilities

use bigdecimal::BigDecimal;
use std::str::FromStr;

use crate::traits::*;
use crate::types::*;

/// Validate that a transaction description is usable
pub fn validate_description(description: &str) -> IngestResult<()> {
    if description.trim().is_empty() {
        return Err(IngestError::Validation(
            "Transaction description cannot be empty".to_string(),
        ));
    }

    if description.len() > 500 {
        return Err(IngestError::Validation(
            "Transaction description cannot exceed 500 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate that a category label is usable
pub fn validate_category(category: &str) -> IngestResult<()> {
    if category.trim().is_empty() {
        return Err(IngestError::Validation(
            "Category cannot be empty".to_string(),
        ));
    }

    if category.len() > 50 {
        return Err(IngestError::Validation(
            "Category cannot exceed 50 characters".to_string(),
        ));
    }

    Ok(())
}

/// Parse a form amount strictly; unlike table ingestion, garbage is an error
pub fn parse_amount(amount: &str) -> IngestResult<BigDecimal> {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return Err(IngestError::Validation("Amount is required".to_string()));
    }

    BigDecimal::from_str(trimmed)
        .map_err(|_| IngestError::Validation(format!("Invalid amount: '{}'", trimmed)))
}

/// Validate that an amount is not zero
pub fn validate_non_zero_amount(amount: &BigDecimal) -> IngestResult<()> {
    if *amount == BigDecimal::from(0) {
        Err(IngestError::Validation(
            "Amount must not be zero".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Stricter validator used when committing reviewed candidates
pub struct EnhancedCandidateValidator;

impl CandidateValidator for EnhancedCandidateValidator {
    fn validate_candidate(&self, candidate: &CandidateTransaction) -> IngestResult<()> {
        DefaultCandidateValidator.validate_candidate(candidate)?;

        validate_description(&candidate.description)?;
        validate_category(&candidate.category)?;
        validate_non_zero_amount(&candidate.amount)?;

        if let Some(raw) = &candidate.unparsed_date {
            return Err(IngestError::Validation(format!(
                "Unrecognised date '{}' must be corrected before commit",
                raw
            )));
        }

        Ok(())
    }
}
