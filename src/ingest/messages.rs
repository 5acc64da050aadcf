//! Free-form message scanning (pasted bank SMS)

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use regex::Regex;
use std::str::FromStr;
use std::sync::OnceLock;

use super::ScanContext;
use crate::types::*;

/// First amount-shaped substring: optional currency glyph, digits, optional
/// two-digit fraction. Group 1 holds the number.
fn amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[₹$€£]?([0-9]+(?:\.[0-9]{2})?)").expect("amount regex"))
}

/// Classify a line by its keywords.
///
/// Debit only when a debit keyword is present and no credit keyword is;
/// a line with both takes `tie`, a line with neither is a credit.
pub(crate) fn classify(line: &str, debit: &[String], credit: &[String], tie: Direction) -> Direction {
    let lowered = line.to_lowercase();
    let contains_any =
        |keywords: &[String]| keywords.iter().any(|k| lowered.contains(&k.to_lowercase()));

    match (contains_any(debit), contains_any(credit)) {
        (true, false) => Direction::Debit,
        (true, true) => tie,
        _ => Direction::Credit,
    }
}

fn scan_line(
    line: &str,
    line_number: usize,
    today: NaiveDate,
    ctx: &ScanContext<'_>,
) -> Option<CandidateTransaction> {
    let re = amount_re();
    let captures = re.captures(line)?;
    let amount = BigDecimal::from_str(&captures[1]).ok()?;

    let config = ctx.config;
    let direction = classify(
        line,
        &config.debit_keywords,
        &config.credit_keywords,
        config.tie_direction,
    );

    let stripped = if config.strip_all_amounts {
        re.replace_all(line, "")
    } else {
        re.replace(line, "")
    };
    let description = stripped.trim();
    if description.is_empty() {
        tracing::debug!(line_number, "message line has an amount but no description");
        return None;
    }

    let category = if config.suggest_categories {
        ctx.suggester
            .suggest(description)
            .map(|s| s.category)
            .unwrap_or_else(|| direction.default_category().to_string())
    } else {
        direction.default_category().to_string()
    };

    Some(
        CandidateTransaction::new(
            description.to_string(),
            direction.signed(amount),
            category,
            today,
            CandidateSource::Message,
        )
        .at_line(line_number),
    )
}

/// Scan message text line by line, keeping input order
pub(crate) fn scan_messages(
    text: &str,
    today: NaiveDate,
    ctx: &ScanContext<'_>,
) -> Vec<CandidateTransaction> {
    text.split('\n')
        .enumerate()
        .filter_map(|(index, line)| {
            let candidate = scan_line(line, index + 1, today, ctx)?;
            match ctx.validator.validate_candidate(&candidate) {
                Ok(()) => Some(candidate),
                Err(e) => {
                    tracing::debug!(line_number = index + 1, error = %e, "dropping message line");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::IngestConfig;
    use crate::suggest::CategorySuggester;
    use crate::traits::DefaultCandidateValidator;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn scan(text: &str, config: &IngestConfig) -> Vec<CandidateTransaction> {
        let suggester = CategorySuggester::default();
        let ctx = ScanContext {
            config,
            suggester: &suggester,
            validator: &DefaultCandidateValidator,
        };
        scan_messages(text, today(), &ctx)
    }

    fn keywords(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_classify() {
        let debit = keywords(&["debited", "spent", "paid", "purchase"]);
        let credit = keywords(&["credited", "received", "deposit"]);

        assert_eq!(
            classify("Rs 20 SPENT at cafe", &debit, &credit, Direction::Credit),
            Direction::Debit
        );
        assert_eq!(
            classify("salary credited", &debit, &credit, Direction::Credit),
            Direction::Credit
        );
        assert_eq!(
            classify("balance is 20", &debit, &credit, Direction::Credit),
            Direction::Credit
        );
        assert_eq!(
            classify("paid back, refund received", &debit, &credit, Direction::Debit),
            Direction::Debit
        );
    }

    #[test]
    fn test_debit_message() {
        let records = scan(
            "₹350 debited from your account for Zomato order",
            &IngestConfig::default(),
        );

        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].description,
            "debited from your account for Zomato order"
        );
        assert_eq!(records[0].amount, BigDecimal::from(-350));
        assert_eq!(records[0].category, "Expense");
        assert_eq!(records[0].date, today());
        assert_eq!(records[0].line_number, Some(1));
    }

    #[test]
    fn test_decimal_amount_and_line_numbers() {
        let text = "no amount here\nSpent $12.50 on coffee\n";
        let records = scan(text, &IngestConfig::default());

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].amount, BigDecimal::from_str("-12.50").unwrap());
        assert_eq!(records[0].description, "Spent  on coffee");
        assert_eq!(records[0].line_number, Some(2));
    }

    #[test]
    fn test_amount_only_line_is_dropped() {
        assert!(scan("  ₹500  ", &IngestConfig::default()).is_empty());
    }

    #[test]
    fn test_only_first_amount_removed_by_default() {
        let text = "₹200 paid to A/c 1234";
        let records = scan(text, &IngestConfig::default());
        assert_eq!(records[0].description, "paid to A/c 1234");

        let records = scan(
            text,
            &IngestConfig::default().with_strip_all_amounts(true),
        );
        assert_eq!(records[0].description, "paid to A/c");
        assert_eq!(records[0].amount, BigDecimal::from(-200));
    }

    #[test]
    fn test_suggested_category() {
        let config = IngestConfig::default().with_suggested_categories(true);
        let records = scan("₹350 debited for Zomato order\n₹10 paid to someone", &config);

        assert_eq!(records[0].category, "Food");
        assert_eq!(records[1].category, "Expense");
    }
}
