//! Delimited table parsing (uploaded CSV text)

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use regex::Regex;
use std::str::FromStr;
use std::sync::OnceLock;

use super::{ColumnLayout, IngestConfig, ScanContext};
use crate::types::*;

/// Rows shorter than this are dropped
const MIN_FIELDS: usize = 3;

/// Leading numeric prefix of a cell, the way a lenient float parse reads it
fn numeric_prefix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
            .expect("numeric prefix regex")
    })
}

/// Parse the leading number of a cell, zero when there is none.
///
/// `"120"`, `"-45.5"`, `"1.e5"` and `"99 INR"` all yield numbers; `"₹120"` and `""` yield zero.
pub fn lenient_amount(cell: &str) -> BigDecimal {
    let Some(found) = numeric_prefix_re().find(cell.trim()) else {
        return BigDecimal::from(0);
    };

    let matched = found.as_str();
    let (mantissa, exponent) = match matched.find(['e', 'E']) {
        Some(at) => matched.split_at(at),
        None => (matched, ""),
    };

    // "12." and "1.e5" carry a bare trailing dot
    let mut number = mantissa.strip_suffix('.').unwrap_or(mantissa).to_string();
    let digits_at = usize::from(number.starts_with(['+', '-']));
    if number[digits_at..].starts_with('.') {
        number.insert(digits_at, '0');
    }
    number.push_str(exponent);

    BigDecimal::from_str(&number).unwrap_or_else(|_| BigDecimal::from(0))
}

/// Column positions for one table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnMap {
    description: usize,
    amount: usize,
    category: usize,
    date: Option<usize>,
}

impl ColumnMap {
    const POSITIONAL: ColumnMap = ColumnMap {
        description: 0,
        amount: 1,
        category: 2,
        date: Some(3),
    };

    fn from_header(header: &[&str]) -> Option<Self> {
        let position = |name: &str| {
            header
                .iter()
                .position(|field| field.trim().eq_ignore_ascii_case(name))
        };

        Some(ColumnMap {
            description: position("description")?,
            amount: position("amount")?,
            category: position("category")?,
            date: position("date"),
        })
    }

    fn resolve(layout: ColumnLayout, header: &[&str]) -> Self {
        match layout {
            ColumnLayout::Positional => Self::POSITIONAL,
            ColumnLayout::Header => Self::from_header(header).unwrap_or_else(|| {
                tracing::warn!(
                    ?header,
                    "table header lacks description/amount/category, using column positions"
                );
                Self::POSITIONAL
            }),
        }
    }
}

fn parse_date(cell: &str, config: &IngestConfig) -> Option<NaiveDate> {
    config
        .date_formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(cell, format).ok())
}

fn row_to_candidate(
    fields: &[&str],
    columns: ColumnMap,
    line_number: usize,
    today: NaiveDate,
    config: &IngestConfig,
) -> CandidateTransaction {
    let cell = |index: usize| fields.get(index).copied().unwrap_or("");
    let or_fallback = |value: &str, fallback: &str| {
        if value.is_empty() {
            fallback.to_string()
        } else {
            value.to_string()
        }
    };

    let description = or_fallback(cell(columns.description), &config.fallback_description);
    let amount = lenient_amount(cell(columns.amount));
    let category = or_fallback(cell(columns.category), &config.fallback_category);

    let candidate =
        CandidateTransaction::new(description, amount, category, today, CandidateSource::Table)
            .at_line(line_number);

    let date_cell = columns.date.map(cell).unwrap_or("");
    if date_cell.is_empty() {
        return candidate;
    }

    match parse_date(date_cell, config) {
        Some(date) => CandidateTransaction { date, ..candidate },
        None => {
            tracing::warn!(line_number, date = date_cell, "unrecognised date, flagged for review");
            candidate.with_unparsed_date(date_cell)
        }
    }
}

/// Parse header plus data rows, keeping input order
pub(crate) fn scan_table(
    text: &str,
    today: NaiveDate,
    ctx: &ScanContext<'_>,
) -> Vec<CandidateTransaction> {
    let config = ctx.config;
    let mut lines = text.split('\n');

    let header: Vec<&str> = lines
        .next()
        .unwrap_or("")
        .split(config.delimiter)
        .map(str::trim)
        .collect();
    let columns = ColumnMap::resolve(config.column_layout, &header);

    let mut result = Vec::new();
    for (index, line) in lines.enumerate() {
        // header is line 1
        let line_number = index + 2;
        let fields: Vec<&str> = line.split(config.delimiter).map(str::trim).collect();
        if fields.len() < MIN_FIELDS {
            tracing::debug!(line_number, fields = fields.len(), "dropping short table row");
            continue;
        }

        let candidate = row_to_candidate(&fields, columns, line_number, today, config);
        match ctx.validator.validate_candidate(&candidate) {
            Ok(()) => result.push(candidate),
            Err(e) => tracing::debug!(line_number, error = %e, "dropping table row"),
        }
    }

    result
}
