//! Keyword-based category suggestions for transaction descriptions

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// A keyword rule: descriptions containing `keyword` get `category`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionRule {
    /// Matched case-insensitively anywhere in the description
    pub keyword: String,
    pub category: String,
    /// Typical amount to prefill, if the rule has one
    pub amount: Option<BigDecimal>,
}

impl SuggestionRule {
    pub fn new(keyword: &str, category: &str) -> Self {
        Self {
            keyword: keyword.to_lowercase(),
            category: category.to_string(),
            amount: None,
        }
    }

    /// Builder pattern: prefill an amount
    pub fn with_amount(mut self, amount: BigDecimal) -> Self {
        self.amount = Some(amount);
        self
    }
}

/// What a rule suggests for a description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub category: String,
    pub amount: Option<BigDecimal>,
}

/// Ordered rule list; the first matching rule wins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySuggester {
    rules: Vec<SuggestionRule>,
}

impl Default for CategorySuggester {
    fn default() -> Self {
        Self::new(vec![
            SuggestionRule::new("zomato", "Food").with_amount(BigDecimal::from(300)),
            SuggestionRule::new("swiggy", "Food"),
            SuggestionRule::new("uber", "Transport"),
            SuggestionRule::new("amazon", "Shopping"),
            SuggestionRule::new("flipkart", "Shopping"),
            SuggestionRule::new("electricity", "Bills"),
            SuggestionRule::new("bill", "Bills"),
            SuggestionRule::new("salary", "Income"),
            SuggestionRule::new("freelance", "Income"),
        ])
    }
}

impl CategorySuggester {
    pub fn new(rules: Vec<SuggestionRule>) -> Self {
        Self { rules }
    }

    /// Append a rule after the existing ones
    pub fn add_rule(&mut self, rule: SuggestionRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[SuggestionRule] {
        &self.rules
    }

    /// Suggest a category (and maybe an amount) for a description
    pub fn suggest(&self, description: &str) -> Option<Suggestion> {
        let lowered = description.to_lowercase();
        self.rules
            .iter()
            .find(|rule| lowered.contains(&rule.keyword.to_lowercase()))
            .map(|rule| Suggestion {
                category: rule.category.clone(),
                amount: rule.amount.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zomato_suggestion() {
        let suggestion = CategorySuggester::default()
            .suggest("Zomato dinner")
            .unwrap();
        assert_eq!(suggestion.category, "Food");
        assert_eq!(suggestion.amount, Some(BigDecimal::from(300)));
    }

    #[test]
    fn test_first_rule_wins() {
        let suggester = CategorySuggester::default();
        let suggestion = suggester.suggest("Electricity Bill").unwrap();
        assert_eq!(suggestion.category, "Bills");
        assert_eq!(suggestion.amount, None);

        assert_eq!(
            suggester.suggest("Uber to Amazon office").unwrap().category,
            "Transport"
        );
    }

    #[test]
    fn test_no_match() {
        assert!(CategorySuggester::default().suggest("Gym").is_none());
    }

    #[test]
    fn test_custom_rule() {
        let mut suggester = CategorySuggester::new(Vec::new());
        suggester.add_rule(SuggestionRule::new("GYM", "Health"));
        assert_eq!(suggester.suggest("cult gym").unwrap().category, "Health");
        assert_eq!(suggester.rules().len(), 1);
    }
}
