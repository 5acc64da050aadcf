//! Pasted SMS ingestion example

use finance_ingest::{IngestConfig, ManualEntry, RawInputBlock, TransactionTextIngestor};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("📩 Finance Ingest - SMS Parsing Example\n");

    let ingestor =
        TransactionTextIngestor::with_config(IngestConfig::default().with_suggested_categories(true));

    let sms = "\
₹350 debited from your account for Zomato order
Your OTP for login is 4821
₹5000 credited to your account as salary
Rs 120 spent on Uber ride
₹499.00 paid to Amazon, cashback of ₹50 received";

    let outcome = ingestor.ingest(&RawInputBlock::Messages(sms.to_string()));
    println!("{}: {}", outcome.summary.title(), outcome.summary);

    for candidate in &outcome.candidates {
        println!(
            "  ✓ line {:?}: {:<45} {:>10} ({})",
            candidate.line_number, candidate.description, candidate.amount, candidate.category
        );
    }
    println!();

    // The "suggest" button on the manual form
    println!("✨ Manual entry with suggestion...");
    let mut entry = ManualEntry::new("Zomato dinner", "", "");
    if let Some(suggestion) = ingestor.suggest(&entry.description) {
        println!("  Suggested category: {}", suggestion.category);
    }
    let suggester = finance_ingest::CategorySuggester::default();
    entry.apply_suggestion(&suggester);
    let candidate = entry.into_candidate(ingestor.config().today())?;
    println!(
        "  ✓ {} - ₹{} ({})",
        candidate.description, candidate.amount, candidate.category
    );

    Ok(())
}
