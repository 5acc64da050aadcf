//! CSV upload, review and commit example

use finance_ingest::utils::MemoryStore;
use finance_ingest::{PendingCandidates, TransactionManager, TransactionTextIngestor};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("🧾 Finance Ingest - CSV Review Example\n");

    let csv = "\
description,amount,category,date
Zomato Food Delivery,-350,Food,2025-01-15
Salary Deposit,5000,Income,2025-01-14
Uber Ride,-120,Transport,2025-01-14
Amazon Shopping,-899,Shopping,2025-01-13
Electricity Bill,-500,Bills
Freelance Payment,2000,Income,2025-01-11
totals,6131";

    let ingestor = TransactionTextIngestor::new();
    let outcome = ingestor.ingest_upload("january.csv", csv.as_bytes())?;
    println!("{}: {}", outcome.summary.title(), outcome.summary);

    let mut pending = PendingCandidates::new();
    pending.replace(outcome.candidates);

    for (index, candidate) in pending.iter().enumerate() {
        println!(
            "  {}. {} {:<22} {:>8} ({})",
            index + 1,
            candidate.date,
            candidate.description,
            candidate.amount,
            candidate.category
        );
    }
    println!();

    println!("🗑️  Discarding the Amazon order before commit...");
    pending.discard(3)?;

    let mut manager = TransactionManager::new(MemoryStore::new());
    let committed = manager.commit_all(&mut pending).await?;
    println!("  ✓ Committed {} transactions\n", committed.len());

    println!("🔍 Searching for 'salary'");
    for txn in manager.search("salary").await? {
        println!("  {} {} ₹{}", txn.id, txn.description, txn.amount);
    }

    Ok(())
}
