//! # Finance Ingest
//!
//! Transaction ingestion for a personal-finance dashboard: pasted bank SMS
//! text and uploaded CSV text become candidate transactions that the user
//! reviews before committing.
//!
//! ## Features
//!
//! - **Message scanning**: amount, direction and description from free-form bank messages
//! - **Table parsing**: positional (or header-mapped) CSV rows with lenient fallbacks
//! - **Category suggestions**: keyword rules for the manual entry form and messages
//! - **Review**: a pending list owned by the caller, validated commit through a storage trait
//! - **Storage abstraction**: backend-agnostic `TransactionStore` with an in-memory implementation
//!
//! ## Quick Start
//!
//! ```rust
//! use finance_ingest::{parse_delimited_table, parse_freeform_messages};
//! use bigdecimal::BigDecimal;
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
//!
//! let sms = parse_freeform_messages("₹350 debited from your account for Zomato order", today);
//! assert_eq!(sms[0].amount, BigDecimal::from(-350));
//!
//! let csv = parse_delimited_table("description,amount,category,date\nCoffee,120,Food,2025-01-10", today);
//! assert_eq!(csv[0].description, "Coffee");
//! ```

pub mod ingest;
pub mod review;
pub mod suggest;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use ingest::*;
pub use review::*;
pub use suggest::*;
pub use traits::*;
pub use types::*;
