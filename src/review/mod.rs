//! Review and commit of ingested candidates

pub mod manager;
pub mod manual;
pub mod pending;

pub use manager::*;
pub use manual::*;
pub use pending::*;
