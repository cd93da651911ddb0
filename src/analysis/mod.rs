//! Analysis and result aggregation modules
//!
//! Combines the scorer outputs into the final analysis:
//! - Result types
//! - Consensus combination
//! - Consensus assessment

pub mod confidence;
pub mod consensus;
pub mod result;
