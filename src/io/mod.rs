//! Pipeline I/O modules
//!
//! Article input, analysis-text assembly, company attribution and the
//! sentiment rows handed to persistence. No network or database access
//! happens here.

pub mod article;
pub mod company;
