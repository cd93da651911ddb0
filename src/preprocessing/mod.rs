//! Text preprocessing modules
//!
//! This module contains utilities for preparing text for scoring:
//! - Normalization (URL/email removal, punctuation filtering, whitespace)
//! - Tokenization and stop-word filtering

pub mod normalization;
pub mod tokenizer;
