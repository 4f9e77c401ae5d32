//! Core library components.
//!
//! This module contains the store client, the tree walker that discovers
//! every leaf path, and the aggregator that folds secrets into the output
//! document.

pub mod config;
pub mod constants;
pub mod export;
pub mod paths;
pub mod store;
pub mod types;
pub mod walker;
pub mod writer;
