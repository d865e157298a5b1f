// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod learning;
pub mod presentation;

pub use crate::core::engine::AutocompleteEngine;
pub use crate::core::ranking::rank;
pub use crate::core::trie::PrefixTrie;
pub use crate::core::types::Candidate;
pub use crate::error::{Error, Result};
