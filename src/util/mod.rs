//! Utility functions.
//!
//! This module provides helper functions for clipboard export.

mod clipboard;

pub use clipboard::copy_samples_tsv;
