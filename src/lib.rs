//! Keymetry - keyboard layout design toolkit
//!
//! Supports designing a custom keyboard layout: ranking the ergonomic
//! difficulty of finger-movement bigrams with a memoized human-in-the-loop
//! comparison sort, building n-gram frequency tables from text corpora,
//! analyzing key-press timing logs, and exporting layouts to the
//! keyboard-layout-analyzer config format.

pub mod cli;
pub mod config;
pub mod grams;
pub mod keylog;
pub mod layout;
pub mod models;
pub mod ranker;
pub mod weights;
