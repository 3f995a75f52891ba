//! Chord transposition WASM API
//!
//! This module provides the JavaScript-facing API for the transposition
//! engine, plus the shared helpers for serialization, error conversion and
//! logging.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error handling, and logging
//! - `transpose`: Key, chord and lyrics operations exported to JavaScript

pub mod helpers;
pub mod transpose;

pub use transpose::*;
