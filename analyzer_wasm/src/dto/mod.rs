//! JS-facing DTO types for `analyzer_wasm`.
//!
//! Spans are UTF-16 code units, half-open `[start, end)`. Token ranges in hints
//! are token indices, which is what the guess grid is laid out by.
pub mod v1;
