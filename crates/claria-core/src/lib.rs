//! claria-core
//!
//! Pure domain types shared by the interpretation engine and its consumers.
//! Scoring requests, interpreted results, and the category and risk scales.

pub mod models;
