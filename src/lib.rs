//! Vocabulary difficulty scoring.
//!
//! Each word gets three distances in [0, 1] (meaning, visual, pronunciation),
//! a weighted total and a difficulty label. [`scoring`] holds the pure engine;
//! [`ingest`] and [`output`] turn word lists into a scored dataset.

pub mod config;
pub mod ingest;
pub mod logging;
pub mod output;
pub mod scoring;
