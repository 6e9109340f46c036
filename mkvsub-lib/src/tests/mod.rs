//! Integration testing module
//!
//! End-to-end tests for the extraction pipeline, driven from in-memory packet
//! sources:
//! - Passthrough of ASS and legacy SSA tracks
//! - Synthesized scripts for SubRip tracks
//! - Gap-fill and ordering across the whole pipeline
//! - Failure handling and output cleanup

pub mod e2e;
pub mod fixtures;
