// Rust guideline compliant 2026-08-20

//! Adapters (secondary ports) for the trip-budget binary.
//!
//! Each sub-module implements a hexagonal port trait defined in the
//! `domain` crate. Adapters are intentionally isolated from assembler
//! and orchestrator logic.

pub mod linear_model;
