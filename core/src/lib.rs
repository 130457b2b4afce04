//! Core engine for the nosh macro tracker.
//!
//! Everything here is transport-agnostic: a fixed food catalog, pure
//! serving-scaling arithmetic, a mutex-guarded target store and daily log,
//! and a service façade tying them together. The `cli` crate supplies the
//! command-line and HTTP surfaces on top.

pub mod catalog;
pub mod clock;
pub mod error;
pub mod log;
pub mod models;
pub mod scale;
pub mod service;
pub mod targets;
