//! Outbound adapters implementing the domain's driven ports.
//!
//! - **persistence**: the booking store as one JSON document on disk, plus an
//!   in-memory store for tests and ephemeral runs.
//!
//! Adapters only translate between domain types and their storage
//! representation. They contain no booking rules.

pub mod persistence;
