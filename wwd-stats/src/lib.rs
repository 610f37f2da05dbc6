//! Pure filtering and aggregation over loaded vegetation records.
//!
//! Everything here is a synchronous, deterministic transformation of an
//! in-memory record slice; no state is held between calls. The dashboard
//! and the CLI both consume these functions.

pub mod filter;
pub mod summary;
