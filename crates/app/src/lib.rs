//! # autovet-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that adapters implement:
//!   - `DocumentSource` — enumerate and load automation documents
//! - Define the **use-case** that drives the domain checks:
//!   - `ValidationService` — classify, validate and summarize every document
//!     a source provides, producing a `ScanReport`
//!
//! ## Dependency rule
//! Depends on `autovet-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod report;
pub mod services;
