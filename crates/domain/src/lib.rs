//! # autovet-domain
//!
//! Static validation of home-automation rule documents.
//!
//! ## Responsibilities
//! - Define the closed **taxonomy** of trigger platforms, condition kinds,
//!   action markers and run modes
//! - Validate **automations** (trigger → condition → action) and describe them
//! - Validate **service call data** for a few well-known services
//! - Shared helpers: time-of-day parsing, value type naming, error types
//!
//! Every check is a pure function of its input and reports problems as
//! messages instead of failing, so a single pass surfaces every defect.
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO.
//! Loading documents is the job of the `app` ports and their adapters.

pub mod error;
pub mod time;
pub mod value;

pub mod automation;
pub mod service;
pub mod taxonomy;
