//! Scoring front end for FMCG warehouse and retail-outlet submissions.
//!
//! The crate shapes an inbound attribute record, delegates the numeric score
//! to an external prediction service, and derives a narrative report from an
//! ordered rule table. Nothing is persisted; every request is self-contained.

pub mod config;
pub mod error;
pub mod prediction;
pub mod telemetry;
