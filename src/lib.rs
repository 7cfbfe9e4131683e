//! Attrition metrics engine for HR rosters
//!
//! This crate turns an employee roster and a filter selection into the
//! derived workforce-attrition metrics behind an HR dashboard: headline
//! KPIs, a monthly cumulative termination timeline, and breakdowns by
//! gender, department, reason, engagement and salary.

#![warn(missing_docs)]

pub mod aggregation;
pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod ingest;
pub mod models;
