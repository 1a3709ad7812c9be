//! Payroll Computation Engine for Philippine payroll
//!
//! This crate computes weekly or monthly payroll from raw attendance records:
//! it classifies each worked day, resolves billable and overtime hours,
//! aggregates them per pay period, applies the SSS, PhilHealth, Pag-IBIG and
//! BIR withholding tax rules, and assembles a net-pay report.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
