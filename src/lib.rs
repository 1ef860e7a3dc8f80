//! Maternity Leave & Allowance Calculation Engine
//!
//! This crate computes statutory maternity-leave entitlements and the
//! associated government allowance and employer compensation for an employee,
//! based on her city of employment, leave start date, declared monthly salary
//! figures, and medical flags (abortion, dystocia, multiple-infant birth,
//! extended-leave claim). Day counts and allowance formulas vary per city and
//! live in an immutable, process-wide policy registry.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod models;
pub mod policy;
