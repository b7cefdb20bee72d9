//! Core types and utilities for dormpay.
//!
//! This crate provides the foundational types shared by the dormpay service:
//!
//! - **Identifiers**: `BillingId`
//! - **Billing**: `BillingStatus`, `BillingUpdate`
//! - **Money**: baht-to-satang conversion (`to_minor_units`)
//!
//! # Minor units
//!
//! The payment processor prices everything in the smallest currency
//! denomination (satang for THB). Amounts cross the API boundary as `f64`
//! baht and are converted exactly once, at session-creation time, to an
//! `i64` satang count.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod billing;
pub mod money;

pub use billing::{BillingId, BillingStatus, BillingUpdate};
pub use money::to_minor_units;
