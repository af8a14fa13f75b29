//! Derived figures for the profit-and-loss form.
//!
//! This module sums the record leaves into total income, total expenses
//! and the net profit or loss.

pub mod common;
pub mod totals;

pub use totals::{Amount, NetLabel, NetResult, ProfitLossTotals};
