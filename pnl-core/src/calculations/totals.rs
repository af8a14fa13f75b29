//! Income, expense and net totals for a [`FinancialEntry`].
//!
//! | Total          | Formula                                                    |
//! |----------------|------------------------------------------------------------|
//! | total income   | contract + extras                                          |
//! | total expenses | materials + labor + transport + equipment + overheads      |
//! | net result     | total income − total expenses                              |
//!
//! A leaf that is not a number makes every total it feeds
//! [`Amount::NotANumber`].
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pnl_core::calculations::{NetLabel, ProfitLossTotals};
//! use pnl_core::models::FinancialEntry;
//!
//! let mut entry = FinancialEntry::default();
//! entry.income.contract = dec!(50000).into();
//! entry.expenses.labor = dec!(8000).into();
//!
//! let totals = ProfitLossTotals::from_entry(&entry);
//! assert_eq!(totals.net.label(), NetLabel::Profit);
//! assert_eq!(totals.net.display("₹"), "Profit: ₹42000.00");
//! ```

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::format_amount;
use crate::models::{FieldValue, FinancialEntry};

/// The outcome of summing record leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Amount {
    Value(Decimal),
    NotANumber,
}

impl Amount {
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Value(value) => Some(*value),
            Self::NotANumber => None,
        }
    }

    /// Sums field values. Overflow is treated like non-numeric input.
    pub fn sum<'a>(values: impl IntoIterator<Item = &'a FieldValue>) -> Self {
        values
            .into_iter()
            .try_fold(Decimal::ZERO, |acc, value| {
                value.as_decimal().and_then(|v| acc.checked_add(v))
            })
            .map_or(Self::NotANumber, Self::Value)
    }

    pub fn checked_sub(
        self,
        other: Amount,
    ) -> Self {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => a.checked_sub(b).map_or(Self::NotANumber, Self::Value),
            _ => Self::NotANumber,
        }
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self::Value(value)
    }
}

/// Two decimal places, or `NaN`.
impl fmt::Display for Amount {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Value(value) => f.write_str(&format_amount(*value)),
            Self::NotANumber => f.write_str("NaN"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetLabel {
    Profit,
    Loss,
}

impl NetLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Profit => "Profit",
            Self::Loss => "Loss",
        }
    }
}

impl fmt::Display for NetLabel {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Total income minus total expenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetResult {
    pub amount: Amount,
}

impl NetResult {
    /// `Profit` at or above zero. An amount that is not a number is a `Loss`.
    pub fn label(&self) -> NetLabel {
        match self.amount {
            Amount::Value(value) if value >= Decimal::ZERO => NetLabel::Profit,
            _ => NetLabel::Loss,
        }
    }

    /// Renders e.g. `Profit: ₹31000.00` or `Loss: ₹-500.00`.
    pub fn display(
        &self,
        currency_symbol: &str,
    ) -> String {
        format!("{}: {}{}", self.label(), currency_symbol, self.amount)
    }
}

/// The three derived figures shown under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitLossTotals {
    pub total_income: Amount,
    pub total_expenses: Amount,
    pub net: NetResult,
}

impl ProfitLossTotals {
    pub fn from_entry(entry: &FinancialEntry) -> Self {
        let total_income = Amount::sum([&entry.income.contract, &entry.income.extras]);
        let total_expenses = Amount::sum(entry.expenses.iter().map(|(_, value)| value));
        let net = NetResult {
            amount: total_income.checked_sub(total_expenses),
        };

        tracing::trace!(%total_income, %total_expenses, net = %net.amount, "recomputed totals");

        Self {
            total_income,
            total_expenses,
            net,
        }
    }
}
