use std::fmt;

use serde::{Deserialize, Serialize};

use super::FieldValue;

/// The two groups of the financial-entry record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Income,
    Expenses,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expenses => "expenses",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expenses => "Expenses",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncomeField {
    Contract,
    Extras,
}

impl IncomeField {
    pub const ALL: [IncomeField; 2] = [Self::Contract, Self::Extras];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Contract => "contract",
            Self::Extras => "extras",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Contract => "Contract Value",
            Self::Extras => "Extras",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpenseField {
    Materials,
    Labor,
    Transport,
    Equipment,
    Overheads,
}

impl ExpenseField {
    /// Record order; the form lists expenses in this order.
    pub const ALL: [ExpenseField; 5] = [
        Self::Materials,
        Self::Labor,
        Self::Transport,
        Self::Equipment,
        Self::Overheads,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Materials => "materials",
            Self::Labor => "labor",
            Self::Transport => "transport",
            Self::Equipment => "equipment",
            Self::Overheads => "overheads",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Materials => "Materials",
            Self::Labor => "Labor",
            Self::Transport => "Transport",
            Self::Equipment => "Equipment",
            Self::Overheads => "Overheads",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

/// Addresses one leaf of a [`FinancialEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryField {
    Income(IncomeField),
    Expense(ExpenseField),
}

impl EntryField {
    /// Every leaf, income first, each group in record order.
    pub fn all() -> impl Iterator<Item = EntryField> {
        IncomeField::ALL
            .into_iter()
            .map(Self::Income)
            .chain(ExpenseField::ALL.into_iter().map(Self::Expense))
    }

    /// Resolves a string key within a section, e.g. `(Expenses, "labor")`.
    pub fn from_parts(
        section: Section,
        key: &str,
    ) -> Option<Self> {
        match section {
            Section::Income => IncomeField::from_key(key).map(Self::Income),
            Section::Expenses => ExpenseField::from_key(key).map(Self::Expense),
        }
    }

    pub fn section(&self) -> Section {
        match self {
            Self::Income(_) => Section::Income,
            Self::Expense(_) => Section::Expenses,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Income(field) => field.key(),
            Self::Expense(field) => field.key(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Income(field) => field.label(),
            Self::Expense(field) => field.label(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Income {
    pub contract: FieldValue,
    pub extras: FieldValue,
}

impl Income {
    pub fn get(
        &self,
        field: IncomeField,
    ) -> &FieldValue {
        match field {
            IncomeField::Contract => &self.contract,
            IncomeField::Extras => &self.extras,
        }
    }

    pub fn get_mut(
        &mut self,
        field: IncomeField,
    ) -> &mut FieldValue {
        match field {
            IncomeField::Contract => &mut self.contract,
            IncomeField::Extras => &mut self.extras,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Expenses {
    pub materials: FieldValue,
    pub labor: FieldValue,
    pub transport: FieldValue,
    pub equipment: FieldValue,
    pub overheads: FieldValue,
}

impl Expenses {
    pub fn get(
        &self,
        field: ExpenseField,
    ) -> &FieldValue {
        match field {
            ExpenseField::Materials => &self.materials,
            ExpenseField::Labor => &self.labor,
            ExpenseField::Transport => &self.transport,
            ExpenseField::Equipment => &self.equipment,
            ExpenseField::Overheads => &self.overheads,
        }
    }

    pub fn get_mut(
        &mut self,
        field: ExpenseField,
    ) -> &mut FieldValue {
        match field {
            ExpenseField::Materials => &mut self.materials,
            ExpenseField::Labor => &mut self.labor,
            ExpenseField::Transport => &mut self.transport,
            ExpenseField::Equipment => &mut self.equipment,
            ExpenseField::Overheads => &mut self.overheads,
        }
    }

    /// Expense leaves in record order.
    pub fn iter(&self) -> impl Iterator<Item = (ExpenseField, &FieldValue)> {
        ExpenseField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }
}

/// The income/expenses record backing the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialEntry {
    pub income: Income,
    pub expenses: Expenses,
}

impl FinancialEntry {
    pub fn get(
        &self,
        field: EntryField,
    ) -> &FieldValue {
        match field {
            EntryField::Income(field) => self.income.get(field),
            EntryField::Expense(field) => self.expenses.get(field),
        }
    }

    /// Replaces one leaf. Sibling leaves are left as they are.
    pub fn set(
        &mut self,
        field: EntryField,
        value: FieldValue,
    ) {
        match field {
            EntryField::Income(field) => *self.income.get_mut(field) = value,
            EntryField::Expense(field) => *self.expenses.get_mut(field) = value,
        }
    }
}

impl fmt::Display for FinancialEntry {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for field in EntryField::all() {
            writeln!(f, "{:<16}{}", format!("{}:", field.label()), self.get(field))?;
        }
        Ok(())
    }
}
