mod field_value;
mod financial_entry;
mod project;

pub use field_value::FieldValue;
pub use financial_entry::{
    EntryField, ExpenseField, Expenses, FinancialEntry, Income, IncomeField, Section,
};
pub use project::ProjectSummary;
