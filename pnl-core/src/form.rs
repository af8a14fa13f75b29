//! State behind the profit-and-loss entry form.

use thiserror::Error;
use tracing::debug;

use crate::actions::ProfitLossReport;
use crate::calculations::ProfitLossTotals;
use crate::models::{EntryField, FieldValue, FinancialEntry, Section};
use crate::source::ProjectDataSource;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown {section} field '{key}'")]
    UnknownField { section: &'static str, key: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    NoProjectSelected,
    ProjectSelected(String),
}

/// What happened when a project was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The stored record replaced every field.
    Loaded,
    /// Nothing is stored for the project; fields were left as they were.
    NoRecord,
    /// The project was already selected; no lookup was made.
    Unchanged,
}

/// The record being edited plus the current project selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryForm {
    selection: SelectionState,
    entry: FinancialEntry,
}

impl EntryForm {
    /// No project selected, every field zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(&self) -> &FinancialEntry {
        &self.entry
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selected_project(&self) -> Option<&str> {
        match &self.selection {
            SelectionState::NoProjectSelected => None,
            SelectionState::ProjectSelected(name) => Some(name),
        }
    }

    /// Replaces one field with the parsed `raw` input.
    pub fn set_field(
        &mut self,
        field: EntryField,
        raw: &str,
    ) {
        let value = FieldValue::parse(raw);
        if self.entry.get(field) != &value {
            debug!(section = field.section().as_str(), key = field.key(), %value, "field changed");
            self.entry.set(field, value);
        }
    }

    /// String-keyed form of [`set_field`](Self::set_field).
    pub fn handle_change(
        &mut self,
        section: Section,
        key: &str,
        raw: &str,
    ) -> Result<(), FormError> {
        let field = EntryField::from_parts(section, key).ok_or_else(|| FormError::UnknownField {
            section: section.as_str(),
            key: key.to_string(),
        })?;
        self.set_field(field, raw);
        Ok(())
    }

    /// Selects `project_name` and loads its stored record, if any.
    pub fn select_project(
        &mut self,
        project_name: &str,
        source: &dyn ProjectDataSource,
    ) -> SelectionOutcome {
        if self.selected_project() == Some(project_name) {
            return SelectionOutcome::Unchanged;
        }

        self.selection = SelectionState::ProjectSelected(project_name.to_string());

        match source.fetch_project_data(project_name) {
            Some(entry) => {
                debug!(project = project_name, "loaded stored record");
                self.entry = entry;
                SelectionOutcome::Loaded
            }
            None => {
                debug!(project = project_name, "no stored record; keeping current values");
                SelectionOutcome::NoRecord
            }
        }
    }

    pub fn totals(&self) -> ProfitLossTotals {
        ProfitLossTotals::from_entry(&self.entry)
    }

    pub fn report(
        &self,
        currency_symbol: &str,
    ) -> ProfitLossReport {
        ProfitLossReport {
            project: self.selected_project().map(str::to_string),
            entry: self.entry.clone(),
            totals: self.totals(),
            currency_symbol: currency_symbol.to_string(),
        }
    }
}
