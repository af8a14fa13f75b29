//! Export, send and save actions.
//!
//! The form never performs these itself. It snapshots its state into a
//! [`ProfitLossReport`] and hands it to an [`ActionHandler`] supplied by the
//! host application.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::calculations::ProfitLossTotals;
use crate::models::{EntryField, FinancialEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfitLossAction {
    ExportPdf,
    SendMessage,
    Save,
}

impl ProfitLossAction {
    pub const ALL: [ProfitLossAction; 3] = [Self::ExportPdf, Self::SendMessage, Self::Save];

    /// Button caption.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ExportPdf => "Export PDF",
            Self::SendMessage => "Send via WhatsApp",
            Self::Save => "Save",
        }
    }
}

impl fmt::Display for ProfitLossAction {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors reported back by an [`ActionHandler`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActionError {
    /// No collaborator is wired up for this action.
    #[error("{0} is not available")]
    Unavailable(ProfitLossAction),

    /// The collaborator refused or failed to carry out the action.
    #[error("{action} failed: {reason}")]
    Rejected {
        action: ProfitLossAction,
        reason: String,
    },
}

/// Plain-data snapshot of the form handed to collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitLossReport {
    pub project: Option<String>,
    pub entry: FinancialEntry,
    pub totals: ProfitLossTotals,
    pub currency_symbol: String,
}

impl fmt::Display for ProfitLossReport {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let c = &self.currency_symbol;
        writeln!(
            f,
            "Project:         {}",
            self.project.as_deref().unwrap_or("-")
        )?;
        for field in EntryField::all() {
            writeln!(
                f,
                "{:<17}{c}{}",
                format!("{}:", field.label()),
                self.entry.get(field)
            )?;
        }
        writeln!(f, "Total income:    {c}{}", self.totals.total_income)?;
        writeln!(f, "Total expenses:  {c}{}", self.totals.total_expenses)?;
        write!(f, "Net {}", self.totals.net.display(c))
    }
}

/// Receives the export / send / save requests.
pub trait ActionHandler {
    fn handle(
        &self,
        action: ProfitLossAction,
        report: &ProfitLossReport,
    ) -> Result<(), ActionError>;
}

impl<F> ActionHandler for F
where
    F: Fn(ProfitLossAction, &ProfitLossReport) -> Result<(), ActionError>,
{
    fn handle(
        &self,
        action: ProfitLossAction,
        report: &ProfitLossReport,
    ) -> Result<(), ActionError> {
        self(action, report)
    }
}

/// Default collaborator: writes the request to the log and succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingActionHandler;

impl ActionHandler for LoggingActionHandler {
    fn handle(
        &self,
        action: ProfitLossAction,
        report: &ProfitLossReport,
    ) -> Result<(), ActionError> {
        info!(%action, project = ?report.project, "action requested\n{report}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn report() -> ProfitLossReport {
        let mut entry = FinancialEntry::default();
        entry.income.contract = dec!(50000).into();
        entry.income.extras = dec!(2000).into();
        entry.expenses.materials = dec!(10000).into();
        entry.expenses.labor = dec!(8000).into();
        entry.expenses.transport = dec!(1500).into();
        entry.expenses.equipment = dec!(500).into();
        entry.expenses.overheads = dec!(1000).into();
        ProfitLossReport {
            project: Some("Farm Fence".to_string()),
            totals: ProfitLossTotals::from_entry(&entry),
            entry,
            currency_symbol: "₹".to_string(),
        }
    }

    #[test]
    fn labels_match_buttons() {
        let labels: Vec<_> = ProfitLossAction::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(labels, vec!["Export PDF", "Send via WhatsApp", "Save"]);
    }

    #[test]
    fn closure_handler_receives_action_and_report() {
        let seen = RefCell::new(Vec::new());
        let handler = |action: ProfitLossAction, report: &ProfitLossReport| -> Result<(), ActionError> {
            seen.borrow_mut().push((action, report.project.clone()));
            Ok(())
        };

        handler.handle(ProfitLossAction::Save, &report()).unwrap();

        assert_eq!(
            seen.into_inner(),
            vec![(ProfitLossAction::Save, Some("Farm Fence".to_string()))]
        );
    }

    #[test]
    fn closure_handler_errors_are_returned() {
        let handler = |action: ProfitLossAction, _: &ProfitLossReport| -> Result<(), ActionError> {
            Err(ActionError::Rejected {
                action,
                reason: "no recipient".to_string(),
            })
        };

        let err = handler
            .handle(ProfitLossAction::SendMessage, &report())
            .unwrap_err();
        assert_eq!(err.to_string(), "Send via WhatsApp failed: no recipient");
    }

    #[test]
    fn unavailable_error_names_the_action() {
        assert_eq!(
            ActionError::Unavailable(ProfitLossAction::ExportPdf).to_string(),
            "Export PDF is not available"
        );
    }

    #[test]
    fn logging_handler_always_succeeds() {
        for action in ProfitLossAction::ALL {
            assert_eq!(LoggingActionHandler.handle(action, &report()), Ok(()));
        }
    }

    #[test]
    fn report_display_ends_with_net_line() {
        let text = report().to_string();
        assert!(text.starts_with("Project:         Farm Fence\n"));
        assert!(text.contains("Contract Value:  ₹50000\n"));
        assert!(text.contains("Total income:    ₹52000.00\n"));
        assert!(text.contains("Total expenses:  ₹21000.00\n"));
        assert!(text.ends_with("Net Profit: ₹31000.00"));
    }
}
