use std::rc::Rc;

use pnl_core::{ActionHandler, LoggingActionHandler, ProjectDataSource, ProjectSummary};
use tracing::debug;

use crate::config::AppConfig;

/// Everything the form needs from the host application.
#[derive(Clone)]
pub struct FormSetup {
    pub title: String,
    pub currency_symbol: String,
    pub projects: Vec<ProjectSummary>,
    pub source: Rc<dyn ProjectDataSource>,
    pub actions: Rc<dyn ActionHandler>,
}

impl FormSetup {
    /// Projects and stored records come from the config's catalog; actions
    /// go to the logging handler.
    pub fn from_config(config: &AppConfig) -> Self {
        let catalog = config.catalog();
        debug!(projects = catalog.len(), "built project catalog");

        Self {
            title: config.title.clone(),
            currency_symbol: config.currency_symbol.clone(),
            projects: catalog.projects(),
            source: Rc::new(catalog),
            actions: Rc::new(LoggingActionHandler),
        }
    }

    /// Replaces the action collaborator.
    pub fn with_actions(
        mut self,
        actions: impl ActionHandler + 'static,
    ) -> Self {
        self.actions = Rc::new(actions);
        self
    }

    pub fn project_names(&self) -> Vec<String> {
        self.projects.iter().map(|p| p.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use pnl_core::{ActionError, EntryForm, ProfitLossAction, ProfitLossReport, SelectionOutcome};
    use pretty_assertions::assert_eq;

    use super::*;

    const CONFIG: &str = r#"
        currency_symbol = "$"

        [[projects]]
        id = "p-001"
        name = "Farm Fence"

        [projects.entry.income]
        contract = 1200

        [projects.entry.expenses]
        labor = 200

        [[projects]]
        id = "p-002"
        name = "Gate"
    "#;

    #[test]
    fn setup_lists_projects_in_config_order() {
        let setup = FormSetup::from_config(&AppConfig::from_toml_str(CONFIG).unwrap());

        assert_eq!(setup.project_names(), vec!["Farm Fence", "Gate"]);
        assert_eq!(setup.currency_symbol, "$");
    }

    #[test]
    fn setup_source_feeds_the_form() {
        let setup = FormSetup::from_config(&AppConfig::from_toml_str(CONFIG).unwrap());
        let mut form = EntryForm::new();

        assert_eq!(
            form.select_project("Farm Fence", setup.source.as_ref()),
            SelectionOutcome::Loaded
        );
        assert_eq!(
            form.totals().net.display(&setup.currency_symbol),
            "Profit: $1000.00"
        );
    }

    #[test]
    fn with_actions_swaps_the_collaborator() {
        let setup = FormSetup::from_config(&AppConfig::default()).with_actions(
            |action: ProfitLossAction, _: &ProfitLossReport| -> Result<(), ActionError> {
                Err(ActionError::Unavailable(action))
            },
        );

        let report = EntryForm::new().report(&setup.currency_symbol);
        assert_eq!(
            setup.actions.handle(ProfitLossAction::ExportPdf, &report),
            Err(ActionError::Unavailable(ProfitLossAction::ExportPdf))
        );
    }
}
