pub mod actions;
pub mod calculations;
pub mod form;
pub mod models;
pub mod source;

pub use actions::{ActionError, ActionHandler, LoggingActionHandler, ProfitLossAction, ProfitLossReport};
pub use form::{EntryForm, FormError, SelectionOutcome, SelectionState};
pub use models::*;
pub use source::{CatalogProject, InMemoryProjectCatalog, ProjectDataSource};
