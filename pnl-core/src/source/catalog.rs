use serde::{Deserialize, Serialize};

use crate::models::{FinancialEntry, ProjectSummary};
use crate::source::ProjectDataSource;

/// One catalog row: the selectable project and, if known, its stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogProject {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<FinancialEntry>,
}

impl CatalogProject {
    pub fn summary(&self) -> ProjectSummary {
        ProjectSummary::new(self.id.clone(), self.name.clone())
    }
}

/// Ordered, in-memory list of projects.
///
/// Lookups go by project name. When two projects share a name the first
/// one wins.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectCatalog {
    projects: Vec<CatalogProject>,
}

impl InMemoryProjectCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_projects(projects: impl IntoIterator<Item = CatalogProject>) -> Self {
        Self {
            projects: projects.into_iter().collect(),
        }
    }

    /// Appends a project.
    pub fn insert(
        &mut self,
        project: CatalogProject,
    ) {
        self.projects.push(project);
    }

    /// Summaries in catalog order, for the project picker.
    pub fn projects(&self) -> Vec<ProjectSummary> {
        self.projects.iter().map(CatalogProject::summary).collect()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    fn find(
        &self,
        name: &str,
    ) -> Option<&CatalogProject> {
        self.projects.iter().find(|project| project.name == name)
    }
}

impl ProjectDataSource for InMemoryProjectCatalog {
    fn fetch_project_data(
        &self,
        project_name: &str,
    ) -> Option<FinancialEntry> {
        self.find(project_name).and_then(|project| project.entry.clone())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn project(
        id: &str,
        name: &str,
        contract: Option<rust_decimal::Decimal>,
    ) -> CatalogProject {
        CatalogProject {
            id: id.to_string(),
            name: name.to_string(),
            entry: contract.map(|c| {
                let mut entry = FinancialEntry::default();
                entry.income.contract = c.into();
                entry
            }),
        }
    }

    #[test]
    fn new_catalog_is_empty() {
        let catalog = InMemoryProjectCatalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.projects().is_empty());
    }

    #[test]
    fn projects_are_listed_in_insertion_order() {
        let mut catalog = InMemoryProjectCatalog::new();
        catalog.insert(project("p2", "Boundary Wall", None));
        catalog.insert(project("p1", "Farm Fence", None));

        assert_eq!(
            catalog.projects(),
            vec![
                ProjectSummary::new("p2", "Boundary Wall"),
                ProjectSummary::new("p1", "Farm Fence"),
            ]
        );
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn fetch_returns_stored_entry_by_name() {
        let catalog =
            InMemoryProjectCatalog::from_projects([project("p1", "Farm Fence", Some(dec!(75000)))]);

        let entry = catalog.fetch_project_data("Farm Fence").unwrap();
        assert_eq!(entry.income.contract.as_decimal(), Some(dec!(75000)));
    }

    #[test]
    fn fetch_without_stored_entry_is_none() {
        let catalog = InMemoryProjectCatalog::from_projects([project("p1", "Farm Fence", None)]);
        assert!(catalog.fetch_project_data("Farm Fence").is_none());
    }

    #[test]
    fn fetch_unknown_project_is_none() {
        let catalog =
            InMemoryProjectCatalog::from_projects([project("p1", "Farm Fence", Some(dec!(1)))]);
        assert!(catalog.fetch_project_data("farm fence").is_none());
    }

    #[test]
    fn first_project_with_a_name_wins() {
        let catalog = InMemoryProjectCatalog::from_projects([
            project("p1", "Gate", Some(dec!(10))),
            project("p2", "Gate", Some(dec!(20))),
        ]);

        let entry = catalog.fetch_project_data("Gate").unwrap();
        assert_eq!(entry.income.contract.as_decimal(), Some(dec!(10)));
    }
}
