pub mod catalog;
pub mod data_source;

pub use catalog::{CatalogProject, InMemoryProjectCatalog};
pub use data_source::ProjectDataSource;
