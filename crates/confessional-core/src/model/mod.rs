pub mod catalog;
pub mod dataset;
pub mod entry;

pub use catalog::Catalog;
pub use entry::CatalogEntry;
