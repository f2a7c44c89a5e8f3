mod database;
mod traits;

pub use database::SqliteCatalog;
pub use traits::CatalogStore;
