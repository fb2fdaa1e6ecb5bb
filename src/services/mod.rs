pub mod catalog_service;
pub mod context;
pub mod ingredient_service;
pub mod item_ingredient_service;
pub mod item_service;

pub use catalog_service::{CatalogInput, CatalogMessages, CatalogService};
pub use context::ServiceContext;
