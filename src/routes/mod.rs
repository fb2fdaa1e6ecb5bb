pub mod catalog_router;
mod entry;
pub mod health;
pub mod ingredients;
pub mod item_ingredients;
pub mod items;

pub use catalog_router::CatalogRouter;
pub use entry::{API_PREFIX, router};
