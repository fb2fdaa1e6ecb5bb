#[allow(unused_imports)]
pub mod prelude {
    pub use super::ingredient::Entity as Ingredient;
    pub use super::item::Entity as Item;
    pub use super::item_ingredient::Entity as ItemIngredient;
}

pub mod ingredient;
pub mod item;
pub mod item_ingredient;
