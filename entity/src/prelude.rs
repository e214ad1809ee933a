pub use super::material::Entity as Material;
pub use super::product::Entity as Product;
