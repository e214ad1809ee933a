//! Product domain models and parameters.
//!
//! Provides the catalog's domain models built from the `product` and `material`
//! entities, plus the parameter types used to insert new products.

use rust_decimal::Decimal;

use crate::model::product::{MaterialDto, ProductDto};

/// Catalog product together with the materials it is made of.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Primary key of the product.
    pub id: i32,
    /// Display name, at most 50 characters.
    pub name: String,
    /// Unit price, `decimal(8,2)`.
    pub price: Decimal,
    /// Optional free text, at most 200 characters.
    pub description: Option<String>,
    /// Materials ordered by ID.
    pub materials: Vec<Material>,
}

impl Product {
    /// Converts the product domain model to a DTO for API responses.
    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: self.id,
            name: self.name,
            price: self.price,
            description: self.description,
            materials: self.materials.into_iter().map(Material::into_dto).collect(),
        }
    }

    /// Converts a product entity and its related materials at the repository boundary.
    ///
    /// Materials are sorted by ID so the output does not depend on join order.
    ///
    /// # Arguments
    /// - `entity` - The product entity model
    /// - `materials` - Material entities belonging to the product
    pub fn from_entity(
        entity: entity::product::Model,
        materials: Vec<entity::material::Model>,
    ) -> Self {
        let mut materials: Vec<Material> = materials.into_iter().map(Material::from_entity).collect();
        materials.sort_by_key(|m| m.id);

        Self {
            id: entity.id,
            name: entity.name,
            price: entity.price,
            description: entity.description,
            materials,
        }
    }
}

/// Material a product is made of.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub id: i32,
    pub name: String,
}

impl Material {
    pub fn into_dto(self) -> MaterialDto {
        MaterialDto {
            id: self.id,
            name: self.name,
        }
    }

    pub fn from_entity(entity: entity::material::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

/// Parameters for inserting a product and its materials.
#[derive(Debug, Clone)]
pub struct CreateProductParams {
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    /// Material names, inserted in order.
    pub materials: Vec<String>,
}
