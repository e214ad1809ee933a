//! Material factory for creating materials attached to a product.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test materials belonging to an existing product.
pub struct MaterialFactory<'a> {
    db: &'a DatabaseConnection,
    product_id: i32,
    name: String,
}

impl<'a> MaterialFactory<'a> {
    /// Creates a new MaterialFactory for the given product.
    ///
    /// Defaults:
    /// - name: `"Material {n}"` where n is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `product_id` - ID of the product the material belongs to
    pub fn new(db: &'a DatabaseConnection, product_id: i32) -> Self {
        Self {
            db,
            product_id,
            name: format!("Material {}", next_id()),
        }
    }

    /// Sets the name for the material.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the material entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::material::Model)` - Created material entity
    /// - `Err(DbErr)` - Database error during insert, e.g. the product does not exist
    pub async fn build(self) -> Result<entity::material::Model, DbErr> {
        entity::material::ActiveModel {
            product_id: ActiveValue::Set(self.product_id),
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a material with default values for the given product.
pub async fn create_material(
    db: &DatabaseConnection,
    product_id: i32,
) -> Result<entity::material::Model, DbErr> {
    MaterialFactory::new(db, product_id).build().await
}
