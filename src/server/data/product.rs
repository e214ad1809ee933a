//! Product data repository for database operations.
//!
//! This module provides the `ProductRepository` for reading the catalog and inserting
//! products. It also enforces the column constraints of the `product` and `material`
//! tables before writing, so oversized values are rejected instead of being truncated
//! or accepted by backends that do not check declared lengths.

use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    PaginatorTrait, QueryOrder, TransactionTrait,
};

use crate::server::model::product::{CreateProductParams, Product};

/// Repository providing database operations for the product catalog.
pub struct ProductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductRepository<'a> {
    /// Creates a new ProductRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every product with its materials, ordered by product ID.
    ///
    /// # Returns
    /// - `Ok(Vec<Product>)` - All stored products, empty if there are none
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Product>, DbErr> {
        let rows = entity::prelude::Product::find()
            .order_by_asc(entity::product::Column::Id)
            .find_with_related(entity::prelude::Material)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(product, materials)| Product::from_entity(product, materials))
            .collect())
    }

    /// Finds a product by its ID together with its materials.
    ///
    /// # Arguments
    /// - `id` - Primary key of the product
    ///
    /// # Returns
    /// - `Ok(Some(Product))` - Product found
    /// - `Ok(None)` - No product with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Product>, DbErr> {
        let Some(product) = entity::prelude::Product::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let materials = product
            .find_related(entity::prelude::Material)
            .order_by_asc(entity::material::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(Product::from_entity(product, materials)))
    }

    /// Inserts a product and its materials in a single transaction.
    ///
    /// The parameters are checked against the table constraints first; nothing is
    /// written when any field is out of bounds.
    ///
    /// # Arguments
    /// - `params` - Product fields and material names
    ///
    /// # Returns
    /// - `Ok(Product)` - The created product with its materials
    /// - `Err(DbErr::Custom)` - A field violates the table constraints
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateProductParams) -> Result<Product, DbErr> {
        validate_product(&params)?;

        let txn = self.db.begin().await?;

        let product = entity::product::ActiveModel {
            name: ActiveValue::Set(params.name),
            price: ActiveValue::Set(params.price),
            description: ActiveValue::Set(params.description),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut materials = Vec::with_capacity(params.materials.len());
        for name in params.materials {
            let material = entity::material::ActiveModel {
                product_id: ActiveValue::Set(product.id),
                name: ActiveValue::Set(name),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            materials.push(material);
        }

        txn.commit().await?;

        Ok(Product::from_entity(product, materials))
    }

    /// Counts the stored products.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Product::find().count(self.db).await
    }
}

/// Checks product parameters against the `product` and `material` column definitions.
fn validate_product(params: &CreateProductParams) -> Result<(), DbErr> {
    validate_name("Product name", &params.name, entity::product::NAME_MAX_LEN)?;

    if let Some(description) = &params.description {
        let len = description.chars().count();
        if len > entity::product::DESCRIPTION_MAX_LEN {
            return Err(DbErr::Custom(format!(
                "Product description is {} characters, maximum is {}",
                len,
                entity::product::DESCRIPTION_MAX_LEN
            )));
        }
    }

    validate_price(params.price)?;

    for material in &params.materials {
        validate_name("Material name", material, entity::material::NAME_MAX_LEN)?;
    }

    Ok(())
}

fn validate_name(field: &str, value: &str, max_len: usize) -> Result<(), DbErr> {
    if value.trim().is_empty() {
        return Err(DbErr::Custom(format!("{} is required", field)));
    }

    let len = value.chars().count();
    if len > max_len {
        return Err(DbErr::Custom(format!(
            "{} is {} characters, maximum is {}",
            field, len, max_len
        )));
    }

    Ok(())
}

/// Rejects prices that do not fit `decimal(PRICE_PRECISION, PRICE_SCALE)`.
fn validate_price(price: Decimal) -> Result<(), DbErr> {
    let scale = entity::product::PRICE_SCALE;
    let integer_digits = entity::product::PRICE_PRECISION - scale;

    if price.normalize().scale() > scale {
        return Err(DbErr::Custom(format!(
            "Product price {} has more than {} decimal places",
            price, scale
        )));
    }

    if price.abs() >= Decimal::from(10_i64.pow(integer_digits)) {
        return Err(DbErr::Custom(format!(
            "Product price {} exceeds {} integer digits",
            price, integer_digits
        )));
    }

    Ok(())
}
