//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a product with default values and one material per provided name.
///
/// # Arguments
/// - `db` - Database connection
/// - `material_names` - Names of the materials to attach, inserted in order
///
/// # Returns
/// - `Ok((product, materials))` - Created product and its materials
/// - `Err(DbErr)` - Database error during creation
pub async fn create_product_with_materials(
    db: &DatabaseConnection,
    material_names: &[&str],
) -> Result<(entity::product::Model, Vec<entity::material::Model>), DbErr> {
    let product = crate::factory::product::create_product(db).await?;

    let mut materials = Vec::with_capacity(material_names.len());
    for name in material_names {
        let material = crate::factory::material::MaterialFactory::new(db, product.id)
            .name(*name)
            .build()
            .await?;
        materials.push(material);
    }

    Ok((product, materials))
}
