use super::*;

/// Tests finding an existing product by ID.
///
/// Expected: Ok(Some(Product)) with the stored fields and materials
#[tokio::test]
async fn finds_existing_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .name("Bolt")
        .price(Decimal::new(50, 2))
        .description("M8 hex bolt")
        .build()
        .await?;
    factory::material::MaterialFactory::new(db, product.id)
        .name("Steel")
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    let found = repo.find_by_id(product.id).await?.unwrap();

    assert_eq!(found.id, product.id);
    assert_eq!(found.name, "Bolt");
    assert_eq!(found.price, Decimal::new(50, 2));
    assert_eq!(found.description.as_deref(), Some("M8 hex bolt"));
    assert_eq!(found.materials.len(), 1);
    assert_eq!(found.materials[0].name, "Steel");

    Ok(())
}

/// Tests that lookup matches only the requested ID.
///
/// Expected: Ok(Some(Product)) for the second product, not the first
#[tokio::test]
async fn returns_matching_product_among_many() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_product(db).await?;
    let target = factory::create_product(db).await?;
    factory::create_product(db).await?;

    let repo = ProductRepository::new(db);
    let found = repo.find_by_id(target.id).await?.unwrap();

    assert_eq!(found.id, target.id);
    assert_eq!(found.name, target.name);

    Ok(())
}

/// Tests finding a product that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_product(db).await?;

    let repo = ProductRepository::new(db);
    let found = repo.find_by_id(99).await?;

    assert!(found.is_none());

    Ok(())
}
