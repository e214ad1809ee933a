use super::*;

/// Tests creating a product with materials.
///
/// Expected: Ok(Product) with assigned IDs, readable afterwards
#[tokio::test]
async fn creates_product_with_materials() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let created = repo.create(bolt_params()).await?;

    assert!(created.id > 0);
    assert_eq!(created.name, "Bolt");
    assert_eq!(created.materials.len(), 2);

    let stored = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(stored, created);

    Ok(())
}

/// Tests that a name over 50 characters is rejected rather than truncated.
///
/// Expected: Err(DbErr::Custom) and no rows written
#[tokio::test]
async fn rejects_name_longer_than_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let result = repo
        .create(CreateProductParams {
            name: "x".repeat(51),
            ..bolt_params()
        })
        .await;

    assert!(matches!(result, Err(DbErr::Custom(_))));
    assert_eq!(repo.count().await?, 0);

    Ok(())
}

/// Tests that a name of exactly 50 characters is accepted and stored intact.
///
/// Expected: Ok(Product) with the full name
#[tokio::test]
async fn accepts_name_at_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let name = "y".repeat(50);
    let repo = ProductRepository::new(db);
    let created = repo
        .create(CreateProductParams {
            name: name.clone(),
            ..bolt_params()
        })
        .await?;

    assert_eq!(created.name, name);

    Ok(())
}

/// Tests that an empty name is rejected.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn rejects_blank_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let result = repo
        .create(CreateProductParams {
            name: "   ".to_string(),
            ..bolt_params()
        })
        .await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}

/// Tests that a description over 200 characters is rejected.
///
/// Expected: Err(DbErr::Custom) and no rows written
#[tokio::test]
async fn rejects_description_longer_than_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let result = repo
        .create(CreateProductParams {
            description: Some("d".repeat(201)),
            ..bolt_params()
        })
        .await;

    assert!(matches!(result, Err(DbErr::Custom(_))));
    assert_eq!(repo.count().await?, 0);

    Ok(())
}

/// Tests that prices outside `decimal(8,2)` are rejected.
///
/// Expected: Err(DbErr::Custom) for too many fractional or integer digits
#[tokio::test]
async fn rejects_price_outside_precision() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);

    let too_precise = repo
        .create(CreateProductParams {
            price: Decimal::new(505, 3),
            ..bolt_params()
        })
        .await;
    assert!(matches!(too_precise, Err(DbErr::Custom(_))));

    let too_large = repo
        .create(CreateProductParams {
            price: Decimal::new(1_000_000, 0),
            ..bolt_params()
        })
        .await;
    assert!(matches!(too_large, Err(DbErr::Custom(_))));

    assert_eq!(repo.count().await?, 0);

    Ok(())
}

/// Tests that trailing zeros beyond two places do not count as extra precision.
///
/// Expected: Ok(Product) for 12.340
#[tokio::test]
async fn accepts_price_with_trailing_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let created = repo
        .create(CreateProductParams {
            price: Decimal::new(12_340, 3),
            ..bolt_params()
        })
        .await?;

    assert_eq!(created.price, Decimal::new(1_234, 2));

    Ok(())
}

/// Tests that an oversized material name rejects the whole product.
///
/// Expected: Err(DbErr::Custom) and no rows written
#[tokio::test]
async fn rejects_material_name_longer_than_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let result = repo
        .create(CreateProductParams {
            materials: vec!["Steel".to_string(), "m".repeat(51)],
            ..bolt_params()
        })
        .await;

    assert!(matches!(result, Err(DbErr::Custom(_))));
    assert_eq!(repo.count().await?, 0);

    Ok(())
}
