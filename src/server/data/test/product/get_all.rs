use super::*;

/// Tests listing an empty catalog.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_list_without_products() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let products = repo.get_all().await?;

    assert!(products.is_empty());

    Ok(())
}

/// Tests that every stored product is returned in ID order.
///
/// Inserts products with out-of-order explicit IDs and verifies the listing is sorted
/// by primary key.
///
/// Expected: Ok(Vec) with all products, ascending by ID
#[tokio::test]
async fn returns_all_products_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::product::ProductFactory::new(db)
        .id(2)
        .name("Nut")
        .price(Decimal::new(25, 2))
        .build()
        .await?;
    factory::product::ProductFactory::new(db)
        .id(1)
        .name("Bolt")
        .price(Decimal::new(50, 2))
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    let products = repo.get_all().await?;

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, 1);
    assert_eq!(products[0].name, "Bolt");
    assert_eq!(products[0].price, Decimal::new(50, 2));
    assert_eq!(products[1].id, 2);
    assert_eq!(products[1].name, "Nut");
    assert_eq!(products[1].price, Decimal::new(25, 2));

    Ok(())
}

/// Tests that materials are attached to the product they belong to.
///
/// Expected: Ok(Vec) where each product carries only its own materials
#[tokio::test]
async fn attaches_materials_to_their_products() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (with_materials, _) =
        factory::helpers::create_product_with_materials(db, &["Steel", "Zinc"]).await?;
    let without_materials = factory::create_product(db).await?;

    let repo = ProductRepository::new(db);
    let products = repo.get_all().await?;

    assert_eq!(products.len(), 2);

    let first = products.iter().find(|p| p.id == with_materials.id).unwrap();
    let names: Vec<&str> = first.materials.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Steel", "Zinc"]);

    let second = products
        .iter()
        .find(|p| p.id == without_materials.id)
        .unwrap();
    assert!(second.materials.is_empty());

    Ok(())
}
