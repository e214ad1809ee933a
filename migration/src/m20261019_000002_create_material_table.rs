use sea_orm_migration::{prelude::*, schema::*};

use super::m20261019_000001_create_product_table::Product;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Material::Table)
                    .if_not_exists()
                    .col(pk_auto(Material::Id))
                    .col(integer(Material::ProductId))
                    .col(string_len(Material::Name, 50))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_material_product_id")
                            .from(Material::Table, Material::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Material::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Material {
    Table,
    Id,
    ProductId,
    Name,
}
