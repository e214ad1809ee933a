use sea_orm::entity::prelude::*;

/// Maximum number of characters in a product name.
pub const NAME_MAX_LEN: usize = 50;
/// Maximum number of characters in a product description.
pub const DESCRIPTION_MAX_LEN: usize = 200;
/// Total significant digits of the `price` column, `decimal(8,2)`.
pub const PRICE_PRECISION: u32 = 8;
/// Fractional digits of the `price` column, `decimal(8,2)`.
pub const PRICE_SCALE: u32 = 2;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub name: String,
    #[sea_orm(column_type = "Decimal(Some((8, 2)))")]
    pub price: Decimal,
    #[sea_orm(column_type = "String(StringLen::N(200))", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::material::Entity")]
    Material,
}

impl Related<super::material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Material.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
