use sea_orm::entity::prelude::*;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub population: i64,
    #[sea_orm(has_many)]
    pub favorites: HasMany<super::favorite::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
