use sea_orm::entity::prelude::*;

/// Links one user to one person or one planet. Exactly one of `people_id`
/// and `planets_id` is set on rows written through the API.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favorites")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: Option<i32>,
    pub people_id: Option<i32>,
    pub planets_id: Option<i32>,
    #[sea_orm(belongs_to, from = "user_id", to = "id")]
    pub user: HasOne<super::user::Entity>,
    #[sea_orm(belongs_to, from = "people_id", to = "id")]
    pub person: HasOne<super::person::Entity>,
    #[sea_orm(belongs_to, from = "planets_id", to = "id")]
    pub planet: HasOne<super::planet::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
