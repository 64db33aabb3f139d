use super::super::entities::{favorite, person, planet, user};

/// Column used for stable ordering and primary-key lookups.
pub trait HasIdColumn: sea_orm::EntityTrait {
    fn id_column() -> Self::Column;
}

impl HasIdColumn for user::Entity {
    fn id_column() -> Self::Column {
        user::Column::Id
    }
}

impl HasIdColumn for person::Entity {
    fn id_column() -> Self::Column {
        person::Column::Id
    }
}

impl HasIdColumn for planet::Entity {
    fn id_column() -> Self::Column {
        planet::Column::Id
    }
}

impl HasIdColumn for favorite::Entity {
    fn id_column() -> Self::Column {
        favorite::Column::Id
    }
}
