use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityName, EntityTrait,
    FromQueryResult, IntoActiveModel, PrimaryKeyTrait, QueryOrder, TransactionTrait,
};

use super::base_traits::HasIdColumn;
use super::error::{DaoLayerError, DaoResult};

type Model<D> = <<D as DaoBase>::Entity as EntityTrait>::Model;
type ActiveModel<D> = <<D as DaoBase>::Entity as EntityTrait>::ActiveModel;

/// Generic store operations shared by every table. Mutations run in their own
/// transaction and roll back when the statement fails.
#[async_trait::async_trait]
pub trait DaoBase: Clone + Send + Sync + Sized
where
    <Self::Entity as EntityTrait>::Model:
        FromQueryResult + IntoActiveModel<<Self::Entity as EntityTrait>::ActiveModel> + Send + Sync,
    <Self::Entity as EntityTrait>::ActiveModel:
        ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send,
    <<Self::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType:
        From<i32> + Send + Sync,
{
    type Entity: EntityTrait + HasIdColumn + Send + Sync;

    fn new(db: &DatabaseConnection) -> Self;

    fn db(&self) -> &DatabaseConnection;

    fn entity_name() -> &'static str {
        Self::Entity::default().table_name()
    }

    async fn list_all(&self) -> DaoResult<Vec<Model<Self>>> {
        Self::Entity::find()
            .order_by_asc(Self::Entity::id_column())
            .all(self.db())
            .await
            .map_err(DaoLayerError::Db)
    }

    async fn find_by_id(&self, id: i32) -> DaoResult<Model<Self>> {
        Self::Entity::find_by_id(id)
            .one(self.db())
            .await?
            .ok_or(DaoLayerError::NotFound {
                entity: Self::entity_name(),
                id,
            })
    }

    async fn create(
        &self,
        data: impl IntoActiveModel<ActiveModel<Self>> + Send,
    ) -> DaoResult<Model<Self>> {
        let txn = self.db().begin().await?;
        let model = data.into_active_model().insert(&txn).await?;
        txn.commit().await?;
        Ok(model)
    }

    async fn delete(&self, id: i32) -> DaoResult<i32> {
        let txn = self.db().begin().await?;
        let result = Self::Entity::delete_by_id(id).exec(&txn).await?;

        if result.rows_affected == 0 {
            return Err(DaoLayerError::NotFound {
                entity: Self::entity_name(),
                id,
            });
        }

        txn.commit().await?;
        Ok(id)
    }
}
