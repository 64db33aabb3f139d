use sea_orm::{DbErr, SqlErr};

#[derive(Debug, thiserror::Error)]
pub enum DaoLayerError {
    #[error("Database error: {0}")]
    Db(#[from] DbErr),
    #[error("{entity} not found (id={id})")]
    NotFound { entity: &'static str, id: i32 },
}

pub type DaoResult<T> = Result<T, DaoLayerError>;

impl DaoLayerError {
    pub fn is_unique_violation(&self) -> bool {
        match self {
            DaoLayerError::Db(err) => {
                matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
            }
            DaoLayerError::NotFound { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;

    use super::DaoLayerError;

    #[test]
    fn not_found_names_table_and_id() {
        let err = DaoLayerError::NotFound {
            entity: "people",
            id: 7,
        };
        assert_eq!(err.to_string(), "people not found (id=7)");
        assert!(!err.is_unique_violation());
    }

    #[test]
    fn custom_db_errors_are_not_unique_violations() {
        let err = DaoLayerError::from(DbErr::Custom("disk I/O error".to_string()));
        assert!(!err.is_unique_violation());
        assert!(err.to_string().contains("disk I/O error"));
    }
}
