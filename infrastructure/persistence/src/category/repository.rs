use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::category::model::Category;
use business::domain::category::repository::CategoryRepository;
use business::domain::errors::RepositoryError;

use super::entity::CategoryEntity;

pub struct CategoryRepositoryPostgres {
    pool: PgPool,
}

impl CategoryRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryPostgres {
    async fn get_or_create(&self, name: &str) -> Result<Category, RepositoryError> {
        // The no-op update lets RETURNING yield the row on both the insert
        // and the conflict path, so two racing callers get the same id.
        let entity = sqlx::query_as::<_, CategoryEntity>(
            r#"INSERT INTO categories (id, name) VALUES ($1, $2)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING id, name"#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.into_domain())
    }
}
