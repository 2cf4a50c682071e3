use crate::{DbError, Result as DbErrorResult};

use tapis_core::ProjectRelation;

use chrono::DateTime;
use sqlx::{Sqlite, SqlitePool, Transaction};
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct ProjectRelationRow {
    project_id: String,
    user_id: String,
    role: String,
    created_at: i64,
    updated_at: i64,
}

impl ProjectRelationRow {
    #[track_caller]
    fn into_relation(self) -> DbErrorResult<ProjectRelation> {
        Ok(ProjectRelation {
            project_id: Uuid::parse_str(&self.project_id).map_err(|e| {
                DbError::invalid_row("project_relations", "project_id", format!("Invalid UUID: {}", e))
            })?,
            user_id: Uuid::parse_str(&self.user_id).map_err(|e| {
                DbError::invalid_row("project_relations", "user_id", format!("Invalid UUID: {}", e))
            })?,
            role: self.role,
            created_at: DateTime::from_timestamp(self.created_at, 0).ok_or_else(|| {
                DbError::invalid_row("project_relations", "created_at", "Invalid timestamp")
            })?,
            updated_at: DateTime::from_timestamp(self.updated_at, 0).ok_or_else(|| {
                DbError::invalid_row("project_relations", "updated_at", "Invalid timestamp")
            })?,
        })
    }
}

pub struct ProjectRelationRepository {
    pool: SqlitePool,
}

impl ProjectRelationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, relation: &ProjectRelation) -> DbErrorResult<()> {
        let mut tx = self.pool.begin().await?;
        self.create_in_tx(&mut tx, relation).await?;
        tx.commit().await?;

        Ok(())
    }

    pub async fn create_in_tx(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        relation: &ProjectRelation,
    ) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO project_relations (project_id, user_id, role, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(relation.project_id.to_string())
        .bind(relation.user_id.to_string())
        .bind(&relation.role)
        .bind(relation.created_at.timestamp())
        .bind(relation.updated_at.timestamp())
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> DbErrorResult<Vec<ProjectRelation>> {
        let rows = sqlx::query_as::<_, ProjectRelationRow>(
            r#"
                SELECT project_id, user_id, role, created_at, updated_at
                FROM project_relations
                WHERE user_id = ?
                ORDER BY created_at
            "#,
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(ProjectRelationRow::into_relation)
            .collect::<DbErrorResult<Vec<_>>>()
    }
}
