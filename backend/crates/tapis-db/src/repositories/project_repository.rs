use crate::{DbError, Result as DbErrorResult};

use tapis_core::{Project, ProjectType};

use std::str::FromStr;

use chrono::DateTime;
use sqlx::{Sqlite, SqlitePool, Transaction};
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: String,
    name: String,
    #[sqlx(rename = "type")]
    project_type: String,
    creator_id: Option<String>,
    created_at: i64,
    updated_at: i64,
}

impl ProjectRow {
    #[track_caller]
    fn into_project(self) -> DbErrorResult<Project> {
        Ok(Project {
            id: Uuid::parse_str(&self.id).map_err(|e| {
                DbError::invalid_row("projects", "id", format!("Invalid UUID: {}", e))
            })?,
            name: self.name,
            project_type: ProjectType::from_str(&self.project_type)?,
            creator_id: self
                .creator_id
                .as_deref()
                .map(Uuid::parse_str)
                .transpose()
                .map_err(|e| {
                    DbError::invalid_row("projects", "creator_id", format!("Invalid UUID: {}", e))
                })?,
            created_at: DateTime::from_timestamp(self.created_at, 0).ok_or_else(|| {
                DbError::invalid_row("projects", "created_at", "Invalid timestamp")
            })?,
            updated_at: DateTime::from_timestamp(self.updated_at, 0).ok_or_else(|| {
                DbError::invalid_row("projects", "updated_at", "Invalid timestamp")
            })?,
        })
    }
}

pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, project: &Project) -> DbErrorResult<()> {
        let mut tx = self.pool.begin().await?;
        self.create_in_tx(&mut tx, project).await?;
        tx.commit().await?;

        Ok(())
    }

    pub async fn create_in_tx(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        project: &Project,
    ) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO projects (id, name, type, creator_id, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(project.id.to_string())
        .bind(&project.name)
        .bind(project.project_type.as_str())
        .bind(project.creator_id.map(|id| id.to_string()))
        .bind(project.created_at.timestamp())
        .bind(project.updated_at.timestamp())
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
                SELECT id, name, type, creator_id, created_at, updated_at
                FROM projects
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(ProjectRow::into_project).transpose()
    }

    /// Personal projects created by a user, oldest first
    pub async fn find_personal_by_creator(&self, creator_id: Uuid) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
                SELECT id, name, type, creator_id, created_at, updated_at
                FROM projects
                WHERE creator_id = ? AND type = 'personal'
                ORDER BY created_at
            "#,
        )
        .bind(creator_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(ProjectRow::into_project)
            .collect::<DbErrorResult<Vec<_>>>()
    }
}
