use crate::{DbError, Result as DbErrorResult};

use tapis_core::{Role, RoleType};

use std::str::FromStr;

use sqlx::SqlitePool;

#[derive(sqlx::FromRow)]
struct RoleRow {
    slug: String,
    display_name: String,
    role_type: String,
    scopes: String,
}

impl RoleRow {
    #[track_caller]
    fn into_role(self) -> DbErrorResult<Role> {
        Ok(Role {
            role_type: RoleType::from_str(&self.role_type)?,
            scopes: parse_scopes(&self.scopes)?,
            slug: self.slug,
            display_name: self.display_name,
        })
    }
}

#[track_caller]
pub(crate) fn parse_scopes(raw: &str) -> DbErrorResult<Vec<String>> {
    serde_json::from_str(raw)
        .map_err(|e| DbError::invalid_row("roles", "scopes", format!("Invalid JSON array: {}", e)))
}

pub struct RoleRepository {
    pool: SqlitePool,
}

impl RoleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_slug(&self, slug: &str) -> DbErrorResult<Option<Role>> {
        let row = sqlx::query_as::<_, RoleRow>(
            r#"
                SELECT slug, display_name, role_type, scopes
                FROM roles
                WHERE slug = ?
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        row.map(RoleRow::into_role).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Role>> {
        let rows = sqlx::query_as::<_, RoleRow>(
            r#"
                SELECT slug, display_name, role_type, scopes
                FROM roles
                ORDER BY role_type, slug
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(RoleRow::into_role)
            .collect::<DbErrorResult<Vec<_>>>()
    }
}
