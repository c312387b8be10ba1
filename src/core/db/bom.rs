use serde::Serialize;
use sqlx::{FromRow, Row, sqlite::SqliteRow};

use super::record::{Cell, Field, display_fields, field};

/// A bill-of-materials line. Only counted; its columns are shown as stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BomItem {
    pub id: i64,
    pub project_id: i64,
    pub fields: Vec<Field>,
}

impl BomItem {
    pub fn get(&self, name: &str) -> Option<&Cell> {
        field(&self.fields, name)
    }
}

impl<'r> FromRow<'r, SqliteRow> for BomItem {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(BomItem {
            id: row.try_get("id")?,
            project_id: row.try_get("project_id")?,
            fields: display_fields(row)?,
        })
    }
}

pub trait BomRepository {
    fn bom_items_for_project(
        &self,
        project_id: i64,
    ) -> impl Future<Output = anyhow::Result<Vec<BomItem>>>;
}
