use serde::Serialize;
use sqlx::{FromRow, Row, sqlite::SqliteRow};

use super::record::{Cell, Field, display_fields, field};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circuit {
    pub id: i64,
    pub project_id: i64,
    pub qty: Option<f64>,
    pub power_w: Option<f64>,
    /// All columns except `id` and `project_id`, as stored.
    pub fields: Vec<Field>,
}

impl Circuit {
    /// Connected power of this line; zero when either factor is missing.
    pub fn connected_power_w(&self) -> f64 {
        match (self.qty, self.power_w) {
            (Some(qty), Some(power_w)) => qty * power_w,
            _ => 0.0,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Cell> {
        field(&self.fields, name)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Circuit {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let fields = display_fields(row)?;
        Ok(Circuit {
            id: row.try_get("id")?,
            project_id: row.try_get("project_id")?,
            qty: field(&fields, "qty").and_then(Cell::as_f64),
            power_w: field(&fields, "power_w").and_then(Cell::as_f64),
            fields,
        })
    }
}

pub trait CircuitRepository {
    fn circuits_for_project(
        &self,
        project_id: i64,
    ) -> impl Future<Output = anyhow::Result<Vec<Circuit>>>;
}
